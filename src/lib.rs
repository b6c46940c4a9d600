pub mod api;
pub mod config;
pub mod docs;
pub mod locale;
pub mod maintenance;
pub mod model;
pub mod policy;
pub mod report;
pub mod routes;
pub mod store;
