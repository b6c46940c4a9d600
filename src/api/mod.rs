pub mod attendance;
pub mod holiday;
pub mod home;
pub mod weekly;
