use crate::{
    api::{attendance, holiday, home, weekly},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let record_limiter = Arc::new(build_limiter(config.rate_record_per_min));
    let holiday_limiter = Arc::new(build_limiter(config.rate_holiday_per_min));

    cfg.service(home::home)
        // Kiosk form. The tight limiter matters here: this is the only
        // write path into the log.
        .service(
            web::resource("/record")
                .wrap(record_limiter)
                .route(web::post().to(attendance::record)),
        )
        .service(
            web::resource("/weekly")
                .route(web::get().to(weekly::weekly_current))
                .route(web::post().to(weekly::weekly_select)),
        )
        .service(
            web::resource("/holidays")
                .wrap(holiday_limiter)
                .route(web::get().to(holiday::list_holidays))
                .route(web::post().to(holiday::add_holiday))
                .route(web::delete().to(holiday::remove_holidays)),
        );
}
