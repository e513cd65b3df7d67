use crate::api::{ErrorResponse, RefreshResponse, SlidesResponse, StatusResponse};
use crate::config;
use crate::feed::events::upcoming_slides;
use crate::storage::EventCache;
use actix_cors::Cors;
use actix_web::{get, post, web, App, HttpResponse, HttpServer};
use chrono::Local;
use tracing::{error, info};

/// Identifier advertised to the dashboard registry and the health probe.
pub const SERVICE_ID: &str = "pokemon-go-events";

struct AppState {
    cache: EventCache,
    max_slides: usize,
}

#[get("/api/events")]
async fn events(state: web::Data<AppState>) -> HttpResponse {
    // Serves cached data; the first read against an empty cache fetches once.
    match state.cache.get_events().await {
        Ok(snapshot) => {
            let slides = upcoming_slides(
                &snapshot.events,
                Local::now().naive_local(),
                state.max_slides,
            );
            HttpResponse::Ok().json(SlidesResponse { slides })
        }
        Err(err) => {
            error!("No events available: {err}");
            HttpResponse::BadGateway().json(ErrorResponse {
                error: err.to_string(),
            })
        }
    }
}

#[post("/api/refresh")]
async fn refresh(state: web::Data<AppState>) -> HttpResponse {
    match state.cache.refresh().await {
        Ok((count, last_updated)) => {
            info!("Feed refreshed, {count} events cached");
            HttpResponse::Ok().json(RefreshResponse {
                count,
                last_updated,
            })
        }
        Err(err) => {
            error!("Feed refresh failed: {err}");
            HttpResponse::BadGateway().json(ErrorResponse {
                error: err.to_string(),
            })
        }
    }
}

#[get("/")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        status: String::from("ok"),
        service: String::from(SERVICE_ID),
    })
}

pub async fn run_http_server(cache: EventCache) -> std::io::Result<()> {
    let settings = &config::SETTINGS;
    let state = web::Data::new(AppState {
        cache,
        max_slides: settings.max_slides,
    });
    info!("Listening on {}", settings.server_bind);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            // The dashboard is served from another origin
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .service(events)
            .service(refresh)
            .service(health)
    })
    .bind(settings.server_bind.as_str())?
    .run()
    .await
}
