use dotenvy::dotenv;
use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod error;
mod config {
    pub mod app_config;
}
mod handlers {
    pub mod testimonial_handlers;
    pub mod testimonial_dtos;
}
mod models {
    pub mod testimonial_models;
}
mod repositories {
    pub mod testimonial_repository;
}

use config::app_config::AppConfig;
use handlers::testimonial_handlers;
use repositories::testimonial_repository::TestimonialRepository;


async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    config: AppConfig,
    testimonials: TestimonialRepository,
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origin = match config.frontend_url.as_deref() {
        Some(url) => match url.parse::<HeaderValue>() {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                tracing::warn!("FRONTEND_URL {} is not a valid origin, allowing any", url);
                AllowOrigin::from(Any)
            }
        },
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_origin(origin)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE])
}

pub fn app(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/testimonials",
            get(testimonial_handlers::list_testimonials).post(testimonial_handlers::create_testimonial),
        );

    // Single page app: unknown paths fall through to index.html.
    if let Some(dir) = state.config.static_dir.as_ref() {
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))));
    }

    app.layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(&state.config))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            ..Default::default()
        }))
    });

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let bind_addr = config.bind_addr;
    tracing::info!("Starting spotless-api ({}) on {}", config.environment, bind_addr);
    if config.is_production() && config.frontend_url.is_none() {
        tracing::warn!("FRONTEND_URL is unset in production, CORS allows any origin");
    }

    let state = Arc::new(AppState {
        config,
        testimonials: TestimonialRepository::new(),
    });

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
