use axum::{
    Router,
    routing::{get, post},
};
use session_auth::SessionManager;
use session_auth_axum::session_router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod handlers;

use crate::handlers::{DemoSession, me, sign_in};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,session_auth=debug,session_auth_axum=debug",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let manager = SessionManager::from_env().await?;

    let v1 = Router::new()
        .route("/sessions", post(sign_in))
        .route("/users/me", get(me))
        .merge(session_router::<DemoSession, SessionManager>());

    let app = Router::new().nest("/v1", v1).with_state(manager);

    let addr = std::env::var("ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
