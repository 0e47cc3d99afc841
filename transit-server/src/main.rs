use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use transit_server::planner::RaptorConfig;
use transit_server::timetable;
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let timetable_dir =
        std::env::var("TIMETABLE_DIR").unwrap_or_else(|_| String::from("./data"));
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| String::from("./static"));

    let index = match timetable::load_dir(&timetable_dir) {
        Ok(index) => index,
        Err(e) => {
            tracing::error!("failed to load timetable from {timetable_dir}: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        stops = index.stop_count(),
        trips = index.trip_count(),
        "timetable loaded from {timetable_dir}"
    );

    let state = AppState::new(index, RaptorConfig::default());
    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("transit journey planner listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
