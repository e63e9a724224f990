use std::net::SocketAddr;

use painel::{config, routes, templates, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();
    tracing::info!(
        "upstream backend {} / market data {}",
        settings.backend_url,
        settings.market_data_url
    );

    let ip = match settings.host.parse::<std::net::IpAddr>() {
        Ok(ip) => ip,
        Err(e) => {
            tracing::error!("invalid HOST {}: {}", settings.host, e);
            std::process::exit(1);
        }
    };
    let addr = SocketAddr::from((ip, settings.port));

    let state = AppState::new(settings, templates::build_handlebars());
    let app = routes::app(state);

    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind listener");
    axum::serve(listener, app).await.expect("server error");
}
