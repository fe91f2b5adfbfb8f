#![forbid(unsafe_code)]

mod config;
mod router;

use std::{net::SocketAddr, sync::Arc};

use api::HttpApi;
use dotenvy::dotenv;
use listenfd::ListenFd;
use web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let mut listenfd = ListenFd::from_env();

    let tcp_socket: Option<std::net::TcpListener> = match listenfd.take_tcp_listener(0) {
        Ok(socket) => socket,
        Err(_) => None,
    };

    let config = config::process_config()?;
    let api = HttpApi::new(&config.api.base_url, &config.api.personal_key)?;
    log::info!("Using upstream API at {}", config.api.base_url);

    let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
    let state = Arc::new(AppState::new(Arc::new(api), config));
    let app = router::app(state);

    match tcp_socket {
        // cargo-watch thing
        Some(listener) => {
            axum::Server::from_tcp(listener)?
                .serve(app.into_make_service())
                .await?
        }
        None => {
            log::info!("Listening on {}", addr);
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await?
        }
    };

    Ok(())
}
