use crate::domain::{Session, SessionState};
use crate::frameworks::config;
use crate::interface_adapters::clients::ApiClient;
use crate::interface_adapters::navigator::HistoryNavigator;
use crate::interface_adapters::session_state::InMemorySessionState;
use crate::use_cases::{AuthInterceptor, install};
use std::sync::Arc;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let base_url = match config::api_base_url() {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            return;
        }
    };

    let session = match config::access_token() {
        Some(token) => InMemorySessionState::with_session(Session::with_access_token(token)),
        None => InMemorySessionState::new(),
    };
    let navigator = HistoryNavigator::new(config::initial_route());

    let mut client = match ApiClient::new(base_url, config::request_timeout()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to build http client");
            return;
        }
    };
    tracing::debug!(base_url = %client.base_url(), "api client configured.");

    // Interceptors share the same session and navigator the rest of the process sees.
    let auth = AuthInterceptor::new(Arc::new(session.clone()), Arc::new(navigator.clone()))
        .with_home_route(config::home_route());
    install(&mut client, auth);

    let path = config::api_path();
    match client.get(&path).await {
        Ok(res) => tracing::info!(status = res.status, %path, "request succeeded."),
        Err(e) => tracing::warn!(status = ?e.status(), error = %e, %path, "request failed."),
    }

    let route = navigator.current().await.map(|route| route.name);
    let authenticated = session.read().await.bearer_token().is_some();
    tracing::info!(?route, authenticated, "session state after call.");
}
