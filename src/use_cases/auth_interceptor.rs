use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::http::AUTHORIZATION_HEADER;
use crate::domain::{
    Navigator, OutgoingRequest, RequestInterceptor, ResponseError, ResponseErrorInterceptor,
    Route, SessionMutation, SessionState,
};

/// Attaches the session's access token to outgoing requests and invalidates
/// the session when the server answers 401.
///
/// Both collaborators are injected; the interceptor never touches session
/// fields directly, it only reads snapshots and commits mutations.
pub struct AuthInterceptor {
    session: Arc<dyn SessionState>,
    navigator: Arc<dyn Navigator>,
    home: Route,
}

impl AuthInterceptor {
    pub fn new(session: Arc<dyn SessionState>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            session,
            navigator,
            home: Route::home(),
        }
    }

    // Override the landing route used after a 401.
    pub fn with_home_route(mut self, home: Route) -> Self {
        self.home = home;
        self
    }

    pub fn home_route(&self) -> &Route {
        &self.home
    }
}

#[async_trait]
impl RequestInterceptor for AuthInterceptor {
    async fn on_request(&self, request: &mut OutgoingRequest) {
        let session = self.session.read().await;

        // Token goes in verbatim, replacing any casing of the header already present.
        if let Some(token) = session.bearer_token() {
            request.set_header(AUTHORIZATION_HEADER, token);
        }
    }
}

#[async_trait]
impl ResponseErrorInterceptor for AuthInterceptor {
    #[tracing::instrument(
        name = "auth_response_error",
        skip_all,
        fields(status = ?error.status())
    )]
    async fn on_response_error(&self, error: ResponseError) -> ResponseError {
        if !error.is_unauthorized() {
            return error;
        }

        tracing::info!(route = %self.home.name, "unauthorized response, clearing session.");

        // Token first, then user; both land before navigation.
        self.session.commit(SessionMutation::ClearAccessToken).await;
        self.session.commit(SessionMutation::ClearCurrentUser).await;

        if let Err(e) = self.navigator.push(self.home.clone()).await {
            tracing::warn!(error = %e, route = %self.home.name, "failed to navigate after 401.");
        }

        error
    }
}
