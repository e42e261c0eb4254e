use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::NavigationError;
use crate::domain::http::{OutgoingRequest, ResponseError};
use crate::domain::route::Route;
use crate::domain::session::{Session, SessionMutation};

// Port for the process-wide session store. Fields change only through commit().
#[async_trait]
pub trait SessionState: Send + Sync {
    async fn read(&self) -> Session;
    async fn commit(&self, mutation: SessionMutation);
}

// Port for client-side navigation.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn push(&self, route: Route) -> Result<(), NavigationError>;
}

// Runs on every outgoing request before it is sent. Cannot reject.
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    async fn on_request(&self, request: &mut OutgoingRequest);
}

// Runs on every failed call before the caller sees it. Returns the error to
// keep propagating, so a failure can never be turned into a success here.
#[async_trait]
pub trait ResponseErrorInterceptor: Send + Sync {
    async fn on_response_error(&self, error: ResponseError) -> ResponseError;
}

// Capability of an HTTP client to accept interceptors.
pub trait InterceptorRegistry {
    fn add_request_interceptor(&mut self, interceptor: Arc<dyn RequestInterceptor>);
    fn add_response_error_interceptor(&mut self, interceptor: Arc<dyn ResponseErrorInterceptor>);
}
