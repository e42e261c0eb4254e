// Domain layer: session model, routes, request/response shapes and ports.

pub mod errors;
pub mod http;
pub mod ports;
pub mod route;
pub mod session;

// Re-export the domain boundary types and ports.
pub use errors::NavigationError;
pub use http::{ApiResponse, FailedResponse, OutgoingRequest, ResponseError};
pub use ports::{
    InterceptorRegistry, Navigator, RequestInterceptor, ResponseErrorInterceptor, SessionState,
};
pub use route::Route;
pub use session::{Session, SessionMutation};
