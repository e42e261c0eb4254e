pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{
    ApiResponse, FailedResponse, InterceptorRegistry, NavigationError, Navigator, OutgoingRequest,
    RequestInterceptor, ResponseError, ResponseErrorInterceptor, Route, Session, SessionMutation,
    SessionState,
};
pub use frameworks::bootstrap::run;
pub use interface_adapters::clients::ApiClient;
pub use interface_adapters::navigator::HistoryNavigator;
pub use interface_adapters::session_state::InMemorySessionState;
pub use use_cases::{AuthInterceptor, install};
