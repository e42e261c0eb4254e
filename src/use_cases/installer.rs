use std::sync::Arc;

use crate::domain::InterceptorRegistry;
use crate::use_cases::auth_interceptor::AuthInterceptor;

// Wire both phases of the auth interceptor into a client's interceptor chain.
// Call once per client; duplicate registration follows the client's own chain semantics.
pub fn install<C>(client: &mut C, interceptor: AuthInterceptor)
where
    C: InterceptorRegistry + ?Sized,
{
    let interceptor = Arc::new(interceptor);
    client.add_request_interceptor(interceptor.clone());
    client.add_response_error_interceptor(interceptor);
    tracing::debug!("auth interceptors installed.");
}
