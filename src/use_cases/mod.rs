// Use cases layer: the auth interceptor pair and its installer.

pub mod auth_interceptor;
pub mod installer;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_interceptor::AuthInterceptor;
pub use installer::install;
