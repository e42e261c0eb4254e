mod api;

pub use api::ApiClient;
