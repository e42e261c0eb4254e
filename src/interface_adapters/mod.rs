// Interface adapters: concrete HTTP client, session store and navigator.

pub mod clients;
pub mod navigator;
pub mod session_state;
