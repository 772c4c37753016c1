mod alerts;
mod auth_nav;
mod logout_button;
mod user_context_provider;

pub use alerts::*;
pub use auth_nav::*;
pub use logout_button::*;
pub use user_context_provider::*;
