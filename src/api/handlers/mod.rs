//! HTTP request handlers.

pub mod health;
pub mod link_info;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use link_info::link_info_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
