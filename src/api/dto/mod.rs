//! Request and response DTOs for the REST API.

pub mod health;
pub mod link_info;
pub mod shorten;
