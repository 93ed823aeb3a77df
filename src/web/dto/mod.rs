//! Data Transfer Objects for the web layer.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
