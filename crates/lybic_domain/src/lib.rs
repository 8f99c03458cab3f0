mod action;
mod error;
mod fields;
mod length;
mod request;
mod response;

pub use action::*;
pub use error::*;
pub use length::*;
pub use lybic_config::Strictness;
pub use request::*;
pub use response::*;
