mod decoder;
mod error;
mod shell;

pub use decoder::*;
pub use error::*;
pub use shell::*;
