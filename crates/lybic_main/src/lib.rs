mod cli;
mod codec;

pub use cli::*;
pub use codec::*;
