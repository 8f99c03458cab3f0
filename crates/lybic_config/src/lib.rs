mod config;
mod decode_config;
mod stream_config;

pub use config::*;
pub use decode_config::*;
pub use stream_config::*;
