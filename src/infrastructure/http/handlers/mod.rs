//! HTTP Handlers

mod novel;
mod ping;

pub use novel::*;
pub use ping::*;
