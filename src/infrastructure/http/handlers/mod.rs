//! HTTP Handlers

mod catalogue;
mod index;
mod reviews;

pub use catalogue::*;
pub use index::*;
pub use reviews::*;
