//! Query Handlers 实现

mod catalogue_handlers;
mod review_handlers;

pub use catalogue_handlers::*;
pub use review_handlers::*;
