//! HTML template rendering handlers.

mod index;
mod submit;

pub use index::index_handler;
pub use submit::submit_handler;
