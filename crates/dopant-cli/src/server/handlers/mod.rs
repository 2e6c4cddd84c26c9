//! API request handlers.

mod catalog;
mod selection;
mod structure;

pub use catalog::*;
pub use selection::*;
pub use structure::*;
