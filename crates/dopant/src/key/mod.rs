//! Key resolution: dopant species + charge state to storage query.

mod resolver;
mod species;

pub use resolver::{resolve, DopantKey, ResolvedQuery};
pub use species::{ChargeState, HostSite};
