//! Crystal structures passed from the store to the viewer.

mod crystal;
mod lattice;

pub use crystal::{Site, SpeciesOccupancy, Structure, STRUCTURE_FIELD};
pub use lattice::Lattice;
