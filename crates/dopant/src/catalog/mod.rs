//! Precomputed dopant data: DFT energies and model predictions.

#[allow(clippy::module_inception)]
mod catalog;
mod records;

pub use catalog::{Catalog, StoreStatus};
pub use records::{BandGapPrediction, DopantRecord, PredictedFormationEnergy};
