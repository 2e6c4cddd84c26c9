//! Crystal structure documents.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DopantError, Result};
use crate::store::Document;

use super::lattice::Lattice;

/// Document field that holds the serialized structure.
pub const STRUCTURE_FIELD: &str = "structure";

/// One species occupying a site, with its occupancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesOccupancy {
    /// Element symbol.
    pub element: String,

    /// Fractional occupancy of the site.
    #[serde(default = "full_occupancy")]
    pub occu: f64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn full_occupancy() -> f64 {
    1.0
}

/// An atomic site in the cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Species on this site.
    pub species: Vec<SpeciesOccupancy>,

    /// Fractional coordinates.
    pub abc: [f64; 3],

    /// Cartesian coordinates in Å, if stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xyz: Option<[f64; 3]>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Site {
    /// Fully occupied site of a single element.
    pub fn new(element: impl Into<String>, abc: [f64; 3]) -> Self {
        let element = element.into();
        Self {
            species: vec![SpeciesOccupancy {
                element: element.clone(),
                occu: 1.0,
                extra: Map::new(),
            }],
            abc,
            xyz: None,
            label: Some(element),
            properties: Map::new(),
            extra: Map::new(),
        }
    }
}

/// A crystal structure: a lattice plus the sites in it.
///
/// Deserialized from the layout written by pymatgen's `Structure.as_dict()`.
/// Keys this type does not model (`@module`, `@class`, ...) are carried
/// through untouched so the viewer receives the original document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub lattice: Lattice,

    pub sites: Vec<Site>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<f64>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Structure {
    /// Build a structure from element symbols and fractional coordinates.
    pub fn new(lattice: Lattice, species: &[&str], frac_coords: &[[f64; 3]]) -> Result<Self> {
        if species.len() != frac_coords.len() {
            return Err(DopantError::InvalidInput(format!(
                "{} species given for {} coordinates",
                species.len(),
                frac_coords.len()
            )));
        }
        Ok(Self::from_sites(lattice, species.iter().copied().zip(frac_coords.iter().copied())))
    }

    /// Shown before any dopant has been selected: hexagonal NaCl, a = 5 Å, c = 3 Å.
    pub fn placeholder() -> Self {
        let lattice = Lattice::hexagonal(5.0, 3.0).unwrap_or_else(|_| Lattice::cubic(5.0));
        Self::from_sites(lattice, [("Na", [0.0, 0.0, 0.0]), ("Cl", [0.5, 0.5, 0.5])])
    }

    fn from_sites<'a>(
        lattice: Lattice,
        sites: impl IntoIterator<Item = (&'a str, [f64; 3])>,
    ) -> Self {
        let sites = sites
            .into_iter()
            .map(|(element, abc)| {
                let mut site = Site::new(element, abc);
                site.xyz = Some(lattice.cartesian(abc));
                site
            })
            .collect();

        Self {
            lattice,
            sites,
            charge: None,
            properties: Map::new(),
            extra: Map::new(),
        }
    }

    /// Extract the structure stored in a document's `structure` field.
    pub fn from_document(collection: &str, doc: &Document) -> Result<Self> {
        let value = doc
            .get(STRUCTURE_FIELD)
            .ok_or_else(|| DopantError::MalformedDocument {
                collection: collection.to_string(),
                message: format!("document has no '{}' field", STRUCTURE_FIELD),
            })?;

        Structure::deserialize(value).map_err(|e| DopantError::MalformedDocument {
            collection: collection.to_string(),
            message: format!("invalid structure: {}", e),
        })
    }

    /// Number of sites in the cell.
    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    /// Total occupancy per element, in order of first appearance.
    pub fn composition(&self) -> IndexMap<String, f64> {
        let mut composition = IndexMap::new();
        for occupancy in self.sites.iter().flat_map(|s| &s.species) {
            *composition.entry(occupancy.element.clone()).or_insert(0.0) += occupancy.occu;
        }
        composition
    }

    /// Formula written from the composition, e.g. `"CsSnI3"`.
    pub fn formula(&self) -> String {
        self.composition()
            .into_iter()
            .map(|(element, amount)| {
                if (amount - 1.0).abs() < 1e-8 {
                    element
                } else if (amount - amount.round()).abs() < 1e-8 {
                    format!("{}{}", element, amount.round() as i64)
                } else {
                    format!("{}{:.3}", element, amount)
                }
            })
            .collect()
    }
}
