//! Precomputed per-dopant records served verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DopantError, Result};
use crate::store::Document;

/// DFT formation energy and charge transition level of one dopant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DopantRecord {
    pub element: String,
    pub formation_energy: f64,
    pub charge_transition: f64,
    pub id: String,
}

impl DopantRecord {
    /// Stored field names.
    pub const FIELDS: [&'static str; 3] = [
        "Element",
        "formation energy (eV)",
        "charge transition (+/0) (eV)",
    ];

    /// Map a stored document onto a record.
    pub fn from_document(collection: &str, doc: &Document) -> Result<Self> {
        let reader = FieldReader { collection, doc };
        Ok(Self {
            element: reader.string(Self::FIELDS[0])?,
            formation_energy: reader.number(Self::FIELDS[1])?,
            charge_transition: reader.number(Self::FIELDS[2])?,
            id: reader.id()?,
        })
    }
}

/// Model-predicted formation energy of one dopant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedFormationEnergy {
    #[serde(rename = "Dopant")]
    pub dopant: String,
    #[serde(rename = "GPR")]
    pub gpr: f64,
    #[serde(rename = "NN")]
    pub nn: f64,
    #[serde(rename = "RFR")]
    pub rfr: f64,
    pub id: String,
}

impl PredictedFormationEnergy {
    /// Stored field names.
    pub const FIELDS: [&'static str; 4] = ["Dopant", "GPR", "NN", "RFR"];

    /// Map a stored document onto a record.
    pub fn from_document(collection: &str, doc: &Document) -> Result<Self> {
        let reader = FieldReader { collection, doc };
        Ok(Self {
            dopant: reader.string("Dopant")?,
            gpr: reader.number("GPR")?,
            nn: reader.number("NN")?,
            rfr: reader.number("RFR")?,
            id: reader.id()?,
        })
    }
}

/// Model-predicted band gap of one dopant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandGapPrediction {
    #[serde(rename = "Element")]
    pub element: String,
    #[serde(rename = "GPR")]
    pub gpr: f64,
    #[serde(rename = "NN")]
    pub nn: f64,
    #[serde(rename = "RFR")]
    pub rfr: f64,
    pub id: String,
}

impl BandGapPrediction {
    /// Stored field names.
    pub const FIELDS: [&'static str; 4] = ["Element", "GPR", "NN", "RFR"];

    /// Map a stored document onto a record.
    pub fn from_document(collection: &str, doc: &Document) -> Result<Self> {
        let reader = FieldReader { collection, doc };
        Ok(Self {
            element: reader.string("Element")?,
            gpr: reader.number("GPR")?,
            nn: reader.number("NN")?,
            rfr: reader.number("RFR")?,
            id: reader.id()?,
        })
    }
}

struct FieldReader<'a> {
    collection: &'a str,
    doc: &'a Document,
}

impl FieldReader<'_> {
    fn field(&self, name: &str) -> Result<&Value> {
        self.doc.get(name).ok_or_else(|| self.malformed(format!("missing field '{}'", name)))
    }

    fn string(&self, name: &str) -> Result<String> {
        self.field(name)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.malformed(format!("field '{}' is not a string", name)))
    }

    fn number(&self, name: &str) -> Result<f64> {
        self.field(name)?
            .as_f64()
            .ok_or_else(|| self.malformed(format!("field '{}' is not a number", name)))
    }

    fn id(&self) -> Result<String> {
        self.doc.id().ok_or_else(|| self.malformed("missing '_id'".to_string()))
    }

    fn malformed(&self, message: String) -> DopantError {
        DopantError::MalformedDocument {
            collection: self.collection.to_string(),
            message,
        }
    }
}
