//! Crystal lattice geometry.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DopantError, Result};

/// A periodic lattice given by three row vectors in Å.
///
/// Fields other than `matrix` and `pbc` (e.g. the cached `a`, `alpha`,
/// `volume` entries of exported documents) are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    /// Lattice vectors a, b, c as rows.
    pub matrix: [[f64; 3]; 3],

    /// Periodic boundary conditions along a, b, c.
    #[serde(default = "default_pbc")]
    pub pbc: [bool; 3],

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_pbc() -> [bool; 3] {
    [true; 3]
}

impl Lattice {
    /// Build a lattice from row vectors.
    pub fn new(matrix: [[f64; 3]; 3]) -> Self {
        Self {
            matrix,
            pbc: default_pbc(),
            extra: Map::new(),
        }
    }

    /// Build a lattice from lengths (Å) and angles (degrees).
    ///
    /// The c vector is placed along z and a lies in the xz-plane.
    pub fn from_parameters(
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Result<Self> {
        if [a, b, c].iter().any(|&len| len <= 0.0 || !len.is_finite()) {
            return Err(DopantError::InvalidInput(format!(
                "Lattice lengths must be positive, got ({}, {}, {})",
                a, b, c
            )));
        }

        let (alpha_r, beta_r, gamma_r) = (
            alpha.to_radians(),
            beta.to_radians(),
            gamma.to_radians(),
        );
        let val = ((alpha_r.cos() * beta_r.cos() - gamma_r.cos()) / (alpha_r.sin() * beta_r.sin()))
            .clamp(-1.0, 1.0);
        let gamma_star = val.acos();

        let vector_a = [a * beta_r.sin(), 0.0, a * beta_r.cos()];
        let vector_b = [
            -b * alpha_r.sin() * gamma_star.cos(),
            b * alpha_r.sin() * gamma_star.sin(),
            b * alpha_r.cos(),
        ];
        let vector_c = [0.0, 0.0, c];

        let lattice = Self::new([vector_a, vector_b, vector_c]);
        let volume = lattice.volume();
        if !volume.is_finite() || volume.abs() <= 1e-10 {
            return Err(DopantError::InvalidInput(format!(
                "Lattice angles ({}, {}, {}) give a degenerate cell",
                alpha, beta, gamma
            )));
        }
        Ok(lattice)
    }

    /// Cubic lattice with edge `a`.
    pub fn cubic(a: f64) -> Self {
        Self::new([[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]])
    }

    /// Hexagonal lattice with in-plane edge `a` and height `c`.
    pub fn hexagonal(a: f64, c: f64) -> Result<Self> {
        Self::from_parameters(a, a, c, 90.0, 90.0, 120.0)
    }

    /// Lengths of the three lattice vectors.
    pub fn abc(&self) -> [f64; 3] {
        self.matrix.map(norm)
    }

    /// Angles alpha (b,c), beta (a,c), gamma (a,b) in degrees.
    pub fn angles(&self) -> [f64; 3] {
        let [a, b, c] = self.matrix;
        [angle(b, c), angle(a, c), angle(a, b)]
    }

    /// Signed cell volume in Å³.
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.matrix;
        dot(a, cross(b, c))
    }

    /// Convert fractional to Cartesian coordinates.
    pub fn cartesian(&self, frac: [f64; 3]) -> [f64; 3] {
        let m = &self.matrix;
        std::array::from_fn(|j| (0..3).map(|i| frac[i] * m[i][j]).sum())
    }
}

fn dot(u: [f64; 3], v: [f64; 3]) -> f64 {
    u[0] * v[0] + u[1] * v[1] + u[2] * v[2]
}

fn cross(u: [f64; 3], v: [f64; 3]) -> [f64; 3] {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

fn norm(u: [f64; 3]) -> f64 {
    dot(u, u).sqrt()
}

fn angle(u: [f64; 3], v: [f64; 3]) -> f64 {
    (dot(u, v) / (norm(u) * norm(v))).clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_cubic() {
        let lattice = Lattice::cubic(6.2);
        assert!(close(lattice.volume(), 6.2f64.powi(3)));
        assert!(lattice.angles().iter().all(|&a| close(a, 90.0)));
    }

    #[test]
    fn test_hexagonal_parameters() {
        let lattice = Lattice::hexagonal(5.0, 3.0).unwrap();
        let [a, b, c] = lattice.abc();
        assert!(close(a, 5.0) && close(b, 5.0) && close(c, 3.0));
        let [alpha, beta, gamma] = lattice.angles();
        assert!(close(alpha, 90.0) && close(beta, 90.0) && close(gamma, 120.0));
        let expected = 5.0 * 5.0 * 3.0 * (3.0f64).sqrt() / 2.0;
        assert!(close(lattice.volume().abs(), expected));
    }

    #[test]
    fn test_rejects_bad_lengths() {
        assert!(Lattice::from_parameters(0.0, 1.0, 1.0, 90.0, 90.0, 90.0).is_err());
        assert!(Lattice::from_parameters(f64::NAN, 1.0, 1.0, 90.0, 90.0, 90.0).is_err());
    }

    #[test]
    fn test_cartesian() {
        let lattice = Lattice::cubic(2.0);
        assert_eq!(lattice.cartesian([0.5, 0.5, 0.5]), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let json = serde_json::json!({
            "matrix": [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            "a": 1.0,
            "volume": 1.0
        });
        let lattice: Lattice = serde_json::from_value(json).unwrap();
        assert_eq!(lattice.pbc, [true; 3]);
        assert_eq!(lattice.extra.get("volume"), Some(&serde_json::json!(1.0)));
    }
}
