use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::species::species_mass;

/// Energy-momentum four-vector `(E, px, py, pz)` in GeV.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FourVector {
    /// Total energy.
    pub e: f64,
    /// Momentum along x.
    pub px: f64,
    /// Momentum along y.
    pub py: f64,
    /// Momentum along z (beam axis).
    pub pz: f64,
}

impl FourVector {
    /// Creates a four-vector from its components.
    pub const fn new(e: f64, px: f64, py: f64, pz: f64) -> Self {
        Self { e, px, py, pz }
    }

    /// Magnitude of the three-momentum.
    pub fn momentum(&self) -> f64 {
        (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt()
    }

    /// Minkowski square `E^2 - |p|^2`.
    pub fn mass_squared(&self) -> f64 {
        self.e * self.e - self.px * self.px - self.py * self.py - self.pz * self.pz
    }

    /// `sqrt(E^2 - |p|^2)`.
    ///
    /// Spacelike sums (possible only through rounding) yield NaN, as the plain
    /// formula does.
    pub fn invariant_mass(&self) -> f64 {
        self.mass_squared().sqrt()
    }

    /// `sqrt(px^2 + py^2)`.
    pub fn transverse_momentum(&self) -> f64 {
        (self.px * self.px + self.py * self.py).sqrt()
    }
}

impl Add for FourVector {
    type Output = FourVector;

    fn add(self, rhs: FourVector) -> FourVector {
        FourVector {
            e: self.e + rhs.e,
            px: self.px + rhs.px,
            py: self.py + rhs.py,
            pz: self.pz + rhs.pz,
        }
    }
}

impl AddAssign for FourVector {
    fn add_assign(&mut self, rhs: FourVector) {
        *self = *self + rhs;
    }
}

impl Sum for FourVector {
    fn sum<I: Iterator<Item = FourVector>>(iter: I) -> FourVector {
        iter.fold(FourVector::default(), Add::add)
    }
}

impl<'a> Sum<&'a Track> for FourVector {
    fn sum<I: Iterator<Item = &'a Track>>(iter: I) -> FourVector {
        iter.map(|track| track.momentum).sum()
    }
}

/// One reconstructed final-state particle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    /// Four-momentum built from the measured three-momentum and rest mass.
    pub momentum: FourVector,
    /// Rest mass used to build the energy component.
    pub mass: f64,
    /// PDG code the mass was resolved from, when built from a species code.
    pub species: Option<i64>,
    /// `0.5 * ln((p + pz) / (p - pz))`.
    ///
    /// Non-finite when the momentum lies on the beam axis (`p == |pz|`).
    pub pseudorapidity: f64,
}

impl Track {
    /// Builds a track from a three-momentum in GeV/c and a rest mass in GeV/c^2.
    pub fn new(px: f64, py: f64, pz: f64, mass: f64) -> Self {
        let p = (px * px + py * py + pz * pz).sqrt();
        let e = (p * p + mass * mass).sqrt();
        Self {
            momentum: FourVector::new(e, px, py, pz),
            mass,
            species: None,
            pseudorapidity: pseudorapidity(p, pz),
        }
    }

    /// Builds a track whose mass is resolved from a PDG species code.
    pub fn from_species(px: f64, py: f64, pz: f64, species: i64) -> Self {
        Self {
            species: Some(species),
            ..Self::new(px, py, pz, species_mass(species))
        }
    }

    /// Total energy.
    pub fn energy(&self) -> f64 {
        self.momentum.e
    }

    /// Magnitude of the three-momentum.
    pub fn momentum_magnitude(&self) -> f64 {
        self.momentum.momentum()
    }
}

/// Pseudorapidity from momentum magnitude and longitudinal component.
pub fn pseudorapidity(p: f64, pz: f64) -> f64 {
    0.5 * ((p + pz) / (p - pz)).ln()
}
