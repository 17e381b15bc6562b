use photoprod_core::errors::{ErrorInfo, PhotoprodError};
use photoprod_core::rng::RngHandle;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::track::{FourVector, Track};

/// Smallest track count that still forms a pair.
pub const MIN_TRACKS: usize = 2;

/// Track count for which a second pair `[2, 3]` is formed.
pub const TWO_PAIR_TRACKS: usize = 4;

/// One reconstructed collision outcome.
///
/// The track order is the shuffled order chosen at construction; pair masses
/// and pseudorapidities follow that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    tracks: Vec<Track>,
    pair_masses: Vec<f64>,
    total: FourVector,
    invariant_mass: f64,
    transverse_momentum: f64,
}

impl Event {
    /// Shuffles `tracks` with `rng` and derives the event observables.
    ///
    /// The shuffle models a detector that cannot tell which track came from
    /// which parent, so the pairing `[0, 1]` (and `[2, 3]` for four tracks) is
    /// arbitrary. Total mass and transverse momentum do not depend on it.
    pub fn reconstruct(mut tracks: Vec<Track>, rng: &mut RngHandle) -> Result<Self, PhotoprodError> {
        if tracks.len() < MIN_TRACKS {
            return Err(PhotoprodError::Recon(
                ErrorInfo::new(
                    "event-too-few-tracks",
                    "an event needs at least two tracks to form a pair",
                )
                .with_context("tracks", tracks.len().to_string()),
            ));
        }
        tracks.shuffle(rng);
        Ok(Self::from_ordered(tracks))
    }

    /// Derives observables from tracks already in pairing order.
    ///
    /// Fixture constructor: no shuffle is applied and no minimum track count
    /// is enforced, so fewer than two tracks yield no pair masses. Ingestion
    /// always goes through [`Event::reconstruct`].
    #[doc(hidden)]
    pub fn from_ordered(tracks: Vec<Track>) -> Self {
        let mut pair_masses = Vec::with_capacity(2);
        if tracks.len() >= MIN_TRACKS {
            pair_masses.push(pair_mass(&tracks[0], &tracks[1]));
        }
        // Arity is inferred from the list length alone.
        if tracks.len() == TWO_PAIR_TRACKS {
            pair_masses.push(pair_mass(&tracks[2], &tracks[3]));
        }
        let total: FourVector = tracks.iter().sum();
        Self {
            invariant_mass: total.invariant_mass(),
            transverse_momentum: total.transverse_momentum(),
            total,
            pair_masses,
            tracks,
        }
    }

    /// Tracks in post-shuffle order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of constituent tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// True when the event carries no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Pairwise invariant masses: one entry for two tracks, two for four.
    pub fn pair_masses(&self) -> &[f64] {
        &self.pair_masses
    }

    /// Summed four-momentum of all tracks.
    pub fn total_momentum(&self) -> FourVector {
        self.total
    }

    /// Invariant mass of all tracks.
    pub fn invariant_mass(&self) -> f64 {
        self.invariant_mass
    }

    /// Transverse momentum of all tracks.
    pub fn transverse_momentum(&self) -> f64 {
        self.transverse_momentum
    }

    /// Pseudorapidity of each track in post-shuffle order.
    pub fn pseudorapidities(&self) -> Vec<f64> {
        self.tracks.iter().map(|track| track.pseudorapidity).collect()
    }
}

fn pair_mass(a: &Track, b: &Track) -> f64 {
    (a.momentum + b.momentum).invariant_mass()
}
