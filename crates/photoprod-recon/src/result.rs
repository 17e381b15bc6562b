use photoprod_core::errors::{ErrorInfo, PhotoprodError};
use serde::Serialize;
use tracing::warn;

use crate::decay::{decay_labels, DecayLabels};
use crate::event::{Event, TWO_PAIR_TRACKS};
use crate::ingest::{RunMetadata, BEAM_1_KEYWORD, BEAM_2_KEYWORD, CONFIG_KEYWORD};

fn missing_metadata(record: &str) -> PhotoprodError {
    PhotoprodError::Metadata(
        ErrorInfo::new(
            "missing-metadata",
            format!("no {record} record was seen before the end of input"),
        )
        .with_context("record", record)
        .with_hint("simulator output must carry CONFIG_OPT, BEAM_1 and BEAM_2 records"),
    )
}

/// Per-nucleon-pair collision energy `m_N * gamma_1 + m_N * gamma_2` in GeV.
pub fn collision_energy(nucleon_mass: f64, beam1_gamma: f64, beam2_gamma: f64) -> f64 {
    nucleon_mass * beam1_gamma + nucleon_mass * beam2_gamma
}

/// Immutable output of one reconstruction run, handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    n_events: usize,
    channel_code: i64,
    labels: DecayLabels,
    beam_gammas: [f64; 2],
    nucleon_mass: f64,
    sqrt_s_nn: f64,
    events: Vec<Event>,
}

impl SimulationResult {
    /// Resolves channel labels and the collision energy, then freezes `events`.
    ///
    /// Fails when any of the three metadata records never appeared.
    pub fn aggregate(
        metadata: &RunMetadata,
        events: Vec<Event>,
        nucleon_mass: f64,
    ) -> Result<Self, PhotoprodError> {
        let channel_code = metadata
            .channel_code
            .ok_or_else(|| missing_metadata(CONFIG_KEYWORD))?;
        let beam1_gamma = metadata
            .beam1_gamma
            .ok_or_else(|| missing_metadata(BEAM_1_KEYWORD))?;
        let beam2_gamma = metadata
            .beam2_gamma
            .ok_or_else(|| missing_metadata(BEAM_2_KEYWORD))?;

        let labels = decay_labels(channel_code);
        if labels.is_unknown() {
            warn!(channel_code, "decay channel missing from catalog");
        }
        Ok(Self {
            n_events: events.len(),
            channel_code,
            labels,
            beam_gammas: [beam1_gamma, beam2_gamma],
            nucleon_mass,
            sqrt_s_nn: collision_energy(nucleon_mass, beam1_gamma, beam2_gamma),
            events,
        })
    }

    /// Number of reconstructed events.
    pub fn n_events(&self) -> usize {
        self.n_events
    }

    /// Decay-channel code seen in the run.
    pub fn channel_code(&self) -> i64 {
        self.channel_code
    }

    /// Plain and typeset channel labels.
    pub fn labels(&self) -> &DecayLabels {
        &self.labels
    }

    /// Lorentz factors of beam 1 and beam 2.
    pub fn beam_gammas(&self) -> [f64; 2] {
        self.beam_gammas
    }

    /// Nucleon mass used for [`Self::sqrt_s_nn`].
    pub fn nucleon_mass(&self) -> f64 {
        self.nucleon_mass
    }

    /// Collision energy per nucleon pair in GeV.
    pub fn sqrt_s_nn(&self) -> f64 {
        self.sqrt_s_nn
    }

    /// Events in arrival order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Total invariant mass of every event.
    pub fn total_masses(&self) -> Vec<f64> {
        self.events.iter().map(Event::invariant_mass).collect()
    }

    /// Total transverse momentum of every event.
    pub fn transverse_momenta(&self) -> Vec<f64> {
        self.events.iter().map(Event::transverse_momentum).collect()
    }

    /// Every pairwise invariant mass, flattened across events.
    pub fn pair_masses(&self) -> Vec<f64> {
        self.events
            .iter()
            .flat_map(|event| event.pair_masses().iter().copied())
            .collect()
    }

    /// First and second pair masses of the four-track events, as two columns.
    pub fn pair_mass_columns(&self) -> (Vec<f64>, Vec<f64>) {
        self.events
            .iter()
            .filter(|event| event.len() == TWO_PAIR_TRACKS)
            .map(|event| (event.pair_masses()[0], event.pair_masses()[1]))
            .unzip()
    }

    /// Pseudorapidities of every track, grouped per event.
    pub fn pseudorapidities(&self) -> Vec<Vec<f64>> {
        self.events.iter().map(Event::pseudorapidities).collect()
    }
}
