#![deny(missing_docs)]
#![doc = "Ingestion and kinematic reconstruction of photoproduction simulator output: record parsing, four-vector tracks, pairing-ambiguous event observables and run aggregation."]

/// Detector acceptance tallies.
pub mod acceptance;
/// Freedman–Diaconis bin-width estimator.
pub mod binning;
/// YAML run configuration.
pub mod config;
/// Decay-channel label catalog.
pub mod decay;
/// Event reconstruction from shuffled tracks.
pub mod event;
/// Line-oriented ingestion state machine.
pub mod ingest;
/// Immutable run-level result.
pub mod result;
/// End-to-end runs and serialisable summaries.
pub mod run;
/// Canonical JSON serde helpers.
pub mod serde;
/// Particle species mass table.
pub mod species;
/// Record tokenizer.
pub mod tokenize;
/// Four-vectors and tracks.
pub mod track;

pub use acceptance::{acceptance_summary, in_acceptance, AcceptanceSummary};
pub use binning::freedman_diaconis_width;
pub use config::{ReconConfig, TruncationPolicy};
pub use decay::{decay_labels, DecayLabels};
pub use event::Event;
pub use ingest::{
    ingest_path, ingest_reader, IngestOutput, IngestState, IngestStats, Ingestor, RunMetadata,
};
pub use result::{collision_energy, SimulationResult};
pub use run::{reconstruct_path, reconstruct_reader, ColumnWidths, Reconstruction, RunSummary};
pub use species::{species_mass, PROTON_MASS};
pub use tokenize::split_fields;
pub use track::{FourVector, Track};
