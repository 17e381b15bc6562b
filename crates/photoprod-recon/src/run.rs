use std::io::BufRead;
use std::path::Path;

use photoprod_core::errors::PhotoprodError;
use photoprod_core::provenance::{RunProvenance, SchemaVersion};
use photoprod_core::rng::RngHandle;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::acceptance::{acceptance_summary, AcceptanceSummary};
use crate::binning::freedman_diaconis_width;
use crate::config::ReconConfig;
use crate::decay::DecayLabels;
use crate::ingest::{ingest_reader, open_input, IngestOutput, IngestStats};
use crate::result::SimulationResult;

/// Aggregated result of a run together with how the input was consumed.
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// Immutable reconstructed output.
    pub result: SimulationResult,
    /// Anomalies absorbed during ingestion.
    pub stats: IngestStats,
    /// Input hash and seed.
    pub provenance: RunProvenance,
}

/// Freedman–Diaconis widths for the per-event columns; `None` for empty columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnWidths {
    /// Width for the total invariant mass column.
    pub total_mass: Option<f64>,
    /// Width for the flattened pair mass column.
    pub pair_mass: Option<f64>,
    /// Width for the total transverse momentum column.
    pub transverse_momentum: Option<f64>,
}

/// Serialisable digest of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// Reconstructed event count.
    pub n_events: usize,
    /// Decay-channel code.
    pub channel_code: i64,
    /// Resolved channel labels.
    pub labels: DecayLabels,
    /// Collision energy per nucleon pair in GeV.
    pub sqrt_s_nn: f64,
    /// Suggested bin widths.
    pub bin_widths: ColumnWidths,
    /// Detector acceptance tally.
    pub acceptance: AcceptanceSummary,
    /// Ingestion counters.
    pub stats: IngestStats,
    /// Input hash, seed and tool version.
    pub provenance: RunProvenance,
}

fn optional_width(samples: &[f64]) -> Option<f64> {
    freedman_diaconis_width(samples).ok()
}

impl Reconstruction {
    /// Builds the summary using `acceptance_eta` as the detector window.
    pub fn summary(&self, acceptance_eta: f64) -> RunSummary {
        let result = &self.result;
        RunSummary {
            schema_version: SchemaVersion::default(),
            n_events: result.n_events(),
            channel_code: result.channel_code(),
            labels: result.labels().clone(),
            sqrt_s_nn: result.sqrt_s_nn(),
            bin_widths: ColumnWidths {
                total_mass: optional_width(&result.total_masses()),
                pair_mass: optional_width(&result.pair_masses()),
                transverse_momentum: optional_width(&result.transverse_momenta()),
            },
            acceptance: acceptance_summary(result, acceptance_eta),
            stats: self.stats.clone(),
            provenance: self.provenance.clone(),
        }
    }
}

fn finalize(
    output: IngestOutput,
    rng: &RngHandle,
    config: &ReconConfig,
) -> Result<Reconstruction, PhotoprodError> {
    let result = SimulationResult::aggregate(&output.metadata, output.events, config.nucleon_mass)?;
    info!(
        events = result.n_events(),
        channel = %result.labels().plain,
        sqrt_s_nn = result.sqrt_s_nn(),
        truncated = output.stats.truncated_events,
        "reconstruction complete"
    );
    Ok(Reconstruction {
        result,
        stats: output.stats,
        provenance: RunProvenance {
            input_hash: output.input_hash,
            seed: rng.seed(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}

/// Ingests `reader` and aggregates the result.
pub fn reconstruct_reader<R: BufRead>(
    reader: R,
    rng: &mut RngHandle,
    config: &ReconConfig,
) -> Result<Reconstruction, PhotoprodError> {
    config.validate()?;
    let output = ingest_reader(reader, rng, config)?;
    finalize(output, rng, config)
}

/// Opens `path`, ingests it and aggregates the result.
pub fn reconstruct_path(
    path: &Path,
    rng: &mut RngHandle,
    config: &ReconConfig,
) -> Result<Reconstruction, PhotoprodError> {
    reconstruct_reader(open_input(path)?, rng, config)
}
