use std::fs;
use std::path::Path;

use photoprod_core::errors::{ErrorInfo, PhotoprodError};
use serde::{Deserialize, Serialize};

use crate::species::PROTON_MASS;

fn config_error(code: &str, message: impl Into<String>) -> PhotoprodError {
    PhotoprodError::Config(ErrorInfo::new(code, message.into()))
}

fn default_nucleon_mass() -> f64 {
    PROTON_MASS
}

fn default_acceptance_eta() -> f64 {
    0.9
}

/// What happens to an event that is still open when input ends or when the
/// next `EVENT:` record arrives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TruncationPolicy {
    /// Drop the partial event and count it in the ingest statistics.
    #[default]
    Discard,
}

/// YAML-configurable parameters governing a reconstruction run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReconConfig {
    /// Master seed for the pairing shuffle. Entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Nucleon mass in GeV/c^2 used for the per-nucleon collision energy.
    #[serde(default = "default_nucleon_mass")]
    pub nucleon_mass: f64,
    /// Pseudorapidity half-width of the detector acceptance window.
    #[serde(default = "default_acceptance_eta")]
    pub acceptance_eta: f64,
    /// Handling of partially received events.
    #[serde(default)]
    pub truncation: TruncationPolicy,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            seed: None,
            nucleon_mass: default_nucleon_mass(),
            acceptance_eta: default_acceptance_eta(),
            truncation: TruncationPolicy::Discard,
        }
    }
}

impl ReconConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PhotoprodError> {
        let config: ReconConfig = serde_yaml::from_str(yaml)
            .map_err(|err| config_error("config-parse", err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, PhotoprodError> {
        let yaml = fs::read_to_string(path).map_err(|err| {
            PhotoprodError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Rejects physically meaningless values.
    pub fn validate(&self) -> Result<(), PhotoprodError> {
        if !self.nucleon_mass.is_finite() || self.nucleon_mass <= 0.0 {
            return Err(config_error(
                "invalid-nucleon-mass",
                "nucleon mass must be positive and finite",
            ));
        }
        if !self.acceptance_eta.is_finite() || self.acceptance_eta <= 0.0 {
            return Err(config_error(
                "invalid-acceptance",
                "acceptance window must be positive and finite",
            ));
        }
        Ok(())
    }
}
