use serde::{Deserialize, Serialize};

use crate::result::SimulationResult;

/// Detector acceptance tally for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceSummary {
    /// Half-width of the pseudorapidity window.
    pub eta_max: f64,
    /// `multiplicity[k]` is the number of events with exactly `k` tracks inside.
    pub multiplicity: Vec<usize>,
    /// Events whose every track is inside the window.
    pub fully_detected: usize,
}

/// Whether `eta` lies strictly inside `(-eta_max, eta_max)`. NaN never does.
pub fn in_acceptance(eta: f64, eta_max: f64) -> bool {
    -eta_max < eta && eta < eta_max
}

/// Counts detected tracks per event for a symmetric pseudorapidity window.
pub fn acceptance_summary(result: &SimulationResult, eta_max: f64) -> AcceptanceSummary {
    let widest = result.events().iter().map(|e| e.len()).max().unwrap_or(0);
    let mut multiplicity = vec![0usize; widest + 1];
    let mut fully_detected = 0usize;
    for event in result.events() {
        let detected = event
            .tracks()
            .iter()
            .filter(|track| in_acceptance(track.pseudorapidity, eta_max))
            .count();
        multiplicity[detected] += 1;
        if detected == event.len() {
            fully_detected += 1;
        }
    }
    AcceptanceSummary {
        eta_max,
        multiplicity,
        fully_detected,
    }
}
