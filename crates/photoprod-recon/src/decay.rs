use serde::{Deserialize, Serialize};

/// Plain label returned for channel codes missing from the catalog.
pub const UNKNOWN_PLAIN_LABEL: &str = "NoReprStrFound";

/// Typeset label returned for channel codes missing from the catalog.
pub const UNKNOWN_TYPESET_LABEL: &str = "NO JETSET ID FOUND";

/// Display labels for a decay channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecayLabels {
    /// Short filesystem-safe label, e.g. `jpsi_4pi`.
    pub plain: String,
    /// Label for plot titles, in ROOT TLatex (`#psi`) or LaTeX (`\psi`) markup.
    pub typeset: String,
}

impl DecayLabels {
    /// True when neither label resolved from the catalog.
    pub fn is_unknown(&self) -> bool {
        self.plain == UNKNOWN_PLAIN_LABEL && self.typeset == UNKNOWN_TYPESET_LABEL
    }
}

fn plain_label(code: i64) -> Option<&'static str> {
    match code {
        443211 => Some("jpsi_4pi"),
        443321211 => Some("jpsi_2K2pi"),
        _ => None,
    }
}

fn typeset_label(code: i64) -> Option<&'static str> {
    match code {
        443011 => Some("J/#psi #rightarrow e^{+}e^{-}"),
        443013 => Some("J/#psi #rightarrow #mu^{+}#mu^{-}"),
        443211 => Some(r"J/\psi \rightarrow \pi^{+}\pi^{-}\pi^{+}\pi^{-}"),
        443321211 => Some(r"J/\psi \rightarrow K^{+}K^{-}\pi^{+}\pi^{-}"),
        4432212 => Some("J/#psi #rightarrow p#bar{p}"),
        _ => None,
    }
}

/// Resolves the plain and typeset labels for a signed decay-channel code.
///
/// Codes are matched as given; unknown codes resolve to the sentinel labels
/// [`UNKNOWN_PLAIN_LABEL`] and [`UNKNOWN_TYPESET_LABEL`].
pub fn decay_labels(code: i64) -> DecayLabels {
    DecayLabels {
        plain: plain_label(code).unwrap_or(UNKNOWN_PLAIN_LABEL).to_string(),
        typeset: typeset_label(code)
            .unwrap_or(UNKNOWN_TYPESET_LABEL)
            .to_string(),
    }
}
