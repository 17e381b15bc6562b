use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use photoprod_core::errors::{ErrorInfo, PhotoprodError};
use photoprod_core::rng::RngHandle;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::config::{ReconConfig, TruncationPolicy};
use crate::event::{Event, MIN_TRACKS};
use crate::species::is_known_species;
use crate::tokenize::{split_fields, FIELD_DELIMITER};
use crate::track::Track;

/// Leading keyword of the run configuration record.
pub const CONFIG_KEYWORD: &str = "CONFIG_OPT:";
/// Leading keyword of the first beam record.
pub const BEAM_1_KEYWORD: &str = "BEAM_1:";
/// Leading keyword of the second beam record.
pub const BEAM_2_KEYWORD: &str = "BEAM_2:";
/// Leading keyword of an event header.
pub const EVENT_KEYWORD: &str = "EVENT:";
/// Leading keyword of a particle record.
pub const TRACK_KEYWORD: &str = "TRACK:";

const CHANNEL_FIELD: usize = 2;
const GAMMA_FIELD: usize = 3;
const TRACK_COUNT_FIELD: usize = 2;
const PX_FIELD: usize = 3;
const PY_FIELD: usize = 4;
const PZ_FIELD: usize = 5;
const SPECIES_FIELD: usize = 9;

/// Run-level fields absorbed from the metadata records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Decay-channel code from `CONFIG_OPT:`.
    pub channel_code: Option<i64>,
    /// Lorentz factor from `BEAM_1:`.
    pub beam1_gamma: Option<f64>,
    /// Lorentz factor from `BEAM_2:`.
    pub beam2_gamma: Option<f64>,
}

/// Counters describing what the state machine absorbed or dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IngestStats {
    /// Lines read, including ignored ones.
    pub lines: usize,
    /// Lines whose leading keyword is not recognised (blank lines included).
    pub ignored_lines: usize,
    /// `TRACK:` records that arrived while no event was open.
    pub stray_tracks: usize,
    /// Events abandoned before all of their tracks arrived.
    pub truncated_events: usize,
    /// Events closed with fewer than two tracks.
    pub skipped_events: usize,
    /// Tracks whose species code is missing from the mass table.
    pub unknown_species: usize,
}

/// Where the state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestState {
    /// Between events; metadata records are absorbed here.
    Idle,
    /// An `EVENT:` header was seen and `remaining` tracks are still expected.
    EventOpen {
        /// Tracks announced by the header.
        expected: usize,
        /// Tracks still to arrive.
        remaining: usize,
    },
}

/// Everything produced by one pass over the input.
#[derive(Debug, Clone)]
pub struct IngestOutput {
    /// Run-level metadata; fields are `None` when their record never appeared.
    pub metadata: RunMetadata,
    /// Completed events in arrival order.
    pub events: Vec<Event>,
    /// Absorbed anomalies.
    pub stats: IngestStats,
    /// SHA-256 over the consumed bytes, hex encoded.
    pub input_hash: String,
}

fn parse_error(
    line_no: usize,
    record: &str,
    index: usize,
    message: impl Into<String>,
) -> PhotoprodError {
    PhotoprodError::Parse(
        ErrorInfo::new("record-field", message.into())
            .with_context("line", line_no.to_string())
            .with_context("record", record)
            .with_context("field", index.to_string()),
    )
}

fn field<T>(fields: &[&str], index: usize, line_no: usize) -> Result<T, PhotoprodError>
where
    T: FromStr,
    T::Err: Display,
{
    let record = fields.first().copied().unwrap_or_default();
    let raw = fields.get(index).ok_or_else(|| {
        parse_error(
            line_no,
            record,
            index,
            format!("record has {} fields, field {index} is required", fields.len()),
        )
    })?;
    raw.parse::<T>()
        .map_err(|err| parse_error(line_no, record, index, format!("`{raw}`: {err}")))
}

/// Line-driven state machine grouping `TRACK:` records into events.
///
/// Events are reconstructed the moment their last announced track arrives,
/// using the single RNG handle lent to the ingestor.
#[derive(Debug)]
pub struct Ingestor<'a> {
    rng: &'a mut RngHandle,
    truncation: TruncationPolicy,
    metadata: RunMetadata,
    state: IngestState,
    buffer: Vec<Track>,
    events: Vec<Event>,
    stats: IngestStats,
}

impl<'a> Ingestor<'a> {
    /// Creates an idle ingestor that shuffles with `rng`.
    pub fn new(rng: &'a mut RngHandle, config: &ReconConfig) -> Self {
        Self {
            rng,
            truncation: config.truncation,
            metadata: RunMetadata::default(),
            state: IngestState::Idle,
            buffer: Vec::new(),
            events: Vec::new(),
            stats: IngestStats::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> IngestState {
        self.state
    }

    /// Metadata absorbed so far.
    pub fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }

    /// Events completed so far.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consumes one line of input. `line_no` is 1-based and only used in errors.
    pub fn feed_line(&mut self, line_no: usize, line: &str) -> Result<(), PhotoprodError> {
        self.stats.lines += 1;
        let fields = split_fields(line, FIELD_DELIMITER);
        match fields.first().copied() {
            Some(CONFIG_KEYWORD) => {
                let code: i64 = field(&fields, CHANNEL_FIELD, line_no)?;
                if let Some(previous) = self.metadata.channel_code.filter(|&c| c != code) {
                    warn!(previous, code, line_no, "decay channel changed mid-run");
                }
                self.metadata.channel_code = Some(code);
            }
            Some(BEAM_1_KEYWORD) => {
                self.metadata.beam1_gamma = Some(field(&fields, GAMMA_FIELD, line_no)?);
            }
            Some(BEAM_2_KEYWORD) => {
                self.metadata.beam2_gamma = Some(field(&fields, GAMMA_FIELD, line_no)?);
            }
            Some(EVENT_KEYWORD) => {
                let expected: usize = field(&fields, TRACK_COUNT_FIELD, line_no)?;
                self.open_event(expected, line_no);
            }
            Some(TRACK_KEYWORD) => self.accept_track(&fields, line_no)?,
            _ => self.stats.ignored_lines += 1,
        }
        Ok(())
    }

    fn open_event(&mut self, expected: usize, line_no: usize) {
        // A header before the open event completes drops its partial tracks
        // instead of letting them spill into the new event.
        if let IngestState::EventOpen {
            expected: previous,
            remaining,
        } = self.state
        {
            self.abandon_open_event(previous, remaining, "next event header");
        }
        if expected == 0 {
            debug!(line_no, "event header announces no tracks");
            self.stats.skipped_events += 1;
            self.state = IngestState::Idle;
            return;
        }
        self.state = IngestState::EventOpen {
            expected,
            remaining: expected,
        };
    }

    fn accept_track(&mut self, fields: &[&str], line_no: usize) -> Result<(), PhotoprodError> {
        let IngestState::EventOpen {
            expected,
            remaining,
        } = self.state
        else {
            debug!(line_no, "track outside an open event ignored");
            self.stats.stray_tracks += 1;
            return Ok(());
        };
        let px: f64 = field(fields, PX_FIELD, line_no)?;
        let py: f64 = field(fields, PY_FIELD, line_no)?;
        let pz: f64 = field(fields, PZ_FIELD, line_no)?;
        let species: i64 = field(fields, SPECIES_FIELD, line_no)?;
        if !is_known_species(species) {
            debug!(species, line_no, "unknown species treated as massless");
            self.stats.unknown_species += 1;
        }
        self.buffer.push(Track::from_species(px, py, pz, species));

        let remaining = remaining - 1;
        if remaining == 0 {
            self.state = IngestState::Idle;
            self.close_event(expected)?;
        } else {
            self.state = IngestState::EventOpen {
                expected,
                remaining,
            };
        }
        Ok(())
    }

    fn close_event(&mut self, expected: usize) -> Result<(), PhotoprodError> {
        let tracks = std::mem::take(&mut self.buffer);
        if tracks.len() < MIN_TRACKS {
            warn!(tracks = tracks.len(), "event too small to pair, skipped");
            self.stats.skipped_events += 1;
            return Ok(());
        }
        let event = Event::reconstruct(tracks, self.rng)?;
        debug!(
            index = self.events.len(),
            tracks = expected,
            mass = event.invariant_mass(),
            "event closed"
        );
        self.events.push(event);
        Ok(())
    }

    fn abandon_open_event(&mut self, expected: usize, remaining: usize, reason: &str) {
        match self.truncation {
            TruncationPolicy::Discard => {
                warn!(
                    expected,
                    received = expected - remaining,
                    reason,
                    "discarding incomplete event"
                );
                self.buffer.clear();
                self.stats.truncated_events += 1;
            }
        }
        self.state = IngestState::Idle;
    }

    /// Ends the input, applying the truncation policy to any open event.
    pub fn finish(mut self, input_hash: String) -> IngestOutput {
        if let IngestState::EventOpen {
            expected,
            remaining,
        } = self.state
        {
            self.abandon_open_event(expected, remaining, "end of input");
        }
        IngestOutput {
            metadata: self.metadata,
            events: self.events,
            stats: self.stats,
            input_hash,
        }
    }
}

/// Runs the state machine over every line of `reader`.
pub fn ingest_reader<R: BufRead>(
    mut reader: R,
    rng: &mut RngHandle,
    config: &ReconConfig,
) -> Result<IngestOutput, PhotoprodError> {
    let mut ingestor = Ingestor::new(rng, config);
    let mut hasher = Sha256::new();
    let mut line = String::new();
    let mut line_no = 0usize;
    loop {
        line.clear();
        let read = reader.read_line(&mut line).map_err(|err| {
            PhotoprodError::Io(
                ErrorInfo::new("input-read", err.to_string())
                    .with_context("line", (line_no + 1).to_string()),
            )
        })?;
        if read == 0 {
            break;
        }
        line_no += 1;
        hasher.update(line.as_bytes());
        ingestor.feed_line(line_no, line.trim_end_matches(['\n', '\r']))?;
    }
    Ok(ingestor.finish(hex::encode(hasher.finalize())))
}

pub(crate) fn open_input(path: &Path) -> Result<BufReader<File>, PhotoprodError> {
    let file = File::open(path).map_err(|err| {
        PhotoprodError::Io(
            ErrorInfo::new("input-open", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    Ok(BufReader::new(file))
}

/// Opens `path` and ingests it. The file handle is released on every return path.
pub fn ingest_path(
    path: &Path,
    rng: &mut RngHandle,
    config: &ReconConfig,
) -> Result<IngestOutput, PhotoprodError> {
    ingest_reader(open_input(path)?, rng, config)
}
