#![deny(missing_docs)]
#![doc = "Shared error taxonomy, injected RNG handle and provenance types for the photoprod reconstruction engine."]

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, PhotoprodError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::RngHandle;
