//! Domain models for kamehandle.
//!
//! This module contains the core types: parsed names, profiles and their
//! template catalogs, generated candidates, and the run configuration.

pub mod candidate;
pub mod config;
pub mod name;
pub mod profile;
pub mod range;

pub use candidate::{Candidate, CandidateKind};
pub use config::{CaseMode, ExportFormat, GeneratorConfig, Mode, clean_domains};
pub use name::{Name, NameParts};
pub use profile::Profile;
pub use range::NumberRange;
