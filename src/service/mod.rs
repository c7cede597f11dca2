//! Service layer module.
//!
//! Contains the handle generation pipeline stages and the generator that
//! chains them.

pub mod dedup;
pub mod email;
pub mod generator;
pub mod length;
pub mod normalizer;
pub mod pattern;
pub mod rules;
pub mod suffix;

pub use generator::HandleGenerator;
pub use normalizer::Normalizer;
pub use rules::TemplateCatalog;
