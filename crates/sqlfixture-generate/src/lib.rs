//! Random fixture row generation for sqlfixture.
//!
//! Draws reading and position records, renders them as SQL row literals and
//! streams them to a writer, optionally reproducible from a seed.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod seed;

pub use engine::GenerationEngine;
pub use errors::GenerationError;
pub use generators::{RowGenerator, generate_position_row, generate_reading_row};
pub use model::{GenerateOptions, GenerationReport, OutputMode, PassKind, PassReport};
