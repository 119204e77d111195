// file: src/parser/mod.rs
// description: report text parsing module exports
// reference: internal module structure

pub mod normalizer;
pub mod sections;
pub mod timestamp;

pub use normalizer::TextNormalizer;
pub use sections::{Section, SectionMap, segment};
pub use timestamp::{NormalizedTimestamp, normalize, parse_canonical};
