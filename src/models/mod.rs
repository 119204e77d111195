// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod entity;

pub use document::{Document, DocumentKind};
pub use entity::{Category, Entity, IP_TIMESTAMP_SEPARATOR};
