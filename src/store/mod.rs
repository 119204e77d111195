// file: src/store/mod.rs
// description: batch-lifetime aggregate store exports
// reference: internal module structure

pub mod aggregate;

pub use aggregate::AggregateStore;
