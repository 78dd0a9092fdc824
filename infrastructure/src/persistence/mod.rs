//! Flat-file persistence of experiment batches and evaluation documents.

mod json_store;

pub use json_store::JsonExperimentStore;
