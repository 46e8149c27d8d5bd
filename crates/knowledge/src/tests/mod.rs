//! Crate-level tests over the reference corpus.

mod engine;
