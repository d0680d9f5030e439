//! Incremental merge of DAG linearizations for Seqweave.
//!
//! Folds any number of sequences, each a valid linearization of a shared
//! (never materialized) DAG, into one total order consistent with all of
//! them. Supports two merge disciplines and detects genuine ordering
//! conflicts without ever building an explicit graph.
//!
//! # Key Types
//!
//! - [`SequenceMerger`] — Owns the running merged order; one merge at a time
//! - [`MergeDiscipline`] — Free-tail vs. shared-terminal merge rules
//! - [`MergeError`] — Input-validation and conflict error taxonomy

pub mod error;
pub mod merger;

pub use error::{MergeError, MergeResult};
pub use merger::{MergeDiscipline, SequenceMerger};
