//! Explainable developer-to-project match scoring.
//!
//! The `matching` module owns the domain: intake of upstream profile
//! documents, the eligibility-gated weighted scoring engine, ranking, and the
//! directory/ledger service around them. `config`, `telemetry`, and `error`
//! carry the operational surface shared with the API binary.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
