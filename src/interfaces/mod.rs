//! Adapters between the engine and the outside world: JSON requests and
//! responses, and CSV exports of results.

pub mod csv;
pub mod json;
