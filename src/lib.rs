//! Development feasibility appraisals.
//!
//! Computes Gross Development Value, Total Development Cost, target profit and
//! the residual land value of a real-estate scheme from a handful of
//! assumptions, with an ordered audit trail of every intermediate figure.

pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;
