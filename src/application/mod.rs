//! Application layer: the feasibility engine.
//!
//! `FeasibilityEngine` is the single entry point for appraisals. It validates
//! requests and runs the residual land value calculation, producing an
//! ordered audit trail alongside the headline figures.

pub mod engine;
