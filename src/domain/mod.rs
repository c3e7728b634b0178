//! Domain types for feasibility appraisals: the assumptions a caller supplies,
//! the validation rules they must satisfy, and the traced output.

pub mod assumptions;
pub mod output;
pub mod validation;
