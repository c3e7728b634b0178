use crate::domain::validation::ValidationError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum FeasibilityError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),
    #[error("JSON error: {0}")]
    #[diagnostic(
        code(feasibility::malformed_json),
        help("the request must be a single JSON object with revenue, costs and profit_target")
    )]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    #[diagnostic(code(feasibility::csv))]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    #[diagnostic(code(feasibility::io))]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FeasibilityError>;
