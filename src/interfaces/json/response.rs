use crate::application::engine::FeasibilityEngine;
use crate::domain::output::Output;
use crate::domain::validation::ValidationError;
use serde::Serialize;

/// The reply to one appraisal request.
///
/// Exactly one of output or error is ever present; an invalid request never
/// carries partial figures.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok { output: Output },
    Invalid { error: ValidationError },
    /// The request was not JSON at all.
    Malformed { message: String },
}

impl Response {
    /// Parses, validates and appraises one JSON request.
    pub fn for_request(engine: &FeasibilityEngine, request: &str) -> Self {
        let payload = match serde_json::from_str(request) {
            Ok(payload) => payload,
            Err(e) => {
                return Response::Malformed {
                    message: e.to_string(),
                };
            }
        };
        match engine.appraise_payload(&payload) {
            Ok(output) => Response::Ok { output },
            Err(error) => Response::Invalid { error },
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok { .. })
    }
}
