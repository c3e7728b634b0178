use crate::domain::assumptions::Assumptions;
use crate::domain::validation;
use crate::error::Result;
use serde_json::Value;
use std::io::Read;

/// Reads a single assumptions document from a JSON source.
///
/// The document is first read as a loose JSON tree so that missing fields and
/// wrong types are reported as validation errors naming the field, not as
/// deserializer errors.
pub struct AssumptionsReader<R: Read> {
    source: R,
}

impl<R: Read> AssumptionsReader<R> {
    /// Creates a new `AssumptionsReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Reads the raw JSON payload without validating it.
    pub fn payload(self) -> Result<Value> {
        Ok(serde_json::from_reader(self.source)?)
    }

    /// Reads and validates the payload.
    pub fn assumptions(self) -> Result<Assumptions> {
        let payload = self.payload()?;
        Ok(validation::parse_payload(&payload)?)
    }
}
