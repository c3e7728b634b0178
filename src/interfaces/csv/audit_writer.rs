use crate::domain::output::{AuditRow, Kpis};
use crate::error::Result;
use std::io::Write;

/// Writes appraisal results as CSV.
pub struct AuditWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AuditWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the audit trail with a `section,key,label,value,formula` header.
    pub fn write_audit(&mut self, rows: &[AuditRow]) -> Result<()> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Writes the headline figures as a single record with a header.
    pub fn write_kpis(&mut self, kpis: Kpis) -> Result<()> {
        self.writer.serialize(kpis)?;
        self.writer.flush()?;
        Ok(())
    }
}
