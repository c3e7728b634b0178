use super::response::Response;
use crate::application::engine::FeasibilityEngine;
use crate::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Counts of what a stream session answered.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct StreamSummary {
    pub ok: usize,
    pub invalid: usize,
    pub malformed: usize,
}

impl StreamSummary {
    fn count(&mut self, response: &Response) {
        match response {
            Response::Ok { .. } => self.ok += 1,
            Response::Invalid { .. } => self.invalid += 1,
            Response::Malformed { .. } => self.malformed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.ok + self.invalid + self.malformed
    }
}

/// Answers a JSON-lines stream of requests, one response line per request
/// line, in input order.
///
/// Blank lines are skipped. A bad request only affects its own response;
/// the session ends at end of input or on an I/O error.
pub async fn serve_lines<R, W>(
    engine: &FeasibilityEngine,
    reader: R,
    mut writer: W,
) -> Result<StreamSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = StreamSummary::default();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let request = line.trim();
        if request.is_empty() {
            continue;
        }

        let response = Response::for_request(engine, request);
        if let Response::Malformed { message } = &response {
            eprintln!("Error reading assumptions: {}", message);
        }
        summary.count(&response);

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        // Callers re-send on every edit and wait for each answer.
        writer.flush().await?;
    }

    Ok(summary)
}
