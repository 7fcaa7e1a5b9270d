//! Decoding of forecast response bodies.
//!
//! [`decode`] is strict. [`decode_lenient`] logs what went wrong and hands
//! back a degraded snapshot with no current conditions, so callers must
//! check `currently` before rendering.

use serde_json::error::Category;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::WeatherSnapshot;

/// Bytes of raw input shown before the failure offset.
pub const CONTEXT_BYTES: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { message: String, offset: usize, context: String },

    #[error("unexpected end of input at byte {offset}: {message}")]
    Eof { message: String, offset: usize, context: String },

    /// Well-formed JSON that does not match the snapshot shape.
    #[error("unexpected data at byte {offset}: {message}")]
    Data { message: String, offset: usize, context: String },

    #[error("read error: {message}")]
    Io { message: String },
}

impl DecodeError {
    fn from_json(err: &serde_json::Error, body: &[u8]) -> Self {
        let message = err.to_string();

        let Some(offset) = byte_offset(body, err.line(), err.column()) else {
            return DecodeError::Io { message };
        };
        let context = context_before(body, offset);

        match err.classify() {
            Category::Syntax => DecodeError::Syntax { message, offset, context },
            Category::Eof => DecodeError::Eof { message, offset, context },
            Category::Data => DecodeError::Data { message, offset, context },
            Category::Io => DecodeError::Io { message },
        }
    }

    /// Short name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::Syntax { .. } => "syntax",
            DecodeError::Eof { .. } => "eof",
            DecodeError::Data { .. } => "data",
            DecodeError::Io { .. } => "io",
        }
    }

    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::Syntax { offset, .. }
            | DecodeError::Eof { offset, .. }
            | DecodeError::Data { offset, .. } => Some(*offset),
            DecodeError::Io { .. } => None,
        }
    }

    /// Raw input preceding the failure offset, at most [`CONTEXT_BYTES`] long.
    pub fn context(&self) -> Option<&str> {
        match self {
            DecodeError::Syntax { context, .. }
            | DecodeError::Eof { context, .. }
            | DecodeError::Data { context, .. } => Some(context),
            DecodeError::Io { .. } => None,
        }
    }
}

pub fn decode(body: &[u8]) -> Result<WeatherSnapshot, DecodeError> {
    serde_json::from_slice(body).map_err(|err| DecodeError::from_json(&err, body))
}

/// Decode `body`, falling back to an empty snapshot on failure.
pub fn decode_lenient(body: &[u8]) -> WeatherSnapshot {
    match decode(body) {
        Ok(snapshot) => {
            debug!(bytes = body.len(), "Decoded forecast response");
            snapshot
        }
        Err(err) => {
            warn!(
                kind = err.kind(),
                offset = ?err.offset(),
                context = err.context().unwrap_or_default(),
                "Failed to decode forecast response: {err}"
            );
            WeatherSnapshot::default()
        }
    }
}

/// Converts serde_json's 1-based line and byte column into an offset into
/// `body`, clamped to its length. Line 0 means no position is known.
fn byte_offset(body: &[u8], line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start = if line == 1 {
        0
    } else {
        body.iter()
            .enumerate()
            .filter(|(_, b)| **b == b'\n')
            .nth(line - 2)
            .map(|(i, _)| i + 1)
            .unwrap_or(body.len())
    };

    Some((line_start + column).min(body.len()))
}

fn context_before(body: &[u8], offset: usize) -> String {
    let end = offset.min(body.len());
    let start = end.saturating_sub(CONTEXT_BYTES);
    String::from_utf8_lossy(&body[start..end]).into_owned()
}
