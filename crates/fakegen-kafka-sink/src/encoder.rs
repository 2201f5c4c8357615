//! Reusable JSON encode buffer.

use crate::KafkaSinkError;
use serde::Serialize;

/// JSON encoder that reuses one heap buffer across calls.
///
/// The buffer is cleared at the start of every encode, so neither a previous
/// message nor a failed encode can leak trailing bytes into the next one.
/// This is a correctness requirement for the JSON topic sink, not an
/// optimization: a stale suffix would corrupt every message that follows.
#[derive(Debug, Default)]
pub struct JsonEncoder {
    buf: Vec<u8>,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `value`, returning a view of the internal buffer that is valid
    /// until the next call.
    pub fn encode<T: Serialize>(&mut self, value: &T) -> Result<&[u8], KafkaSinkError> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, value)?;
        Ok(&self.buf)
    }
}
