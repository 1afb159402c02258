// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// the application layer can swap implementations without
// changing the code that uses them:
//   - CsvLoader implements RecordSource
//   - A future JsonlLoader could also implement RecordSource
//   - The use cases only ever see RecordSource

use crate::domain::comment::LabeledComment;
use anyhow::Result;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the full set of labelled
/// comments from some backing store.
///
/// Implementations:
///   - CsvLoader → loads from a delimited text file
pub trait RecordSource {
    /// Load every record from this source, in source order.
    fn load_all(&self) -> Result<Vec<LabeledComment>>;
}
