// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one business
// layer:
//
//   report.rs — Corpus statistics for one pipeline run
//               (partition sizes, label balance, vocabulary
//               coverage, truncation share). Computed once per
//               run and emitted through tracing / Display —
//               nothing is ever written to disk.

/// Per-run corpus statistics
pub mod report;
