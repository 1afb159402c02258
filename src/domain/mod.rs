// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits that define the core concepts
// of the system.
//
// Rules for this layer:
//   - NO csv/ndarray/clap types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Keeping this layer pure means it can be unit tested without
// touching the filesystem and reused by any loader that can
// produce labelled comments.

// A single labelled comment from the dataset
pub mod comment;

// Core abstractions (traits) that other layers implement
pub mod traits;
