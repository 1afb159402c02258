// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (preparing the dataset or inspecting it).
//
// Rules for this layer:
//   - No CSV parsing or array math here (that's Layer 4)
//   - No UI or printing here (that's Layer 1)
//   - Only workflow coordination

// The full load → split → encode → pad workflow
pub mod prepare_use_case;

// Raw-dataset statistics without any encoding
pub mod inspect_use_case;
