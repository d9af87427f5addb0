// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Wires the other layers together for one run:
// load → split → save.
//
// Rules for this layer:
//   - No parsing or sampling logic here (Layer 4)
//   - No printing here (Layer 1)
//   - No direct file writes (Layer 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The load → split → save workflow
pub mod split_use_case;
