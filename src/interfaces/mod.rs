// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod decomposer;

pub use decomposer::{Fragments, NumberDecomposer};
