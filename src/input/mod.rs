// ============================================================================
// Input Module
// Adapters from host input events to calculator actions
// ============================================================================

mod keymap;

pub use keymap::action_for_key;
