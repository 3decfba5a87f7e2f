//! Interactive developer tools layered over the scene.

/// Debug panel editing render parameters and the test point.
pub mod debug_panel;
