/// State management module
///
/// This module holds all gallery state, with no widget code:
/// - Shared data structures (data.rs)
/// - The ordered item list (items.rs)
/// - The selected-index set (selection.rs)
/// - The drag gesture state machine (drag.rs)
/// - The gallery root tying them together (gallery.rs)

pub mod data;
pub mod drag;
pub mod gallery;
pub mod items;
pub mod selection;
