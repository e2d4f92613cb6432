//! Panel registry and transfer operations for dragdeck widgets.
//!
//! The registry is the single authoritative model behind a widget: a
//! set of named ordered panels where each item has exactly one home.
//! Every drag outcome reduces to one `move_item` call; rendering layers
//! are expected to re-read panel order rather than track positions
//! themselves.

pub mod registry;
pub mod transfer;

pub use registry::PanelRegistry;
pub use transfer::MoveOutcome;
