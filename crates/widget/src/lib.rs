//! Behavioral widget variants for dragdeck.
//!
//! Each variant composes a panel registry, a drag gesture, and a change
//! notifier (plus a filter view and, for the pivot controller, a sync
//! adapter) into one widget model: the checklist, the dual-panel
//! selector, the triple-panel layout builder, and the pivot-dimension
//! controller. The catalog maps host element tags to variants and
//! builds widget instances from host configuration.

pub mod catalog;
pub mod checklist;
pub mod layout_builder;
pub mod model;
pub mod pivot;
pub mod selector;

pub use catalog::{build, resolve_items, AnyWidget, WidgetKind};
pub use checklist::Checklist;
pub use layout_builder::LayoutBuilder;
pub use model::DragModel;
pub use pivot::PivotDimensions;
pub use selector::Selector;
