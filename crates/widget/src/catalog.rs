//! Widget kinds, element tags, and construction from host config.

use anyhow::{anyhow, bail, Context, Result};

use dragdeck_core::{panels, split_joined, DropSpot, Item, WidgetEvent};
use dragdeck_config::{ItemList, WidgetConfig};
use dragdeck_logger as logger;
use dragdeck_registry::MoveOutcome;
use dragdeck_sync::TableLookup;

use crate::checklist::Checklist;
use crate::layout_builder::LayoutBuilder;
use crate::pivot::PivotDimensions;
use crate::selector::Selector;

// ============================================================================
// Widget Kinds
// ============================================================================

/// The behavioral widget variants the host can instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Checklist,
    Selector,
    LayoutBuilder,
    PivotDimensions,
}

impl WidgetKind {
    /// The custom-element tag the host registers for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            WidgetKind::Checklist => "com-dragdeck-checklist",
            WidgetKind::Selector => "com-dragdeck-selector",
            WidgetKind::LayoutBuilder => "com-dragdeck-layout-builder",
            WidgetKind::PivotDimensions => "com-dragdeck-pivot-dimensions",
        }
    }

    /// Short configuration name.
    pub fn name(self) -> &'static str {
        match self {
            WidgetKind::Checklist => "checklist",
            WidgetKind::Selector => "selector",
            WidgetKind::LayoutBuilder => "layout-builder",
            WidgetKind::PivotDimensions => "pivot-dimensions",
        }
    }

    /// Resolve a kind from its element tag or short name.
    pub fn from_tag(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.tag() == value || kind.name() == value)
    }

    /// Panels this kind owns, in declaration order.
    pub fn panels(self) -> &'static [&'static str] {
        match self {
            WidgetKind::Checklist => &[panels::ITEMS],
            WidgetKind::Selector => &[panels::AVAILABLE, panels::SELECTED],
            WidgetKind::LayoutBuilder => &[panels::AVAILABLE, panels::ROWS, panels::COLUMNS],
            WidgetKind::PivotDimensions => &[panels::ROWS, panels::COLUMNS],
        }
    }

    pub const ALL: [WidgetKind; 4] = [
        WidgetKind::Checklist,
        WidgetKind::Selector,
        WidgetKind::LayoutBuilder,
        WidgetKind::PivotDimensions,
    ];
}

/// Turn a configured item list into items. The joined form splits on
/// `,` with no escaping, the legacy host convention.
pub fn resolve_items(list: &ItemList) -> Vec<Item> {
    match list {
        ItemList::List(values) => values.iter().cloned().map(Item::from).collect(),
        ItemList::Joined(joined) => split_joined(joined),
    }
}

// ============================================================================
// Uniform Widget Surface
// ============================================================================

/// One built widget of any kind, with uniform dispatch for the host
/// driver. Hosts that know the concrete kind use the variant types
/// directly.
pub enum AnyWidget<L> {
    Checklist(Checklist),
    Selector(Selector),
    LayoutBuilder(LayoutBuilder),
    PivotDimensions(PivotDimensions<L>),
}

impl<L: TableLookup> AnyWidget<L> {
    pub fn id(&self) -> &str {
        match self {
            AnyWidget::Checklist(w) => w.id(),
            AnyWidget::Selector(w) => w.id(),
            AnyWidget::LayoutBuilder(w) => w.id(),
            AnyWidget::PivotDimensions(w) => w.id(),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            AnyWidget::Checklist(_) => WidgetKind::Checklist,
            AnyWidget::Selector(_) => WidgetKind::Selector,
            AnyWidget::LayoutBuilder(_) => WidgetKind::LayoutBuilder,
            AnyWidget::PivotDimensions(_) => WidgetKind::PivotDimensions,
        }
    }

    /// Every panel and its current order, in declaration order.
    pub fn panel_snapshot(&self) -> Vec<(&'static str, Vec<Item>)> {
        match self {
            AnyWidget::Checklist(w) => vec![(panels::ITEMS, w.order().to_vec())],
            AnyWidget::Selector(w) => vec![
                (panels::AVAILABLE, w.available().to_vec()),
                (panels::SELECTED, w.selected().to_vec()),
            ],
            AnyWidget::LayoutBuilder(w) => vec![
                (panels::AVAILABLE, w.available().to_vec()),
                (panels::ROWS, w.rows().to_vec()),
                (panels::COLUMNS, w.columns().to_vec()),
            ],
            AnyWidget::PivotDimensions(w) => vec![
                (panels::ROWS, w.rows().to_vec()),
                (panels::COLUMNS, w.columns().to_vec()),
            ],
        }
    }

    /// Register a change listener. The pivot controller emits no host
    /// events; subscribing to it is accepted and never fires.
    pub fn subscribe(&mut self, listener: impl FnMut(&WidgetEvent) + 'static) {
        match self {
            AnyWidget::Checklist(w) => w.subscribe(listener),
            AnyWidget::Selector(w) => w.subscribe(listener),
            AnyWidget::LayoutBuilder(w) => w.subscribe(listener),
            AnyWidget::PivotDimensions(_) => {}
        }
    }

    /// Replace one panel wholesale. The panel must belong to this
    /// widget's kind.
    pub fn set_panel(&mut self, panel: &str, items: Vec<Item>) -> Result<()> {
        if !self.kind().panels().contains(&panel) {
            bail!(
                "widget {:?} ({}) has no panel {:?}",
                self.id(),
                self.kind().name(),
                panel
            );
        }
        match self {
            AnyWidget::Checklist(w) => w.set_items(items)?,
            AnyWidget::Selector(w) => w.set_panel(panel, items)?,
            AnyWidget::LayoutBuilder(w) => w.set_panel(panel, items)?,
            AnyWidget::PivotDimensions(w) => w.set_panel(panel, items)?,
        }
        Ok(())
    }

    /// Move an item; a panel outside this widget's kind is stale state
    /// and resolves to `NotFound`.
    pub fn move_item(&mut self, item: &Item, panel: &str, index: Option<usize>) -> MoveOutcome {
        match self {
            AnyWidget::Checklist(w) => {
                if panel == panels::ITEMS {
                    w.move_item(item, index)
                } else {
                    MoveOutcome::NotFound
                }
            }
            AnyWidget::Selector(w) => w.move_item(item, panel, index),
            AnyWidget::LayoutBuilder(w) => w.move_item(item, panel, index),
            AnyWidget::PivotDimensions(w) => w.move_item(item, panel, index),
        }
    }

    /// Set a panel's filter query. Returns `false` for kinds without a
    /// filter view (the pivot controller).
    pub fn set_query(&mut self, panel: &str, query: &str) -> bool {
        match self {
            AnyWidget::Checklist(w) => {
                w.set_query(query);
                true
            }
            AnyWidget::Selector(w) => {
                w.set_query(panel, query);
                true
            }
            AnyWidget::LayoutBuilder(w) => {
                w.set_query(panel, query);
                true
            }
            AnyWidget::PivotDimensions(_) => false,
        }
    }

    /// Visible rows of one panel under its current query; `None` for
    /// kinds without a filter view.
    pub fn visible(&self, panel: &str) -> Option<Vec<Item>> {
        match self {
            AnyWidget::Checklist(w) => Some(w.visible()),
            AnyWidget::Selector(w) => Some(w.visible(panel)),
            AnyWidget::LayoutBuilder(w) => Some(w.visible(panel)),
            AnyWidget::PivotDimensions(_) => None,
        }
    }

    pub fn drag_start(&mut self, item: Item) {
        match self {
            AnyWidget::Checklist(w) => w.drag_start(item),
            AnyWidget::Selector(w) => w.drag_start(item),
            AnyWidget::LayoutBuilder(w) => w.drag_start(item),
            AnyWidget::PivotDimensions(w) => w.drag_start(item),
        }
    }

    pub fn drag_over(&mut self, spot: DropSpot) {
        match self {
            AnyWidget::Checklist(w) => w.drag_over(spot),
            AnyWidget::Selector(w) => w.drag_over(spot),
            AnyWidget::LayoutBuilder(w) => w.drag_over(spot),
            AnyWidget::PivotDimensions(w) => w.drag_over(spot),
        }
    }

    pub fn drag_leave(&mut self) {
        match self {
            AnyWidget::Checklist(w) => w.drag_leave(),
            AnyWidget::Selector(w) => w.drag_leave(),
            AnyWidget::LayoutBuilder(w) => w.drag_leave(),
            AnyWidget::PivotDimensions(w) => w.drag_leave(),
        }
    }

    pub fn drag_cancel(&mut self) {
        match self {
            AnyWidget::Checklist(w) => w.drag_cancel(),
            AnyWidget::Selector(w) => w.drag_cancel(),
            AnyWidget::LayoutBuilder(w) => w.drag_cancel(),
            AnyWidget::PivotDimensions(w) => w.drag_cancel(),
        }
    }

    /// Release the drag; `true` when the drop moved anything.
    pub fn drop_release(&mut self) -> bool {
        match self {
            AnyWidget::Checklist(w) => w.drop_release(),
            AnyWidget::Selector(w) => w.drop_release(),
            AnyWidget::LayoutBuilder(w) => w.drop_release(),
            AnyWidget::PivotDimensions(w) => w.drop_release(),
        }
    }

    /// The checklist behind this widget, if that is its kind.
    pub fn as_checklist_mut(&mut self) -> Option<&mut Checklist> {
        match self {
            AnyWidget::Checklist(w) => Some(w),
            _ => None,
        }
    }

    /// The pivot controller behind this widget, if that is its kind.
    pub fn as_pivot_mut(&mut self) -> Option<&mut PivotDimensions<L>> {
        match self {
            AnyWidget::PivotDimensions(w) => Some(w),
            _ => None,
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

/// Build one widget from its configuration section.
///
/// Panel fields that do not apply to the configured kind are ignored.
/// A pivot widget needs a bound table id; its axes come from the first
/// `pull`, which runs here and degrades to empty axes when the table
/// is unavailable.
pub fn build<L: TableLookup>(config: &WidgetConfig, lookup: L) -> Result<AnyWidget<L>> {
    let kind = WidgetKind::from_tag(&config.kind)
        .ok_or_else(|| anyhow!("unknown widget kind {:?}", config.kind))?;

    let mut widget = match kind {
        WidgetKind::Checklist => AnyWidget::Checklist(Checklist::new(&config.id)),
        WidgetKind::Selector => AnyWidget::Selector(Selector::new(&config.id)),
        WidgetKind::LayoutBuilder => AnyWidget::LayoutBuilder(LayoutBuilder::new(&config.id)),
        WidgetKind::PivotDimensions => {
            let table = config
                .table
                .as_deref()
                .ok_or_else(|| anyhow!("pivot widget {:?} has no table", config.id))?;
            let mut pivot = PivotDimensions::new(&config.id, lookup, table);
            pivot.attach();
            AnyWidget::PivotDimensions(pivot)
        }
    };

    for (panel, list) in [
        (panels::ITEMS, &config.items),
        (panels::AVAILABLE, &config.available),
        (panels::SELECTED, &config.selected),
        (panels::ROWS, &config.rows),
        (panels::COLUMNS, &config.columns),
    ] {
        if !kind.panels().contains(&panel) {
            continue;
        }
        if let Some(list) = list {
            widget
                .set_panel(panel, resolve_items(list))
                .with_context(|| format!("widget {:?}, panel {:?}", config.id, panel))?;
        }
    }

    logger::info(format!(
        "built widget {:?} ({})",
        config.id,
        kind.name()
    ));
    Ok(widget)
}
