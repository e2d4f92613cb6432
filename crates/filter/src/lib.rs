//! Read-side text filtering over dragdeck panels.
//!
//! A `FilterView` narrows what a rendering layer shows without touching
//! the registry: it holds one transient query string per panel and
//! recomputes the visible subsequence on demand. Queries never appear
//! in change events and do not survive the owning widget.

use std::collections::HashMap;

use regex::Regex;

use dragdeck_core::Item;
use dragdeck_registry::PanelRegistry;

/// Per-panel query strings and the projection they induce.
#[derive(Debug, Clone, Default)]
pub struct FilterView {
    queries: HashMap<String, String>,
}

impl FilterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query for one panel. An empty query restores full
    /// visibility for that panel.
    pub fn set_query(&mut self, panel: impl Into<String>, query: impl Into<String>) {
        let panel = panel.into();
        let query = query.into();
        if query.is_empty() {
            self.queries.remove(&panel);
        } else {
            self.queries.insert(panel, query);
        }
    }

    /// The active query for a panel, if any.
    pub fn query(&self, panel: &str) -> Option<&str> {
        self.queries.get(panel).map(String::as_str)
    }

    /// Drop the query for one panel.
    pub fn clear_query(&mut self, panel: &str) {
        self.queries.remove(panel);
    }

    /// The visible subsequence of a panel under its current query.
    ///
    /// Order is inherited from the panel, never re-sorted by relevance.
    /// A panel with no query (or an unknown panel name) passes through
    /// unfiltered or empty respectively.
    pub fn visible<'a>(&self, registry: &'a PanelRegistry, panel: &str) -> Vec<&'a Item> {
        let Some(order) = registry.order(panel) else {
            return Vec::new();
        };
        let Some(query) = self.queries.get(panel) else {
            return order.iter().collect();
        };

        let regex = match compile_query(query) {
            Some(r) => r,
            None => return Vec::new(),
        };
        order
            .iter()
            .filter(|item| regex.is_match(item.as_str()))
            .collect()
    }
}

/// Build the matcher for a query: case-insensitive, anchored at word
/// starts, with the query text taken literally. "a" shows "Apple" and
/// "Avocado" but not "Banana"; "region" shows "North Region".
fn compile_query(query: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}", regex::escape(query))).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_registry() -> PanelRegistry {
        let mut registry = PanelRegistry::new();
        registry
            .set_panel(
                "available",
                vec![
                    Item::new("Apple"),
                    Item::new("Banana"),
                    Item::new("Avocado"),
                ],
            )
            .unwrap();
        registry
    }

    fn visible_strs<'a>(view: &FilterView, registry: &'a PanelRegistry, panel: &str) -> Vec<&'a str> {
        view.visible(registry, panel)
            .into_iter()
            .map(Item::as_str)
            .collect()
    }

    #[test]
    fn test_query_narrows_to_word_starts() {
        let registry = fruit_registry();
        let mut view = FilterView::new();
        view.set_query("available", "a");

        assert_eq!(
            visible_strs(&view, &registry, "available"),
            ["Apple", "Avocado"]
        );
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let registry = fruit_registry();
        let mut view = FilterView::new();
        view.set_query("available", "AVO");

        assert_eq!(visible_strs(&view, &registry, "available"), ["Avocado"]);
    }

    #[test]
    fn test_query_matches_later_words() {
        let mut registry = PanelRegistry::new();
        registry
            .set_panel(
                "available",
                vec![Item::new("North Region"), Item::new("Quarter")],
            )
            .unwrap();
        let mut view = FilterView::new();
        view.set_query("available", "region");

        assert_eq!(
            visible_strs(&view, &registry, "available"),
            ["North Region"]
        );
    }

    #[test]
    fn test_empty_query_restores_full_visibility() {
        let registry = fruit_registry();
        let mut view = FilterView::new();
        view.set_query("available", "a");
        view.set_query("available", "");

        assert_eq!(
            visible_strs(&view, &registry, "available"),
            ["Apple", "Banana", "Avocado"]
        );
        assert_eq!(view.query("available"), None);
    }

    #[test]
    fn test_filtering_never_mutates_panel_order() {
        let registry = fruit_registry();
        let before: Vec<Item> = registry.order("available").unwrap().to_vec();

        let mut view = FilterView::new();
        view.set_query("available", "a");
        let _ = view.visible(&registry, "available");
        view.set_query("available", "zzz");
        let _ = view.visible(&registry, "available");

        assert_eq!(registry.order("available").unwrap(), before.as_slice());
    }

    #[test]
    fn test_queries_are_per_panel() {
        let mut registry = fruit_registry();
        registry
            .set_panel("selected", vec![Item::new("Cherry")])
            .unwrap();

        let mut view = FilterView::new();
        view.set_query("available", "a");

        assert_eq!(visible_strs(&view, &registry, "selected"), ["Cherry"]);
    }

    #[test]
    fn test_query_text_is_taken_literally() {
        let mut registry = PanelRegistry::new();
        registry
            .set_panel("available", vec![Item::new("a.c"), Item::new("abc")])
            .unwrap();
        let mut view = FilterView::new();
        view.set_query("available", "a.c");

        assert_eq!(visible_strs(&view, &registry, "available"), ["a.c"]);
    }

    #[test]
    fn test_unknown_panel_is_empty() {
        let registry = fruit_registry();
        let view = FilterView::new();
        assert!(view.visible(&registry, "nowhere").is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let registry = fruit_registry();
        let mut view = FilterView::new();
        view.set_query("available", "zzz");
        assert!(view.visible(&registry, "available").is_empty());
    }
}
