//! Widget catalog ("widget deck") and the built-in default layout.

use serde_json::{json, Value};
use crate::dashboard::WidgetConfig;
use crate::layout::WidgetId;

/// A kind of widget the user can drag onto the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub kind: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl CatalogItem {
    pub const fn new(kind: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            kind,
            name,
            description,
        }
    }
}

/// Every widget kind the dashboard knows how to render.
pub const BUILTIN_ITEMS: &[CatalogItem] = &[
    CatalogItem::new("welcome-card", "Welcome Card", "Primary account summary with balance"),
    CatalogItem::new("accounts-card", "Accounts Card", "Secondary account information"),
    CatalogItem::new("account-opening", "Account Opening", "Quick account opening widget"),
    CatalogItem::new("combispaar-stats", "Combispaar Stats", "Combispaar account statistics"),
    CatalogItem::new("settings-widget", "Settings Widget", "Quick settings and actions"),
    CatalogItem::new("chart-widget", "Chart Widget", "Financial overview chart"),
    CatalogItem::new("stats", "Stats Cards", "Display key metrics and statistics"),
    CatalogItem::new("line-chart", "Line Chart", "Show trends over time"),
    CatalogItem::new("bar-chart", "Bar Chart", "Compare data across categories"),
    CatalogItem::new("doughnut-chart", "Doughnut Chart", "Display proportional data"),
    CatalogItem::new("table", "Data Table", "Show detailed data in table format"),
];

/// The deck of widgets offered in edit mode.
///
/// A kind already on the dashboard is marked used and cannot be dragged out again.
#[derive(Debug, Clone)]
pub struct WidgetCatalog {
    items: Vec<CatalogItem>,
}

impl Default for WidgetCatalog {
    fn default() -> Self {
        Self::new(BUILTIN_ITEMS.to_vec())
    }
}

impl WidgetCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, kind: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.kind == kind)
    }

    /// Check if `kind` already appears among `used_kinds`.
    pub fn is_used<'a>(&self, kind: &str, used_kinds: impl IntoIterator<Item = &'a str>) -> bool {
        used_kinds.into_iter().any(|used| used == kind)
    }

    /// Items that can still be added.
    pub fn available<'a>(
        &self,
        used_kinds: impl IntoIterator<Item = &'a str>,
    ) -> Vec<&CatalogItem> {
        let used: Vec<&str> = used_kinds.into_iter().collect();
        self.items
            .iter()
            .filter(|item| !used.contains(&item.kind))
            .collect()
    }

    pub fn available_count<'a>(&self, used_kinds: impl IntoIterator<Item = &'a str>) -> usize {
        self.available(used_kinds).len()
    }
}

fn stats_props(title: &str, amount: &str, chip: &str, percentage: &str, color: &str) -> Value {
    json!({
        "title": title,
        "amount": amount,
        "chip": chip,
        "percentagetext": percentage,
        "percentagecolor": color,
    })
}

/// The layout a dashboard starts with when nothing is saved.
pub fn default_layout() -> Vec<(WidgetId, WidgetConfig)> {
    const GREEN: &str = "#4caf50";
    const RED: &str = "#f44336";

    let mut pending = stats_props("Pending Orders", "45", "Yearly", "-9%", RED);
    pending["illustration"] = json!("/static/img/illustrations/waiting.png");

    vec![
        (
            WidgetId::new("stats-1"),
            WidgetConfig::with_props(
                "stats",
                stats_props("Sales Today", "2.532", "Today", "+26%", GREEN),
            ),
        ),
        (
            WidgetId::new("stats-2"),
            WidgetConfig::with_props(
                "stats",
                stats_props("Visitors", "170.212", "Annual", "-14%", RED),
            ),
        ),
        (
            WidgetId::new("stats-3"),
            WidgetConfig::with_props(
                "stats",
                stats_props("Total Earnings", "$ 24.300", "Monthly", "+18%", GREEN),
            ),
        ),
        (WidgetId::new("stats-4"), WidgetConfig::with_props("stats", pending)),
        (WidgetId::new("line-chart-1"), WidgetConfig::new("line-chart")),
        (WidgetId::new("doughnut-chart-1"), WidgetConfig::new("doughnut-chart")),
        (WidgetId::new("bar-chart-1"), WidgetConfig::new("bar-chart")),
        (WidgetId::new("table-1"), WidgetConfig::new("table")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = WidgetCatalog::default();
        assert_eq!(catalog.items().len(), 11);
        assert_eq!(catalog.get("table").unwrap().name, "Data Table");
        assert!(catalog.get("unknown").is_none());
    }

    #[test]
    fn test_used_kinds_are_unavailable() {
        let catalog = WidgetCatalog::default();
        let used = ["stats", "table", "stats"];

        assert!(catalog.is_used("stats", used));
        assert!(!catalog.is_used("bar-chart", used));
        assert_eq!(catalog.available_count(used), 9);
        assert!(catalog.available(used).iter().all(|item| item.kind != "table"));
    }

    #[test]
    fn test_default_layout() {
        let layout = default_layout();
        assert_eq!(layout.len(), 8);
        assert_eq!(layout[0].0.as_str(), "stats-1");
        assert_eq!(layout[0].1.props["title"], "Sales Today");
        assert_eq!(layout[3].1.props["illustration"], "/static/img/illustrations/waiting.png");
        assert_eq!(layout[7].1.kind, "table");
        assert!(layout[4].1.props.is_null());
    }
}
