use serde::Serialize;

use crate::filter::{FilterCriteria, filter_items};
use crate::item::ItemRecord;
use crate::rarity;
use crate::sort::{SortKey, SortState, sort_items};

pub const GLYPH_YES: &str = "✓";
pub const GLYPH_NONE: &str = "—";

const BAND_EVEN_CLASS: &str = "bg-white";
const BAND_ODD_CLASS: &str = "bg-gray-50";
const CRAFTABLE_YES_CLASS: &str = "text-green-600";
const ATTUNEMENT_YES_CLASS: &str = "text-purple-600";
const GLYPH_NONE_CLASS: &str = "text-gray-400";
const CONSUMABLE_CLASS: &str = "text-orange-600";
const USAGE_CLASS: &str = "text-gray-600";

const ASC_INDICATOR: &str = "▲";
const DESC_INDICATOR: &str = "▼";

/// Neutralize HTML-sensitive characters before display.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One presentable table row. Text fields are already escaped; class
/// fields carry the style hooks the row is drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub name: String,
    pub rarity: String,
    pub rarity_class: &'static str,
    pub cost: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub source: String,
    pub craftable_glyph: &'static str,
    pub craftable_class: &'static str,
    pub tools: String,
    pub attunement_glyph: &'static str,
    pub attunement_class: &'static str,
    #[serde(rename = "use")]
    pub usage: String,
    pub usage_class: &'static str,
    pub band_class: &'static str,
}

impl ItemRow {
    fn from_record(item: &ItemRecord, index: usize) -> Self {
        let tools = if item.tools.is_empty() {
            GLYPH_NONE.to_string()
        } else {
            escape_html(&item.tools)
        };
        let (craftable_glyph, craftable_class) = if item.is_craftable() {
            (GLYPH_YES, CRAFTABLE_YES_CLASS)
        } else {
            (GLYPH_NONE, GLYPH_NONE_CLASS)
        };
        let (attunement_glyph, attunement_class) = if item.needs_attunement() {
            (GLYPH_YES, ATTUNEMENT_YES_CLASS)
        } else {
            (GLYPH_NONE, GLYPH_NONE_CLASS)
        };
        let usage_class = if item.usage == "Consumable" {
            CONSUMABLE_CLASS
        } else {
            USAGE_CLASS
        };
        Self {
            name: escape_html(&item.name),
            rarity: escape_html(&item.rarity),
            rarity_class: rarity::badge_class_of(&item.rarity),
            cost: escape_html(&item.cost),
            item_type: escape_html(&item.item_type),
            source: escape_html(&item.source),
            craftable_glyph,
            craftable_class,
            tools,
            attunement_glyph,
            attunement_class,
            usage: escape_html(&item.usage),
            usage_class,
            band_class: if index % 2 == 0 {
                BAND_EVEN_CLASS
            } else {
                BAND_ODD_CLASS
            },
        }
    }
}

/// Rows in display order, banded by final position.
pub fn render_rows(items: &[&ItemRecord]) -> Vec<ItemRow> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ItemRow::from_record(item, index))
        .collect()
}

/// Result-count line shown above the table.
pub fn summary_line(showing: usize, total: usize) -> String {
    if showing == total {
        format!("Showing all {total} items")
    } else {
        format!("Showing {showing} of {total} items")
    }
}

/// Complete table render: everything a client needs to draw the current
/// state without consulting the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub rows: Vec<ItemRow>,
    pub total: usize,
    pub showing: usize,
    pub summary: String,
    pub no_results: bool,
    pub sort: SortState,
}

impl TableView {
    /// Filter, sort, and render in that order.
    pub fn build(items: &[ItemRecord], criteria: &FilterCriteria, sort: SortState) -> Self {
        let mut kept = filter_items(items, criteria);
        sort_items(&mut kept, sort);
        let showing = kept.len();
        Self {
            rows: render_rows(&kept),
            total: items.len(),
            showing,
            summary: summary_line(showing, items.len()),
            no_results: showing == 0,
            sort,
        }
    }

    /// Header marker for one column: a direction arrow on the sorted
    /// column, empty elsewhere.
    pub fn indicator_for(&self, key: SortKey) -> &'static str {
        if self.sort.key != key {
            ""
        } else if self.sort.order.is_descending() {
            DESC_INDICATOR
        } else {
            ASC_INDICATOR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortOrder;

    fn item(name: &str) -> ItemRecord {
        ItemRecord {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn summary_covers_both_phrasings() {
        assert_eq!(summary_line(5, 5), "Showing all 5 items");
        assert_eq!(summary_line(2, 5), "Showing 2 of 5 items");
        assert_eq!(summary_line(0, 5), "Showing 0 of 5 items");
    }

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Smith & Sons"), "Smith &amp; Sons");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn banding_alternates_from_white() {
        let items = vec![item("a"), item("b"), item("c")];
        let refs: Vec<&ItemRecord> = items.iter().collect();
        let rows = render_rows(&refs);
        assert_eq!(rows[0].band_class, "bg-white");
        assert_eq!(rows[1].band_class, "bg-gray-50");
        assert_eq!(rows[2].band_class, "bg-white");
    }

    #[test]
    fn glyphs_follow_yes_columns() {
        let yes = ItemRecord {
            craftable: "Yes".into(),
            attunement: "Yes".into(),
            ..Default::default()
        };
        let row = ItemRow::from_record(&yes, 0);
        assert_eq!(row.craftable_glyph, GLYPH_YES);
        assert_eq!(row.craftable_class, "text-green-600");
        assert_eq!(row.attunement_glyph, GLYPH_YES);
        assert_eq!(row.attunement_class, "text-purple-600");

        let no = ItemRecord {
            craftable: "no".into(),
            ..Default::default()
        };
        let row = ItemRow::from_record(&no, 0);
        assert_eq!(row.craftable_glyph, GLYPH_NONE);
        assert_eq!(row.craftable_class, "text-gray-400");
        assert_eq!(row.attunement_glyph, GLYPH_NONE);
    }

    #[test]
    fn empty_tools_render_as_dash() {
        let row = ItemRow::from_record(&item("x"), 0);
        assert_eq!(row.tools, GLYPH_NONE);
    }

    #[test]
    fn consumables_are_highlighted() {
        let potion = ItemRecord {
            usage: "Consumable".into(),
            ..Default::default()
        };
        assert_eq!(ItemRow::from_record(&potion, 0).usage_class, "text-orange-600");
        let sword = ItemRecord {
            usage: "Permanent".into(),
            ..Default::default()
        };
        assert_eq!(ItemRow::from_record(&sword, 0).usage_class, "text-gray-600");
    }

    #[test]
    fn unknown_rarity_badge_falls_back() {
        let odd = ItemRecord {
            rarity: "Mythic".into(),
            ..Default::default()
        };
        assert_eq!(
            ItemRow::from_record(&odd, 0).rarity_class,
            rarity::FALLBACK_BADGE_CLASS
        );
    }

    #[test]
    fn build_runs_filter_sort_render_in_order() {
        let items = vec![
            ItemRecord {
                name: "Bolt".into(),
                source: "PHB".into(),
                ..Default::default()
            },
            ItemRecord {
                name: "anvil".into(),
                source: "PHB".into(),
                ..Default::default()
            },
            ItemRecord {
                name: "Crate".into(),
                source: "DMG".into(),
                ..Default::default()
            },
        ];
        let criteria = FilterCriteria {
            source: Some("PHB".into()),
            ..Default::default()
        };
        let view = TableView::build(&items, &criteria, SortState::default());
        assert_eq!(view.total, 3);
        assert_eq!(view.showing, 2);
        assert_eq!(view.summary, "Showing 2 of 3 items");
        assert!(!view.no_results);
        // sorted after filtering, banded after sorting
        assert_eq!(view.rows[0].name, "anvil");
        assert_eq!(view.rows[0].band_class, "bg-white");
        assert_eq!(view.rows[1].name, "Bolt");
        assert_eq!(view.rows[1].band_class, "bg-gray-50");
    }

    #[test]
    fn empty_result_sets_no_results() {
        let items = vec![item("a")];
        let criteria = FilterCriteria {
            search: Some("zzz".into()),
            ..Default::default()
        };
        let view = TableView::build(&items, &criteria, SortState::default());
        assert!(view.no_results);
        assert!(view.rows.is_empty());
        assert_eq!(view.summary, "Showing 0 of 1 items");
    }

    #[test]
    fn indicator_marks_only_the_sorted_column() {
        let view = TableView::build(
            &[],
            &FilterCriteria::default(),
            SortState {
                key: SortKey::Cost,
                order: SortOrder::Descending,
            },
        );
        assert_eq!(view.indicator_for(SortKey::Cost), "▼");
        assert_eq!(view.indicator_for(SortKey::Name), "");
        let ascending = TableView::build(&[], &FilterCriteria::default(), SortState::default());
        assert_eq!(ascending.indicator_for(SortKey::Name), "▲");
    }
}
