use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::item::ItemRecord;
use crate::rarity;

/// Columns the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Rarity,
    Cost,
    Type,
    Source,
    Craftable,
    Tools,
    Attunement,
    Use,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        use SortKey::*;
        &[
            Name, Rarity, Cost, Type, Source, Craftable, Tools, Attunement, Use,
        ]
    }

    /// Column header label as shown in the table.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Rarity => "Rarity",
            SortKey::Cost => "Cost",
            SortKey::Type => "Type",
            SortKey::Source => "Source",
            SortKey::Craftable => "Craftable",
            SortKey::Tools => "Tools",
            SortKey::Attunement => "Attunement",
            SortKey::Use => "Use",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    /// Case-insensitive column lookup. `value` is accepted as a legacy
    /// spelling of the cost column.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        match folded.as_str() {
            "name" => Ok(SortKey::Name),
            "rarity" => Ok(SortKey::Rarity),
            "cost" | "value" => Ok(SortKey::Cost),
            "type" => Ok(SortKey::Type),
            "source" => Ok(SortKey::Source),
            "craftable" => Ok(SortKey::Craftable),
            "tools" => Ok(SortKey::Tools),
            "attunement" => Ok(SortKey::Attunement),
            "use" => Ok(SortKey::Use),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn reversed(&self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Descending)
    }
}

/// Current ordering of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            order: SortOrder::Ascending,
        }
    }
}

impl SortState {
    /// Header-click semantics: clicking the sorted column flips direction,
    /// clicking any other column selects it ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.order = self.order.reversed();
        } else {
            self.key = key;
            self.order = SortOrder::Ascending;
        }
    }
}

fn field_text<'a>(item: &'a ItemRecord, key: SortKey) -> &'a str {
    match key {
        SortKey::Name => &item.name,
        SortKey::Rarity => &item.rarity,
        SortKey::Cost => &item.cost,
        SortKey::Type => &item.item_type,
        SortKey::Source => &item.source,
        SortKey::Craftable => &item.craftable,
        SortKey::Tools => &item.tools,
        SortKey::Attunement => &item.attunement,
        SortKey::Use => &item.usage,
    }
}

/// Numeric content of price-like text. Strips everything outside digits,
/// dot, and minus, then parses the longest leading number, so "10-20 gp"
/// reads as 10 and "2.5.3" as 2.5. No leading number means 0.
fn numeric_value(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let mut prefix = String::new();
    let mut seen_dot = false;
    for (idx, ch) in cleaned.chars().enumerate() {
        match ch {
            '-' if idx > 0 => break,
            '.' if seen_dot => break,
            '.' => seen_dot = true,
            _ => {}
        }
        prefix.push(ch);
    }
    if !prefix.chars().any(|c| c.is_ascii_digit()) {
        return 0.0;
    }
    prefix.parse::<f64>().unwrap_or(0.0)
}

/// Ascending comparison for one column.
///
/// Rarity compares by ladder rank, cost by extracted numeric value, and
/// every other column by case-folded text.
pub fn compare(a: &ItemRecord, b: &ItemRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Rarity => rarity::rank_of(&a.rarity).cmp(&rarity::rank_of(&b.rarity)),
        SortKey::Cost => numeric_value(&a.cost).total_cmp(&numeric_value(&b.cost)),
        _ => field_text(a, key)
            .to_lowercase()
            .cmp(&field_text(b, key).to_lowercase()),
    }
}

/// Stable in-place sort. Descending reverses the comparison but, being
/// stable, never reorders records that compare equal.
pub fn sort_items(items: &mut [&ItemRecord], state: SortState) {
    items.sort_by(|a, b| {
        let ord = compare(a, b, state.key);
        if state.order.is_descending() {
            ord.reverse()
        } else {
            ord
        }
    });
}
