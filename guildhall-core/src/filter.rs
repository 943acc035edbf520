use serde::{Deserialize, Serialize};

use crate::item::ItemRecord;

/// Active table restrictions. Every populated field must hold for a record
/// to survive; `None` means the dimension is unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub rarity: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub source: Option<String>,
    pub tool: Option<String>,
    pub attunement: Option<String>,
    #[serde(rename = "use")]
    pub usage: Option<String>,
}

pub(crate) fn normalize(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl FilterCriteria {
    /// Collapse blank and whitespace-only values to `None` so handlers and
    /// session events can pass user input through unchecked.
    pub fn normalized(self) -> Self {
        Self {
            search: normalize(self.search),
            rarity: normalize(self.rarity),
            item_type: normalize(self.item_type),
            source: normalize(self.source),
            tool: normalize(self.tool),
            attunement: normalize(self.attunement),
            usage: normalize(self.usage),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.rarity.is_none()
            && self.item_type.is_none()
            && self.source.is_none()
            && self.tool.is_none()
            && self.attunement.is_none()
            && self.usage.is_none()
    }

    /// Conjunction of all active constraints.
    ///
    /// Search is a case-insensitive substring test against the item name
    /// only. Tool matching is exact membership in the trimmed tool list;
    /// the remaining dimensions compare for exact equality.
    pub fn matches(&self, item: &ItemRecord) -> bool {
        if let Some(search) = &self.search
            && !item
                .name
                .to_lowercase()
                .contains(&search.to_lowercase())
        {
            return false;
        }
        if let Some(rarity) = &self.rarity
            && item.rarity != *rarity
        {
            return false;
        }
        if let Some(item_type) = &self.item_type
            && item.item_type != *item_type
        {
            return false;
        }
        if let Some(source) = &self.source
            && item.source != *source
        {
            return false;
        }
        if let Some(tool) = &self.tool
            && !item.has_tool(tool)
        {
            return false;
        }
        if let Some(attunement) = &self.attunement
            && item.attunement != *attunement
        {
            return false;
        }
        if let Some(usage) = &self.usage
            && item.usage != *usage
        {
            return false;
        }
        true
    }
}

/// Records satisfying every active constraint, in dataset order.
pub fn filter_items<'a>(
    items: &'a [ItemRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ItemRecord> {
    items.iter().filter(|item| criteria.matches(item)).collect()
}
