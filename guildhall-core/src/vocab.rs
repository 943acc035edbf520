use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::item::ItemRecord;
use crate::rarity;

/// Tool entry that marks "same tool as the base item" rather than a real
/// tool. Never offered as a dropdown choice.
pub const BASE_ITEM_SENTINEL: &str = "As Base Item";

/// Dropdown vocabularies derived from the dataset at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub rarities: Vec<String>,
    pub types: Vec<String>,
    pub sources: Vec<String>,
    pub tools: Vec<String>,
    pub attunements: Vec<String>,
    pub uses: Vec<String>,
}

fn unique_values<'a, F>(items: &'a [ItemRecord], field: F) -> Vec<String>
where
    F: Fn(&'a ItemRecord) -> &'a str,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for item in items {
        let value = field(item);
        if !value.is_empty() && seen.insert(value) {
            values.push(value.to_string());
        }
    }
    values
}

impl FilterOptions {
    pub fn derive(items: &[ItemRecord]) -> Self {
        // first-appearance order, then a stable rank sort so unknown
        // rarities stay grouped at the end in dataset order
        let mut rarities = unique_values(items, |i| &i.rarity);
        rarities.sort_by_key(|r| rarity::rank_of(r));

        let mut types = unique_values(items, |i| &i.item_type);
        types.sort();
        let mut sources = unique_values(items, |i| &i.source);
        sources.sort();
        let mut attunements = unique_values(items, |i| &i.attunement);
        attunements.sort();
        let mut uses = unique_values(items, |i| &i.usage);
        uses.sort();

        let mut tool_set = HashSet::new();
        for item in items {
            for tool in item.tool_list() {
                if tool != BASE_ITEM_SENTINEL {
                    tool_set.insert(tool.to_string());
                }
            }
        }
        let mut tools: Vec<String> = tool_set.into_iter().collect();
        tools.sort();

        Self {
            rarities,
            types,
            sources,
            tools,
            attunements,
            uses,
        }
    }
}
