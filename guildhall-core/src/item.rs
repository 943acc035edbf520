use serde::{Deserialize, Serialize};

/// One catalog entry as it appears in the items dataset.
///
/// Every column is carried as text. The dataset is spreadsheet-derived and
/// uses PascalCase keys; absent keys deserialize to empty strings so a
/// partially filled row still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemRecord {
    pub name: String,
    pub rarity: String,
    pub cost: String,
    #[serde(rename = "Type")]
    pub item_type: String,
    pub source: String,
    pub craftable: String,
    pub tools: String,
    pub attunement: String,
    #[serde(rename = "Use")]
    pub usage: String,
}

impl ItemRecord {
    /// Tool entries from the comma-separated `tools` column, trimmed, with
    /// empty segments dropped.
    pub fn tool_list(&self) -> Vec<&str> {
        self.tools
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Exact membership test against the trimmed tool entries.
    pub fn has_tool(&self, tool: &str) -> bool {
        self.tool_list().iter().any(|t| *t == tool)
    }

    pub fn is_craftable(&self) -> bool {
        self.craftable == "Yes"
    }

    pub fn needs_attunement(&self) -> bool {
        self.attunement == "Yes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_spreadsheet_keys() {
        let raw = r#"{
            "Name": "Flame Tongue",
            "Rarity": "Rare",
            "Cost": "5000 gp",
            "Type": "Weapon",
            "Source": "DMG",
            "Craftable": "Yes",
            "Tools": "Smith's Tools, Alchemist's Supplies",
            "Attunement": "Yes",
            "Use": "Permanent"
        }"#;
        let item: ItemRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(item.name, "Flame Tongue");
        assert_eq!(item.item_type, "Weapon");
        assert_eq!(item.usage, "Permanent");
        assert!(item.is_craftable());
        assert!(item.needs_attunement());
    }

    #[test]
    fn missing_columns_default_to_empty() {
        let item: ItemRecord = serde_json::from_str(r#"{"Name": "Rope"}"#).unwrap();
        assert_eq!(item.name, "Rope");
        assert_eq!(item.rarity, "");
        assert_eq!(item.tools, "");
        assert!(!item.is_craftable());
        assert!(!item.needs_attunement());
    }

    #[test]
    fn tool_list_trims_and_drops_empty_segments() {
        let item = ItemRecord {
            tools: " Smith's Tools ,, Alchemist's Supplies ".to_string(),
            ..Default::default()
        };
        assert_eq!(item.tool_list(), vec!["Smith's Tools", "Alchemist's Supplies"]);
    }

    #[test]
    fn tool_membership_is_exact() {
        let item = ItemRecord {
            tools: "Smith's Tools, Tinker's Tools".to_string(),
            ..Default::default()
        };
        assert!(item.has_tool("Smith's Tools"));
        assert!(!item.has_tool("Smith"));
        assert!(!item.has_tool("Tools"));
    }
}
