use guildhall_core::{
    Catalog, FilterCriteria, ItemRecord, SortKey, SortOrder, SortState, filter_items, sort_items,
};

mod helpers {
    use super::*;

    pub fn record(
        name: &str,
        rarity: &str,
        cost: &str,
        item_type: &str,
        source: &str,
        craftable: &str,
        tools: &str,
        attunement: &str,
        usage: &str,
    ) -> ItemRecord {
        ItemRecord {
            name: name.into(),
            rarity: rarity.into(),
            cost: cost.into(),
            item_type: item_type.into(),
            source: source.into(),
            craftable: craftable.into(),
            tools: tools.into(),
            attunement: attunement.into(),
            usage: usage.into(),
        }
    }

    pub fn armory() -> Vec<ItemRecord> {
        vec![
            record(
                "Longsword",
                "Common (mundane)",
                "15 gp",
                "Weapon",
                "PHB",
                "Yes",
                "Smith's Tools",
                "No",
                "Permanent",
            ),
            record(
                "Potion of Healing",
                "Common",
                "50 gp",
                "Potion",
                "PHB",
                "Yes",
                "Alchemist's Supplies, Herbalism Kit",
                "No",
                "Consumable",
            ),
            record(
                "Bag of Holding",
                "Uncommon",
                "4000 gp",
                "Wondrous Item",
                "DMG",
                "No",
                "Leatherworker's Tools",
                "No",
                "Permanent",
            ),
            record(
                "Flame Tongue",
                "Rare",
                "5000 gp",
                "Weapon",
                "DMG",
                "Yes",
                "Smith's Tools, As Base Item",
                "Yes",
                "Permanent",
            ),
            record(
                "Sword of Sharpness",
                "Very Rare",
                "12000 gp",
                "Weapon",
                "DMG",
                "No",
                "Smith's Tools",
                "Yes",
                "Permanent",
            ),
            record(
                "Vorpal Sword",
                "Legendary",
                "24000 gp",
                "Weapon",
                "DMG",
                "No",
                "",
                "Yes",
                "Permanent",
            ),
            record(
                "Orb of Dragonkind",
                "Artifact",
                "",
                "Wondrous Item",
                "DMG",
                "No",
                "",
                "Yes",
                "Permanent",
            ),
            record(
                "Chunk of Residuum",
                "Homebrew Special",
                "1000 gp",
                "Crafting Material",
                "Guild Ledger",
                "No",
                "",
                "No",
                "Consumable",
            ),
        ]
    }
}

#[test]
fn filtered_sets_are_exact_constraint_matches() {
    let items = helpers::armory();
    let grids = vec![
        FilterCriteria {
            search: Some("sword".into()),
            ..Default::default()
        },
        FilterCriteria {
            rarity: Some("Rare".into()),
            ..Default::default()
        },
        FilterCriteria {
            item_type: Some("Weapon".into()),
            attunement: Some("Yes".into()),
            ..Default::default()
        },
        FilterCriteria {
            tool: Some("Smith's Tools".into()),
            source: Some("DMG".into()),
            ..Default::default()
        },
        FilterCriteria {
            usage: Some("Consumable".into()),
            ..Default::default()
        },
    ];
    for criteria in grids {
        let kept = filter_items(&items, &criteria);
        for item in &kept {
            assert!(criteria.matches(item), "kept item violates {criteria:?}");
        }
        let kept_names: Vec<&str> = kept.iter().map(|i| i.name.as_str()).collect();
        for item in &items {
            if !kept_names.contains(&item.name.as_str()) {
                assert!(
                    !criteria.matches(item),
                    "excluded item {} satisfies {criteria:?}",
                    item.name
                );
            }
        }
    }
}

#[test]
fn conjunction_narrows_with_each_constraint() {
    let items = helpers::armory();
    let broad = FilterCriteria {
        item_type: Some("Weapon".into()),
        ..Default::default()
    };
    let narrow = FilterCriteria {
        item_type: Some("Weapon".into()),
        attunement: Some("Yes".into()),
        ..Default::default()
    };
    assert!(filter_items(&items, &narrow).len() <= filter_items(&items, &broad).len());
}

#[test]
fn every_sort_key_is_idempotent_over_the_armory() {
    let items = helpers::armory();
    for key in SortKey::all() {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let state = SortState { key: *key, order };
            let mut once: Vec<&ItemRecord> = items.iter().collect();
            sort_items(&mut once, state);
            let mut twice = once.clone();
            sort_items(&mut twice, state);
            let once_names: Vec<&str> = once.iter().map(|i| i.name.as_str()).collect();
            let twice_names: Vec<&str> = twice.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(once_names, twice_names, "unstable resort for {key:?}");
        }
    }
}

#[test]
fn unknown_rarity_sinks_ascending_and_leads_descending() {
    let items = helpers::armory();
    let mut refs: Vec<&ItemRecord> = items.iter().collect();
    sort_items(
        &mut refs,
        SortState {
            key: SortKey::Rarity,
            order: SortOrder::Ascending,
        },
    );
    assert_eq!(refs.last().map(|i| i.name.as_str()), Some("Chunk of Residuum"));
    sort_items(
        &mut refs,
        SortState {
            key: SortKey::Rarity,
            order: SortOrder::Descending,
        },
    );
    assert_eq!(
        refs.first().map(|i| i.name.as_str()),
        Some("Chunk of Residuum")
    );
}

#[test]
fn catalog_view_composes_filter_sort_and_render() {
    let catalog = Catalog::from_items(helpers::armory());
    let criteria = FilterCriteria {
        search: Some("sword".into()),
        ..Default::default()
    };
    let view = catalog.view(
        &criteria,
        SortState {
            key: SortKey::Cost,
            order: SortOrder::Descending,
        },
    );
    let names: Vec<&str> = view.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Vorpal Sword", "Sword of Sharpness", "Longsword"]);
    assert_eq!(view.summary, "Showing 3 of 8 items");
    assert_eq!(view.rows[0].band_class, "bg-white");
    assert_eq!(view.rows[1].band_class, "bg-gray-50");
    assert_eq!(view.rows[2].band_class, "bg-white");
}

#[test]
fn full_catalog_uses_the_all_phrasing() {
    let catalog = Catalog::from_items(helpers::armory());
    let view = catalog.view(&FilterCriteria::default(), SortState::default());
    assert_eq!(view.summary, "Showing all 8 items");
    assert!(!view.no_results);
}

#[test]
fn derived_options_cover_the_dataset() {
    let catalog = Catalog::from_items(helpers::armory());
    let options = catalog.options();
    assert_eq!(
        options.rarities,
        vec![
            "Common (mundane)",
            "Common",
            "Uncommon",
            "Rare",
            "Very Rare",
            "Legendary",
            "Artifact",
            "Homebrew Special",
        ]
    );
    assert!(options.tools.contains(&"Herbalism Kit".to_string()));
    assert!(!options.tools.iter().any(|t| t == "As Base Item"));
    assert_eq!(
        options.sources,
        vec!["DMG", "Guild Ledger", "PHB"]
    );
}

#[test]
fn identical_inputs_render_identical_views() {
    let catalog = Catalog::from_items(helpers::armory());
    let criteria = FilterCriteria {
        item_type: Some("Weapon".into()),
        ..Default::default()
    };
    let state = SortState {
        key: SortKey::Name,
        order: SortOrder::Descending,
    };
    let a = serde_json::to_value(catalog.view(&criteria, state)).unwrap();
    let b = serde_json::to_value(catalog.view(&criteria, state)).unwrap();
    assert_eq!(a, b);
}
