use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use guildhall_core::{FilterCriteria, FilterOptions, SortKey, SortOrder, SortState, TableView};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// Query-string form of the table controls.
#[derive(Debug, Default, Deserialize)]
pub struct ItemsQuery {
    pub search: Option<String>,
    pub rarity: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub source: Option<String>,
    pub tool: Option<String>,
    pub attunement: Option<String>,
    #[serde(rename = "use")]
    pub usage: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ItemsQuery {
    fn sort_state(&self) -> Result<SortState, AppError> {
        let key = match &self.sort {
            Some(raw) => raw
                .parse::<SortKey>()
                .map_err(|err| AppError::bad_request("INVALID_SORT_KEY", err.to_string()))?,
            None => SortKey::Name,
        };

        let order = match self.order.as_deref() {
            None => SortOrder::Ascending,
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "asc" | "ascending" => SortOrder::Ascending,
                "desc" | "descending" => SortOrder::Descending,
                _ => {
                    return Err(AppError::bad_request(
                        "INVALID_SORT_ORDER",
                        format!("unknown sort order: {raw}"),
                    ));
                }
            },
        };

        Ok(SortState { key, order })
    }

    fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            search: self.search,
            rarity: self.rarity,
            item_type: self.item_type,
            source: self.source,
            tool: self.tool,
            attunement: self.attunement,
            usage: self.usage,
        }
        .normalized()
    }
}

/// Filtered, sorted table view over the loaded catalog.
pub async fn list_items_handler(
    State(state): State<AppState>,
    Query(query): Query<ItemsQuery>,
) -> AppResult<Json<TableView>> {
    let sort = query.sort_state()?;
    let criteria = query.into_criteria();

    Ok(Json(state.catalog.view(&criteria, sort)))
}

/// Dropdown vocabularies derived from the loaded dataset.
pub async fn item_options_handler(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(state.catalog.options().clone())
}
