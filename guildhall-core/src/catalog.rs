use std::fs;
use std::path::Path;

use crate::filter::FilterCriteria;
use crate::item::ItemRecord;
use crate::render::TableView;
use crate::sort::SortState;
use crate::vocab::FilterOptions;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read items dataset at {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse items dataset at {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The items dataset plus its derived dropdown vocabularies.
///
/// Loaded once at startup and never mutated; the load order of the records
/// is the baseline every stable sort preserves for equal keys.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<ItemRecord>,
    options: FilterOptions,
}

impl Catalog {
    pub fn from_items(items: Vec<ItemRecord>) -> Self {
        let options = FilterOptions::derive(&items);
        Self { items, options }
    }

    /// Read a JSON array of item records from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let items: Vec<ItemRecord> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::from_items(items))
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the table for one filter/sort combination.
    pub fn view(&self, criteria: &FilterCriteria, sort: SortState) -> TableView {
        TableView::build(&self.items, criteria, sort)
    }
}
