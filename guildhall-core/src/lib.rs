//! # Guildhall Core
//!
//! Headless engine for the guild item catalog: the dataset model, the
//! filter and sort pipeline, row rendering, and the per-viewer table
//! session state.
//!
//! ## Overview
//!
//! `guildhall-core` carries everything the catalog does that is not HTTP:
//!
//! - **Dataset**: flat item records loaded once from JSON, immutable after
//!   load, with dropdown vocabularies derived up front
//! - **Filter Engine**: AND-combined criteria over search text and the
//!   dropdown dimensions
//! - **Sort Engine**: stable single-column ordering with rarity-rank,
//!   numeric, and case-folded lexical comparators
//! - **Renderer**: escaped row view models with banding, rarity badges, and
//!   result-count summaries
//! - **Control Surface**: table events, debounced search, and serial view
//!   recomputation
//! - **Identity**: user, tier, and token claim types shared with the server
//!
//! Recomputation always runs filter, sort, render in that order; the
//! debounce timer is the only asynchronous piece.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Immutable dataset plus derived vocabularies
pub mod catalog;

/// Table events and per-viewer session state
pub mod controller;

/// Cancellable quiet-period timer for search input
pub mod debounce;

/// Filter criteria and conjunction matching
pub mod filter;

/// User, tier, and token claim types
pub mod identity;

/// Item records as loaded from the dataset
pub mod item;

/// Rarity ladder and badge styling
pub mod rarity;

/// Row view models and table assembly
pub mod render;

/// Sort keys, orders, and comparators
pub mod sort;

/// Dropdown vocabulary derivation
pub mod vocab;

pub use catalog::{Catalog, CatalogError};
pub use controller::{TableController, TableEvent};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use filter::{FilterCriteria, filter_items};
pub use identity::{Claims, Tier, User};
pub use item::ItemRecord;
pub use render::{ItemRow, TableView, escape_html, summary_line};
pub use sort::{SortKey, SortOrder, SortState, UnknownSortKey, compare, sort_items};
pub use vocab::FilterOptions;
