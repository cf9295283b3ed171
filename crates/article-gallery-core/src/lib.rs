//! # Article Gallery Core
//!
//! Pure, synchronous logic for Article Gallery: the article data model,
//! the view state, the filter → sort → page projection pipeline, and the
//! card presentation helpers.
//!
//! This crate performs no I/O. It compiles to both native targets and
//! `wasm32-unknown-unknown`, so the same projector can back a terminal,
//! an HTTP API, or an in-browser rendering layer.
//!
//! ## Pipeline
//!
//! ```text
//! Input Collection ─▶ Category Filter ─▶ Sort ─▶ Page Window ─▶ View Model
//! ```
//!
//! The visible page is never stored: it is recomputed from
//! `(collection, ViewState)` on every read.

pub mod models;
pub mod present;
pub mod projector;
pub mod view;

pub use models::ArticleRecord;
pub use present::{severity_color, truncate, ArticleCard, SeverityTier};
pub use projector::{PageInfo, ViewModel, ViewProjector};
pub use view::{PageSize, SortDirection, SortField, SortKey, ViewState};
