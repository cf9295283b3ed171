//! # Article Gallery
//!
//! A filterable, sortable, paginated gallery of article records, with a
//! listing view and a per-article detail view.
//!
//! The projection logic lives in [`article_gallery_core`]; this crate wraps
//! it with configuration, dataset loading, a CLI, and a JSON HTTP server.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌───────────────────┐
//! │ JSON dataset │──▶│   Dataset    │──▶│   ViewProjector   │
//! │   (file)     │   │ Arc<[...]>   │   │ filter→sort→page  │
//! └──────────────┘   └──────────────┘   └─────────┬─────────┘
//!                                                 │
//!                              ┌──────────────────┤
//!                              ▼                  ▼
//!                         ┌──────────┐      ┌──────────┐
//!                         │   CLI    │      │   HTTP   │
//!                         │(gallery) │      │  (axum)  │
//!                         └──────────┘      └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! gallery categories
//! gallery list --category Tech
//! gallery list --sort published_date:desc --offset 12 --page-size 12
//! gallery get 42
//! gallery serve
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`dataset`] | JSON data file loading into the shared record collection |
//! | [`list`] | Listing view: request → transitions → view model |
//! | [`categories`] | Category menu entries |
//! | [`get`] | Detail view and navigation target by id |
//! | [`server`] | JSON HTTP server (Axum) with CORS |
//! | [`logging`] | `tracing` subscriber setup |

pub mod categories;
pub mod config;
pub mod dataset;
pub mod get;
pub mod list;
pub mod logging;
pub mod server;

pub use article_gallery_core;
pub use dataset::Dataset;
