//! Dataset Module - The alternatives × ratings table consumed by scoring.
//!
//! # Components
//!
//! - `RatingsTable` - Rows of alternatives with optional ratings
//! - `MacroCriteriaMap` - Macro-criterion → sub-criterion columns
//! - `DatasetSchema` - Required columns and rating range checks
//! - `fingerprint` - Content-derived `DatasetId`
//! - `demo_dataset` - Four-venue sample data

mod demo;
mod fingerprint;
mod macro_criteria;
mod ratings_table;
mod schema;

pub use demo::demo_dataset;
pub use fingerprint::fingerprint;
pub use macro_criteria::{MacroCriteriaMap, CIBO_E_BEVANDE, COMODITA, RAPPORTO_QUALITA_PREZZO};
pub use ratings_table::{AlternativeRow, RatingsTable, RatingsTableBuilder, DEFAULT_IDENTITY_COLUMN};
pub use schema::{DatasetSchema, DEFAULT_RATING_MAX, DEFAULT_RATING_MIN};
