//! sql_dictionary: build an editable data dictionary from a folder of SQL scripts
//!
//! The [`sql_engine`] module turns raw SQL text into a [`Catalog`] of
//! databases, tables, columns and their qualified relationships using a fixed
//! set of lexical patterns. It is not a SQL parser. [`source`] reads the files
//! and [`report`] lays the merged catalog out as sheets.

pub mod commands;
pub mod display;
pub mod error;
pub mod report;
pub mod source;
pub mod sql_engine;
pub mod validators;

pub use error::{ConfigError, SourceError};
pub use report::{DataDictionary, ReportFormat};
pub use source::{SourceFile, SourceOptions};
pub use sql_engine::{reconcile, Catalog, Reconciliation, Relationship};
