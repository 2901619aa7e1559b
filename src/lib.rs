//! Aggregation core for public-records asset lookups.
//!
//! Dispatches a single identifier (CNPJ, CPF, name, RG or vehicle plate)
//! against a fixed set of government and public-data sources and assembles
//! one JSON report per run. Live sources are queried over HTTP; sources with
//! no machine API are surfaced as manual-lookup pointers.

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod identifier;
pub mod registry;
pub mod report;

pub use dispatch::QueryType;
pub use error::LookupError;
pub use registry::SourceRegistry;
pub use report::Report;
