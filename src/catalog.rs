pub mod export;
pub mod fetch;
pub mod model;

pub use export::{write_catalog, ExportFormat, ExportTarget};
pub use fetch::{CatalogFetcher, FetchError};
pub use model::{Catalog, VulnerabilityRecord};
