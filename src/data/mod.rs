pub mod csv;
pub mod dataset;
pub mod facets;
pub mod filter;
pub mod record;
pub mod series;

// Re-export key types for convenience
pub use dataset::Dataset;
pub use facets::{FacetOption, Facets, PlantFacet, YearFacet};
pub use filter::Selection;
pub use record::Record;
pub use series::Series;
