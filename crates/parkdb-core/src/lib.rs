// crates/parkdb-core/src/lib.rs

pub mod api; // Serializable view-models for UI layers
pub mod color;
pub mod common;
pub mod csv;
pub mod dashboard;
pub mod error;
pub mod loader; // The public loader
pub mod model;
pub mod search;
pub mod text;
pub mod traits;
// Shared Raw Input (GeoJSON features, enrichment JSON)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{ParkDbError, Result};
pub use crate::color::{Rgb, YearColorScale};
pub use crate::common::DbStats;
pub use crate::csv::CsvTable;
pub use crate::dashboard::{Dashboard, DefaultDashboard, SelectionChange};
pub use crate::model::{
    build_parkdb, iso3_to_country, DefaultBackend, DefaultParkDb, Park, ParkDb, StandardBackend,
};
pub use crate::raw::{EnrichmentRaw, FeatureCollectionRaw, FeatureRaw};
pub use crate::search::{FilterMode, ParkSearch};
pub use crate::traits::{NameMatch, ParkBackend};

pub mod prelude {
    pub use crate::api::{MapInfoView, ParkCardView, ParkDetailView};
    pub use crate::color::YearColorScale;
    pub use crate::common::DbStats;
    pub use crate::csv::CsvTable;
    pub use crate::dashboard::{Dashboard, DefaultDashboard, SelectionChange};
    pub use crate::error::{ParkDbError, Result};
    pub use crate::model::{
        build_parkdb, DefaultBackend, DefaultParkDb, Park, ParkDb, StandardBackend,
    };
    pub use crate::raw::{EnrichmentRaw, FeatureCollectionRaw, FeatureRaw};
    pub use crate::search::{FilterMode, ParkSearch};
    pub use crate::traits::{NameMatch, ParkBackend};
}
