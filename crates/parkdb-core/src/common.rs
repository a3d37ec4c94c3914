use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`crate::search::ParkSearch::stats`], these counts reflect the
/// materialized in-memory database after the tourism filter has been applied
/// at build time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub parks: usize,
    pub countries: usize,
    pub enriched: usize,
}
