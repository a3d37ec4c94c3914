// crates/parkdb-core/src/search.rs
use crate::common::DbStats;
use crate::model::{Park, ParkDb};
use crate::text::fold_key;
use crate::traits::{NameMatch, ParkBackend};
use serde::{Deserialize, Serialize};

/// Which field the list filter matches against, mirroring the dashboard's
/// radio buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Match park name or country.
    Park,
    /// Match country only.
    Country,
    /// Match the IUCN category code.
    Iucn,
}

impl std::str::FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "park" => Ok(FilterMode::Park),
            "country" => Ok(FilterMode::Country),
            "iucn" => Ok(FilterMode::Iucn),
            other => Err(format!("unknown filter mode: {other}")),
        }
    }
}

/// The Logic Trait.
/// Defines the query operations available on the database.
pub trait ParkSearch<B: ParkBackend> {
    fn stats(&self) -> DbStats;

    /// All parks, sorted by `(country, name)`.
    fn parks(&self) -> &[Park<B>];

    fn find_park_by_id(&self, id: &str) -> Option<&Park<B>>;

    /// Parks matching a keyword under the given filter mode.
    ///
    /// An empty keyword matches everything; matching is accent- and
    /// case-insensitive via [`fold_key`]. Order follows the database order.
    fn filter_parks(&self, mode: FilterMode, keyword: &str) -> Vec<&Park<B>>;

    /// Shorthand for [`ParkSearch::filter_parks`] in `Park` mode.
    fn find_parks_by_substring(&self, substr: &str) -> Vec<&Park<B>>;

    /// Distinct country names, sorted ascending.
    fn countries(&self) -> Vec<&str>;
}

fn matches_filter<B: ParkBackend>(park: &Park<B>, mode: FilterMode, folded: &str) -> bool {
    if folded.is_empty() {
        return true;
    }
    // Folding is idempotent, so the pre-folded keyword round-trips through
    // the NameMatch helpers unchanged.
    let country = fold_key(park.country());

    match mode {
        FilterMode::Park => park.name_contains(folded) || country.contains(folded),
        FilterMode::Country => country.contains(folded),
        FilterMode::Iucn => fold_key(park.iucn_category()).contains(folded),
    }
}

impl<B: ParkBackend> ParkSearch<B> for ParkDb<B> {
    fn stats(&self) -> DbStats {
        DbStats {
            parks: self.parks.len(),
            countries: self.countries().len(),
            enriched: self.parks.iter().filter(|p| p.is_enriched()).count(),
        }
    }

    fn parks(&self) -> &[Park<B>] {
        &self.parks
    }

    fn find_park_by_id(&self, id: &str) -> Option<&Park<B>> {
        // Linear scan; the filtered list stays in the hundreds.
        self.parks.iter().find(|p| p.id() == id)
    }

    fn filter_parks(&self, mode: FilterMode, keyword: &str) -> Vec<&Park<B>> {
        let folded = fold_key(keyword.trim());
        self.parks
            .iter()
            .filter(|p| matches_filter(p, mode, &folded))
            .collect()
    }

    fn find_parks_by_substring(&self, substr: &str) -> Vec<&Park<B>> {
        self.filter_parks(FilterMode::Park, substr)
    }

    fn countries(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.parks.iter().map(|p| p.country()).collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}
