// crates/parkdb-core/src/dashboard.rs

//! # Dashboard state controller
//!
//! Owns everything the interactive view needs: the immutable [`ParkDb`],
//! the geometry join against the GeoJSON layer, the year color scale and
//! the current selection. UI layers call the update methods here instead of
//! mutating shared lookup tables of their own.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::api::{MapInfoView, ParkCardView, ParkDetailView};
use crate::color::YearColorScale;
use crate::common::DbStats;
use crate::model::{Park, ParkDb};
use crate::raw::FeatureCollectionRaw;
use crate::search::{FilterMode, ParkSearch};
use crate::traits::{DefaultBackend, ParkBackend};

/// Result of a selection update: which ids need restyling.
///
/// `deselected` is the previously active park (reset to base style),
/// `selected` the newly active one (highlight + fit bounds).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionChange {
    pub deselected: Option<String>,
    pub selected: Option<String>,
}

impl SelectionChange {
    pub fn is_noop(&self) -> bool {
        self.deselected.is_none() && self.selected.is_none()
    }
}

/// Application state for one dashboard session.
#[derive(Debug, Clone)]
pub struct Dashboard<B: ParkBackend = DefaultBackend> {
    db: ParkDb<B>,
    /// Park ids that have a polygon in the GeoJSON layer. Metadata without
    /// geometry stays listed but is not interactive on the map; geometry
    /// without metadata is dropped from interactivity entirely.
    geometry_ids: HashSet<String>,
    /// `STATUS_YR` per feature, the fallback when metadata lacks a year.
    feature_years: HashMap<String, i32>,
    scale: YearColorScale,
    active_park_id: Option<String>,
}

/// Resolve a park's establishment year with defined fallback order:
/// metadata first, then the GeoJSON feature property.
pub fn resolve_status_year<B: ParkBackend>(
    park: Option<&Park<B>>,
    feature_year: Option<i32>,
) -> Option<i32> {
    park.and_then(|p| p.status_year()).or(feature_year)
}

impl<B: ParkBackend> Dashboard<B> {
    /// Join the metadata list with the polygon layer and derive the year
    /// color scale from both sources.
    pub fn new(db: ParkDb<B>, features: &FeatureCollectionRaw) -> Self {
        let mut geometry_ids = HashSet::new();
        let mut feature_years = HashMap::new();

        for feature in &features.features {
            let Some(id) = feature.site_id() else {
                continue;
            };
            if let Some(year) = feature.status_yr() {
                feature_years.insert(id.clone(), year);
            }
            if db.find_park_by_id(&id).is_some() {
                geometry_ids.insert(id);
            }
        }

        let years = db
            .parks()
            .iter()
            .filter_map(|p| p.status_year())
            .chain(features.features.iter().filter_map(|f| f.status_yr()));
        let scale = YearColorScale::from_years(years);

        Self {
            db,
            geometry_ids,
            feature_years,
            scale,
            active_park_id: None,
        }
    }

    pub fn db(&self) -> &ParkDb<B> {
        &self.db
    }

    pub fn stats(&self) -> DbStats {
        self.db.stats()
    }

    pub fn scale(&self) -> &YearColorScale {
        &self.scale
    }

    /// Whether a park can be highlighted on the map.
    pub fn has_geometry(&self, id: &str) -> bool {
        self.geometry_ids.contains(id)
    }

    /// Ids that are both listed and drawn, i.e. clickable on the map.
    pub fn interactive_ids(&self) -> impl Iterator<Item = &str> {
        self.geometry_ids.iter().map(String::as_str)
    }

    /// Establishment year for a park, falling back to the feature property.
    pub fn status_year_for(&self, park: &Park<B>) -> Option<i32> {
        resolve_status_year(Some(park), self.feature_years.get(park.id()).copied())
    }

    /// Polygon fill color for a park id. Unknown ids get the neutral
    /// fallback, same as parks without a year.
    pub fn color_for_park(&self, id: &str) -> String {
        let year = self
            .db
            .find_park_by_id(id)
            .and_then(|p| self.status_year_for(p));
        self.scale.color_for_year(year)
    }

    pub fn active_park_id(&self) -> Option<&str> {
        self.active_park_id.as_deref()
    }

    pub fn active_park(&self) -> Option<&Park<B>> {
        self.active_park_id
            .as_deref()
            .and_then(|id| self.db.find_park_by_id(id))
    }

    /// Update the selection.
    ///
    /// Selecting the already-active park (or clearing twice) is a no-op.
    /// Unknown ids clear the selection, so a stale id from the UI can never
    /// leave the controller pointing at a missing record.
    pub fn set_active_park(&mut self, id: Option<&str>) -> SelectionChange {
        let id = id.filter(|i| self.db.find_park_by_id(i).is_some());

        if self.active_park_id.as_deref() == id {
            return SelectionChange::default();
        }

        let change = SelectionChange {
            deselected: self.active_park_id.take(),
            selected: id.map(str::to_string),
        };
        self.active_park_id = change.selected.clone();
        change
    }

    /// Sidebar list for the current filter; the active card is flagged.
    pub fn card_views(&self, mode: FilterMode, keyword: &str) -> Vec<ParkCardView> {
        self.db
            .filter_parks(mode, keyword)
            .into_iter()
            .map(|p| ParkCardView::from_park(p, self.active_park_id.as_deref() == Some(p.id())))
            .collect()
    }

    /// Detail panel for the active park, if any.
    pub fn detail_view(&self) -> Option<ParkDetailView> {
        self.active_park().map(ParkDetailView::from_park)
    }

    /// Inline map popup for the active park; only parks with geometry get
    /// one, since the popup anchors to the polygon bounds.
    pub fn map_info(&self) -> Option<MapInfoView> {
        let park = self.active_park()?;
        self.has_geometry(park.id())
            .then(|| MapInfoView::from_park(park))
    }
}

/// Convenient alias for the default backend.
pub type DefaultDashboard = Dashboard<DefaultBackend>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{FALLBACK_COLOR, SCALE_END};
    use crate::csv::CsvTable;
    use crate::model::build_parkdb;

    const CSV: &str = "\
SITE_ID,NAME_ENG,NAME,ISO3,DESIG_ENG,IUCN_CAT,REP_AREA,STATUS_YR,GOV_TYPE,MANG_AUTH
916,Serengeti,Serengeti,TZA,National Park,II,14763,1951,Federal,TANAPA
754,Maasai Mara,Mara,KEN,National Reserve,Not Reported,1510,,State,Narok County
111,Ghost Park,Ghost,TZA,National Park,II,10,2008,Federal,";

    const GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"SITE_ID": 916, "STATUS_YR": 1951}},
            {"type": "Feature", "properties": {"SITE_ID": 754, "STATUS_YR": 1974}},
            {"type": "Feature", "properties": {"SITE_ID": 999, "STATUS_YR": 1900}},
            {"type": "Feature", "properties": {}}
        ]
    }"#;

    fn dashboard() -> DefaultDashboard {
        let db = build_parkdb(&CsvTable::parse(CSV), None);
        let features: FeatureCollectionRaw = serde_json::from_str(GEOJSON).unwrap();
        Dashboard::new(db, &features)
    }

    #[test]
    fn geometry_join_excludes_unmatched_sides() {
        let dash = dashboard();
        assert!(dash.has_geometry("916"));
        assert!(dash.has_geometry("754"));
        // Metadata without a polygon stays listed but is not interactive.
        assert!(!dash.has_geometry("111"));
        assert!(dash.db().find_park_by_id("111").is_some());
        // A polygon without metadata never becomes interactive.
        assert!(!dash.has_geometry("999"));
        assert_eq!(dash.interactive_ids().count(), 2);
    }

    #[test]
    fn year_fallback_order_is_meta_then_feature() {
        let dash = dashboard();
        let mara = dash.db().find_park_by_id("754").unwrap();
        // CSV has no year for Mara; the feature property fills in.
        assert_eq!(mara.status_year(), None);
        assert_eq!(dash.status_year_for(mara), Some(1974));

        let serengeti = dash.db().find_park_by_id("916").unwrap();
        assert_eq!(dash.status_year_for(serengeti), Some(1951));
    }

    #[test]
    fn year_bounds_cover_meta_and_features() {
        let dash = dashboard();
        // 1900 comes from the unmatched feature, 2008 from metadata.
        assert_eq!(dash.scale().bounds(), Some((1900, 2008)));
    }

    #[test]
    fn colors_for_parks() {
        let dash = dashboard();
        // 2008 is the maximum year, so t clamps to 1 and the blend lands on
        // the dark endpoint exactly.
        assert_eq!(dash.color_for_park("111"), SCALE_END);
        // Unknown ids degrade to the neutral fallback.
        assert_eq!(dash.color_for_park("does-not-exist"), FALLBACK_COLOR);

        let db = build_parkdb::<DefaultBackend>(&CsvTable::parse(CSV), None);
        let single: FeatureCollectionRaw = serde_json::from_str(
            r#"{"features": [{"properties": {"SITE_ID": 916, "STATUS_YR": 1951}}]}"#,
        )
        .unwrap();
        // Degenerate bounds: strip years from everything except one.
        let mut db = db;
        db.parks.retain(|p| p.id() == "916");
        let dash = Dashboard::new(db, &single);
        assert_eq!(dash.color_for_park("916"), SCALE_END);
    }

    #[test]
    fn selection_transitions() {
        let mut dash = dashboard();
        assert!(dash.active_park().is_none());

        let change = dash.set_active_park(Some("916"));
        assert_eq!(change.selected.as_deref(), Some("916"));
        assert_eq!(change.deselected, None);
        assert_eq!(dash.active_park_id(), Some("916"));

        // Re-selecting is a no-op.
        assert!(dash.set_active_park(Some("916")).is_noop());

        let change = dash.set_active_park(Some("754"));
        assert_eq!(change.deselected.as_deref(), Some("916"));
        assert_eq!(change.selected.as_deref(), Some("754"));

        // Unknown id clears the selection.
        let change = dash.set_active_park(Some("nope"));
        assert_eq!(change.deselected.as_deref(), Some("754"));
        assert_eq!(change.selected, None);
        assert!(dash.active_park().is_none());
    }

    #[test]
    fn views_follow_selection() {
        let mut dash = dashboard();
        assert!(dash.detail_view().is_none());
        assert!(dash.map_info().is_none());

        dash.set_active_park(Some("916"));
        let cards = dash.card_views(FilterMode::Park, "");
        assert_eq!(cards.len(), 3);
        assert_eq!(cards.iter().filter(|c| c.active).count(), 1);

        let detail = dash.detail_view().unwrap();
        assert_eq!(detail.name, "Serengeti");
        assert!(dash.map_info().is_some());

        // A selected park without geometry gets a detail panel but no popup.
        dash.set_active_park(Some("111"));
        assert!(dash.detail_view().is_some());
        assert!(dash.map_info().is_none());
    }
}
