// crates/parkdb-core/src/model.rs
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::csv::CsvTable;
use crate::raw::EnrichmentRaw;
use crate::traits::NameMatch;

pub use crate::traits::{DefaultBackend, ParkBackend};

/// Designations that mark a park as tourism-relevant. Matches the rule used
/// when the GeoJSON layer was exported, so CSV metadata and polygons stay in
/// agreement.
static TOURISM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "(?i)National Park|National Reserve|Nature Reserve|Wildlife Reserve|Game Reserve|Conservation Area|Conservancy",
    )
    .expect("tourism designation pattern is valid")
});

/// IUCN categories excluded outright: strict nature reserves and wilderness
/// areas are closed to tourism regardless of designation text.
const STRICT_PROTECTION_CATS: [&str; 2] = ["Ia", "Ib"];

/// Metadata for a single qualifying protected area.
///
/// Built once from the WDPA CSV (plus optional enrichment) and immutable
/// thereafter. `id` is the stringified `SITE_ID` and keys every join — the
/// GeoJSON geometry lookup, the enrichment overlay and UI selection state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Park<B: ParkBackend> {
    pub id: B::Str,
    pub name: B::Str,
    pub local_name: B::Str,
    pub country: B::Str,
    pub country_iso3: B::Str,
    pub desig_eng: B::Str,
    pub iucn_cat: B::Str,
    pub area_km2: Option<B::Float>,
    pub status_year: Option<i32>,
    pub gov_type: B::Str,

    // Enrichment fields; defaults apply to every park without a curated entry.
    pub visitors_2024: u32,
    pub predator_index: f64,
    pub has_big_five: bool,
    pub in_migration_route: bool,
    pub main_species: Vec<B::Str>,
    pub storymap_url: B::Str,
}

/// Top-level database structure: the sorted, filtered park list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParkDb<B: ParkBackend> {
    pub parks: Vec<Park<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultParkDb = ParkDb<DefaultBackend>;
/// Convenient alias used in demos.
pub type StandardBackend = DefaultBackend;

/// Map an ISO3 code to a display country name.
///
/// The dataset covers East and Southern Africa; this fixed table mirrors the
/// codes that actually occur. Unknown codes pass through as-is and an empty
/// code becomes `"Unknown"`.
pub fn iso3_to_country(iso3: &str) -> String {
    let name = match iso3 {
        "TZA" => "Tanzania",
        "KEN" => "Kenya",
        "UGA" => "Uganda",
        "RWA" => "Rwanda",
        "BDI" => "Burundi",
        "ETH" => "Ethiopia",
        "ZAF" => "South Africa",
        "NAM" => "Namibia",
        "BWA" => "Botswana",
        "ZMB" => "Zambia",
        "ZWE" => "Zimbabwe",
        "MOZ" => "Mozambique",
        "AGO" => "Angola",
        "" => "Unknown",
        other => other,
    };
    name.to_string()
}

/// Parses a string into an `Option<f64>`.
///
/// Trims surrounding whitespace first; empty or unparseable input yields
/// `None` rather than an error.
pub fn parse_opt_f64(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok()
}

fn parse_opt_year(s: &str) -> Option<i32> {
    // STATUS_YR occasionally carries a decimal point; truncate like the
    // numeric coercion the rest of the pipeline uses. The export writes 0
    // for "not reported", so non-positive years read as missing.
    parse_opt_f64(s).map(|y| y as i32).filter(|y| *y > 0)
}

/// Build the park database from a parsed CSV table and an optional
/// enrichment list.
///
/// This is the CSV-to-metadata transformer:
/// 1. index enrichment entries by stringified site id (last wins),
/// 2. keep rows whose `DESIG_ENG` matches the tourism pattern and whose
///    `IUCN_CAT` is not strict-protection (`Ia`/`Ib`),
/// 3. coerce fields (numerics become `None` on bad input, strings fall back
///    to placeholders),
/// 4. overlay the six enrichment fields where an entry exists,
/// 5. sort by `(country, name)` ascending.
///
/// Rows with a duplicate `SITE_ID` keep the first occurrence so ids stay
/// unique. Rows without matching geometry are kept here; geometry exclusion
/// is the dashboard's concern.
pub fn build_parkdb<B: ParkBackend>(
    table: &CsvTable,
    enrichment: Option<&[EnrichmentRaw]>,
) -> ParkDb<B> {
    let mut by_site_id: HashMap<&str, &EnrichmentRaw> = HashMap::new();
    if let Some(entries) = enrichment {
        for entry in entries {
            if let Some(id) = entry.site_id() {
                by_site_id.insert(id, entry);
            }
        }
    }

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut parks: Vec<Park<B>> = Vec::new();

    for row in table.rows() {
        let desig = row.get("DESIG_ENG");
        let cat = row.get("IUCN_CAT");

        if !TOURISM_PATTERN.is_match(desig) {
            continue;
        }
        if STRICT_PROTECTION_CATS.contains(&cat) {
            continue;
        }

        let site_id = row.get("SITE_ID");
        if !seen_ids.insert(site_id.to_string()) {
            continue;
        }

        let iso3 = row.get("ISO3");
        let name = match (row.get("NAME_ENG"), row.get("NAME")) {
            ("", "") => "(Unnamed)",
            ("", local) => local,
            (eng, _) => eng,
        };
        let gov_type = match (row.get("GOV_TYPE"), row.get("MANG_AUTH")) {
            ("", "") => "Unknown",
            ("", auth) => auth,
            (gov, _) => gov,
        };

        let mut park = Park::<B> {
            id: B::str_from(site_id),
            name: B::str_from(name),
            local_name: B::str_from(row.get("NAME")),
            country: B::str_from(&iso3_to_country(iso3)),
            country_iso3: B::str_from(iso3),
            desig_eng: B::str_from(desig),
            iucn_cat: B::str_from(cat),
            area_km2: parse_opt_f64(row.get("REP_AREA")).map(B::float_from),
            status_year: parse_opt_year(row.get("STATUS_YR")),
            gov_type: B::str_from(gov_type),

            visitors_2024: 0,
            predator_index: 0.0,
            has_big_five: false,
            in_migration_route: false,
            main_species: Vec::new(),
            storymap_url: B::str_from(""),
        };

        if let Some(extra) = by_site_id.get(site_id) {
            park.visitors_2024 = extra.visitors_2024;
            park.predator_index = extra.predator_index;
            park.has_big_five = extra.has_big_five;
            park.in_migration_route = extra.in_migration_route;
            park.main_species = extra
                .main_species
                .iter()
                .map(|s| B::str_from(s))
                .collect();
            park.storymap_url = B::str_from(&extra.storymap_url);
        }

        parks.push(park);
    }

    parks.sort_by(|a, b| {
        a.country
            .as_ref()
            .cmp(b.country.as_ref())
            .then_with(|| a.name.as_ref().cmp(b.name.as_ref()))
    });

    ParkDb { parks }
}

impl<B: ParkBackend> ParkDb<B> {
    pub fn park_count(&self) -> usize {
        self.parks.len()
    }

    /// All parks, sorted by `(country, name)`.
    pub fn parks(&self) -> &[Park<B>] {
        &self.parks
    }

    /// Find a park by its site id.
    pub fn find_park_by_id(&self, id: &str) -> Option<&Park<B>> {
        self.parks.iter().find(|p| p.id.as_ref() == id)
    }
}

impl<B: ParkBackend> Park<B> {
    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn local_name(&self) -> &str {
        self.local_name.as_ref()
    }

    pub fn country(&self) -> &str {
        self.country.as_ref()
    }

    pub fn country_iso3(&self) -> &str {
        self.country_iso3.as_ref()
    }

    pub fn designation(&self) -> &str {
        self.desig_eng.as_ref()
    }

    pub fn iucn_category(&self) -> &str {
        self.iucn_cat.as_ref()
    }

    pub fn area_km2(&self) -> Option<f64> {
        self.area_km2.map(B::float_to_f64)
    }

    pub fn status_year(&self) -> Option<i32> {
        self.status_year
    }

    pub fn gov_type(&self) -> &str {
        self.gov_type.as_ref()
    }

    pub fn main_species(&self) -> impl Iterator<Item = &str> {
        self.main_species.iter().map(|s| s.as_ref())
    }

    pub fn storymap_url(&self) -> Option<&str> {
        let url = self.storymap_url.as_ref();
        (!url.is_empty()).then_some(url)
    }

    /// Whether any curated enrichment field differs from its default.
    pub fn is_enriched(&self) -> bool {
        self.visitors_2024 > 0
            || self.predator_index > 0.0
            || self.has_big_five
            || self.in_migration_route
            || !self.main_species.is_empty()
            || !self.storymap_url.as_ref().is_empty()
    }
}

impl<B: ParkBackend> NameMatch for Park<B> {
    fn name_str(&self) -> &str {
        self.name.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "SITE_ID,NAME_ENG,NAME,ISO3,DESIG_ENG,IUCN_CAT,REP_AREA,STATUS_YR,GOV_TYPE,MANG_AUTH";

    fn db_from(rows: &[&str]) -> DefaultParkDb {
        let text = format!("{HEADER}\n{}", rows.join("\n"));
        build_parkdb(&CsvTable::parse(&text), None)
    }

    #[test]
    fn tourism_designation_is_required() {
        let db = db_from(&[
            "1,Serengeti,Serengeti,TZA,National Park,II,14763,1951,Federal,",
            "2,Some Forest,Msitu,TZA,Forest Reserve,VI,10,1960,Federal,",
        ]);
        assert_eq!(db.park_count(), 1);
        assert_eq!(db.parks()[0].id(), "1");
    }

    #[test]
    fn strict_protection_categories_are_excluded() {
        let db = db_from(&[
            "1,Strict One,Strict,TZA,National Park,Ia,5,1950,Federal,",
            "2,Strict Two,Strict,TZA,National Park,Ib,5,1950,Federal,",
            "3,Open Park,Wazi,TZA,National Park,II,5,1950,Federal,",
        ]);
        assert_eq!(db.park_count(), 1);
        assert_eq!(db.parks()[0].name(), "Open Park");
    }

    #[test]
    fn sorted_by_country_then_name() {
        let db = db_from(&[
            "1,Tsavo East,Tsavo,KEN,National Park,II,11747,1948,State,",
            "2,Serengeti,Serengeti,TZA,National Park,II,14763,1951,Federal,",
            "3,Amboseli,Amboseli,KEN,National Park,II,392,1974,State,",
        ]);
        let keys: Vec<(&str, &str)> = db
            .parks()
            .iter()
            .map(|p| (p.country(), p.name()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Kenya", "Amboseli"),
                ("Kenya", "Tsavo East"),
                ("Tanzania", "Serengeti"),
            ]
        );
        for pair in keys.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn field_coercion_and_fallbacks() {
        let db = db_from(&[
            "10,,Mikumi,TZA,National Park,II,not-a-number,,,TANAPA",
            "11,,,XYZ,Game Reserve,,,,,",
        ]);
        let p = &db.parks()[0];
        assert_eq!(p.name(), "Mikumi"); // NAME_ENG empty -> local name
        assert_eq!(p.area_km2(), None); // unparseable -> None, not an error
        assert_eq!(p.status_year(), None);
        assert_eq!(p.gov_type(), "TANAPA"); // GOV_TYPE empty -> MANG_AUTH

        let q = db.find_park_by_id("11").unwrap();
        assert_eq!(q.name(), "(Unnamed)");
        assert_eq!(q.country(), "XYZ"); // unknown ISO3 passes through
        assert_eq!(q.gov_type(), "Unknown");
        assert!(!q.is_enriched());
    }

    #[test]
    fn quoted_names_with_commas_survive() {
        let db = db_from(&[
            r#"20,"Selous, Game Reserve",Selous,TZA,Game Reserve,IV,50000,1922,Federal,"#,
        ]);
        assert_eq!(db.parks()[0].name(), "Selous, Game Reserve");
    }

    #[test]
    fn enrichment_overlays_only_matching_ids() {
        let enrichment: Vec<EnrichmentRaw> = serde_json::from_str(
            r#"[
                {"wdpa_site_id": 123, "has_big_five": true, "main_species": ["Lion"]},
                {"wdpa_site_id": "999", "visitors_2024": 5}
            ]"#,
        )
        .unwrap();

        let text = format!(
            "{HEADER}\n{}\n{}",
            "123,Enriched Park,Tajiri,TZA,National Park,II,100,1970,Federal,",
            "124,Plain Park,Kawaida,TZA,National Park,II,100,1970,Federal,"
        );
        let db: DefaultParkDb =
            build_parkdb(&CsvTable::parse(&text), Some(&enrichment));

        let enriched = db.find_park_by_id("123").unwrap();
        assert!(enriched.has_big_five);
        assert_eq!(enriched.main_species().collect::<Vec<_>>(), vec!["Lion"]);
        // Missing enrichment fields fall back to defaults, not unset.
        assert_eq!(enriched.visitors_2024, 0);
        assert!(enriched.is_enriched());

        let plain = db.find_park_by_id("124").unwrap();
        assert!(!plain.has_big_five);
    }

    #[test]
    fn duplicate_enrichment_keys_last_wins() {
        let enrichment: Vec<EnrichmentRaw> = serde_json::from_str(
            r#"[
                {"wdpa_site_id": 123, "visitors_2024": 1},
                {"wdpa_site_id": 123, "visitors_2024": 2}
            ]"#,
        )
        .unwrap();
        let text =
            format!("{HEADER}\n123,Park,Park,TZA,National Park,II,1,1970,Federal,");
        let db: DefaultParkDb =
            build_parkdb(&CsvTable::parse(&text), Some(&enrichment));
        assert_eq!(db.parks()[0].visitors_2024, 2);
    }

    #[test]
    fn duplicate_site_ids_keep_first_row() {
        let db = db_from(&[
            "30,First,Kwanza,TZA,National Park,II,1,1970,Federal,",
            "30,Second,Pili,TZA,National Park,II,1,1980,Federal,",
        ]);
        assert_eq!(db.park_count(), 1);
        assert_eq!(db.parks()[0].name(), "First");
    }

    #[test]
    fn zero_status_year_reads_as_missing() {
        let db = db_from(&[
            "50,Zeroed,Sifuri,TZA,National Park,II,100,0,Federal,",
            "51,Dated,Tarehe,TZA,National Park,II,100,1951,Federal,",
        ]);
        assert_eq!(db.find_park_by_id("50").unwrap().status_year(), None);
        assert_eq!(db.find_park_by_id("51").unwrap().status_year(), Some(1951));
    }

    #[test]
    fn empty_table_builds_empty_db() {
        let db: DefaultParkDb = build_parkdb(&CsvTable::parse(HEADER), None);
        assert_eq!(db.park_count(), 0);
    }

    #[test]
    fn designation_match_is_case_insensitive() {
        let db = db_from(&["40,Lower Zambezi,LZ,ZMB,NATIONAL PARK,II,4092,1983,State,"]);
        assert_eq!(db.park_count(), 1);
    }

    #[test]
    fn iso3_lookup_table() {
        assert_eq!(iso3_to_country("TZA"), "Tanzania");
        assert_eq!(iso3_to_country("ZAF"), "South Africa");
        assert_eq!(iso3_to_country(""), "Unknown");
        assert_eq!(iso3_to_country("FRA"), "FRA");
    }
}
