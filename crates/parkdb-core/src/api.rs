// crates/parkdb-core/src/api.rs

//! Serializable view-models for UI layers.
//!
//! The dashboard used to build DOM strings directly from metadata; these
//! types replace that with plain data a rendering layer (JS, TUI, templates)
//! can consume. Label fallbacks (`N/A`, `(Unnamed)`) are resolved here so
//! renderers never need the raw record.

use crate::model::Park;
use crate::traits::ParkBackend;
use serde::Serialize;

/// One entry of the sidebar park list.
#[derive(Debug, Clone, Serialize)]
pub struct ParkCardView {
    pub id: String,
    pub title: String,
    /// `"{country} · {designation}"`
    pub subtitle: String,
    pub tags: Vec<String>,
    pub active: bool,
}

impl ParkCardView {
    pub fn from_park<B: ParkBackend>(park: &Park<B>, active: bool) -> Self {
        Self {
            id: park.id().to_string(),
            title: park.name().to_string(),
            subtitle: format!("{} · {}", park.country(), park.designation()),
            tags: park.main_species().map(str::to_string).collect(),
            active,
        }
    }
}

/// The detail panel for the selected park.
#[derive(Debug, Clone, Serialize)]
pub struct ParkDetailView {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Highlight tags: migration route, Big Five.
    pub tags: Vec<String>,
    pub designation: String,
    pub iucn_category: String,
    /// `"14,763 km²"` or `"N/A"`.
    pub area_label: String,
    /// Establishment year or `"N/A"`.
    pub year_label: String,
    pub manager: String,
    /// Comma-joined key species; empty when none are curated.
    pub key_species: String,
    pub storymap_url: Option<String>,
}

impl ParkDetailView {
    pub fn from_park<B: ParkBackend>(park: &Park<B>) -> Self {
        let mut tags = Vec::new();
        if park.in_migration_route {
            tags.push("On Migration Route".to_string());
        }
        if park.has_big_five {
            tags.push("Big Five Area".to_string());
        }

        Self {
            id: park.id().to_string(),
            name: park.name().to_string(),
            country: park.country().to_string(),
            tags,
            designation: or_na(park.designation()),
            iucn_category: or_na(park.iucn_category()),
            area_label: park
                .area_km2()
                .map(|a| format!("{} km²", format_thousands(a)))
                .unwrap_or_else(|| "N/A".to_string()),
            year_label: park
                .status_year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            manager: or_na(park.gov_type()),
            key_species: park.main_species().collect::<Vec<_>>().join(", "),
            storymap_url: park.storymap_url().map(str::to_string),
        }
    }
}

/// The small inline popup shown next to the selected polygon.
#[derive(Debug, Clone, Serialize)]
pub struct MapInfoView {
    pub id: String,
    pub name: String,
    pub country: String,
}

impl MapInfoView {
    pub fn from_park<B: ParkBackend>(park: &Park<B>) -> Self {
        Self {
            id: park.id().to_string(),
            name: park.name().to_string(),
            country: park.country().to_string(),
        }
    }
}

fn or_na(s: &str) -> String {
    if s.is_empty() {
        "N/A".to_string()
    } else {
        s.to_string()
    }
}

/// Group the integer part of a number with thousands separators; one decimal
/// place is kept for fractional areas.
fn format_thousands(v: f64) -> String {
    let fixed = format!("{:.1}", v);
    let (int_digits, frac_digit) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
    let (sign, digits) = match int_digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = format!("{sign}{grouped}");
    if frac_digit != "0" {
        out.push('.');
        out.push_str(frac_digit);
    }
    out
}
