// crates/parkdb-core/src/traits.rs
use crate::text::{equals_folded, fold_key};
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the database.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally (for example to use more compact types) without
/// changing the public API of accessors that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated types can be serialized/deserialized so databases can be cached
/// via bincode.
pub trait ParkBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;
    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    fn str_from(s: &str) -> Self::Str;
    fn float_from(f: f64) -> Self::Float;
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Default backend: plain `String` + `f64`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl ParkBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes Unicode-aware, accent-insensitive and
/// case-insensitive comparisons based on [`fold_key`]. Implementors provide a
/// `&str` view of their canonical name via [`NameMatch::name_str`], and get
/// convenient helpers:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}
