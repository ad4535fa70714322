//! Name list transformations
//!
//! Pure functions over a fixed, immutable list of sample names and over
//! caller-supplied integers. Every operation here is deterministic except
//! [`NameOperations::generate_identifier`], which draws from the OS random
//! source.

use std::sync::Arc;

use uuid::Uuid;

/// Prefix prepended to every name by [`NameOperations::format_all`]
pub const NAME_PREFIX: &str = "Name: ";

/// Sample names used when no list is configured
pub const DEFAULT_NAMES: [&str; 8] = [
    "Emma",
    "William",
    "James",
    "Sophia",
    "Lucas",
    "Scarlett",
    "Elizabeth",
    "John",
];

/// Operations over an ordered, immutable list of names.
///
/// The list is fixed at construction time and shared behind an [`Arc`], so
/// cloning a `NameOperations` is cheap and clones observe the same names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameOperations {
    names: Arc<[String]>,
}

impl Default for NameOperations {
    fn default() -> Self {
        Self::new(DEFAULT_NAMES)
    }
}

impl NameOperations {
    /// Build over an arbitrary list of names, keeping their order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::<String>::into).collect(),
        }
    }

    /// The underlying name list
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Every name converted to uppercase, in list order.
    pub fn map_to_upper(&self) -> Vec<String> {
        self.names.iter().map(|name| name.to_uppercase()).collect()
    }

    /// Names starting with `prefix`.
    ///
    /// The match is a literal, case-sensitive prefix match. An empty prefix
    /// keeps every name.
    pub fn filter_by_starting_letter(&self, prefix: &str) -> Vec<String> {
        self.names
            .iter()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Names whose length, in Unicode scalar values, is strictly greater than `threshold`.
    ///
    /// Negative thresholds keep every name.
    pub fn filter_by_length_greater_than(&self, threshold: i32) -> Vec<String> {
        let longer_than = |name: &&String| name.chars().count() as i64 > i64::from(threshold);

        self.names.iter().filter(longer_than).cloned().collect()
    }

    /// A fresh random identifier in the canonical 8-4-4-4-12 UUID layout.
    pub fn generate_identifier(&self) -> String {
        let supplier = Uuid::new_v4;
        supplier().to_string()
    }

    /// Every name with [`NAME_PREFIX`] prepended, in list order.
    pub fn format_all(&self) -> Vec<String> {
        let mut formatted = Vec::with_capacity(self.names.len());
        let mut consume = |name: &String| formatted.push(format!("{NAME_PREFIX}{name}"));

        self.names.iter().for_each(&mut consume);
        formatted
    }

    /// `value * 2`, wrapping on overflow.
    pub fn double(&self, value: i32) -> i32 {
        value.wrapping_mul(2)
    }

    /// Sum of `values`, `0` for an empty slice, wrapping on overflow.
    pub fn sum(&self, values: &[i32]) -> i32 {
        values.iter().copied().fold(0, i32::wrapping_add)
    }
}

/// Whether `value` follows the canonical 8-4-4-4-12 hex-and-hyphen layout
pub fn is_canonical_identifier(value: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let parts: Vec<&str> = value.split('-').collect();
    parts.len() == GROUPS.len()
        && parts
            .iter()
            .zip(GROUPS)
            .all(|(part, len)| part.len() == len && part.chars().all(|c| c.is_ascii_hexdigit()))
}
