//! Lookup over a fixed set of constants.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::data::SOLAR_CONSTANTS;
use super::error::{ConstantsError, ConstantsResult};
use super::record::ConstantRecord;
use super::table::ConstantsTable;

/// Read-only collection of constants with case-insensitive lookup by name
/// or alias.
///
/// Records keep their registration order; every listing follows it.
#[derive(Debug, Clone)]
pub struct ConstantsRegistry {
    records: Vec<ConstantRecord>,
    index: HashMap<String, usize>,
}

static SOLAR: Lazy<ConstantsRegistry> = Lazy::new(ConstantsRegistry::solar);

/// Process-wide registry of solar constants, built on first use.
pub fn solar_registry() -> &'static ConstantsRegistry {
    &SOLAR
}

impl ConstantsRegistry {
    /// Registry holding the solar constants table.
    pub fn solar() -> Self {
        Self::from_records(SOLAR_CONSTANTS)
    }

    /// Build a registry from `records`, in order.
    ///
    /// When two records claim the same key (ignoring case), the first one
    /// keeps it.
    pub fn from_records(records: impl IntoIterator<Item = ConstantRecord>) -> Self {
        let records: Vec<ConstantRecord> = records.into_iter().collect();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            for key in record.keys() {
                let folded = key.to_lowercase();
                if let Some(&owner) = index.get(&folded) {
                    log::warn!(
                        "Key '{}' of constant '{}' is already used by '{}'",
                        key,
                        record.name,
                        records[owner].name
                    );
                    continue;
                }
                index.insert(folded, position);
            }
        }

        log::debug!(
            "Built constants registry with {} records and {} keys",
            records.len(),
            index.len()
        );

        Self { records, index }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConstantRecord> {
        self.records.iter()
    }

    /// Canonical names of the constants matching `substring`.
    ///
    /// # Arguments
    /// * `substring` - Text to look for in each canonical name and alias,
    ///   ignoring case. `None` lists everything.
    ///
    /// # Returns
    /// Canonical names in registration order. Empty when nothing matches.
    ///
    /// # Example
    /// ```
    /// use solkit::constants::ConstantsRegistry;
    ///
    /// let registry = ConstantsRegistry::solar();
    /// assert_eq!(registry.find(None).len(), 34);
    /// assert_eq!(registry.find(Some("distance")).len(), 3);
    /// assert!(registry.find(Some("crab")).is_empty());
    /// ```
    pub fn find(&self, substring: Option<&str>) -> Vec<&'static str> {
        match substring {
            None => self.records.iter().map(|r| r.name).collect(),
            Some(needle) => {
                let needle = needle.to_lowercase();
                self.records
                    .iter()
                    .filter(|r| r.keys().any(|k| k.to_lowercase().contains(&needle)))
                    .map(|r| r.name)
                    .collect()
            }
        }
    }

    /// Look up a constant by canonical name or alias, ignoring case.
    ///
    /// # Returns
    /// * `Ok(&ConstantRecord)` for a known key
    /// * `Err(ConstantsError::NotFound)` otherwise
    pub fn get(&self, key: &str) -> ConstantsResult<&ConstantRecord> {
        self.index
            .get(&key.to_lowercase())
            .map(|&position| &self.records[position])
            .ok_or_else(|| ConstantsError::NotFound(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(&key.to_lowercase())
    }

    /// Every constant as a printable table.
    pub fn print_all(&self) -> ConstantsTable {
        ConstantsTable::new(self.records.clone())
    }

    /// Every constant as a JSON array, in registration order.
    pub fn to_json(&self) -> ConstantsResult<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

impl Default for ConstantsRegistry {
    fn default() -> Self {
        Self::solar()
    }
}

impl<'a> IntoIterator for &'a ConstantsRegistry {
    type Item = &'a ConstantRecord;
    type IntoIter = std::slice::Iter<'a, ConstantRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
