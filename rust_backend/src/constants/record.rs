//! A single entry of the constants table.

use qtty::{Quantity, Unit};
use serde::Serialize;

use super::error::{ConstantsError, ConstantsResult};

/// An immutable physical constant with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConstantRecord {
    /// Canonical lookup key.
    pub name: &'static str,
    /// Alternative keys, matched case-insensitively like `name`.
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub value: f64,
    /// Unit symbol; empty for dimensionless values.
    pub unit: &'static str,
    /// `None` when the reference gives no uncertainty, `Some(0.0)` when exact.
    pub uncertainty: Option<f64>,
    pub reference: &'static str,
}

impl ConstantRecord {
    /// Canonical name followed by the aliases.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    /// True if `key` equals the name or one of the aliases, ignoring case.
    pub fn matches(&self, key: &str) -> bool {
        self.keys().any(|k| k.eq_ignore_ascii_case(key))
    }

    pub fn is_exact(&self) -> bool {
        self.uncertainty == Some(0.0)
    }

    /// View the value as a typed quantity.
    ///
    /// # Returns
    /// * `Ok(Quantity<U>)` when the record's unit symbol is `U::SYMBOL`
    ///   (ignoring case)
    /// * `Err(ConstantsError::UnitMismatch)` otherwise
    ///
    /// # Example
    /// ```
    /// use solkit::constants::data::RADIUS;
    /// use qtty::Meter;
    ///
    /// let radius = RADIUS.as_quantity::<Meter>().unwrap();
    /// assert_eq!(radius.value(), 6.957e8);
    /// ```
    pub fn as_quantity<U: Unit>(&self) -> ConstantsResult<Quantity<U>> {
        if self.unit.eq_ignore_ascii_case(U::SYMBOL) {
            Ok(Quantity::new(self.value))
        } else {
            Err(ConstantsError::UnitMismatch {
                name: self.name.to_string(),
                expected: U::SYMBOL.to_string(),
                actual: self.unit.to_string(),
            })
        }
    }
}
