//! Solar physical constants.
//!
//! The constants live in a fixed table compiled into the crate. A
//! [`ConstantsRegistry`] indexes them by canonical name and alias:
//!
//! ```
//! use solkit::constants::ConstantsRegistry;
//!
//! let registry = ConstantsRegistry::solar();
//! let mass = registry.get("M_sun").unwrap();
//! assert_eq!(mass.name, "mass");
//! assert_eq!(mass.unit, "kg");
//! assert_eq!(
//!     registry.find(Some("TEMPERATURE")),
//!     vec!["effective temperature", "center temperature"]
//! );
//! ```
//!
//! Typed quantities for the common constants are in [`solar`].

pub mod data;
mod error;
mod record;
mod registry;
pub mod solar;
mod table;

#[cfg(test)]
mod registry_tests;

pub use data::SOLAR_CONSTANTS;
pub use error::{ConstantsError, ConstantsResult};
pub use record::ConstantRecord;
pub use registry::{solar_registry, ConstantsRegistry};
pub use table::{ConstantsTable, TableSettings};
