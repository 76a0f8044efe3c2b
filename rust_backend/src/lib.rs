//! Solar physical constants plus the API maintenance helpers around them.
//!
//! - [`constants`]: the solar constants table with lookup by name or alias,
//!   substring search, tabular listing and typed `qtty` quantities
//! - [`deprecation`]: wrappers that emit a warning each time a deprecated
//!   function, method or class constructor is used
//! - [`docs`]: structured documentation and the composer that edits it
//! - [`config`]: `solkit.toml` settings for warning filters and table output
//!
//! # Example
//! ```
//! use solkit::constants::ConstantsRegistry;
//!
//! let registry = ConstantsRegistry::solar();
//! assert_eq!(registry.get("au").unwrap().value, 1.495_978_707e11);
//! ```

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod config;
pub mod constants;
pub mod deprecation;
pub mod docs;
#[cfg(feature = "python")]
pub mod python;

pub use config::SolkitConfig;
pub use constants::{solar_registry, ConstantRecord, ConstantsRegistry};
pub use deprecation::{mark_deprecated, DeprecationSpec, Target};
pub use docs::DocComposer;

/// Solar constants and deprecation helpers
#[cfg(feature = "python")]
#[pymodule]
fn solkit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_constants(m)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
