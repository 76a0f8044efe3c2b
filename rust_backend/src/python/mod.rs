//! Python bindings.
//!
//! Everything here is compiled only with the `python` feature and ends up in
//! the `solkit` extension module:
//!
//! - [`constants`]: `find`, `get`, `print_all`, `constants_json`, the
//!   `Constant` class and the deprecated `constant` alias
//! - [`warnings`]: the sink that turns deprecation warnings into Python
//!   warnings

pub mod constants;
pub mod warnings;

pub use constants::{register_constants, PyConstant};
pub use warnings::PyWarningSink;
