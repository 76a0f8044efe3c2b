//! Deprecation markers for functions, methods and classes.
//!
//! A [`Target`] names the kind of item being deprecated and owns the
//! original callable. [`mark_deprecated`] turns it into a [`Deprecated`]
//! wrapper that hands one [`Warning`] to a [`WarningSink`] per call (or per
//! construction, for classes) and then forwards to the original.
//!
//! Removal follows the release policy in [`Version::removal`]: deprecations
//! made in an LTS (`x.0`) release are removed in the next minor release,
//! everything else in the first minor release of the next major.
//!
//! # Modules
//!
//! - [`version`]: `major.minor` parsing and the removal policy
//! - [`target`]: the closed set of deprecatable item kinds
//! - [`warning`]: warning categories, sinks and filters
//! - [`engine`]: message building and wrapper construction
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use solkit::deprecation::{mark_deprecated, DeprecationSpec, LogSink, Target};
//!
//! fn carrington_start() -> f64 {
//!     2_398_167.4
//! }
//!
//! let spec = DeprecationSpec::parse("0.4")
//!     .unwrap()
//!     .alternative("solkit::constants::data::FIRST_CARRINGTON_ROTATION");
//! let start =
//!     mark_deprecated(Target::function(carrington_start), &spec, Arc::new(LogSink)).unwrap();
//! assert_eq!(start.call0(), 2_398_167.4);
//! ```

pub mod engine;
pub mod error;
pub mod target;
pub mod version;
pub mod warning;


pub use engine::{mark_deprecated, Deprecated, DeprecationSpec};
pub use error::{DeprecationError, DeprecationResult};
pub use target::{Callable, Constructor, Target, TargetKind};
pub use version::Version;
pub use warning::{
    Category, FilterAction, FilteredSink, LogSink, RecordingSink, Warning, WarningSink,
    CALLER_STACKLEVEL,
};
