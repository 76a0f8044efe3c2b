//! Documentation metadata and composition.
//!
//! Decorating helpers in this crate never edit documentation strings in
//! place. Instead they work on a [`DocMetadata`] record and hand back the
//! transformed value, so the order of edits is visible at the call site.
//!
//! # Modules
//!
//! - [`template`]: `{name}` placeholder substitution
//! - [`metadata`]: parsed documentation record and rendering
//! - [`composer`]: shared prepend/append/parameter fragments
//!
//! # Example
//!
//! ```
//! use solkit::docs::{DocComposer, DocMetadata};
//!
//! let doc = DocComposer::new()
//!     .prepend("A")
//!     .append("B")
//!     .apply(DocMetadata::default())
//!     .unwrap();
//! assert_eq!(doc.render(), "AB");
//! ```

pub mod composer;
pub mod metadata;
pub mod template;

pub use composer::DocComposer;
pub use metadata::{DocMetadata, Documentation, ParamDoc, BLANK_MARKER};
pub use template::{substitute, TemplateError};
