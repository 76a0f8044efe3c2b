//! Reusable docstring fragments.

use std::collections::BTreeMap;

use super::metadata::{DocMetadata, Documentation, ParamDoc};
use super::template::TemplateError;
use crate::deprecation::Target;

/// Adds shared text to the documentation of many items.
///
/// A composer is configured once and applied to any number of targets. The
/// edits happen in a fixed order: prepend, append, extra parameters, then
/// placeholder substitution (skipped when no substitutions are set).
///
/// # Example
/// ```
/// use solkit::docs::{DocComposer, DocMetadata};
///
/// let composer = DocComposer::new()
///     .prepend("Solar {quantity}. ")
///     .substitution("quantity", "radius");
///
/// let doc = composer.apply(DocMetadata::new("Nominal value.")).unwrap();
/// assert_eq!(doc.render(), "Solar radius. Nominal value.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocComposer {
    prepend: Option<String>,
    append: Option<String>,
    parameters: Vec<ParamDoc>,
    substitutions: BTreeMap<String, String>,
}

impl DocComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepend(mut self, text: impl Into<String>) -> Self {
        self.prepend = Some(text.into());
        self
    }

    pub fn append(mut self, text: impl Into<String>) -> Self {
        self.append = Some(text.into());
        self
    }

    /// Add a parameter entry to every documented item.
    pub fn parameter(mut self, param: ParamDoc) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn substitution(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.substitutions.insert(name.into(), value.into());
        self
    }

    pub fn substitutions<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.substitutions
            .extend(values.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Apply the configured edits to `doc`.
    pub fn apply(&self, doc: DocMetadata) -> Result<DocMetadata, TemplateError> {
        let mut doc = doc
            .with_prepended_text(self.prepend.as_deref().unwrap_or(""))
            .with_appended_text(self.append.as_deref().unwrap_or(""));

        for param in &self.parameters {
            doc = doc.with_parameter(param.clone());
        }

        if self.substitutions.is_empty() {
            Ok(doc)
        } else {
            doc.substituted(&self.substitutions)
        }
    }

    /// Apply in place. Native documentation is left untouched.
    pub fn apply_to(&self, doc: &mut Documentation) -> Result<(), TemplateError> {
        if let Documentation::Editable(metadata) = doc {
            *metadata = self.apply(std::mem::take(metadata))?;
        } else {
            log::debug!("Skipping native documentation");
        }
        Ok(())
    }

    /// Apply to a target's documentation and hand the target back.
    pub fn compose<F>(&self, mut target: Target<F>) -> Result<Target<F>, TemplateError> {
        if let Some(doc) = target.documentation_mut() {
            self.apply_to(doc)?;
        }
        Ok(target)
    }
}
