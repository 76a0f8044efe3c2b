//! Warning categories and the sinks that receive them.
//!
//! The deprecation wrappers never print anything themselves. Each call hands
//! a [`Warning`] to a [`WarningSink`]; what happens next (logging, recording
//! for a test, forwarding to Python) is up to the sink.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

/// Stack level reported for warnings raised by a deprecation wrapper: the
/// caller of the wrapper, not the wrapper itself.
pub const CALLER_STACKLEVEL: u32 = 2;

/// Kind of deprecation warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// The API is deprecated now and scheduled for removal.
    Deprecation,
    /// The API will be deprecated in a future release.
    PendingDeprecation,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Deprecation => "SolkitDeprecationWarning",
            Category::PendingDeprecation => "SolkitPendingDeprecationWarning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single emitted warning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Warning {
    pub message: String,
    pub category: Category,
    pub stacklevel: u32,
}

impl Warning {
    pub fn new(message: impl Into<String>, category: Category) -> Self {
        Self {
            message: message.into(),
            category,
            stacklevel: CALLER_STACKLEVEL,
        }
    }
}

/// Destination for emitted warnings. Fire-and-forget.
pub trait WarningSink: Send + Sync {
    fn emit(&self, warning: &Warning);
}

/// Sends warnings to the `log` facade at `warn` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn emit(&self, warning: &Warning) {
        log::warn!(target: "solkit::deprecation", "{}: {}", warning.category, warning.message);
    }
}

/// Keeps every warning in memory.
///
/// Useful when a caller needs to assert on what was emitted.
///
/// # Example
/// ```
/// use solkit::deprecation::{Category, RecordingSink, Warning, WarningSink};
///
/// let sink = RecordingSink::new();
/// sink.emit(&Warning::new("old", Category::Deprecation));
/// assert_eq!(sink.count(Category::Deprecation), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    warnings: Mutex<Vec<Warning>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded warnings, oldest first.
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, category: Category) -> usize {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|w| w.category == category)
            .count()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<Warning> {
        std::mem::take(&mut *self.warnings.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl WarningSink for RecordingSink {
    fn emit(&self, warning: &Warning) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning.clone());
    }
}

/// What a [`FilteredSink`] does with a warning of a given category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterAction {
    /// Forward every warning.
    #[default]
    Always,
    /// Forward the first occurrence of each distinct message.
    Once,
    /// Drop the warning.
    Ignore,
}

impl FromStr for FilterAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(FilterAction::Always),
            "once" => Ok(FilterAction::Once),
            "ignore" => Ok(FilterAction::Ignore),
            other => Err(format!(
                "Unknown warning action: {}. Use 'always', 'once' or 'ignore'",
                other
            )),
        }
    }
}

/// Applies per-category filter actions before forwarding to another sink.
pub struct FilteredSink<S> {
    inner: S,
    action: FilterAction,
    pending_action: FilterAction,
    seen: Mutex<HashSet<(Category, String)>>,
}

impl<S: WarningSink> FilteredSink<S> {
    /// # Arguments
    /// * `inner` - Sink receiving the warnings that pass the filter
    /// * `action` - Action for [`Category::Deprecation`]
    /// * `pending_action` - Action for [`Category::PendingDeprecation`]
    pub fn new(inner: S, action: FilterAction, pending_action: FilterAction) -> Self {
        Self {
            inner,
            action,
            pending_action,
            seen: Mutex::new(HashSet::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn action_for(&self, category: Category) -> FilterAction {
        match category {
            Category::Deprecation => self.action,
            Category::PendingDeprecation => self.pending_action,
        }
    }
}

impl<S: WarningSink> WarningSink for FilteredSink<S> {
    fn emit(&self, warning: &Warning) {
        match self.action_for(warning.category) {
            FilterAction::Always => self.inner.emit(warning),
            FilterAction::Ignore => {}
            FilterAction::Once => {
                let first = self
                    .seen
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert((warning.category, warning.message.clone()));
                if first {
                    self.inner.emit(warning);
                }
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for FilteredSink<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredSink")
            .field("inner", &self.inner)
            .field("action", &self.action)
            .field("pending_action", &self.pending_action)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn deprecation(msg: &str) -> Warning {
        Warning::new(msg, Category::Deprecation)
    }

    fn pending(msg: &str) -> Warning {
        Warning::new(msg, Category::PendingDeprecation)
    }

    #[test]
    fn test_warning_defaults_to_caller_stacklevel() {
        assert_eq!(deprecation("x").stacklevel, 2);
    }

    #[test]
    fn test_recording_sink_take_clears() {
        let sink = RecordingSink::new();
        sink.emit(&deprecation("a"));
        sink.emit(&pending("b"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.count(Category::PendingDeprecation), 1);

        let taken = sink.take();
        assert_eq!(taken, vec![deprecation("a"), pending("b")]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_filter_always_forwards_everything() {
        let sink = FilteredSink::new(
            RecordingSink::new(),
            FilterAction::Always,
            FilterAction::Always,
        );
        sink.emit(&deprecation("a"));
        sink.emit(&deprecation("a"));
        assert_eq!(sink.inner().len(), 2);
    }

    #[test]
    fn test_filter_once_per_message() {
        let sink = FilteredSink::new(
            RecordingSink::new(),
            FilterAction::Once,
            FilterAction::Always,
        );
        sink.emit(&deprecation("a"));
        sink.emit(&deprecation("a"));
        sink.emit(&deprecation("b"));
        sink.emit(&pending("a"));
        sink.emit(&pending("a"));
        assert_eq!(sink.inner().count(Category::Deprecation), 2);
        assert_eq!(sink.inner().count(Category::PendingDeprecation), 2);
    }

    #[test]
    fn test_filter_ignore_pending_only() {
        let sink = FilteredSink::new(
            RecordingSink::new(),
            FilterAction::Always,
            FilterAction::Ignore,
        );
        sink.emit(&pending("soon"));
        sink.emit(&deprecation("now"));
        assert_eq!(sink.inner().warnings(), vec![deprecation("now")]);
    }

    #[test]
    fn test_filter_action_from_str() {
        assert_eq!("ONCE".parse::<FilterAction>().unwrap(), FilterAction::Once);
        assert_eq!("ignore".parse::<FilterAction>().unwrap(), FilterAction::Ignore);
        assert!("error".parse::<FilterAction>().is_err());
    }

    #[test]
    fn test_sinks_are_shareable() {
        let sink: Arc<dyn WarningSink> = Arc::new(LogSink);
        let handle = std::thread::spawn(move || sink.emit(&deprecation("threaded")));
        handle.join().unwrap();
    }
}
