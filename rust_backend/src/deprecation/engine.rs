//! Building deprecation wrappers.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::error::{DeprecationError, DeprecationResult};
use super::target::{Constructor, Target, TargetKind};
use super::version::Version;
use super::warning::{Category, Warning, WarningSink};
use crate::docs::{substitute, Documentation};

const DEPRECATED_TEMPLATE: &str =
    "The {func} {obj_type} is deprecated and may be removed in {future_version}.";
const PENDING_TEMPLATE: &str =
    "The {func} {obj_type} will be deprecated in {future_version}.";

/// What to say about a deprecated item.
///
/// # Example
/// ```
/// use solkit::deprecation::{Category, DeprecationSpec};
///
/// let spec = DeprecationSpec::parse("1.3").unwrap().alternative("new_api");
/// assert_eq!(spec.removal_version().unwrap().to_string(), "2.1");
/// assert_eq!(spec.category(), Category::Deprecation);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationSpec {
    since: Version,
    message: Option<String>,
    name: Option<String>,
    alternative: Option<String>,
    pending: bool,
    object_type: Option<String>,
}

impl DeprecationSpec {
    pub fn new(since: Version) -> Self {
        Self {
            since,
            message: None,
            name: None,
            alternative: None,
            pending: false,
            object_type: None,
        }
    }

    /// Start from a `"major.minor"` release string.
    pub fn parse(since: &str) -> DeprecationResult<Self> {
        Ok(Self::new(since.parse()?))
    }

    /// Replace the default message.
    ///
    /// The text may use `{func}`, `{name}`, `{obj_type}`,
    /// `{deprecated_version}`, `{removal_version}`, `{future_version}` and
    /// `{alternative}`. No "use ... instead" sentence is added to custom
    /// messages.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Name reported in the warning instead of the target's own name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn alternative(mut self, alternative: impl Into<String>) -> Self {
        self.alternative = Some(alternative.into());
        self
    }

    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    /// Override the automatically determined object type label.
    pub fn object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    pub fn since(&self) -> Version {
        self.since
    }

    /// # Returns
    /// * `Err(DeprecationError::InvalidVersion)` if no release can follow
    ///   `since`
    pub fn removal_version(&self) -> DeprecationResult<Version> {
        self.since.removal()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn category(&self) -> Category {
        if self.pending {
            Category::PendingDeprecation
        } else {
            Category::Deprecation
        }
    }

    /// Format the warning text for an item called `name` of kind `object_type`.
    pub fn build_message(&self, name: &str, object_type: &str) -> DeprecationResult<String> {
        let removal = self.removal_version()?;
        let alternative = self.alternative.as_deref().unwrap_or("");

        let mut values = BTreeMap::new();
        values.insert("func".to_string(), name.to_string());
        values.insert("name".to_string(), name.to_string());
        values.insert("obj_type".to_string(), object_type.to_string());
        values.insert("deprecated_version".to_string(), self.since.to_string());
        values.insert("removal_version".to_string(), removal.to_string());
        values.insert("future_version".to_string(), format!("version {}", removal));
        values.insert("alternative".to_string(), alternative.to_string());

        match self.message.as_deref().filter(|m| !m.is_empty()) {
            Some(custom) => Ok(substitute(custom, &values)?),
            None => {
                let template = if self.pending {
                    PENDING_TEMPLATE
                } else {
                    DEPRECATED_TEMPLATE
                };
                let mut message = substitute(template, &values)?;
                if !alternative.is_empty() {
                    message.push_str(&format!("\n        Use {} instead.", alternative));
                }
                Ok(message)
            }
        }
    }

    fn note(&self, message: &str) -> String {
        format!(".. deprecated:: {}\n    {}", self.since, message.trim())
    }
}

/// A callable that warns every time it is used.
///
/// Built by [`mark_deprecated`]. Apart from the warning, calls behave exactly
/// like calls to the original: same arguments, same return value, same
/// panics.
pub struct Deprecated<F> {
    kind: TargetKind,
    entry: Option<Constructor>,
    name: String,
    message: String,
    category: Category,
    doc: Documentation,
    func: F,
    sink: Arc<dyn WarningSink>,
}

impl<F> Deprecated<F> {
    fn warn(&self) {
        self.sink.emit(&Warning::new(self.message.clone(), self.category));
    }

    /// Call a function, static method or class constructor.
    ///
    /// Multiple arguments are passed as a tuple.
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        self.warn();
        (self.func)(args)
    }

    /// Call a callable that takes no arguments.
    pub fn call0<R>(&self) -> R
    where
        F: Fn() -> R,
    {
        self.warn();
        (self.func)()
    }

    /// Call a bound or class method with its receiver.
    pub fn call_with<S, A, R>(&self, receiver: S, args: A) -> R
    where
        F: Fn(S, A) -> R,
    {
        self.warn();
        (self.func)(receiver, args)
    }

    /// Call a stateful callable.
    pub fn call_mut<A, R>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
    {
        self.warn();
        (self.func)(args)
    }

    /// Kind of the original target; the calling convention is unchanged.
    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    /// Wrapped construction entry point, for classes.
    pub fn constructor(&self) -> Option<Constructor> {
        self.entry
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn documentation(&self) -> &Documentation {
        &self.doc
    }

    /// Unwrap the original callable. Calls made through it do not warn.
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F> fmt::Debug for Deprecated<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deprecated")
            .field("kind", &self.kind)
            .field("entry", &self.entry)
            .field("name", &self.name)
            .field("message", &self.message)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Wrap `target` so that each use emits a deprecation warning to `sink`.
///
/// # Arguments
/// * `target` - Function, method or class constructor to deprecate
/// * `spec` - Version, message and alternative
/// * `sink` - Receives one warning per call or construction
///
/// # Returns
/// * `Ok(Deprecated<F>)` forwarding to the original callable
/// * `Err(DeprecationError::UnsupportedTarget)` for [`Target::Object`]
/// * `Err(DeprecationError::InvalidMessage)` for a bad custom message
/// * `Err(DeprecationError::InvalidVersion)` when no removal release can
///   follow `since`
///
/// Documentation marked native is left as it is.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use solkit::deprecation::{mark_deprecated, Category, DeprecationSpec, RecordingSink, Target};
///
/// fn old_area(r: f64) -> f64 {
///     std::f64::consts::PI * r * r
/// }
///
/// let sink = Arc::new(RecordingSink::new());
/// let spec = DeprecationSpec::parse("1.0").unwrap();
/// let area = mark_deprecated(Target::function(old_area), &spec, sink.clone()).unwrap();
///
/// assert_eq!(area.call(1.0), old_area(1.0));
/// assert_eq!(sink.count(Category::Deprecation), 1);
/// assert_eq!(
///     area.message(),
///     "The old_area function is deprecated and may be removed in version 1.1."
/// );
/// ```
pub fn mark_deprecated<F>(
    target: Target<F>,
    spec: &DeprecationSpec,
    sink: Arc<dyn WarningSink>,
) -> DeprecationResult<Deprecated<F>> {
    let kind = target.kind();
    let object_type = spec
        .object_type
        .clone()
        .unwrap_or_else(|| kind.object_type_name().to_string());
    let name = spec
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| target.name().to_string());

    let (entry, callable) = match target {
        Target::Object { .. } => {
            return Err(DeprecationError::UnsupportedTarget {
                name,
                kind: object_type,
            })
        }
        Target::Class { entry, ctor } => (Some(entry), ctor),
        Target::FreeFunction(c)
        | Target::BoundMethod(c)
        | Target::ClassMethod(c)
        | Target::StaticMethod(c) => (None, c),
    };

    let removal = spec.removal_version()?;
    let message = spec.build_message(&name, &object_type)?;
    let doc = match callable.doc {
        Documentation::Editable(doc) => {
            Documentation::Editable(doc.with_prepended_note(spec.note(&message)))
        }
        Documentation::Native => {
            log::debug!("Documentation of {} is native; leaving it unchanged", name);
            Documentation::Native
        }
    };

    log::debug!(
        "Marked {} {} deprecated since {} (removal in {})",
        object_type,
        name,
        spec.since,
        removal
    );

    Ok(Deprecated {
        kind,
        entry,
        name,
        message,
        category: spec.category(),
        doc,
        func: callable.func,
        sink,
    })
}
