//! Items that can be marked deprecated.
//!
//! Every kind of item is a variant of [`Target`]. Each callable variant owns
//! the original callable together with its name and documentation, so the
//! engine can build a forwarding wrapper without any runtime introspection.

use std::any::type_name;
use std::fmt;

use crate::docs::Documentation;

/// Kind of a [`Target`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    FreeFunction,
    BoundMethod,
    ClassMethod,
    StaticMethod,
    Class,
    Object,
}

impl TargetKind {
    /// Friendly label used in warning messages.
    pub fn object_type_name(&self) -> &'static str {
        match self {
            TargetKind::Class => "class",
            TargetKind::FreeFunction => "function",
            TargetKind::BoundMethod | TargetKind::ClassMethod | TargetKind::StaticMethod => {
                "method"
            }
            TargetKind::Object => "object",
        }
    }

    pub fn is_method(&self) -> bool {
        matches!(
            self,
            TargetKind::BoundMethod | TargetKind::ClassMethod | TargetKind::StaticMethod
        )
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.object_type_name())
    }
}

/// Which construction entry point of a class gets wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Constructor {
    /// The ordinary initializer.
    #[default]
    Initializer,
    /// A custom allocator that the class uses instead of the default one.
    Allocator,
}

/// A callable with its identity and documentation.
#[derive(Debug, Clone)]
pub struct Callable<F> {
    pub name: String,
    pub func: F,
    pub doc: Documentation,
}

impl<F> Callable<F> {
    fn derived(func: F) -> Self {
        Self {
            name: short_type_name(type_name::<F>()).to_string(),
            func,
            doc: Documentation::default(),
        }
    }
}

/// An item to deprecate.
///
/// Names are derived from the callable's own path when the target is built
/// from a function item (`Target::function(legacy_sum)` is named
/// `legacy_sum`). Closures are named after the function that defines them,
/// so give them an explicit [`Target::named`].
#[derive(Debug, Clone)]
pub enum Target<F> {
    FreeFunction(Callable<F>),
    /// A method with its receiver passed at call time.
    BoundMethod(Callable<F>),
    /// A method receiving the type-level context at call time.
    ClassMethod(Callable<F>),
    StaticMethod(Callable<F>),
    Class {
        entry: Constructor,
        ctor: Callable<F>,
    },
    /// Anything that is neither callable nor constructible.
    Object { name: String },
}

impl<F> Target<F> {
    pub fn function(func: F) -> Self {
        Target::FreeFunction(Callable::derived(func))
    }

    pub fn bound_method(func: F) -> Self {
        Target::BoundMethod(Callable::derived(func))
    }

    pub fn class_method(func: F) -> Self {
        Target::ClassMethod(Callable::derived(func))
    }

    pub fn static_method(func: F) -> Self {
        Target::StaticMethod(Callable::derived(func))
    }

    /// A class whose instances are built by `ctor`.
    ///
    /// The target is named after the constructed type `T`.
    ///
    /// # Example
    /// ```
    /// use solkit::deprecation::{Target, TargetKind};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct OldMap {
    ///     scale: f64,
    /// }
    ///
    /// let target = Target::class(|scale: f64| OldMap { scale });
    /// assert_eq!(target.kind(), TargetKind::Class);
    /// assert_eq!(target.name(), "OldMap");
    /// ```
    pub fn class<A, T>(ctor: F) -> Self
    where
        F: Fn(A) -> T,
    {
        Target::Class {
            entry: Constructor::Initializer,
            ctor: Callable {
                name: short_type_name(type_name::<T>()).to_string(),
                func: ctor,
                doc: Documentation::default(),
            },
        }
    }

    pub fn object(name: impl Into<String>) -> Self {
        Target::Object { name: name.into() }
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            Target::FreeFunction(_) => TargetKind::FreeFunction,
            Target::BoundMethod(_) => TargetKind::BoundMethod,
            Target::ClassMethod(_) => TargetKind::ClassMethod,
            Target::StaticMethod(_) => TargetKind::StaticMethod,
            Target::Class { .. } => TargetKind::Class,
            Target::Object { .. } => TargetKind::Object,
        }
    }

    pub fn name(&self) -> &str {
        match self.callable() {
            Some(callable) => &callable.name,
            None => match self {
                Target::Object { name } => name,
                _ => "",
            },
        }
    }

    pub fn callable(&self) -> Option<&Callable<F>> {
        match self {
            Target::FreeFunction(c)
            | Target::BoundMethod(c)
            | Target::ClassMethod(c)
            | Target::StaticMethod(c)
            | Target::Class { ctor: c, .. } => Some(c),
            Target::Object { .. } => None,
        }
    }

    fn callable_mut(&mut self) -> Option<&mut Callable<F>> {
        match self {
            Target::FreeFunction(c)
            | Target::BoundMethod(c)
            | Target::ClassMethod(c)
            | Target::StaticMethod(c)
            | Target::Class { ctor: c, .. } => Some(c),
            Target::Object { .. } => None,
        }
    }

    pub fn documentation(&self) -> Option<&Documentation> {
        self.callable().map(|c| &c.doc)
    }

    pub fn documentation_mut(&mut self) -> Option<&mut Documentation> {
        self.callable_mut().map(|c| &mut c.doc)
    }

    /// Override the derived name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        match &mut self {
            Target::Object { name: current } => *current = name,
            other => {
                if let Some(callable) = other.callable_mut() {
                    callable.name = name;
                }
            }
        }
        self
    }

    pub fn documented(mut self, doc: impl Into<Documentation>) -> Self {
        if let Some(callable) = self.callable_mut() {
            callable.doc = doc.into();
        }
        self
    }

    /// Mark the documentation as not rewritable.
    pub fn native(self) -> Self {
        self.documented(Documentation::Native)
    }

    /// For classes that construct through a custom allocator. No effect on
    /// other kinds.
    pub fn with_allocator(mut self) -> Self {
        if let Target::Class { entry, .. } = &mut self {
            *entry = Constructor::Allocator;
        }
        self
    }
}

/// Last path segment of a type name, ignoring generic arguments and
/// closure markers.
fn short_type_name(full: &str) -> &str {
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::")
        .find(|segment| !segment.is_empty() && !segment.starts_with('{'))
        .unwrap_or(path)
}
