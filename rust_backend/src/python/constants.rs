use once_cell::sync::OnceCell;
use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::sync::Arc;

use super::warnings::PyWarningSink;
use crate::constants::{solar_registry, ConstantRecord, ConstantsError, ConstantsResult};
use crate::deprecation::{mark_deprecated, Deprecated, DeprecationError, DeprecationSpec, Target};

/// A solar constant as seen from Python.
#[pyclass(name = "Constant", module = "solkit", frozen, get_all)]
#[derive(Debug, Clone, PartialEq)]
pub struct PyConstant {
    pub name: String,
    pub aliases: Vec<String>,
    pub description: String,
    pub value: f64,
    pub unit: String,
    pub uncertainty: Option<f64>,
    pub reference: String,
}

#[pymethods]
impl PyConstant {
    fn __repr__(&self) -> String {
        format!("<Constant {}: {} {}>", self.name, self.value, self.unit)
    }

    fn __float__(&self) -> f64 {
        self.value
    }
}

impl From<&ConstantRecord> for PyConstant {
    fn from(record: &ConstantRecord) -> Self {
        Self {
            name: record.name.to_string(),
            aliases: record.aliases.iter().map(|a| a.to_string()).collect(),
            description: record.description.to_string(),
            value: record.value,
            unit: record.unit.to_string(),
            uncertainty: record.uncertainty,
            reference: record.reference.to_string(),
        }
    }
}

impl From<ConstantsError> for PyErr {
    fn from(err: ConstantsError) -> Self {
        match err {
            ConstantsError::NotFound(_) => PyKeyError::new_err(err.to_string()),
            ConstantsError::UnitMismatch { .. } => PyValueError::new_err(err.to_string()),
            ConstantsError::Serialization(_) => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

impl From<DeprecationError> for PyErr {
    fn from(err: DeprecationError) -> Self {
        PyRuntimeError::new_err(err.to_string())
    }
}

type LookupFn = fn(&str) -> ConstantsResult<PyConstant>;

fn lookup(name: &str) -> ConstantsResult<PyConstant> {
    solar_registry().get(name).map(PyConstant::from)
}

static DEPRECATED_LOOKUP: OnceCell<Deprecated<LookupFn>> = OnceCell::new();

fn deprecated_lookup() -> Result<&'static Deprecated<LookupFn>, DeprecationError> {
    DEPRECATED_LOOKUP.get_or_try_init(|| {
        let spec = DeprecationSpec::parse("0.1")?.alternative("get");
        let target = Target::function(lookup as LookupFn)
            .named("constant")
            .documented("Get a solar constant by name or alias.");
        mark_deprecated(target, &spec, Arc::new(PyWarningSink))
    })
}

/// Canonical names of the constants whose name or alias contains
/// `substring`, ignoring case. All names when `substring` is omitted.
#[pyfunction]
#[pyo3(signature = (substring=None))]
pub fn find(substring: Option<&str>) -> Vec<&'static str> {
    solar_registry().find(substring)
}

/// Look up a constant by name or alias. Raises `KeyError` when unknown.
#[pyfunction]
pub fn get(name: &str) -> PyResult<PyConstant> {
    Ok(lookup(name)?)
}

/// The constants table as text.
#[pyfunction]
pub fn print_all() -> String {
    solar_registry().print_all().to_string()
}

#[pyfunction]
pub fn constants_json() -> PyResult<String> {
    Ok(solar_registry().to_json()?)
}

/// Deprecated alias of `get`.
#[pyfunction]
pub fn constant(name: &str) -> PyResult<PyConstant> {
    let wrapped = deprecated_lookup()?;
    Ok(wrapped.call(name)?)
}

/// Register constant lookup functions and classes.
pub fn register_constants(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyConstant>()?;
    m.add_function(wrap_pyfunction!(find, m)?)?;
    m.add_function(wrap_pyfunction!(get, m)?)?;
    m.add_function(wrap_pyfunction!(print_all, m)?)?;
    m.add_function(wrap_pyfunction!(constants_json, m)?)?;
    m.add_function(wrap_pyfunction!(constant, m)?)?;
    Ok(())
}

#[cfg(all(test, feature = "python"))]
mod tests {
    use super::*;
    use crate::deprecation::TargetKind;

    #[test]
    fn test_lookup_by_alias() {
        let constant = lookup("M_sun").unwrap();
        assert_eq!(constant.name, "mass");
        assert_eq!(constant.unit, "kg");
        assert!(matches!(lookup("crab"), Err(ConstantsError::NotFound(_))));
    }

    #[test]
    fn test_constant_alias_is_deprecated() {
        let wrapped = deprecated_lookup().unwrap();
        assert_eq!(wrapped.kind(), TargetKind::FreeFunction);
        assert_eq!(wrapped.name(), "constant");
        assert_eq!(
            wrapped.message(),
            "The constant function is deprecated and may be removed in version 1.1.\n        Use get instead."
        );

        let doc = wrapped.documentation().render().unwrap();
        assert!(doc.starts_with("\n.. deprecated:: 0.1\n"));
        assert!(doc.ends_with("Get a solar constant by name or alias."));
        assert!(std::ptr::eq(wrapped, deprecated_lookup().unwrap()));
    }
}
