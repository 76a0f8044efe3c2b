use pyo3::exceptions::{PyDeprecationWarning, PyPendingDeprecationWarning};
use pyo3::prelude::*;
use std::ffi::CString;

use crate::deprecation::{Category, Warning, WarningSink};

/// Raises warnings through Python's `warnings` machinery.
///
/// [`Category::Deprecation`] maps to `DeprecationWarning` and
/// [`Category::PendingDeprecation`] to `PendingDeprecationWarning`, so the
/// usual Python filters apply. If Python refuses the warning (for example
/// under an `error` filter) the failure is logged and the call goes on.
#[derive(Debug, Clone, Copy, Default)]
pub struct PyWarningSink;

impl WarningSink for PyWarningSink {
    fn emit(&self, warning: &Warning) {
        let message = match CString::new(warning.message.as_str()) {
            Ok(message) => message,
            Err(e) => {
                log::warn!("Cannot forward warning to Python: {}", e);
                return;
            }
        };
        // Native frames are not on the Python stack.
        let stacklevel = warning.stacklevel.saturating_sub(1).max(1) as i32;

        Python::attach(|py| {
            let category = match warning.category {
                Category::Deprecation => py.get_type::<PyDeprecationWarning>(),
                Category::PendingDeprecation => py.get_type::<PyPendingDeprecationWarning>(),
            };
            if let Err(err) = PyErr::warn(py, category.as_any(), &message, stacklevel) {
                log::warn!(
                    "Python rejected {} '{}': {}",
                    warning.category,
                    warning.message,
                    err
                );
            }
        });
    }
}
