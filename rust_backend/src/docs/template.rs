//! Named placeholder substitution for documentation and warning text.
//!
//! The syntax follows Python's `str.format` for the subset we need:
//! `{name}` is replaced by the value registered under `name`, and doubled
//! braces (`{{`, `}}`) collapse to a literal brace. Positional fields,
//! conversions (`!r`) and format specs (`:>10`) are not supported; they are
//! reported as unknown placeholders.
//!
//! Substituted values are inserted verbatim. Running the same text through
//! [`substitute`] twice re-interprets any braces the first pass inserted.

use std::collections::BTreeMap;

/// Errors raised while expanding a template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("Unknown placeholder '{{{0}}}'")]
    UnknownPlaceholder(String),

    #[error("Unbalanced brace at byte {position}")]
    Unbalanced { position: usize },
}

/// Expand every `{name}` in `text` using `values`.
///
/// # Arguments
/// * `text` - Template text
/// * `values` - Placeholder name to replacement text
///
/// # Returns
/// * `Ok(String)` with all placeholders expanded
/// * `Err(TemplateError)` on an unknown name or a stray brace
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use solkit::docs::template::substitute;
///
/// let mut values = BTreeMap::new();
/// values.insert("unit".to_string(), "km".to_string());
/// let out = substitute("Distance in {unit} ({{approx}})", &values).unwrap();
/// assert_eq!(out, "Distance in km ({approx})");
/// ```
pub fn substitute(text: &str, values: &BTreeMap<String, String>) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some(&(_, '{')) = chars.peek() {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut key = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    match c {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => return Err(TemplateError::Unbalanced { position }),
                        other => key.push(other),
                    }
                }
                if !closed {
                    return Err(TemplateError::Unbalanced { position });
                }

                let value = values
                    .get(&key)
                    .ok_or(TemplateError::UnknownPlaceholder(key))?;
                out.push_str(value);
            }
            '}' => {
                if let Some(&(_, '}')) = chars.peek() {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(TemplateError::Unbalanced { position });
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let out = substitute("no placeholders here", &BTreeMap::new()).unwrap();
        assert_eq!(out, "no placeholders here");
    }

    #[test]
    fn test_replaces_repeated_placeholders() {
        let out = substitute("{a} and {a} and {b}", &values(&[("a", "x"), ("b", "y")])).unwrap();
        assert_eq!(out, "x and x and y");
    }

    #[test]
    fn test_doubled_braces_become_literals() {
        let out = substitute("{{literal}} {v}", &values(&[("v", "1")])).unwrap();
        assert_eq!(out, "{literal} 1");
    }

    #[test]
    fn test_unknown_placeholder() {
        let err = substitute("{missing}", &BTreeMap::new()).unwrap_err();
        assert_eq!(err, TemplateError::UnknownPlaceholder("missing".to_string()));
    }

    #[test]
    fn test_unclosed_brace() {
        let err = substitute("abc {oops", &values(&[("oops", "")])).unwrap_err();
        assert_eq!(err, TemplateError::Unbalanced { position: 4 });
    }

    #[test]
    fn test_stray_closing_brace() {
        let err = substitute("a } b", &BTreeMap::new()).unwrap_err();
        assert_eq!(err, TemplateError::Unbalanced { position: 2 });
    }

    #[test]
    fn test_values_are_not_escaped() {
        let first = substitute("{v}", &values(&[("v", "{inner}")])).unwrap();
        assert_eq!(first, "{inner}");
        // A second pass sees the inserted braces as a placeholder.
        let second = substitute(&first, &values(&[("inner", "ok")])).unwrap();
        assert_eq!(second, "ok");
    }
}
