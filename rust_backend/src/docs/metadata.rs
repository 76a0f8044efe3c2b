//! Structured documentation records.
//!
//! A [`DocMetadata`] splits a numpydoc-style docstring into the pieces that
//! decorators care about: admonition notes placed before the text (such as
//! `.. deprecated::`), the free-text summary, the `Parameters` section and
//! whatever sections follow it. Every edit is a pure `with_*` transformation
//! so the order in which decorators touch the documentation is explicit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::template::{substitute, TemplateError};

/// Marker appended to documentation that consists only of notes.
///
/// reStructuredText tooling warns about an unexpected unindent when a
/// directive is the last thing in a docstring; an escaped space avoids it.
pub const BLANK_MARKER: &str = "\\ ";

const PARAMETERS_HEADER: &str = "Parameters";
const INDENT: &str = "    ";

/// One entry of a `Parameters` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDoc {
    pub name: String,
    pub kind: Option<String>,
    pub description: String,
}

impl ParamDoc {
    pub fn new(
        name: impl Into<String>,
        kind: Option<&str>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.map(str::to_string),
            description: description.into(),
        }
    }

    fn render(&self) -> String {
        let mut out = match &self.kind {
            Some(kind) => format!("{} : {}", self.name, kind),
            None => self.name.clone(),
        };
        for line in self.description.lines() {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(INDENT);
                out.push_str(line);
            }
        }
        out
    }
}

/// Documentation attached to a function, method or class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMetadata {
    /// Directive notes rendered ahead of the summary, first note first.
    pub notes: Vec<String>,
    /// Free text before the `Parameters` section.
    pub summary: String,
    pub parameters: Vec<ParamDoc>,
    /// Everything after the `Parameters` section, kept verbatim.
    pub epilogue: String,
}

impl DocMetadata {
    /// Create documentation with only a summary.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// Parse raw docstring text.
    ///
    /// The text is dedented and surrounding newlines are dropped. A
    /// `Parameters` header underlined with dashes starts the parameter
    /// section, which runs until the next underlined header.
    ///
    /// # Example
    /// ```
    /// use solkit::docs::DocMetadata;
    ///
    /// let doc = DocMetadata::parse(
    ///     "
    ///     Convert a distance.
    ///
    ///     Parameters
    ///     ----------
    ///     value : float
    ///         Distance in meters.
    ///     ",
    /// );
    /// assert_eq!(doc.summary, "Convert a distance.");
    /// assert_eq!(doc.parameters.len(), 1);
    /// assert_eq!(doc.parameters[0].kind.as_deref(), Some("float"));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let text = dedent(raw);
        let text = text.trim_matches('\n');
        let lines: Vec<&str> = text.lines().collect();

        let Some(start) = (0..lines.len()).find(|&i| {
            lines[i].trim() == PARAMETERS_HEADER && is_underline(lines.get(i + 1))
        }) else {
            return Self::new(text);
        };

        let summary = lines[..start].join("\n").trim_end().to_string();
        let body_start = start + 2;
        let end = (body_start..lines.len())
            .find(|&i| is_section_header(&lines, i))
            .unwrap_or(lines.len());

        let parameters = parse_parameters(&lines[body_start..end]);
        let epilogue = if end < lines.len() {
            format!("\n\n{}", lines[end..].join("\n"))
        } else {
            String::new()
        };

        Self {
            notes: Vec::new(),
            summary,
            parameters,
            epilogue,
        }
    }

    /// `true` when there is no text to render apart from notes.
    pub fn is_blank(&self) -> bool {
        self.summary.is_empty() && self.parameters.is_empty() && self.epilogue.is_empty()
    }

    /// Render the documentation back to plain text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for note in &self.notes {
            out.push('\n');
            out.push_str(note);
            out.push_str("\n\n");
        }

        out.push_str(&self.summary);
        if !self.parameters.is_empty() {
            if !self.summary.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(PARAMETERS_HEADER);
            out.push('\n');
            out.push_str(&"-".repeat(PARAMETERS_HEADER.len()));
            for param in &self.parameters {
                out.push('\n');
                out.push_str(&param.render());
            }
        }
        out.push_str(&self.epilogue);

        if !self.notes.is_empty() && self.is_blank() {
            out.push_str(BLANK_MARKER);
        }
        out
    }

    pub fn with_prepended_note(mut self, note: impl Into<String>) -> Self {
        self.notes.insert(0, note.into());
        self
    }

    pub fn with_prepended_text(mut self, text: &str) -> Self {
        self.summary.insert_str(0, text);
        self
    }

    /// Append text after everything else in the documentation.
    pub fn with_appended_text(mut self, text: &str) -> Self {
        self.epilogue.push_str(text);
        self
    }

    pub fn with_parameter(mut self, param: ParamDoc) -> Self {
        self.parameters.push(param);
        self
    }

    /// Expand placeholders in the summary, parameters and epilogue.
    ///
    /// Notes are left alone: they are written by other decorators and are
    /// already final.
    pub fn substituted(mut self, values: &BTreeMap<String, String>) -> Result<Self, TemplateError> {
        self.summary = substitute(&self.summary, values)?;
        for param in &mut self.parameters {
            if let Some(kind) = &param.kind {
                param.kind = Some(substitute(kind, values)?);
            }
            param.description = substitute(&param.description, values)?;
        }
        self.epilogue = substitute(&self.epilogue, values)?;
        Ok(self)
    }
}

impl fmt::Display for DocMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for DocMetadata {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Documentation slot of a decoratable item.
///
/// `Native` marks items whose documentation cannot be rewritten (for
/// example functions re-exported from a foreign library); decorators leave
/// those untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Documentation {
    Editable(DocMetadata),
    Native,
}

impl Documentation {
    pub fn metadata(&self) -> Option<&DocMetadata> {
        match self {
            Documentation::Editable(doc) => Some(doc),
            Documentation::Native => None,
        }
    }

    /// Rendered text, `None` for native documentation.
    pub fn render(&self) -> Option<String> {
        self.metadata().map(DocMetadata::render)
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Documentation::Native)
    }
}

impl Default for Documentation {
    fn default() -> Self {
        Documentation::Editable(DocMetadata::default())
    }
}

impl From<DocMetadata> for Documentation {
    fn from(doc: DocMetadata) -> Self {
        Documentation::Editable(doc)
    }
}

impl From<&str> for Documentation {
    fn from(raw: &str) -> Self {
        Documentation::Editable(DocMetadata::parse(raw))
    }
}

/// Remove the common leading whitespace of all non-blank lines.
///
/// Only whitespace shared character for character is removed, so a tab
/// and a space never cancel out.
fn dedent(text: &str) -> String {
    let margin = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
        .reduce(common_prefix)
        .unwrap_or("");

    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..end]
}

fn is_underline(line: Option<&&str>) -> bool {
    line.map(|l| {
        let l = l.trim();
        l.len() >= 3 && l.chars().all(|c| c == '-')
    })
    .unwrap_or(false)
}

fn is_section_header(lines: &[&str], i: usize) -> bool {
    let line = lines[i];
    !line.trim().is_empty() && !line.starts_with(' ') && is_underline(lines.get(i + 1))
}

fn parse_parameters(lines: &[&str]) -> Vec<ParamDoc> {
    let mut params: Vec<ParamDoc> = Vec::new();
    let mut description: Vec<&str> = Vec::new();

    for &line in lines {
        if line.trim().is_empty() {
            if !params.is_empty() {
                description.push("");
            }
            continue;
        }

        if line.starts_with(' ') || line.starts_with('\t') {
            description.push(line.strip_prefix(INDENT).unwrap_or(line.trim_start()));
            continue;
        }

        finish_description(&mut params, &mut description);
        let (name, kind) = match line.split_once(" : ") {
            Some((name, kind)) => (name.trim(), Some(kind.trim())),
            None => (line.trim(), None),
        };
        params.push(ParamDoc::new(name, kind, String::new()));
    }
    finish_description(&mut params, &mut description);

    params
}

fn finish_description(params: &mut [ParamDoc], description: &mut Vec<&str>) {
    if let Some(last) = params.last_mut() {
        while description.last().is_some_and(|l| l.is_empty()) {
            description.pop();
        }
        last.description = description.join("\n");
    }
    description.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
        Return the solar radius.

        Parameters
        ----------
        unit : str
            Output unit.
        exact
            Whether to use the nominal value.

        Returns
        -------
        float
    ";

    #[test]
    fn test_parse_plain_summary() {
        let doc = DocMetadata::parse("\n    Just a summary.\n    Second line.\n");
        assert_eq!(doc.summary, "Just a summary.\nSecond line.");
        assert!(doc.parameters.is_empty());
        assert!(doc.epilogue.is_empty());
    }

    #[test]
    fn test_dedent_keeps_relative_indent() {
        let doc = DocMetadata::parse("    x\n      y\n\n    z");
        assert_eq!(doc.summary, "x\n  y\n\nz");
    }

    #[test]
    fn test_dedent_with_wide_whitespace() {
        let doc = DocMetadata::parse("  a\n\u{3000}b");
        assert_eq!(doc.summary, "  a\n\u{3000}b");

        let doc = DocMetadata::parse("\u{3000}\u{3000}a\n\u{3000}b");
        assert_eq!(doc.summary, "\u{3000}a\nb");
    }

    #[test]
    fn test_dedent_with_mixed_tabs_and_spaces() {
        assert_eq!(DocMetadata::parse("  a\n\tb").summary, "  a\n\tb");
        assert_eq!(DocMetadata::parse("\t  a\n\t b").summary, " a\nb");
    }

    #[test]
    fn test_parse_sections() {
        let doc = DocMetadata::parse(SAMPLE);
        assert_eq!(doc.summary, "Return the solar radius.");
        assert_eq!(doc.parameters.len(), 2);
        assert_eq!(doc.parameters[0], ParamDoc::new("unit", Some("str"), "Output unit."));
        assert_eq!(
            doc.parameters[1],
            ParamDoc::new("exact", None, "Whether to use the nominal value.")
        );
        assert_eq!(doc.epilogue, "\n\nReturns\n-------\nfloat");
    }

    #[test]
    fn test_render_round_trip() {
        let doc = DocMetadata::parse(SAMPLE);
        let rendered = doc.render();
        assert_eq!(
            rendered,
            "Return the solar radius.\n\nParameters\n----------\nunit : str\n    Output unit.\nexact\n    Whether to use the nominal value.\n\nReturns\n-------\nfloat"
        );
        assert_eq!(DocMetadata::parse(&rendered), doc);
    }

    #[test]
    fn test_note_on_blank_doc_gets_marker() {
        let doc = DocMetadata::default().with_prepended_note(".. deprecated:: 1.0\n    Gone.");
        assert_eq!(doc.render(), "\n.. deprecated:: 1.0\n    Gone.\n\n\\ ");
    }

    #[test]
    fn test_note_before_summary() {
        let doc = DocMetadata::new("Summary.").with_prepended_note("note");
        assert_eq!(doc.render(), "\nnote\n\nSummary.");
    }

    #[test]
    fn test_notes_are_not_substituted() {
        let mut values = BTreeMap::new();
        values.insert("x".to_string(), "1".to_string());
        let doc = DocMetadata::new("value {x}")
            .with_prepended_note("{untouched}")
            .substituted(&values)
            .unwrap();
        assert_eq!(doc.summary, "value 1");
        assert_eq!(doc.notes, vec!["{untouched}".to_string()]);
    }

    #[test]
    fn test_native_documentation_has_no_text() {
        assert_eq!(Documentation::Native.render(), None);
        assert!(Documentation::Native.is_native());
        assert_eq!(Documentation::from("abc").render().as_deref(), Some("abc"));
    }
}
