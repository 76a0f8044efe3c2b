//! Solar constants browser.
//!
//! # Usage
//!
//! ```bash
//! solar-constants list            # aligned table of every constant
//! solar-constants list --json     # the same as a JSON array
//! solar-constants find temp       # names matching a substring
//! solar-constants get M_sun       # one constant, by name or alias
//! ```
//!
//! `show <name>` is kept as a deprecated alias of `get`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)
//!
//! Table precision and warning filters come from `solkit.toml` when one is
//! found (see `SolkitConfig::from_default_location`).

use std::env;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use solkit::config::SolkitConfig;
use solkit::constants::{ConstantRecord, ConstantsRegistry, ConstantsResult};
use solkit::deprecation::{
    mark_deprecated, Deprecated, DeprecationResult, DeprecationSpec, LogSink, Target, WarningSink,
};

const USAGE: &str = "usage: solar-constants <list [--json] | find <substring> | get <name>>";

fn describe(record: &ConstantRecord) -> String {
    let mut lines = vec![
        format!("name:        {}", record.name),
        format!("description: {}", record.description),
        format!("value:       {} {}", record.value, record.unit),
    ];
    if !record.aliases.is_empty() {
        lines.insert(1, format!("aliases:     {}", record.aliases.join(", ")));
    }
    match record.uncertainty {
        Some(u) if u == 0.0 => lines.push("uncertainty: exact".to_string()),
        Some(u) => lines.push(format!("uncertainty: {} {}", u, record.unit)),
        None => {}
    }
    lines.push(format!("reference:   {}", record.reference));
    lines.join("\n")
}

/// `get` under its old name, warning on every call.
fn deprecated_show<'a>(
    registry: &'a ConstantsRegistry,
    sink: Arc<dyn WarningSink>,
) -> DeprecationResult<Deprecated<impl Fn(&str) -> ConstantsResult<String> + 'a>> {
    let spec = DeprecationSpec::parse("0.1")?
        .alternative("solar-constants get")
        .object_type("command");
    mark_deprecated(
        Target::function(move |key: &str| registry.get(key).map(describe)).named("show"),
        &spec,
        sink,
    )
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = SolkitConfig::load_or_default().context("Failed to load solkit.toml")?;
    let registry = ConstantsRegistry::solar();
    debug!("Loaded {} constants", registry.len());

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(|s| s.as_str());
    let operand = args.get(1).map(|s| s.as_str());

    match (command, operand) {
        (Some("list"), Some("--json")) => {
            println!("{}", registry.to_json()?);
        }
        (Some("list"), None) => {
            println!("{}", registry.print_all().with_settings(config.table));
        }
        (Some("find"), Some(substring)) => {
            let names = registry.find(Some(substring));
            if names.is_empty() {
                eprintln!("No constant matches '{}'", substring);
            }
            for name in names {
                println!("{}", name);
            }
        }
        (Some("get"), Some(name)) => {
            let record = registry
                .get(name)
                .with_context(|| format!("Lookup of '{}' failed", name))?;
            println!("{}", describe(record));
        }
        (Some("show"), Some(name)) => {
            let show = deprecated_show(&registry, Arc::new(config.warnings.into_sink(LogSink)))?;
            let text = show
                .call(name)
                .with_context(|| format!("Lookup of '{}' failed", name))?;
            println!("{}", text);
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solkit::constants::ConstantsError;
    use solkit::deprecation::{Category, RecordingSink};

    #[test]
    fn test_describe_lists_aliases_and_uncertainty() {
        let registry = ConstantsRegistry::solar();
        let text = describe(registry.get("M_sun").unwrap());
        assert!(text.starts_with("name:        mass\naliases:     M_sun, solar mass\n"));
        assert!(text.contains("\nuncertainty: "));
        assert!(text.ends_with("reference:   IAU 2015 Resolution B 3 + CODATA 2018"));
    }

    #[test]
    fn test_show_warns_and_matches_get() {
        let registry = ConstantsRegistry::solar();
        let sink = Arc::new(RecordingSink::new());
        let show = deprecated_show(&registry, sink.clone()).unwrap();

        assert_eq!(
            show.call("au").unwrap(),
            describe(registry.get("au").unwrap())
        );
        assert!(matches!(show.call("crab"), Err(ConstantsError::NotFound(_))));
        assert_eq!(sink.count(Category::Deprecation), 2);
        assert_eq!(
            sink.warnings()[0].message,
            "The show command is deprecated and may be removed in version 1.1.\n        Use solar-constants get instead."
        );
    }
}
