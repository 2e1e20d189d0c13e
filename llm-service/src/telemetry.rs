//! Log output for the assistant crates.
//!
//! Events from `llm_service`, `glass_rag` and `api` go through [`layer`]
//! (compact, RFC3339 UTC, source location, span close timings). Everything
//! else is left to whatever plain layer the binary installs next to it.

use std::io::{self, IsTerminal};

use tracing::{Level, Metadata};
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

/// Log targets owned by the assistant, in dependency order.
pub const ASSISTANT_TARGETS: [&str; 3] = ["llm_service", "glass_rag", "api"];

/// `2025-09-12T10:20:30Z`
#[derive(Clone, Copy, Debug, Default)]
struct UtcSeconds;

impl FormatTime for UtcSeconds {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let stamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&stamp)
    }
}

/// True when `meta` was emitted by one of [`ASSISTANT_TARGETS`] (or a submodule).
pub fn is_assistant_event(meta: &Metadata<'_>) -> bool {
    owned_target(meta.target())
}

fn owned_target(target: &str) -> bool {
    ASSISTANT_TARGETS.iter().any(|crate_name| {
        target
            .strip_prefix(crate_name)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}

/// Formatting layer restricted to assistant events.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_timer(UtcSeconds)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(io::stdout().is_terminal())
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .event_format(fmt::format().compact().with_source_location(true))
        .with_filter(filter::filter_fn(is_assistant_event))
}

/// One `crate=level` directive per assistant crate.
pub fn assistant_directives(level: Level) -> Result<Vec<Directive>, ParseError> {
    let level = level.as_str().to_lowercase();
    ASSISTANT_TARGETS
        .iter()
        .map(|target| format!("{target}={level}").parse())
        .collect()
}

/// `RUST_LOG` (or `default`), with the assistant crates set to `level`.
///
/// Crates already named in `RUST_LOG` keep the level given there.
pub fn env_filter(default: &str, level: Level) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(from_env.as_deref(), default, level)
}

fn build_filter(rust_log: Option<&str>, default: &str, level: Level) -> EnvFilter {
    let spec = rust_log.filter(|s| !s.trim().is_empty()).unwrap_or(default);
    let mut filter = EnvFilter::try_new(spec).unwrap_or_else(|_| EnvFilter::new(default));
    let explicit = |target: &str| {
        rust_log.is_some_and(|s| s.split(',').any(|d| d.trim().starts_with(target)))
    };
    if let Ok(directives) = assistant_directives(level) {
        for (target, directive) in ASSISTANT_TARGETS.iter().zip(directives) {
            if !explicit(target) {
                filter = filter.add_directive(directive);
            }
        }
    }
    filter
}
