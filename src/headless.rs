//! One-shot query mode: load the index, match once, print, exit.

use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tracing::warn;

use storefront_search::{CancelToken, IndexLoader, QueryResult, SearchConfig, SearchSession};

pub fn run(
    runtime: &Runtime,
    loader: IndexLoader,
    config: &SearchConfig,
    query: &str,
    json: bool,
) -> Result<()> {
    let report = runtime.block_on(loader.load(&CancelToken::new()));
    if !report.is_complete() {
        warn!(
            failures = report.failures.len(),
            "search index partially loaded; results may be incomplete"
        );
    }

    let mut session = SearchSession::new();
    session.mark_loading();
    session.install_index(Arc::new(report.index));
    session.set_query(query);
    let shown = session.results().truncated(config.display_limit);

    if json {
        let out = serde_json::to_string_pretty(&shown).context("failed to encode results")?;
        println!("{out}");
    } else {
        print!("{}", render_text(&shown, query));
    }
    Ok(())
}

/// Plain-text listing grouped the same way as the results panel.
pub fn render_text(results: &QueryResult, query: &str) -> String {
    let mut out = String::new();
    if query.is_empty() {
        return out;
    }
    if results.is_empty() {
        let _ = writeln!(out, "No results found for \"{query}\"");
        return out;
    }
    for group in results.groups() {
        if group.hits.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}", group.kind.label());
        for hit in &group.hits {
            let _ = match hit.subtitle() {
                Some(sub) if !sub.is_empty() => writeln!(out, "  {} ({})", hit.title(), sub),
                _ => writeln!(out, "  {}", hit.title()),
            };
        }
    }
    out
}
