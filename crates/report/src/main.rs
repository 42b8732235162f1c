use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;

use pantry_report::{ReportConfig, Snapshot, build_report};

fn main() -> anyhow::Result<()> {
    let config = ReportConfig::from_env(std::env::args_os().nth(1).map(PathBuf::from))?;
    pantry_observability::init_with(config.log_format);

    let raw = std::fs::read_to_string(&config.snapshot_path)
        .with_context(|| format!("failed to read snapshot {}", config.snapshot_path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot {}", config.snapshot_path.display()))?;

    let now = snapshot.generated_at.unwrap_or_else(Utc::now);
    tracing::info!(
        snapshot = %config.snapshot_path.display(),
        items = snapshot.items.len(),
        %now,
        "building pantry report"
    );

    let report = build_report(snapshot, now, &config.insights)?;

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report).context("failed to write report")?;
    writeln!(out).context("failed to write report")?;
    Ok(())
}
