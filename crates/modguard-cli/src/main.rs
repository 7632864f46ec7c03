//! CLI entry point for modguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. Evaluation lives in `modguard-domain`; filesystem access in
//! `modguard-repo`.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use modguard_types::Verdict;

mod check;
mod render;

#[derive(Parser, Debug)]
#[command(
    name = "modguard",
    version,
    about = "Module isolation guard for Gradle multi-module builds"
)]
struct Cli {
    /// Project root (directory containing app/, platform/, features/).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Also write the JSON report to this path.
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());

    let report = check::run_check(&repo_root)?;

    print!("{}", render::render_text(&repo_root, &report));

    if let Some(out) = &cli.report_out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory: {parent}"))?;
        }
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        std::fs::write(out, json).with_context(|| format!("write report: {out}"))?;
    }

    if report.verdict == Verdict::Fail {
        std::process::exit(1);
    }
    Ok(())
}
