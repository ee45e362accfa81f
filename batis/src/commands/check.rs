use std::path::PathBuf;

use batis_codegen::CommentConfig;
use batis_schema::{Manifest, Target};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::reports::CheckReport;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to batis.toml (defaults to ./batis.toml)
    #[arg(short, long, default_value = "batis.toml")]
    pub config: PathBuf,

    /// Emit a machine-readable report
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::open(&self.config).unwrap_or_exit();

        // Configuration errors fail here, before any generation starts.
        if let Err(e) = CommentConfig::from_options(&manifest.comments) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }

        let report = CheckReport {
            ok: true,
            targets: manifest
                .generator
                .targets
                .iter()
                .map(|t| target_name(*t).to_string())
                .collect(),
            tables: manifest.tables.keys().cloned().collect(),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{} OK", self.config.display());
            println!("Targets: {}", report.targets.join(", "));
            println!("Tables ({}):", report.tables.len());
            for table in &report.tables {
                println!("  {table}");
            }
        }
        Ok(())
    }
}

fn target_name(target: Target) -> &'static str {
    match target {
        Target::Java => "java",
        Target::Kotlin => "kotlin",
    }
}
