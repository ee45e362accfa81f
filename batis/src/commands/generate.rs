use std::path::PathBuf;

use batis_codegen::{CommentConfig, DefaultCommentGenerator, GeneratedFile, WriteStatus};
use batis_codegen_java::{JavaGenerator, JavaPluginChain};
use batis_codegen_kotlin::{KotlinGenerator, KotlinPluginChain};
use batis_schema::{Manifest, Target};
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::reports::{FileReport, GenerateReport};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to batis.toml (defaults to ./batis.toml)
    #[arg(short, long, default_value = "batis.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Emit a machine-readable report
    #[arg(long)]
    pub json: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::open(&self.config).unwrap_or_exit();

        let config = match CommentConfig::from_options(&manifest.comments) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        };
        let hook = DefaultCommentGenerator::new(config);

        let java_plugins = JavaPluginChain::new();
        let kotlin_plugins = KotlinPluginChain::new();

        let mut files: Vec<GeneratedFile> = Vec::new();
        for target in &manifest.generator.targets {
            match target {
                Target::Java => {
                    let generated = JavaGenerator::new(&manifest, &hook, &java_plugins)
                        .generate()
                        .wrap_err("Failed to generate Java sources")?;
                    files.extend(generated);
                }
                Target::Kotlin => {
                    let generated = KotlinGenerator::new(&manifest, &hook, &kotlin_plugins)
                        .generate()
                        .wrap_err("Failed to generate Kotlin sources")?;
                    files.extend(generated);
                }
            }
        }

        let mut report = GenerateReport {
            table_count: manifest.tables.len(),
            dry_run: self.dry_run,
            files: Vec::new(),
        };

        for file in &files {
            let written = if self.dry_run {
                false
            } else {
                let status = file
                    .write(&self.output)
                    .wrap_err_with(|| format!("Failed to write {}", file.path().display()))?;
                status == WriteStatus::Written
            };
            report.files.push(FileReport {
                path: file.path().display().to_string(),
                lines: file.content().lines().count(),
                written,
            });
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else if self.dry_run {
            for file in &files {
                println!("// {}", file.path().display());
                println!("{}", file.content());
            }
        } else {
            println!(
                "Generated {} files for {} tables under {}",
                report.files.len(),
                report.table_count,
                self.output.display()
            );
            for file in &report.files {
                println!("  + {}", file.path);
            }
        }
        Ok(())
    }
}
