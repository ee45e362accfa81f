use std::path::PathBuf;

use batis_codegen::{GeneratedFile, WriteStatus};
use clap::Args;
use eyre::{Context, Result};

const STARTER_MANIFEST: &str = r#"[generator]
targets = ["java"]
model_package = "com.example.model"
mapper_package = "com.example.mapper"

[comments]
suppress_date = false
suppress_all_comments = false
add_remark_comments = true

[tables.customer]
remarks = "holds customer records"

[tables.customer.columns.cust_id]
type = "java.lang.Long"
primary_key = true
remarks = "surrogate key"

[tables.customer.columns.cust_name]
type = "java.lang.String"
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create batis.toml in (defaults to current directory)
    #[arg(default_value = ".")]
    pub directory: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let file = GeneratedFile::new("batis.toml", STARTER_MANIFEST).if_missing();
        let status = file
            .write(&self.directory)
            .wrap_err("Failed to write batis.toml")?;

        match status {
            WriteStatus::Written => {
                println!("Created {}", self.directory.join("batis.toml").display());
                println!("Describe your tables there, then run 'batis generate'.");
            }
            WriteStatus::Skipped => {
                println!(
                    "{} already exists, leaving it untouched",
                    self.directory.join("batis.toml").display()
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use batis_schema::Manifest;

    use super::*;

    #[test]
    fn test_starter_manifest_parses() {
        let manifest = Manifest::from_str(STARTER_MANIFEST).unwrap();
        assert_eq!(manifest.tables.len(), 1);
        assert!(manifest.comments.add_remark_comments);
    }

    #[test]
    fn test_init_respects_existing_manifest() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("batis.toml"), "# mine").unwrap();

        let cmd = InitCommand {
            directory: temp.path().to_path_buf(),
        };
        cmd.run().unwrap();

        assert_eq!(
            std::fs::read_to_string(temp.path().join("batis.toml")).unwrap(),
            "# mine"
        );
    }
}
