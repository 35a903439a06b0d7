//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, self.generate_template()?)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!(
            "  Use it with: relkomma check -i <FILE> -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Default configuration with commented-out rule settings
    fn generate_template(&self) -> Result<String> {
        let defaults = CliConfig::default().to_toml_string()?;
        Ok(format!(
            r#"# relkomma configuration

# [rule]
# "before" reports a missing comma in front of a relative clause,
# "after" is reserved for the comma closing the clause
# variant = "before"
# message = "Sollten Sie hier ein Komma einfügen (Relativsatz)?"

{defaults}"#
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_back() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("unused.toml"),
            force: false,
        };
        let template = args.generate_template().unwrap();
        let config = CliConfig::from_toml_str(&template).unwrap();
        assert_eq!(config.output.format, "text");
        assert!(config.rule.variant.is_none());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("relkomma.toml");
        fs::write(&path, "# mine").unwrap();

        let args = GenerateConfigArgs {
            output: path.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        let args = GenerateConfigArgs {
            output: path.clone(),
            force: true,
        };
        args.execute().unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[output]"));
    }
}
