// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::client::CustomizationsClient;
use crate::config::ClientConfig;
use crate::controller::{validate_form, SubmissionController, SubmitOutcome};
use crate::form::CustomizationsForm;

#[derive(Parser)]
#[command(name = "jobscout")]
#[command(about = "Validate and submit job-search customizations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a form document without submitting it
    Validate { form: PathBuf },
    /// Validate a form document and post it to the server
    Submit {
        form: PathBuf,
        /// Print the JSON body instead of sending it
        #[arg(long)]
        dry_run: bool,
        /// Skip fetching the redirect page after a successful save
        #[arg(long)]
        no_follow: bool,
    },
    /// Write a starter form document to edit and submit
    Init { path: PathBuf },
}

/// Run one CLI command, returning the process exit code.
pub async fn handle_command(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Validate { form } => {
            let form = CustomizationsForm::load(&form)?;
            match validate_form(&form) {
                Ok(_) => {
                    println!("✓ Form is valid");
                    Ok(0)
                }
                Err(report) => {
                    print!("{}", report.render_text());
                    Ok(1)
                }
            }
        }

        Command::Submit {
            form,
            dry_run,
            no_follow,
        } => {
            let form = CustomizationsForm::load(&form)?;

            if dry_run {
                return match validate_form(&form) {
                    Ok(payload) => {
                        println!("{}", serde_json::to_string_pretty(&payload)?);
                        Ok(0)
                    }
                    Err(report) => {
                        print!("{}", report.render_text());
                        Ok(1)
                    }
                };
            }

            let config = ClientConfig::load()?;
            let client =
                CustomizationsClient::new(config.server_url, config.timeout_seconds)?;
            let controller = SubmissionController::new(client);

            match controller.submit(&form).await {
                SubmitOutcome::Accepted { redirect } => {
                    println!("✓ Customizations saved");
                    if no_follow {
                        info!("Skipping redirect to {}", redirect);
                    } else {
                        let page = controller
                            .client()
                            .fetch_customizations_page()
                            .await
                            .context("Saved, but failed to fetch the customizations page")?;
                        info!("Fetched {} ({} bytes)", redirect, page.len());
                    }
                    Ok(0)
                }
                SubmitOutcome::Rejected(report) | SubmitOutcome::Failed(report) => {
                    print!("{}", report.render_text());
                    Ok(1)
                }
                SubmitOutcome::InFlight => {
                    // Unreachable from the CLI's single submit, kept for completeness.
                    println!("A submission is already in flight");
                    Ok(1)
                }
            }
        }

        Command::Init { path } => {
            write_starter_document(&path)?;
            println!("✓ Wrote starter form document: {}", path.display());
            println!("  Edit it, then run: jobscout submit {}", path.display());
            Ok(0)
        }
    }
}

fn write_starter_document(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Refusing to overwrite existing file: {}", path.display());
    }

    let starter = CustomizationsForm::starter();
    let content = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::to_string_pretty(&starter)?,
        _ => serde_yaml::to_string(&starter)?,
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write starter document: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_document_refuses_to_overwrite() {
        let dir = std::env::temp_dir().join("jobscout-cli-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("existing.yaml");
        std::fs::write(&path, "search_terms: []").unwrap();

        let err = write_starter_document(&path).unwrap_err();
        assert!(err.to_string().contains("Refusing to overwrite"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_starter_document_is_loadable_and_valid() {
        let dir = std::env::temp_dir().join("jobscout-cli-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("starter.yaml");
        let _ = std::fs::remove_file(&path);

        write_starter_document(&path).unwrap();
        let form = CustomizationsForm::load(&path).unwrap();
        assert!(validate_form(&form).is_ok());

        std::fs::remove_file(&path).unwrap();
    }
}
