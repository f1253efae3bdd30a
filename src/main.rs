use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use textdrop::{
    config::Config,
    file::{FileFactory, FileKind},
    intake::{IntakeController, UploadState},
    models::IncomingFile,
    utils,
};

#[derive(Parser)]
#[command(name = "textdrop")]
#[command(about = "Drop in a .txt or .docx file and get its text back")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the text content of a document
    Extract {
        /// File to extract
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the text to this file instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Overwrite an existing output file without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Show what the intake pipeline sees for a file
    Info {
        /// File to inspect
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();

    match cli.command {
        Commands::Extract { file, output, yes } => {
            let incoming = IncomingFile::from_path(&file).await?;

            let spinner = ProgressBar::new_spinner();
            spinner
                .set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
            spinner.set_message(format!("Extracting text from {}...", incoming.name));
            spinner.enable_steady_tick(std::time::Duration::from_millis(100));

            let mut controller = IntakeController::with_config(config.intake);
            controller.submit(incoming).await;

            match controller.state() {
                UploadState::Loaded(doc) => {
                    spinner.finish_and_clear();
                    match output {
                        Some(out) => {
                            if out.exists() && !yes {
                                let overwrite = Confirm::new()
                                    .with_prompt(format!(
                                        "{} already exists. Overwrite?",
                                        out.display()
                                    ))
                                    .default(false)
                                    .interact()?;
                                if !overwrite {
                                    println!("Aborted.");
                                    return Ok(());
                                }
                            }

                            tokio::fs::write(&out, &doc.content).await.with_context(|| {
                                format!("Failed to write output file: {}", out.display())
                            })?;
                            println!(
                                "Wrote {} of text to {}",
                                utils::format_size(doc.content.len() as u64),
                                out.display()
                            );
                        }
                        None => println!("{}", doc.content),
                    }
                }
                UploadState::Failed(message) => {
                    spinner.finish_and_clear();
                    bail!(message.clone());
                }
                state => {
                    spinner.finish_and_clear();
                    bail!("Upload ended in an unexpected state: {:?}", state);
                }
            }
        }
        Commands::Info { file, json } => {
            let incoming = IncomingFile::from_path(&file).await?;

            let name = incoming.name.clone();
            let size = incoming.size;
            let media_type = incoming.media_type.clone();
            let kind = FileKind::detect(&media_type, &name);

            let source = FileFactory::create(incoming);
            let details = match source.to_metadata().await {
                Ok(details) => details,
                Err(e) => {
                    eprintln!("Warning: failed to read document details: {}", e);
                    None
                }
            };

            if json {
                let mut value = serde_json::json!({
                    "name": name,
                    "size": size,
                    "size_display": utils::format_size(size),
                    "media_type": media_type,
                    "kind": kind.to_string(),
                });
                if let Some(details) = details {
                    value["details"] = details;
                }
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("Name:       {}", name);
                println!("Size:       {} ({} bytes)", utils::format_size(size), size);
                println!(
                    "Media type: {}",
                    if media_type.is_empty() {
                        "(none)"
                    } else {
                        &media_type
                    }
                );
                println!("Kind:       {}", kind);
                if let Some(details) = details {
                    println!("Details:    {}", details);
                }
            }
        }
    }

    Ok(())
}
