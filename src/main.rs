use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use veridoc::analysis;
use veridoc::config::Config;
use veridoc::provider::gemini::GeminiClient;
use veridoc::server::{run_server, Engine};
use veridoc::types::{field_label, status_badge};
use veridoc::upload::{encode_preview, split_preview, DocumentFile};

#[derive(Parser)]
#[command(name = "veridoc", version, about = "AI-assisted identity document verification")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Analyze a single document image and print the verdict
    Analyze {
        /// Path to the image file
        file: PathBuf,
        /// Media type; guessed from the extension when omitted
        #[arg(long)]
        mime: Option<String>,
        /// Print the raw JSON verdict instead of a report
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Serve the verification API for the dashboard
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
}

fn guess_mime(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "veridoc=info".into()),
        )
        .init();

    let cli = Cli::parse();
    // credential problems surface here, before any provider call
    let cfg = Config::from_env()?;
    let provider = Arc::new(GeminiClient::new(&cfg)?);

    match cli.cmd {
        Cmd::Analyze { file, mime, json } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let mime_type = mime.unwrap_or_else(|| guess_mime(&file));
            let doc = DocumentFile {
                name: file.display().to_string(),
                mime_type: mime_type.clone(),
                bytes,
            };
            let preview = encode_preview(&doc);
            let (_, payload) = split_preview(&preview)
                .context("preview encoding produced an invalid data URI")?;
            let result = analysis::analyze_document(provider.as_ref(), payload, &mime_type)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e.user_message()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let badge = status_badge(result.status);
                println!("status      : {:?} ({:?})", result.status, badge.tone);
                println!("confidence  : {:.0}%", result.confidence_score);
                println!("summary     : {}", result.summary);
                let extracted = serde_json::to_value(&result.extracted_data)?;
                if let Some(map) = extracted.as_object() {
                    for (key, value) in map {
                        if let Some(v) = value.as_str() {
                            println!("{:<12}: {}", field_label(key), v);
                        }
                    }
                }
                for risk in &result.risk_factors {
                    println!("risk        : {risk}");
                }
            }
        }
        Cmd::Serve { addr } => {
            run_server(Engine { provider }, &addr).await?;
        }
    }
    Ok(())
}
