use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "uppercase-cli")]
#[command(about = "Command-line client for the uppercase service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Uppercase a piece of text
    Text { text: String },
    /// Upload a text file and uppercase its content
    File { path: PathBuf },
    /// Check service health
    Health,
    /// Show the endpoint directory
    Info,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Text { text } => {
            client
                .post(format!("{}/api/uppercase", base))
                .json(&json!({ "text": text }))
                .send()
                .await?
        }
        Commands::File { path } => {
            let content = tokio::fs::read(&path).await?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload.txt".to_string());
            // The server falls back to the extension when the media type is generic.
            let part = Part::bytes(content)
                .file_name(file_name)
                .mime_str("application/octet-stream")?;
            client
                .post(format!("{}/api/uppercase-file", base))
                .multipart(Form::new().part("file", part))
                .send()
                .await?
        }
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
        Commands::Info => client.get(format!("{}/", base)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
