//! Image tooling for the admin workflow: validate candidates before upload,
//! verify already-hosted URLs, probe the hosting service.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Subcommand;
use multimarca_core::AppConfig;
use multimarca_store::{
    check_host_status, validate_batch, verify_image_urls, HostStatus, ImageCandidate,
    ImageConstraints,
};

#[derive(Debug, Subcommand)]
pub enum ImagesCommands {
    /// Validate candidate files against the upload constraints.
    Validate {
        /// Files to validate.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// HEAD-check hosted image URLs.
    Verify {
        /// URLs to check.
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Probe the configured image host.
    Status {
        /// Override the configured host URL.
        #[arg(long)]
        url: Option<String>,
    },
}

pub async fn run(command: ImagesCommands) -> anyhow::Result<()> {
    let config = multimarca_core::load_app_config()?;
    match command {
        ImagesCommands::Validate { files } => run_validate(&files, &config),
        ImagesCommands::Verify { urls } => run_verify(urls, &config).await,
        ImagesCommands::Status { url } => run_status(url, &config).await,
    }
}

fn content_type_for(path: &Path) -> String {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
    .to_string()
}

fn run_validate(files: &[PathBuf], config: &AppConfig) -> anyhow::Result<()> {
    let mut candidates = Vec::new();
    for path in files {
        let data =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("sin-nombre")
            .to_string();
        candidates.push(ImageCandidate {
            file_name,
            content_type: content_type_for(path),
            data,
        });
    }

    let constraints = ImageConstraints::with_max_bytes(config.image_max_bytes);
    let batch = validate_batch(candidates, &constraints);

    for candidate in &batch.valid {
        println!("OK  {}", candidate.file_name);
    }
    for rejected in &batch.rejected {
        println!("BAD {}: {}", rejected.file_name, rejected.reason);
    }
    println!(
        "{} válidas, {} rechazadas",
        batch.valid.len(),
        batch.rejected.len()
    );

    if !batch.all_valid() {
        anyhow::bail!("{} imagen(es) rechazada(s)", batch.rejected.len());
    }
    Ok(())
}

async fn run_verify(urls: Vec<String>, config: &AppConfig) -> anyhow::Result<()> {
    tracing::info!(count = urls.len(), "verifying hosted image URLs");
    let client = http_client(config)?;
    let report = verify_image_urls(&client, urls, config.url_check_concurrency).await;
    for failure in &report.failures {
        println!("BAD {}: {}", failure.url, failure.reason);
    }
    println!("verified image URLs: {} OK, {} bad", report.ok, report.bad());
    Ok(())
}

async fn run_status(url: Option<String>, config: &AppConfig) -> anyhow::Result<()> {
    let target = url
        .or_else(|| config.image_host_url.clone())
        .context("no image host configured; set MULTIMARCA_IMAGE_HOST_URL or pass --url")?;
    let client = http_client(config)?;
    match check_host_status(&client, &target).await {
        HostStatus::Reachable => println!("{target}: reachable"),
        HostStatus::Unreachable { reason } => {
            println!("{target}: unreachable ({reason})");
            anyhow::bail!("image host unreachable");
        }
    }
    Ok(())
}

fn http_client(config: &AppConfig) -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .user_agent("multimarca-cli/0.1")
        .build()?)
}
