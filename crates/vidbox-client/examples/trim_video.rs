//! Submit a trim job and wait for the artifact.
//!
//! Usage: `cargo run --example trim_video -- <file> <start-secs> <end-secs> [format]`
//!
//! Backend location and polling behaviour come from the environment
//! (`VIDBOX_API_URL`, `VIDBOX_POLL_INTERVAL_MS`, ...).

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use vidbox_client::ApiClient;
use vidbox_models::{SubmissionParams, UploadFile};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(start), Some(end)) = (args.next(), args.next(), args.next()) else {
        bail!("usage: trim_video <file> <start-secs> <end-secs> [format]");
    };
    let output_format = args.next().unwrap_or_else(|| "mp4".to_string());
    let start: f64 = start.parse().context("start must be a number of seconds")?;
    let end: f64 = end.parse().context("end must be a number of seconds")?;

    let data = std::fs::read(&path).with_context(|| format!("reading {path}"))?;
    let name = std::path::Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("input.mp4")
        .to_string();

    let client = ApiClient::from_env()?;
    let job = client
        .submit(SubmissionParams::Trim {
            file: UploadFile::new(name, data),
            start_time: start,
            end_time: end,
            output_format,
            duration: None,
        })
        .await?;
    println!("job {} accepted ({})", job.id, job.status);

    let handle = client.start_polling(job);
    let mut updates = handle.updates();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let job = updates.borrow().clone();
            println!("  {} {}%", job.status, job.progress);
        }
    });

    let finished = handle.join().await?;
    match client.resolve_download_reference(&finished) {
        Some(url) => println!("artifact ready: {url}"),
        None => println!(
            "job failed: {}",
            finished.error_message().unwrap_or("unknown error")
        ),
    }
    Ok(())
}
