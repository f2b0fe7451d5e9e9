//! Asynchronous job-lifecycle client for the VidBox media backend.
//!
//! The backend does all heavy media work (encoding, downloading, frame
//! extraction); this crate is the thin client every feature shares:
//!
//! 1. [`ApiClient::submit`] validates parameters locally and creates a job.
//! 2. [`ApiClient::start_polling`] watches the job at a fixed cadence until
//!    it reaches a terminal state, publishing snapshots on a watch channel.
//! 3. [`ApiClient::resolve_download_reference`] derives the artifact URL
//!    from a completed job.
//!
//! ```no_run
//! use vidbox_client::{ApiClient, ClientConfig};
//! use vidbox_models::{SubmissionParams, UploadFile};
//!
//! # async fn run() -> Result<(), vidbox_client::ClientError> {
//! let client = ApiClient::new(ClientConfig::default())?;
//!
//! let job = client
//!     .submit(SubmissionParams::Trim {
//!         file: UploadFile::new("a.mp4", std::fs::read("a.mp4").unwrap()),
//!         start_time: 10.0,
//!         end_time: 20.0,
//!         output_format: "mp4".into(),
//!         duration: None,
//!     })
//!     .await?;
//!
//! let handle = client.start_polling(job);
//! let finished = handle.join().await?;
//! if let Some(url) = client.resolve_download_reference(&finished) {
//!     println!("artifact at {url}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
mod messages;
pub mod poll;

pub use api::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL};
pub use error::{ClientError, ClientResult};
pub use poll::PollHandle;
