//! HTTP client for the VidBox backend.
//!
//! One generic client covers all five job kinds; the only per-kind pieces
//! are the endpoint table, the request body, and the fallback messages.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use vidbox_models::{
    ApiEnvelope, Job, JobKind, JobSnapshot, SubmissionParams, UploadFile, ValidationError,
    VideoInfo,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::messages;

/// Submission endpoint for a job kind; the status endpoint appends `/{id}`.
fn submit_path(kind: JobKind) -> &'static str {
    match kind {
        JobKind::Download => "/video/download",
        JobKind::Convert => "/video/convert",
        JobKind::Trim => "/video/trim",
        JobKind::Screenshot => "/video/screenshot",
        JobKind::Compress => "/video/compress",
    }
}

fn status_path(kind: JobKind, id: &str) -> String {
    format!("{}/{}", submit_path(kind), id)
}

#[derive(Serialize)]
struct DownloadRequest<'a> {
    url: &'a str,
    itag: u32,
}

/// Client for the VidBox HTTP API.
///
/// Cheap to clone; clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Create a client from explicit configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::api(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Create a client configured from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Decode an envelope response, tolerating non-2xx statuses.
    ///
    /// The backend returns its envelope on error statuses too, so the body
    /// is parsed regardless of the status code; only an unreadable body
    /// falls back to the fixed message.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T, String> {
        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|_| fallback.to_string())?;
        envelope.into_result(fallback)
    }

    /// Fetch YouTube video metadata for a download.
    ///
    /// The URL is validated locally first; an invalid URL never reaches the
    /// backend.
    pub async fn video_info(&self, video_url: &str) -> ClientResult<VideoInfo> {
        if vidbox_models::extract_youtube_id(video_url).is_none() {
            return Err(ValidationError::InvalidVideoUrl.into());
        }

        let response = self
            .http
            .get(self.url("/video/info"))
            .query(&[("url", video_url)])
            .send()
            .await
            .map_err(|e| {
                warn!("video info request failed: {e}");
                ClientError::api(messages::VIDEO_INFO_FALLBACK)
            })?;

        Self::decode(response, messages::VIDEO_INFO_FALLBACK)
            .await
            .map_err(ClientError::Api)
    }

    /// Submit a job.
    ///
    /// Validates locally, then issues exactly one network request. Does not
    /// start polling; that is a separate, caller-controlled step
    /// ([`ApiClient::start_polling`]). The initial status is whatever the
    /// backend assigned: `pending`, or `downloading` for the download kind.
    pub async fn submit(&self, params: SubmissionParams) -> ClientResult<Job> {
        params.validate()?;

        let kind = params.kind();
        let url = self.url(submit_path(kind));
        debug!(kind = %kind, "submitting job");

        let request = match params {
            SubmissionParams::Download { url: video_url, itag } => self
                .http
                .post(&url)
                .json(&DownloadRequest {
                    url: &video_url,
                    itag,
                }),
            SubmissionParams::Convert {
                file,
                output_format,
            } => self.http.post(&url).multipart(
                Self::file_form(file).text("outputFormat", output_format),
            ),
            SubmissionParams::Trim {
                file,
                start_time,
                end_time,
                output_format,
                ..
            } => self.http.post(&url).multipart(
                Self::file_form(file)
                    .text("startTime", start_time.to_string())
                    .text("endTime", end_time.to_string())
                    .text("outputFormat", output_format),
            ),
            SubmissionParams::Screenshot {
                file,
                timestamp,
                format,
                quality,
                ..
            } => self.http.post(&url).multipart(
                Self::file_form(file)
                    .text("timestamp", timestamp.to_string())
                    .text("format", format.as_str())
                    .text("quality", quality.as_str()),
            ),
            SubmissionParams::Compress {
                file,
                level,
                resolution,
            } => self.http.post(&url).multipart(
                Self::file_form(file)
                    .text("compressionLevel", level.as_str())
                    .text("resolution", resolution.as_str()),
            ),
        };

        let response = request.send().await.map_err(|e| {
            warn!(kind = %kind, "submission request failed: {e}");
            ClientError::submission(messages::submit_fallback(kind))
        })?;

        let snapshot: JobSnapshot = Self::decode(response, messages::submit_fallback(kind))
            .await
            .map_err(ClientError::Submission)?;

        debug!(kind = %kind, job_id = %snapshot.id, status = %snapshot.status, "job accepted");
        Ok(Job::from_snapshot(kind, snapshot))
    }

    fn file_form(file: UploadFile) -> Form {
        let part = Part::bytes(file.data).file_name(file.name);
        Form::new().part("file", part)
    }

    /// Fetch the current snapshot of a job. One poll tick.
    pub async fn job_status(&self, kind: JobKind, id: &str) -> ClientResult<Job> {
        let response = self
            .http
            .get(self.url(&status_path(kind, id)))
            .send()
            .await
            .map_err(|_| ClientError::api(messages::status_fallback(kind)))?;

        let snapshot: JobSnapshot = Self::decode(response, messages::status_fallback(kind))
            .await
            .map_err(ClientError::Api)?;

        Ok(Job::from_snapshot(kind, snapshot))
    }

    /// Download URL for a backend-relative artifact reference.
    pub fn download_url(&self, output_path: &str) -> String {
        format!(
            "{}/download?path={}",
            self.config.base_url,
            urlencoding::encode(output_path)
        )
    }

    /// Derive the user-facing download reference for a finished job.
    ///
    /// `None` unless the job is completed and actually carries an output
    /// path; a reference is never fabricated from partial state.
    pub fn resolve_download_reference(&self, job: &Job) -> Option<String> {
        job.completed_output().map(|path| self.download_url(path))
    }

    /// Fetch the produced artifact of a completed job.
    pub async fn fetch_artifact(&self, job: &Job) -> ClientResult<Vec<u8>> {
        let reference = self
            .resolve_download_reference(job)
            .ok_or_else(|| ClientError::api(messages::NO_ARTIFACT))?;

        let response = self
            .http
            .get(&reference)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!(job_id = %job.id, "artifact fetch failed: {e}");
                ClientError::api(messages::ARTIFACT_FALLBACK)
            })?;

        let bytes = response
            .bytes()
            .await
            .map_err(|_| ClientError::api(messages::ARTIFACT_FALLBACK))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidbox_models::JobStatus;

    fn client() -> ApiClient {
        ApiClient::new(ClientConfig {
            base_url: "http://backend.test/api".into(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    fn job(status: JobStatus, output_path: Option<&str>) -> Job {
        Job::from_snapshot(
            JobKind::Trim,
            JobSnapshot {
                id: "t1".into(),
                status,
                progress: 0,
                error: None,
                output_path: output_path.map(str::to_owned),
                output_size: None,
            },
        )
    }

    #[test]
    fn endpoint_table_matches_contract() {
        assert_eq!(submit_path(JobKind::Download), "/video/download");
        assert_eq!(submit_path(JobKind::Convert), "/video/convert");
        assert_eq!(submit_path(JobKind::Trim), "/video/trim");
        assert_eq!(submit_path(JobKind::Screenshot), "/video/screenshot");
        assert_eq!(submit_path(JobKind::Compress), "/video/compress");
        assert_eq!(status_path(JobKind::Trim, "t1"), "/video/trim/t1");
    }

    #[test]
    fn download_url_percent_encodes_the_path() {
        assert_eq!(
            client().download_url("out/t1.mp4"),
            "http://backend.test/api/download?path=out%2Ft1.mp4"
        );
        assert_eq!(
            client().download_url("out/my clip.mp4"),
            "http://backend.test/api/download?path=out%2Fmy%20clip.mp4"
        );
    }

    #[test]
    fn resolve_requires_completed_with_output() {
        let c = client();
        for status in [
            JobStatus::Pending,
            JobStatus::Downloading,
            JobStatus::Processing,
            JobStatus::Error,
        ] {
            assert_eq!(
                c.resolve_download_reference(&job(status, Some("out/t1.mp4"))),
                None
            );
        }
        assert_eq!(c.resolve_download_reference(&job(JobStatus::Completed, None)), None);
        assert_eq!(
            c.resolve_download_reference(&job(JobStatus::Completed, Some("out/t1.mp4"))),
            Some("http://backend.test/api/download?path=out%2Ft1.mp4".to_string())
        );
    }
}
