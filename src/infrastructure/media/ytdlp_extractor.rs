use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;

use crate::application::ports::{ExtractedMedia, ExtractionError, MediaExtractor};

const AUDIO_CODEC: &str = "opus";

/// Audio extractor shelling out to yt-dlp. Downloads the best available
/// audio stream and transcodes it to Opus under the configured output
/// directory, named after the media title. Identical titles overwrite
/// each other; last writer wins.
pub struct YtDlpExtractor {
    ytdlp_path: String,
    output_dir: PathBuf,
}

impl YtDlpExtractor {
    pub fn new(
        ytdlp_path: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, ExtractionError> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| ExtractionError::ExtractionFailed(format!("output directory: {}", e)))?;
        Ok(Self {
            ytdlp_path: ytdlp_path.into(),
            output_dir,
        })
    }

    /// Metadata probe without download. The title may legitimately be
    /// absent; only process failures are errors.
    async fn probe_title(&self, url: &str) -> Result<Option<String>, ExtractionError> {
        tracing::debug!(url = %url, "Probing media metadata");

        let output = Command::new(&self.ytdlp_path)
            .args(["--dump-json", "--no-playlist", url])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ExtractionError::SpawnFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::ExtractionFailed(stderr.trim().to_string()));
        }

        let info: Value = serde_json::from_slice(&output.stdout)
            .map_err(|e| ExtractionError::MalformedOutput(format!("metadata json: {}", e)))?;

        Ok(info["title"].as_str().map(|s| s.to_string()))
    }

    async fn download_audio(&self, url: &str) -> Result<PathBuf, ExtractionError> {
        let template = self.output_dir.join("%(title)s.%(ext)s");

        let output = Command::new(&self.ytdlp_path)
            .arg("--format")
            .arg("bestaudio/best")
            .arg("--extract-audio")
            .arg("--audio-format")
            .arg(AUDIO_CODEC)
            .arg("--no-playlist")
            .arg("--no-progress")
            .arg("--output")
            .arg(&template)
            // --print implies simulation; keep the download and have the
            // final path land on stdout once postprocessing moved it.
            .arg("--no-simulate")
            .arg("--print")
            .arg("after_move:filepath")
            .arg(url)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ExtractionError::SpawnFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::ExtractionFailed(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .map(|line| PathBuf::from(line.trim()))
            .ok_or_else(|| {
                ExtractionError::MalformedOutput("no output path reported".to_string())
            })
    }
}

#[async_trait]
impl MediaExtractor for YtDlpExtractor {
    async fn extract(&self, url: &str) -> Result<ExtractedMedia, ExtractionError> {
        tracing::info!(url = %url, "Extracting audio");

        let title = self.probe_title(url).await?;
        let audio_path = self.download_audio(url).await?;

        tracing::info!(
            path = %audio_path.display(),
            title = title.as_deref().unwrap_or(""),
            "Audio extraction finished"
        );

        Ok(ExtractedMedia { audio_path, title })
    }
}
