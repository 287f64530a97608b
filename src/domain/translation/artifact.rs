use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

const FILE_PREFIX: &str = "translation-";
const FILE_SUFFIX: &str = ".mp3";

/// Synthesized audio parked on disk for the duration of one request.
///
/// The file is removed exactly once: by [`TemporaryAudioArtifact::close`] or,
/// if that never runs because an earlier step failed, when the value is
/// dropped. Removal errors are logged and swallowed.
pub struct TemporaryAudioArtifact {
    location: PathBuf,
    guard: Option<TempPath>,
}

impl TemporaryAudioArtifact {
    /// Write `audio` to a uniquely named file in `dir` (system temp dir when `None`)
    pub async fn create(dir: Option<&Path>, audio: &[u8]) -> io::Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(FILE_PREFIX).suffix(FILE_SUFFIX);

        let file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        let guard = file.into_temp_path();
        let artifact = Self {
            location: guard.to_path_buf(),
            guard: Some(guard),
        };

        tokio::fs::write(&artifact.location, audio).await?;

        tracing::debug!(
            path = %artifact.location.display(),
            audio_size = audio.len(),
            "Temporary audio file written"
        );

        Ok(artifact)
    }

    #[cfg(test)]
    fn path(&self) -> &Path {
        &self.location
    }

    /// Read the full file contents back
    pub async fn read(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.location).await
    }

    /// Remove the file now instead of waiting for drop
    pub fn close(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        let Some(guard) = self.guard.take() else {
            return;
        };

        match guard.close() {
            Ok(()) => tracing::debug!(
                path = %self.location.display(),
                "Temporary audio file removed"
            ),
            Err(e) => tracing::error!(
                path = %self.location.display(),
                error = %e,
                "Error removing temporary audio file"
            ),
        }
    }
}

impl Drop for TemporaryAudioArtifact {
    fn drop(&mut self) {
        self.remove();
    }
}
