use anyhow::Result;
use axum::Router;
use std::time::Duration;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use voice_translator_backend::infrastructure::config::{Config, LogFormat};

pub mod api_client;
pub mod assertions;

use api_client::TestClient;
use fake_upstream::FakeUpstream;

pub const TEST_API_KEY: &str = "test-huggingface-key";

/// Outbound timeout for every test app; the fake upstream answers well within it
pub const OUTBOUND_TIMEOUT_SECS: u64 = 1;

pub struct TestContext {
    pub client: TestClient,
    pub upstream: FakeUpstream,
    #[allow(dead_code)]
    pub config: Config,
    audio_dir: TempDir,
}

impl TestContext {
    /// Files currently sitting in the audio temp dir
    pub fn audio_files_left(&self) -> usize {
        std::fs::read_dir(self.audio_dir.path())
            .expect("Failed to read audio temp dir")
            .count()
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let upstream = FakeUpstream::start()
                .await
                .expect("Failed to start fake upstream");
            let audio_dir = tempfile::tempdir().expect("Failed to create audio temp dir");

            let config = Config {
                host: "127.0.0.1".to_string(),
                port: 0, // Will be assigned by the OS
                log_format: LogFormat::Pretty,
                huggingface_api_key: TEST_API_KEY.to_string(),
                translation_api_url: upstream.translation_url(),
                tts_api_url: upstream.tts_url(),
                outbound_timeout_secs: OUTBOUND_TIMEOUT_SECS,
                audio_temp_dir: Some(audio_dir.path().to_path_buf()),
            };

            let app = create_app(&config).expect("Failed to create app");

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            // Wait for server to be ready
            tokio::time::sleep(Duration::from_millis(100)).await;

            Self {
                client: TestClient::new(&base_url),
                upstream,
                config,
                audio_dir,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Temp dir is removed when dropped
        }
    }
}

/// Build the app exactly as the binary does
fn create_app(config: &Config) -> Result<Router> {
    voice_translator_backend::infrastructure::http::build_app(config)
        .map_err(|e| anyhow::anyhow!("{}", e))
}
