//! HTTP-backed word source querying the Datamuse `/words` API

use super::config::DatamuseConfig;
use async_trait::async_trait;
use lemur_application::{WordSource, WordSourceError};
use lemur_domain::{Letter, WordRecord};
use tracing::{debug, info};

const USER_AGENT: &str = concat!("laughing-lemur/", env!("CARGO_PKG_VERSION"));

/// Word source backed by the Datamuse API
///
/// Issues one `GET {endpoint}?max=N&md=p&sp=L*` per lookup: `md=p` asks for
/// part-of-speech tags, `sp=L*` restricts results to words starting with `L`.
/// No retries.
pub struct DatamuseWordSource {
    client: reqwest::Client,
    config: DatamuseConfig,
}

impl DatamuseWordSource {
    pub fn new(config: DatamuseConfig) -> Result<Self, WordSourceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                WordSourceError::Connection(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    fn query(&self, letter: Letter) -> [(&'static str, String); 3] {
        [
            ("max", self.config.max_results.to_string()),
            ("md", "p".to_string()),
            ("sp", format!("{}*", letter.to_uppercase())),
        ]
    }
}

fn request_error(e: reqwest::Error) -> WordSourceError {
    if e.is_timeout() {
        WordSourceError::Timeout
    } else {
        WordSourceError::Connection(e.to_string())
    }
}

#[async_trait]
impl WordSource for DatamuseWordSource {
    async fn candidates(&self, letter: Letter) -> Result<Vec<WordRecord>, WordSourceError> {
        info!("Querying {} for words starting with '{}'", self.config.endpoint, letter);

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&self.query(letter))
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WordSourceError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let records: Vec<WordRecord> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                WordSourceError::Timeout
            } else {
                WordSourceError::InvalidResponse(e.to_string())
            }
        })?;

        debug!("Received {} word records", records.len());
        Ok(records)
    }
}
