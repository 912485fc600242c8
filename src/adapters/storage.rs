use crate::domain::ports::{DataSource, Storage};
use crate::utils::error::{AtlasError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    fn location(&self) -> String {
        self.base_path.display().to_string()
    }
}

/// Fetches data files relative to a base URL, e.g. `https://host/data/`.
#[derive(Debug, Clone)]
pub struct HttpStorage {
    base_url: String,
    client: Client,
}

impl HttpStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Storage for HttpStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url_for(path);
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(AtlasError::FetchError {
                file: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn location(&self) -> String {
        self.base_url.clone()
    }
}

pub fn storage_for(source: &DataSource) -> Box<dyn Storage> {
    match source {
        DataSource::Local(dir) => Box::new(LocalStorage::new(dir.clone())),
        DataSource::Http(base_url) => Box::new(HttpStorage::new(base_url.clone())),
    }
}
