use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::error::{Error, Result};

/// A simple cache for fetched document content.
#[derive(Debug, Default)]
pub struct ContentCache {
    cache: HashMap<String, String>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, location: &str) -> Option<&String> {
        self.cache.get(location)
    }

    pub fn insert(&mut self, location: &str, content: String) {
        self.cache.insert(location.to_string(), content);
    }
}

/// Fetch document text from an HTTP(S) URL, a `file://` URL or a plain path, with caching.
pub fn fetch_content(location: &str, cache: &mut ContentCache) -> Result<String> {
    if let Some(cached) = cache.get(location) {
        return Ok(cached.clone());
    }

    let content = match Url::parse(location) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
            let client = Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .map_err(|e| Error::Fetch(format!("client build error: {e}")))?;
            let resp = client
                .get(parsed)
                .send()
                .and_then(|resp| resp.error_for_status())
                .map_err(|e| Error::Fetch(format!("HTTP request error: {e}")))?;
            resp.text()
                .map_err(|e| Error::Fetch(format!("error reading response: {e}")))?
        }
        Ok(parsed) if parsed.scheme() == "file" => {
            let path = parsed
                .to_file_path()
                .map_err(|_| Error::Fetch(format!("invalid file URL: {location}")))?;
            fs::read_to_string(path)?
        }
        // Relative paths and Windows drive letters ("c:") land here.
        _ => fs::read_to_string(location)?,
    };

    tracing::debug!(location, bytes = content.len(), "fetched document");
    cache.insert(location, content.clone());
    Ok(content)
}
