use log::debug;
use reqwest::blocking::Client;

use super::model::{PackageListResponse, PackageMetadata, PackageShowResponse};
use crate::error::{check_status, FetchError};

// ---------------------------------------------------------------------------
// Blocking CKAN catalog client
// ---------------------------------------------------------------------------

/// Read-only client for the two CKAN actions the pipeline uses.
///
/// Calls are synchronous and block until response or transport failure.
/// A failed call aborts the operation; there are no retries and no
/// timeout override beyond the client default.
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full list of dataset identifiers (`package_list`).
    pub fn list_identifiers(&self) -> Result<Vec<String>, FetchError> {
        let url = format!("{}/package_list", self.base_url);
        let body = self.fetch_text(&url)?;

        let parsed: PackageListResponse =
            serde_json::from_str(&body).map_err(|source| FetchError::Json {
                url: url.clone(),
                source,
            })?;
        if !parsed.success {
            return Err(FetchError::CatalogRefused { url });
        }
        debug!("package_list returned {} identifiers", parsed.result.len());
        Ok(parsed.result)
    }

    /// Fetch one dataset's metadata (`package_show?id=...`).
    pub fn get_metadata(&self, id: &str) -> Result<PackageMetadata, FetchError> {
        let url = format!("{}/package_show?id={}", self.base_url, id);
        let body = self.fetch_text(&url)?;

        let parsed: PackageShowResponse =
            serde_json::from_str(&body).map_err(|source| FetchError::Json {
                url: url.clone(),
                source,
            })?;
        if !parsed.success {
            return Err(FetchError::CatalogRefused { url });
        }
        debug!(
            "package_show({id}) returned {} resources",
            parsed.result.resources.len()
        );
        Ok(parsed.result)
    }

    /// GET a URL and return the body as UTF-8 text, checking the status.
    ///
    /// Also used by the tabular loader for CSV resource downloads, so
    /// every network fetch in the pipeline goes through the same seam.
    pub fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;
        check_status(url, response.status())?;
        response.text().map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
    }
}
