use reqwest::StatusCode;

// ---------------------------------------------------------------------------
// Failure taxonomy for the fetch-and-parse stages
// ---------------------------------------------------------------------------

/// Errors produced by the catalog client and the tabular loader.
///
/// Keyword misses and unresolvable CSV resources are *not* errors: those
/// are empty results the caller handles by prompting for alternative
/// input. Missing analysis columns likewise yield empty tables.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },
    #[error("catalog reported failure for {url}")]
    CatalogRefused { url: String },
    #[error("malformed JSON from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },
    #[error("malformed CSV payload from {url}: {source}")]
    Csv { url: String, source: csv::Error },
}

impl FetchError {
    /// Whether this failure came from the transport layer (network error
    /// or non-success HTTP status) rather than from decoding the body.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FetchError::Transport { .. } | FetchError::HttpStatus { .. }
        )
    }
}

/// Map a response status onto the taxonomy: anything outside the 2xx
/// range aborts the operation with no partial result.
pub fn check_status(url: &str, status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::HttpStatus {
            url: url.to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_status_is_a_transport_failure() {
        let err = check_status("http://catalog/package_list", StatusCode::SERVICE_UNAVAILABLE)
            .unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn success_statuses_pass() {
        assert!(check_status("http://catalog/package_list", StatusCode::OK).is_ok());
    }
}
