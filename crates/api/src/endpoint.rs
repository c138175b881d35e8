use crate::error::ApiError;
use reqwest::Url;

/// Base host plus API version; every request URL is derived from it.
#[derive(Debug, Clone)]
pub struct Endpoint {
    base: Url,
    version: u32,
}

impl Endpoint {
    /// Parse the configured host. A host that is not an absolute URL, or one
    /// that cannot carry a path, is rejected here rather than at request time.
    pub fn new(host: &str, version: u32) -> Result<Self, ApiError> {
        let base = Url::parse(host.trim()).map_err(|e| ApiError::InvalidHost {
            host: host.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidHost {
                host: host.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }
        Ok(Self { base, version })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn host(&self) -> &Url {
        &self.base
    }

    /// Build `<host-path>/v<version>/<segments...>?<query>`.
    ///
    /// Segments may themselves contain `/`; empty pieces are dropped so the
    /// result never has doubled or trailing slashes. Query pairs are
    /// form-urlencoded.
    pub fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, ApiError> {
        // Host segments stay percent-encoded; set_path keeps them as they are
        let host_path: Vec<&str> = self
            .base
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|piece| !piece.is_empty())
            .collect();

        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.set_path(&format!("/{}", host_path.join("/")));

        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::InvalidHost {
                host: self.base.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?;
            path.pop_if_empty();
            path.push(&format!("v{}", self.version));
            for segment in segments {
                path.extend(segment.split('/').filter(|piece| !piece.is_empty()));
            }
        }

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}
