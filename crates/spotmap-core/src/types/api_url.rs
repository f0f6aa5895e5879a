//! Record API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

use super::DatabaseId;

/// A validated base URL of the record API.
///
/// Network URLs point at a deployment serving the `/api/...` routes. File
/// URLs (`file:///path/to/workspace`) point at an exported workspace on disk.
///
/// # Example
///
/// ```
/// use spotmap_core::{ApiUrl, DatabaseId};
///
/// let api = ApiUrl::new("https://maps.example.com").unwrap();
/// assert_eq!(api.api_url("databases"), "https://maps.example.com/api/databases");
///
/// let db = DatabaseId::new("a1b2c3").unwrap();
/// assert_eq!(api.map_url(&db), "https://maps.example.com/map/a1b2c3");
///
/// let local = ApiUrl::new("file:///tmp/workspace").unwrap();
/// assert!(local.is_local());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Parse and validate a base URL.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL of an API route, e.g. `databases/<id>/pages`.
    pub fn api_url(&self, route: &str) -> String {
        format!("{}/api/{}", self.base(), route.trim_start_matches('/'))
    }

    /// Returns the shareable address of the map for a database.
    pub fn map_url(&self, id: &DatabaseId) -> String {
        format!("{}/map/{}", self.base(), id)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// An exported workspace on disk.
    pub fn is_local(&self) -> bool {
        self.0.scheme() == "file"
    }

    pub fn is_network(&self) -> bool {
        let scheme = self.0.scheme();
        scheme == "http" || scheme == "https"
    }

    /// Workspace directory of a `file://` URL.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if self.is_local() {
            self.0.to_file_path().ok()
        } else {
            None
        }
    }

    // The URL crate always adds a trailing slash to root paths.
    fn base(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let reject = |reason: &str| -> Error {
            InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if url.cannot_be_a_base() {
            return Err(reject("must be an absolute URL"));
        }

        match (url.scheme(), url.host_str()) {
            ("file", _) if matches!(url.path(), "" | "/") => {
                Err(reject("file:// URL must name a workspace directory"))
            }
            ("file", _) => Ok(()),
            (_, None) => Err(reject("must have a host")),
            ("https", Some(_)) => Ok(()),
            ("http", Some("localhost" | "127.0.0.1" | "[::1]")) => Ok(()),
            _ => Err(reject("must use HTTPS (HTTP allowed only for localhost)")),
        }
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ApiUrl {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ApiUrl> for String {
    fn from(value: ApiUrl) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let api = ApiUrl::new("https://maps.example.com").unwrap();
        assert_eq!(api.as_str(), "https://maps.example.com/");
        assert!(api.is_network());
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://localhost:3000").unwrap();
        assert_eq!(api.api_url("databases"), "http://localhost:3000/api/databases");
    }

    #[test]
    fn api_url_ignores_trailing_slash() {
        let api = ApiUrl::new("https://maps.example.com/").unwrap();
        assert_eq!(
            api.api_url("databases/abc/pages"),
            "https://maps.example.com/api/databases/abc/pages"
        );
    }

    #[test]
    fn api_url_keeps_path_prefix() {
        let api = ApiUrl::new("https://example.com/notion-maps/").unwrap();
        assert_eq!(
            api.api_url("/geocode"),
            "https://example.com/notion-maps/api/geocode"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://maps.example.com").is_err());
    }

    #[test]
    fn file_url_needs_a_directory() {
        assert!(ApiUrl::new("file:///").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/api/databases").is_err());
    }

    #[test]
    fn file_url_to_path() {
        #[cfg(unix)]
        {
            let api = ApiUrl::new("file:///tmp/workspace").unwrap();
            assert!(api.is_local());
            assert!(!api.is_network());
            assert_eq!(
                api.to_file_path().unwrap(),
                std::path::PathBuf::from("/tmp/workspace")
            );
        }
    }

    #[test]
    fn network_url_has_no_file_path() {
        let api = ApiUrl::new("https://maps.example.com").unwrap();
        assert!(api.to_file_path().is_none());
    }
}
