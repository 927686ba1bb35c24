//! Latest-version lookups against the npm registry
//!
//! Lookups are best-effort: any failure (network, HTTP status, JSON
//! shape, unparseable version) degrades to the literal `"latest"`.

use anyhow::{Context, Result};
use semver::Version;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Environment variable for overriding the registry URL
pub const REGISTRY_URL_ENV: &str = "VUEART_REGISTRY_URL";

const FALLBACK_VERSION: &str = "latest";

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Subset of the registry's `/{package}/latest` response
#[derive(Debug, Deserialize)]
struct PackageMetadata {
    version: String,
}

/// Resolves the latest stable version of npm packages.
pub struct VersionResolver {
    client: reqwest::Client,
    base: Url,
}

impl VersionResolver {
    pub fn new() -> Result<Self> {
        let url_str =
            std::env::var(REGISTRY_URL_ENV).unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string());
        let base =
            Url::parse(&url_str).with_context(|| format!("Invalid registry URL: {}", url_str))?;
        let client = reqwest::Client::builder()
            .user_agent("vueart")
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Ok(Self { client, base })
    }

    /// Latest stable version as a caret requirement, or `"latest"` when
    /// the registry cannot be consulted.
    pub async fn latest_stable(&self, package: &str) -> String {
        match self.fetch_latest(package).await {
            Ok(version) => caret_requirement(&version).unwrap_or_else(|| FALLBACK_VERSION.to_string()),
            Err(_) => FALLBACK_VERSION.to_string(),
        }
    }

    async fn fetch_latest(&self, package: &str) -> Result<String> {
        let mut url = self.base.clone();
        // push() percent-encodes the `/` in scoped names (@scope/name),
        // which is the form the registry expects
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("registry URL cannot have path segments"))?
            .pop_if_empty()
            .push(package)
            .push("latest");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to query registry for {}", package))?;

        if !response.status().is_success() {
            anyhow::bail!("Registry returned HTTP {} for {}", response.status(), package);
        }

        let metadata: PackageMetadata = response.json().await?;
        Ok(metadata.version)
    }
}

/// Turn a registry version string into a caret requirement, or `None`
/// if it is not valid semver.
fn caret_requirement(version: &str) -> Option<String> {
    let cleaned = version.strip_prefix('v').unwrap_or(version);
    Version::parse(cleaned).ok().map(|v| format!("^{v}"))
}
