// src/fetch/mod.rs
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;
use url::Url;

/// SIC3PRO refuses requests without a browser-looking agent.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Build the blocking client used for report downloads. Certificate
/// verification is disabled: the SIC3PRO servers sit behind self-signed
/// certificates on the plant intranet.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .danger_accept_invalid_certs(true)
        .build()
        .context("building HTTP client")
}

/// Download the report at `url_str` and save its body to `dest`.
/// Returns the path of the saved file. Non-2xx responses are errors.
pub fn download_report(client: &Client, url_str: &str, dest: impl AsRef<Path>) -> Result<PathBuf> {
    let dest = dest.as_ref().to_path_buf();
    let url = Url::parse(url_str).with_context(|| format!("invalid report URL `{url_str}`"))?;

    info!(url = %url, "downloading report");
    let resp = client
        .get(url.as_str())
        .send()
        .with_context(|| format!("request to `{url}` failed"))?
        .error_for_status()
        .with_context(|| format!("`{url}` returned an error status"))?;
    let body = resp
        .text()
        .with_context(|| format!("reading response body from `{url}`"))?;

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create `{}`", parent.display()))?;
        }
    }
    fs::write(&dest, &body)
        .with_context(|| format!("could not write `{}`", dest.display()))?;

    info!(path = %dest.display(), bytes = body.len(), "report saved");
    Ok(dest)
}
