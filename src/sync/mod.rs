//! Best-effort push of the projects workbook to a GitHub repository.
//!
//! The remote is configured by `remote.repo` plus an access token; when
//! either is missing every push is a documented no-op. Failures never roll
//! back or block the local mutation that triggered them — the shell
//! downgrades them to a warning via `push_after_mutation`.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use base64::Engine;
use serde_json::json;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

const API_BASE: &str = "https://api.github.com";
const TOKEN_ENV: &str = "PROJTRACK_GITHUB_TOKEN";

pub struct RemoteSync {
    repo: String,
    branch: String,
    token: String,
}

impl RemoteSync {
    /// `None` when the remote repo or the token is not configured.
    /// The token may come from config or from `PROJTRACK_GITHUB_TOKEN`.
    pub fn from_config(cfg: &Config) -> Option<Self> {
        let repo = cfg.remote.repo.clone()?;
        let token = cfg
            .remote
            .token
            .clone()
            .or_else(|| env::var(TOKEN_ENV).ok())?;
        Some(Self {
            repo,
            branch: cfg.remote.branch.clone(),
            token,
        })
    }

    /// Push the file via the contents API: update the existing remote object
    /// when its sha is known, otherwise fall back to creating it.
    pub fn sync(&self, path: &Path, message: &str) -> AppResult<()> {
        let bytes = fs::read(path)?;
        let content = base64::engine::general_purpose::STANDARD.encode(&bytes);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Sync(format!("bad store path: {}", path.display())))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(to_sync_error)?;

        let url = format!("{API_BASE}/repos/{}/contents/{}", self.repo, file_name);

        let sha = self.remote_sha(&client, &url);

        let mut body = json!({
            "message": message,
            "content": content,
            "branch": self.branch,
        });
        if let Some(sha) = &sha {
            body["sha"] = json!(sha);
        }

        let update = self.put(&client, &url, &body)?;
        if update.status().is_success() {
            return Ok(());
        }

        // Update failed (stale sha, or the object does not exist yet):
        // retry as a plain create.
        if sha.is_some() {
            if let Some(map) = body.as_object_mut() {
                map.remove("sha");
            }
            let create = self.put(&client, &url, &body)?;
            if create.status().is_success() {
                return Ok(());
            }
            return Err(AppError::Sync(format!(
                "create fallback failed with HTTP {}",
                create.status()
            )));
        }

        Err(AppError::Sync(format!(
            "push failed with HTTP {}",
            update.status()
        )))
    }

    fn remote_sha(&self, client: &reqwest::blocking::Client, url: &str) -> Option<String> {
        let resp = self
            .request(client.get(url))
            .query(&[("ref", self.branch.as_str())])
            .send()
            .ok()?;
        if !resp.status().is_success() {
            return None;
        }
        let body: serde_json::Value = resp.json().ok()?;
        body.get("sha")?.as_str().map(str::to_string)
    }

    fn put(
        &self,
        client: &reqwest::blocking::Client,
        url: &str,
        body: &serde_json::Value,
    ) -> AppResult<reqwest::blocking::Response> {
        self.request(client.put(url))
            .json(body)
            .send()
            .map_err(to_sync_error)
    }

    fn request(&self, builder: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "projtrack")
    }
}

/// Shell-side helper: push after a local mutation, never failing the caller.
/// Unconfigured remote is an informational no-op; any sync error is reported
/// as a warning and swallowed.
pub fn push_after_mutation(cfg: &Config, path: &Path, message: &str) {
    match RemoteSync::from_config(cfg) {
        None => info("Remote not configured; skipping push."),
        Some(remote) => match remote.sync(path, message) {
            Ok(()) => success("Changes pushed to remote."),
            Err(e) => warning(format!("Remote push failed (local changes kept): {e}")),
        },
    }
}

fn to_sync_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Sync(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_remote_is_none() {
        let cfg = Config::default();
        assert!(RemoteSync::from_config(&cfg).is_none());
    }

    #[test]
    fn repo_without_token_is_none() {
        let mut cfg = Config::default();
        cfg.remote.repo = Some("owner/projects".into());
        // No token in config; env var intentionally not set by this test.
        if env::var(TOKEN_ENV).is_err() {
            assert!(RemoteSync::from_config(&cfg).is_none());
        }
    }

    #[test]
    fn push_without_remote_is_a_noop() {
        let cfg = Config::default();
        // Must not touch the network or the (nonexistent) local file.
        push_after_mutation(&cfg, Path::new("/nonexistent/projects.xlsx"), "noop");
    }
}
