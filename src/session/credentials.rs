use std::path::PathBuf;

use thiserror::Error;

/// Parameter carrying the access token in the redirect artifact.
const ACCESS_TOKEN_PARAM: &str = "access_token";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("redirect artifact is malformed")]
    MalformedArtifact,
}

/// Result of inspecting a redirect artifact for an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactOutcome {
    Token(String),
    Absent,
    Malformed,
}

/// Extracts the access token from a redirect artifact of the form
/// `key1=value1&key2=value2...`.
///
/// An artifact without the token parameter is `Absent`; a structurally
/// broken one (a segment with no `=`, or an empty token value) is
/// `Malformed`. Never panics on absence.
pub fn parse_artifact(raw: &str) -> ArtifactOutcome {
    if raw.trim().is_empty() {
        return ArtifactOutcome::Absent;
    }

    let mut token = None;
    for pair in raw.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            return ArtifactOutcome::Malformed;
        };
        if key == ACCESS_TOKEN_PARAM {
            if value.is_empty() {
                return ArtifactOutcome::Malformed;
            }
            token = Some(value.to_string());
        }
    }

    match token {
        Some(t) => ArtifactOutcome::Token(t),
        None => ArtifactOutcome::Absent,
    }
}

/// Looks up a single parameter in a redirect artifact, e.g. `state`.
pub fn artifact_param<'a>(raw: &'a str, key: &str) -> Option<&'a str> {
    raw.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then_some(v)
    })
}

/// Owns the access credential's durable storage: one plain-text file in the
/// local data directory, written when a redirect artifact carries a token
/// and removed on logout.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new() -> Self {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("mixcli/cache/credential");
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves the active credential.
    ///
    /// Inspects the pending redirect artifact first: a token found there is
    /// persisted and returned, and the artifact slot is consumed so it is
    /// never re-processed. Without a usable artifact the previously
    /// persisted credential is returned, if any. At most one storage write
    /// per call.
    pub async fn resolve(
        &self,
        artifact: &mut Option<String>,
    ) -> Result<Option<String>, CredentialError> {
        if let Some(raw) = artifact.take() {
            match parse_artifact(&raw) {
                ArtifactOutcome::Token(token) => {
                    self.persist(&token).await?;
                    return Ok(Some(token));
                }
                ArtifactOutcome::Absent => {}
                ArtifactOutcome::Malformed => return Err(CredentialError::MalformedArtifact),
            }
        }

        self.load().await
    }

    pub async fn persist(&self, credential: &str) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }
        async_fs::write(&self.path, credential).await?;
        Ok(())
    }

    pub async fn load(&self) -> Result<Option<String>, CredentialError> {
        match async_fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the credential from durable storage. Idempotent.
    pub async fn clear(&self) -> Result<(), CredentialError> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
