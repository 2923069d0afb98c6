//! Backend selection and remote-to-local fallback.

use brandai_core::{AppConfig, BrandBrief, BrandIdentity};
use serde::Serialize;

use crate::error::{GenerationFailure, RemoteGenerationError};
use crate::local::LocalBackend;
use crate::remote::{RemoteBackend, RemoteSettings};

/// Which backend produced an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Remote,
    Local,
}

impl Backend {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Remote => "remote",
            Backend::Local => "local",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identity plus the backend that served it.
#[derive(Debug, Clone)]
pub struct Generated {
    pub identity: BrandIdentity,
    pub backend: Backend,
}

/// Chooses between the remote and local backends.
///
/// Remote availability is decided once, at construction, and never changes:
/// a failed remote call falls back for that call only.
pub struct BackendSelector {
    remote: Option<RemoteBackend>,
    local: LocalBackend,
}

impl BackendSelector {
    /// Build a selector from configuration. The remote backend is enabled
    /// iff the config carries a usable API key.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteGenerationError::Http`] if the HTTP client for the
    /// remote backend cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, RemoteGenerationError> {
        let remote = config
            .openai_api_key
            .as_deref()
            .map(|key| RemoteBackend::new(key, RemoteSettings::from_config(config)))
            .transpose()?;
        Ok(Self {
            remote,
            local: LocalBackend,
        })
    }

    /// A selector that never calls the network.
    #[must_use]
    pub fn local_only() -> Self {
        Self {
            remote: None,
            local: LocalBackend,
        }
    }

    /// A selector that tries `remote` first.
    #[must_use]
    pub fn with_remote(remote: RemoteBackend) -> Self {
        Self {
            remote: Some(remote),
            local: LocalBackend,
        }
    }

    #[must_use]
    pub fn remote_available(&self) -> bool {
        self.remote.is_some()
    }

    /// The backend requests are routed to first.
    #[must_use]
    pub fn preferred_backend(&self) -> Backend {
        if self.remote_available() {
            Backend::Remote
        } else {
            Backend::Local
        }
    }

    /// Generate an identity for a validated brief.
    ///
    /// Remote failures are logged and absorbed; the caller only ever sees
    /// success or a broken local generator.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationFailure`] if the local backend's output violates
    /// the identity schema.
    pub async fn generate(&self, brief: &BrandBrief) -> Result<Generated, GenerationFailure> {
        if let Some(remote) = &self.remote {
            match remote.generate(brief).await {
                Ok(identity) => {
                    return Ok(Generated {
                        identity,
                        backend: Backend::Remote,
                    })
                }
                Err(e) => {
                    tracing::warn!(
                        brand = %brief.nome,
                        error = %e,
                        "remote generation failed, falling back to local generator"
                    );
                }
            }
        }

        let identity = self.local.generate(brief, &mut rand::rng());
        identity.validate()?;
        Ok(Generated {
            identity,
            backend: Backend::Local,
        })
    }
}
