//! Brand identity generation with remote-to-local fallback.
//!
//! [`BackendSelector`] tries the OpenAI-compatible [`RemoteBackend`] when a
//! credential was configured at boot and falls back to the table-driven
//! [`LocalBackend`] whenever the remote call fails for any reason.

pub mod error;
pub mod local;
pub mod prompt;
pub mod remote;
pub mod selector;

pub use error::{GenerationFailure, RemoteGenerationError};
pub use local::LocalBackend;
pub use remote::RemoteBackend;
pub use selector::{Backend, BackendSelector, Generated};
