//! Transport trait definition.

use crate::error::TransportError;
use serde_json::Value;

/// HTTP verb used to create an entity.
///
/// The catalog API upserts most entity kinds with `PUT` and records installs
/// with `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    Put,
    Post,
}

impl std::fmt::Display for WriteMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Put => write!(f, "PUT"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// The two verbs the fixture pipeline and the load harness need from the API.
///
/// # Usage Pattern
///
/// Callers are generic over the transport so that tests can swap in a
/// recording or failing stub:
///
/// ```ignore
/// pub async fn seed<T: Transport>(transport: &T) -> Result<()> {
///     transport.create(WriteMethod::Put, "/categories/", &payload).await?;
/// }
/// ```
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Create an entity at `path`.
    ///
    /// Returns the server's confirmation body, or `Value::Null` when the
    /// server sent none; the caller's payload is authoritative in that case.
    async fn create(
        &self,
        method: WriteMethod,
        path: &str,
        payload: &Value,
    ) -> Result<Value, TransportError>;

    /// Read a list of entities from `path`.
    async fn read(&self, path: &str) -> Result<Vec<Value>, TransportError>;
}
