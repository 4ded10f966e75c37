//! Cache
//!
//! Este módulo contiene el sistema de cache respaldado por Redis. Hoy su
//! único consumidor es la tasa de IVA del servicio externo.

pub mod cache_config;
pub mod redis_client;

pub use cache_config::CacheConfig;

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

/// Operaciones de cache
#[async_trait::async_trait]
pub trait CacheOperations {
    async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;
    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T, ttl: u64) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
}
