//! Servicio de tasa de IVA
//!
//! La tasa vigente la publica un servicio externo como porcentaje
//! (`{"iva": 19.00}`). Se cachea en Redis con TTL y se consume como
//! fracción. Si el servicio o el cache fallan, aplica la tasa general por
//! defecto: la derivación del desglose nunca se bloquea por esta fetch.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cache::redis_client::RedisClient;
use crate::cache::CacheOperations;
use crate::pricing::TaxRate;

#[derive(Debug, Serialize, Deserialize)]
struct TasaIvaResponse {
    iva: Decimal,
}

pub struct TasaIvaService {
    client: reqwest::Client,
    url: Option<String>,
    redis: RedisClient,
    cache_ttl: u64,
}

impl TasaIvaService {
    pub fn new(
        client: reqwest::Client,
        url: Option<String>,
        redis: RedisClient,
        cache_ttl: u64,
    ) -> Self {
        Self {
            client,
            url,
            redis,
            cache_ttl,
        }
    }

    /// Tasa de IVA vigente, con fallback a la tasa general.
    pub async fn tasa_vigente(&self) -> TaxRate {
        let cache_key = self.redis.tasa_iva_key();

        if let Ok(Some(porcentaje)) = self.redis.get::<Decimal>(&cache_key).await {
            log::debug!("📥 Tasa de IVA desde cache: {}%", porcentaje);
            return TaxRate::from_percentage(porcentaje);
        }

        match self.fetch_porcentaje().await {
            Ok(porcentaje) => {
                if let Err(e) = self
                    .redis
                    .set(&cache_key, &porcentaje, self.cache_ttl)
                    .await
                {
                    log::warn!("⚠️ No se pudo cachear la tasa de IVA: {}", e);
                }
                log::info!("✅ Tasa de IVA del servicio externo: {}%", porcentaje);
                TaxRate::from_percentage(porcentaje)
            }
            Err(e) => {
                log::warn!("⚠️ Tasa de IVA no disponible, aplicando la general: {}", e);
                TaxRate::general()
            }
        }
    }

    async fn fetch_porcentaje(&self) -> anyhow::Result<Decimal> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("TASA_IVA_URL no configurada"))?;

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("el servicio de tasa respondió {}", status);
        }

        let body: TasaIvaResponse = response.json().await?;
        Ok(body.iva)
    }
}
