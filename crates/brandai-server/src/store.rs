//! Process-local store of generated identities, keyed by a generated id.

use std::collections::{HashMap, VecDeque};
use std::sync::{PoisonError, RwLock};

use brandai_core::{BrandBrief, BrandIdentity};
use brandai_generator::Backend;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Records kept before the oldest is evicted.
pub const DEFAULT_CAPACITY: usize = 1_000;

/// One generation call: the brief, the identity, and how it was produced.
#[derive(Debug, Clone, Serialize)]
pub struct BrandRecord {
    pub id: Uuid,
    pub request: BrandBrief,
    pub response: BrandIdentity,
    pub backend: Backend,
    pub created_at: DateTime<Utc>,
    pub processing_time_ms: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("brand record {0} not found")]
    NotFound(Uuid),
}

/// Storage for generated identities. Injected into the app state so a
/// shared cache service can replace the in-memory implementation.
pub trait BrandStore: Send + Sync {
    fn insert(&self, record: BrandRecord);

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has `id`, including
    /// records already evicted.
    fn get(&self, id: Uuid) -> Result<BrandRecord, StoreError>;
}

/// Bounded in-memory store with oldest-first eviction.
#[derive(Debug)]
pub struct MemoryStore {
    capacity: usize,
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<Uuid, BrandRecord>,
    order: VecDeque<Uuid>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl BrandStore for MemoryStore {
    fn insert(&self, record: BrandRecord) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = record.id;
        if inner.records.insert(id, record).is_none() {
            inner.order.push_back(id);
        }
        while inner.order.len() > self.capacity {
            if let Some(evicted) = inner.order.pop_front() {
                inner.records.remove(&evicted);
                tracing::debug!(id = %evicted, "evicted brand record");
            }
        }
    }

    fn get(&self, id: Uuid) -> Result<BrandRecord, StoreError> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use brandai_core::{
        ColorPalette, Era, Goal, SocialMediaPost, Tone, Typography, VisualStyle,
    };

    use super::*;

    fn record() -> BrandRecord {
        let brief = BrandBrief {
            nome: "Lumen".to_string(),
            segmento: "café".to_string(),
            palavras: "quente,acolhedor,simples".to_string(),
            cores_sim: "verde".to_string(),
            cores_nao: "vermelho".to_string(),
            tom: Tone::Descontraida,
            estilo: VisualStyle::Organico,
            moderno: Era::Moderna,
            publico: "jovens urbanos".to_string(),
            objetivo: Goal::Vender,
            inspiracao: None,
            elementos: None,
        };
        let identity = BrandIdentity {
            brand_name: "Lumen".to_string(),
            slogan: "Tornando café divertido!".to_string(),
            color_palette: ColorPalette {
                primary: "#22543D".to_string(),
                secondary: "#2F855A".to_string(),
                accent: "#D69E2E".to_string(),
                neutral: "#F0FFF4".to_string(),
                success: "#38A169".to_string(),
            },
            typography: Typography {
                primary_font: "Inter".to_string(),
                secondary_font: "system-ui".to_string(),
                font_weights: BTreeMap::from([("regular".to_string(), 400)]),
            },
            social_media_posts: vec![SocialMediaPost {
                concept: "Lançamento Lumen".to_string(),
                colors: vec!["#22543D".to_string()],
                caption: "Chegamos!".to_string(),
                hashtags: vec!["#Lumen".to_string()],
            }],
            captions: vec!["Bem-vindo".to_string()],
            brand_description: "Uma marca orgânica.".to_string(),
            recommendations: vec!["Use verde.".to_string()],
        };
        BrandRecord {
            id: Uuid::new_v4(),
            request: brief,
            response: identity,
            backend: Backend::Local,
            created_at: Utc::now(),
            processing_time_ms: 3,
        }
    }

    #[test]
    fn insert_then_get_returns_record() {
        let store = MemoryStore::default();
        let rec = record();
        let id = rec.id;
        store.insert(rec);
        let fetched = store.get(id).expect("stored record");
        assert_eq!(fetched.request.nome, "Lumen");
        assert_eq!(fetched.backend, Backend::Local);
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = MemoryStore::default();
        let id = Uuid::new_v4();
        assert_eq!(store.get(id).unwrap_err(), StoreError::NotFound(id));
    }

    #[test]
    fn oldest_record_is_evicted_at_capacity() {
        let store = MemoryStore::with_capacity(2);
        let first = record();
        let first_id = first.id;
        let second = record();
        let second_id = second.id;
        let third = record();
        let third_id = third.id;
        store.insert(first);
        store.insert(second);
        store.insert(third);

        assert!(store.get(first_id).is_err());
        assert!(store.get(second_id).is_ok());
        assert!(store.get(third_id).is_ok());
    }

    #[test]
    fn record_serializes_backend_and_request() {
        let json = serde_json::to_value(record()).expect("serialize");
        assert_eq!(json["backend"], "local");
        assert_eq!(json["request"]["tom"], "descontraída");
        assert_eq!(json["response"]["brand_name"], "Lumen");
    }
}
