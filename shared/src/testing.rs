//! Test-only store implementations and fixtures.

use crate::store::{StoreError, UserStore};
use crate::types::{UserPatch, UserRecord};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory [`UserStore`] with the same per-key semantics the handlers
/// assume of DynamoDB, including upsert-on-update for absent keys.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, UserRecord>>,
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.records.lock().unwrap().get(email).cloned())
    }

    async fn put(&self, record: &UserRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.email.clone(), record.clone());
        Ok(())
    }

    async fn update_partial(&self, email: &str, patch: &UserPatch) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .entry(email.to_string())
            .or_insert_with(|| UserRecord {
                email: email.to_string(),
                name: String::new(),
                dob: String::new(),
                gender: String::new(),
                weight: 0.0,
                height: 0.0,
            });

        if let Some(name) = &patch.name {
            record.name = name.clone();
        }
        if let Some(dob) = &patch.dob {
            record.dob = dob.clone();
        }
        if let Some(gender) = &patch.gender {
            record.gender = gender.clone();
        }
        if let Some(weight) = patch.weight {
            record.weight = weight;
        }
        if let Some(height) = patch.height {
            record.height = height;
        }
        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<(), StoreError> {
        self.records.lock().unwrap().remove(email);
        Ok(())
    }
}

/// Store whose every operation fails, for exercising 500 paths.
pub struct FailingStore;

#[async_trait]
impl UserStore for FailingStore {
    async fn get(&self, _email: &str) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::request("simulated outage"))
    }

    async fn put(&self, _record: &UserRecord) -> Result<(), StoreError> {
        Err(StoreError::request("simulated outage"))
    }

    async fn update_partial(&self, _email: &str, _patch: &UserPatch) -> Result<(), StoreError> {
        Err(StoreError::request("simulated outage"))
    }

    async fn delete(&self, _email: &str) -> Result<(), StoreError> {
        Err(StoreError::request("simulated outage"))
    }
}

pub fn sample_record() -> UserRecord {
    UserRecord {
        email: "a@x.com".to_string(),
        name: "A".to_string(),
        dob: "2000-01-01".to_string(),
        gender: "F".to_string(),
        weight: 60.0,
        height: 165.0,
    }
}

pub fn sample_body() -> Map<String, Value> {
    json!({
        "email": "a@x.com",
        "name": "A",
        "dob": "2000-01-01",
        "gender": "F",
        "weight": 60,
        "height": 165
    })
    .as_object()
    .unwrap()
    .clone()
}
