use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::error::SourceError;
use crate::models::{RecordId, Resource};
use crate::query::ListQuery;
use crate::source::RecordSource;

/// One request as seen by a [`MemorySource`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestRecord {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
}

#[derive(Debug, Default)]
struct Inner {
    collections: HashMap<&'static str, Vec<Value>>,
    next_id: u64,
    requests: Vec<RequestRecord>,
    /// Requests still to let through, and the error for the one after.
    fail: Option<(usize, SourceError)>,
}

/// In-memory RecordSource for tests and offline demos.
///
/// Behaves like the REST endpoint: incremental string ids, case-insensitive
/// substring filters (every parameter must match), full-replace updates and
/// `404 Not found` for unknown ids.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    inner: Arc<Mutex<Inner>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed a record without logging a request.
    pub fn insert<R: Resource>(&self, record: &R) -> Result<(), SourceError> {
        let value = serde_json::to_value(record).map_err(|e| SourceError::Decode(e.to_string()))?;
        let mut inner = self.lock();
        if let Ok(n) = record.id().as_str().parse::<u64>() {
            inner.next_id = inner.next_id.max(n);
        }
        inner.collections.entry(R::PATH).or_default().push(value);
        Ok(())
    }

    /// Every request issued so far, oldest first.
    pub fn requests(&self) -> Vec<RequestRecord> {
        self.lock().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.lock().requests.clear();
    }

    /// Make the next request fail with `error`. It is still logged.
    pub fn fail_next(&self, error: SourceError) {
        self.fail_after(0, error);
    }

    /// Let `skip` requests succeed, then fail the one after with `error`.
    pub fn fail_after(&self, skip: usize, error: SourceError) {
        self.lock().fail = Some((skip, error));
    }

    fn begin(
        &self,
        method: &'static str,
        path: String,
        query: &[(String, String)],
    ) -> Result<MutexGuard<'_, Inner>, SourceError> {
        let mut inner = self.lock();
        inner.requests.push(RequestRecord {
            method,
            path,
            query: query.to_vec(),
        });
        match inner.fail.take() {
            Some((0, error)) => Err(error),
            Some((skip, error)) => {
                inner.fail = Some((skip - 1, error));
                Ok(inner)
            }
            None => Ok(inner),
        }
    }
}

fn not_found() -> SourceError {
    SourceError::Status {
        status: 404,
        message: "Not found".to_string(),
    }
}

fn decode<R: Resource>(value: &Value) -> Result<R, SourceError> {
    serde_json::from_value(value.clone()).map_err(|e| SourceError::Decode(e.to_string()))
}

fn with_id<D: serde::Serialize>(draft: &D, id: &RecordId) -> Result<Value, SourceError> {
    let mut value = serde_json::to_value(draft).map_err(|e| SourceError::Decode(e.to_string()))?;
    let Value::Object(map) = &mut value else {
        return Err(SourceError::Decode("payload is not an object".to_string()));
    };
    map.insert("id".to_string(), Value::String(id.to_string()));
    Ok(value)
}

fn id_of(value: &Value) -> Option<&str> {
    value.get("id").and_then(Value::as_str)
}

fn field_matches(value: &Value, field: &str, needle: &str) -> bool {
    let haystack = match value.get(field) {
        Some(Value::String(s)) => s.to_lowercase(),
        Some(Value::Null) | None => return false,
        Some(other) => other.to_string().to_lowercase(),
    };
    haystack.contains(&needle.to_lowercase())
}

impl RecordSource for MemorySource {
    async fn list<R: Resource>(&self, query: &ListQuery) -> Result<Vec<R>, SourceError> {
        let inner = self.begin("GET", format!("/{}", R::PATH), query.params())?;
        let Some(values) = inner.collections.get(R::PATH) else {
            return Ok(Vec::new());
        };
        values
            .iter()
            .filter(|v| {
                query
                    .params()
                    .iter()
                    .all(|(field, needle)| field_matches(v, field, needle))
            })
            .map(decode::<R>)
            .collect()
    }

    async fn get<R: Resource>(&self, id: &RecordId) -> Result<R, SourceError> {
        let inner = self.begin("GET", format!("/{}/{id}", R::PATH), &[])?;
        inner
            .collections
            .get(R::PATH)
            .and_then(|values| values.iter().find(|v| id_of(v) == Some(id.as_str())))
            .ok_or_else(not_found)
            .and_then(decode::<R>)
    }

    async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R, SourceError> {
        let mut inner = self.begin("POST", format!("/{}", R::PATH), &[])?;
        inner.next_id += 1;
        let id = RecordId::new(inner.next_id.to_string());
        let value = with_id(draft, &id)?;
        let record = decode::<R>(&value)?;
        inner.collections.entry(R::PATH).or_default().push(value);
        Ok(record)
    }

    async fn update<R: Resource>(&self, id: &RecordId, draft: &R::Draft) -> Result<R, SourceError> {
        let mut inner = self.begin("PUT", format!("/{}/{id}", R::PATH), &[])?;
        let slot = inner
            .collections
            .get_mut(R::PATH)
            .and_then(|values| values.iter_mut().find(|v| id_of(v) == Some(id.as_str())))
            .ok_or_else(not_found)?;
        let value = with_id(draft, id)?;
        let record = decode::<R>(&value)?;
        *slot = value;
        Ok(record)
    }

    async fn delete<R: Resource>(&self, id: &RecordId) -> Result<(), SourceError> {
        let mut inner = self.begin("DELETE", format!("/{}/{id}", R::PATH), &[])?;
        let values = inner.collections.get_mut(R::PATH).ok_or_else(not_found)?;
        let index = values
            .iter()
            .position(|v| id_of(v) == Some(id.as_str()))
            .ok_or_else(not_found)?;
        values.remove(index);
        Ok(())
    }
}
