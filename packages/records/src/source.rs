//! # Record sources — the network client contract
//!
//! [`RecordSource`] is the seam between the list views and whatever answers
//! their requests. Each method maps onto one REST call for the resource type
//! `R`, whose [`Resource::PATH`] names the collection:
//!
//! | Method | Request |
//! |--------|---------|
//! | [`list`](RecordSource::list) | `GET /{path}?{query}` |
//! | [`get`](RecordSource::get) | `GET /{path}/{id}` |
//! | [`create`](RecordSource::create) | `POST /{path}` |
//! | [`update`](RecordSource::update) | `PUT /{path}/{id}` (full replace) |
//! | [`delete`](RecordSource::delete) | `DELETE /{path}/{id}` |
//!
//! Implementations: `api::ApiClient` over HTTP, and [`crate::MemorySource`] in
//! memory. Neither retries; every failure is returned to the caller as a
//! [`SourceError`].
//!
//! [`list_matching`] builds on `list` to run a search plan from
//! [`ListQuery::plan`] and merge the answers.

use std::collections::HashSet;
use std::future::Future;

use crate::config::SearchMode;
use crate::error::SourceError;
use crate::models::{RecordId, Resource};
use crate::query::ListQuery;

/// Async access to a REST-style record collection.
pub trait RecordSource {
    fn list<R: Resource>(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = Result<Vec<R>, SourceError>>;
    fn get<R: Resource>(&self, id: &RecordId) -> impl Future<Output = Result<R, SourceError>>;
    fn create<R: Resource>(
        &self,
        draft: &R::Draft,
    ) -> impl Future<Output = Result<R, SourceError>>;
    fn update<R: Resource>(
        &self,
        id: &RecordId,
        draft: &R::Draft,
    ) -> impl Future<Output = Result<R, SourceError>>;
    fn delete<R: Resource>(&self, id: &RecordId) -> impl Future<Output = Result<(), SourceError>>;
}

/// Fetch the records matching `search`.
///
/// Issues the requests of the search plan one after another and merges them by
/// id, keeping the order in which records were first seen. When the plan has
/// several requests, a `404` on one of them counts as "no matches on that
/// field"; any other failure fails the whole fetch.
pub async fn list_matching<R: Resource, S: RecordSource>(
    source: &S,
    search: &str,
    mode: SearchMode,
) -> Result<Vec<R>, SourceError> {
    let plan = ListQuery::plan(search, R::search_fields(), mode);
    if let [query] = plan.as_slice() {
        return source.list::<R>(query).await;
    }

    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for query in &plan {
        let records = match source.list::<R>(query).await {
            Ok(records) => records,
            Err(err) if err.is_not_found() => Vec::new(),
            Err(err) => return Err(err),
        };
        for record in records {
            if seen.insert(record.id().clone()) {
                merged.push(record);
            }
        }
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySource;
    use crate::models::UserRecord;

    fn seeded() -> MemorySource {
        let source = MemorySource::new();
        source
            .insert(&UserRecord {
                id: RecordId::new("1"),
                first_name: "Ann".into(),
                last_name: "Lee".into(),
                image: String::new(),
                age: 30,
                email: "a@x.com".into(),
            })
            .unwrap();
        source
    }

    #[tokio::test]
    async fn test_not_found_on_one_field_is_no_match() {
        let source = seeded();
        source.fail_next(SourceError::Status {
            status: 404,
            message: "Not found".into(),
        });

        let found: Vec<UserRecord> = list_matching(&source, "lee", SearchMode::AnyName)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].last_name, "Lee");
        assert_eq!(source.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_other_failures_fail_the_search() {
        let source = seeded();
        source.fail_next(SourceError::Status {
            status: 500,
            message: "Internal Server Error".into(),
        });

        let err = list_matching::<UserRecord, _>(&source, "lee", SearchMode::AnyName)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
