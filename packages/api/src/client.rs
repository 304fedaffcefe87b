//! HTTP implementation of [`RecordSource`].

use records::{AppConfig, ListQuery, RecordId, RecordSource, Resource, SourceError};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::{request_error, status_error, ConfigError};

/// REST client rooted at a base URL, e.g. `https://host/api/v1`.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base = Url::parse(base_url.trim()).map_err(|e| ConfigError::BaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::BaseUrl {
                url: base_url.to_string(),
                reason: "expected an http(s) URL".to_string(),
            });
        }
        Ok(Self {
            http: Client::new(),
            base,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Self::new(&config.api.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// The base URL with `segments` appended as escaped path segments.
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "sending request");
        self.http.request(method, url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, SourceError> {
        let response = request.send().await.map_err(request_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = status_error(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), error = %err, "request failed");
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, SourceError> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

impl RecordSource for ApiClient {
    async fn list<R: Resource>(&self, query: &ListQuery) -> Result<Vec<R>, SourceError> {
        let mut request = self.request(Method::GET, self.url(&[R::PATH]));
        if !query.is_empty() {
            request = request.query(query.params());
        }
        self.send_json(request).await
    }

    async fn get<R: Resource>(&self, id: &RecordId) -> Result<R, SourceError> {
        let request = self.request(Method::GET, self.url(&[R::PATH, id.as_str()]));
        self.send_json(request).await
    }

    async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R, SourceError> {
        let request = self
            .request(Method::POST, self.url(&[R::PATH]))
            .json(draft);
        let created: R = self.send_json(request).await?;
        tracing::info!(resource = R::PATH, id = %created.id(), "record created");
        Ok(created)
    }

    async fn update<R: Resource>(&self, id: &RecordId, draft: &R::Draft) -> Result<R, SourceError> {
        let request = self
            .request(Method::PUT, self.url(&[R::PATH, id.as_str()]))
            .json(draft);
        let updated: R = self.send_json(request).await?;
        tracing::info!(resource = R::PATH, %id, "record updated");
        Ok(updated)
    }

    async fn delete<R: Resource>(&self, id: &RecordId) -> Result<(), SourceError> {
        let request = self.request(Method::DELETE, self.url(&[R::PATH, id.as_str()]));
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_resource_and_id() {
        let client = ApiClient::new("https://records.example/api/v1/").unwrap();
        assert_eq!(
            client.url(&["users"]).as_str(),
            "https://records.example/api/v1/users"
        );
        assert_eq!(
            client.url(&["users", "42"]).as_str(),
            "https://records.example/api/v1/users/42"
        );

        let bare = ApiClient::new("http://localhost:3000").unwrap();
        assert_eq!(bare.url(&["users"]).as_str(), "http://localhost:3000/users");
    }

    #[test]
    fn test_ids_are_escaped() {
        let client = ApiClient::new("http://localhost:3000").unwrap();
        assert_eq!(
            client.url(&["users", "a/b c"]).as_str(),
            "http://localhost:3000/users/a%2Fb%20c"
        );
    }

    #[test]
    fn test_rejects_unusable_base_urls() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ConfigError::BaseUrl { .. })
        ));
        assert!(matches!(
            ApiClient::new("mailto:someone@example.com"),
            Err(ConfigError::BaseUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client
            .list::<records::UserRecord>(&ListQuery::all())
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Transport(_)));
    }
}
