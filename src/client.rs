// Resource client: typed CRUD against the REST data service
// Every call goes to the service. Nothing is cached on this side.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ClientError, ResourceError};
use crate::models::{ForeignKey, RecordId, Resource, ResourceKind, Validate};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    // None leaves timeouts to the transport
    pub timeout_ms: Option<u64>,
    // Ask the service to filter by foreign key (`?destinationId=1`). Results
    // are filtered again locally either way.
    pub server_side_filtering: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: None,
            server_side_filtering: true,
        }
    }
}

impl ClientConfig {
    // Reads TOURIST_API_URL, TOURIST_API_TIMEOUT_MS and TOURIST_API_SERVER_FILTERING
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("TOURIST_API_URL").unwrap_or(defaults.base_url),
            timeout_ms: env::var("TOURIST_API_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .or(defaults.timeout_ms),
            server_side_filtering: env::var("TOURIST_API_SERVER_FILTERING")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.server_side_filtering),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// CRUD over one REST root per resource kind.
#[async_trait]
pub trait ResourceClient: Send + Sync + 'static {
    // GET /{resource}
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ResourceError>;

    // GET /{resource}?{fk}={id}, filtered locally as well
    async fn list_by<R: Resource>(
        &self,
        key: ForeignKey,
        id: RecordId,
    ) -> Result<Vec<R>, ResourceError>;

    // GET /{resource}/{id}
    async fn get<R: Resource>(&self, id: RecordId) -> Result<R, ResourceError>;

    // POST /{resource}; the draft is validated before any request is made
    async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R, ResourceError>;

    /// PUT /{resource}/{id} with only the fields set in `patch`.
    ///
    /// The service must merge a partial body into the stored record. A
    /// service that replaces the whole record on PUT drops every field the
    /// patch leaves out, `bookingDate` included.
    async fn update<R: Resource>(&self, id: RecordId, patch: &R::Patch) -> Result<R, ResourceError>;

    // DELETE /{resource}/{id}
    async fn delete<R: Resource>(&self, id: RecordId) -> Result<(), ResourceError>;
}

// Client-side foreign key filter applied to whatever the service returned
pub fn retain_foreign_key<R: Resource>(records: Vec<R>, key: ForeignKey, id: RecordId) -> Vec<R> {
    records
        .into_iter()
        .filter(|record| record.foreign_key(key) == Some(id))
        .collect()
}

pub struct HttpResourceClient {
    config: ClientConfig,
    base_url: Url,
    http: reqwest::Client,
}

impl HttpResourceClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let http = builder
            .build()
            .map_err(|err| ClientError::InitError(err.to_string()))?;

        Ok(Self {
            config,
            base_url,
            http,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoint(&self, kind: ResourceKind, id: Option<RecordId>) -> Result<Url, ResourceError> {
        let path = match id {
            Some(id) => format!("{}/{}", kind.path(), id),
            None => kind.path().to_string(),
        };
        self.base_url
            .join(&path)
            .map_err(|err| ResourceError::Transport(format!("invalid endpoint {path}: {err}")))
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        kind: ResourceKind,
        id: Option<RecordId>,
    ) -> Result<reqwest::Response, ResourceError> {
        let res = request.send().await.map_err(|err| {
            warn!(resource = %kind, error = %err, "request failed");
            ResourceError::from(err)
        })?;

        let status = res.status();
        debug!(resource = %kind, id = ?id.map(RecordId::value), status = status.as_u16(), "response");
        if status.is_success() {
            return Ok(res);
        }

        let body = res.text().await.unwrap_or_default();
        Err(status_error(status, kind, id, &body))
    }

    async fn read<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ResourceError> {
        res.json::<T>().await.map_err(ResourceError::from)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    // Without the trailing slash `join` would drop the last path segment
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&normalized)
        .map_err(|err| ClientError::ConfigError(format!("invalid base_url {raw}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::ConfigError(format!("base_url {raw} cannot be a base")));
    }
    Ok(url)
}

// Non-2xx responses: 404 on a single record is NotFound, the rest are transport failures
pub fn status_error(
    status: StatusCode,
    kind: ResourceKind,
    id: Option<RecordId>,
    body: &str,
) -> ResourceError {
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => ResourceError::NotFound { kind, id },
        _ if body.trim().is_empty() => ResourceError::Transport(format!("{kind}: HTTP {status}")),
        _ => ResourceError::Transport(format!("{kind}: HTTP {status}: {}", body.trim())),
    }
}

#[async_trait]
impl ResourceClient for HttpResourceClient {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ResourceError> {
        let url = self.endpoint(R::KIND, None)?;
        debug!(resource = %R::KIND, "GET {url}");
        let res = self.send(self.http.get(url), R::KIND, None).await?;
        Self::read(res).await
    }

    async fn list_by<R: Resource>(
        &self,
        key: ForeignKey,
        id: RecordId,
    ) -> Result<Vec<R>, ResourceError> {
        let url = self.endpoint(R::KIND, None)?;
        let mut request = self.http.get(url);
        if self.config.server_side_filtering {
            request = request.query(&[(key.field(), id.value())]);
        }
        debug!(resource = %R::KIND, key = key.field(), id = id.value(), "GET filtered");
        let res = self.send(request, R::KIND, None).await?;
        let records: Vec<R> = Self::read(res).await?;
        Ok(retain_foreign_key(records, key, id))
    }

    async fn get<R: Resource>(&self, id: RecordId) -> Result<R, ResourceError> {
        let url = self.endpoint(R::KIND, Some(id))?;
        debug!(resource = %R::KIND, "GET {url}");
        let res = self.send(self.http.get(url), R::KIND, Some(id)).await?;
        Self::read(res).await
    }

    async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R, ResourceError> {
        draft.validate()?;
        let url = self.endpoint(R::KIND, None)?;
        debug!(resource = %R::KIND, "POST {url}");
        let res = self
            .send(self.http.post(url).json(draft), R::KIND, None)
            .await?;
        Self::read(res).await
    }

    async fn update<R: Resource>(&self, id: RecordId, patch: &R::Patch) -> Result<R, ResourceError> {
        patch.validate()?;
        let url = self.endpoint(R::KIND, Some(id))?;
        debug!(resource = %R::KIND, "PUT {url}");
        let res = self
            .send(self.http.put(url).json(patch), R::KIND, Some(id))
            .await?;
        Self::read(res).await
    }

    async fn delete<R: Resource>(&self, id: RecordId) -> Result<(), ResourceError> {
        let url = self.endpoint(R::KIND, Some(id))?;
        debug!(resource = %R::KIND, "DELETE {url}");
        self.send(self.http.delete(url), R::KIND, Some(id)).await?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::mock_service::MemoryDataService;
    use super::*;
    use crate::models::*;
    use crate::resolver::fixtures::*;
    use tokio_test::assert_err;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_ms, None);
        assert!(config.server_side_filtering);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_endpoints_keep_base_path() {
        let client = HttpResourceClient::new(ClientConfig {
            base_url: "http://localhost:3000/api".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            client.endpoint(ResourceKind::Packages, None).unwrap().as_str(),
            "http://localhost:3000/api/packages"
        );
        assert_eq!(
            client
                .endpoint(ResourceKind::Itineraries, Some(RecordId::new(4)))
                .unwrap()
                .as_str(),
            "http://localhost:3000/api/itineraries/4"
        );
    }

    #[test]
    fn test_invalid_base_url_is_a_config_error() {
        let result = HttpResourceClient::new(ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(ClientError::ConfigError(_))));
    }

    #[test]
    fn test_status_error_mapping() {
        let id = Some(RecordId::new(3));
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, ResourceKind::Bookings, id, ""),
            ResourceError::NotFound {
                kind: ResourceKind::Bookings,
                id: RecordId::new(3)
            }
        );
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, ResourceKind::Bookings, None, ""),
            ResourceError::Transport(_)
        ));
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, ResourceKind::Packages, id, "boom");
        assert_eq!(
            err,
            ResourceError::Transport("packages: HTTP 500 Internal Server Error: boom".to_string())
        );
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_the_network() {
        // Nothing listens on this port; a request would surface as a transport error
        let client = HttpResourceClient::new(ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        })
        .unwrap();
        let draft = DestinationDraft {
            name: "".to_string(),
            location: "France".to_string(),
            ..Default::default()
        };
        let result = client.create::<Destination>(&draft).await;
        assert!(matches!(result, Err(ResourceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_crud_round_trip() {
        let service = MemoryDataService::new();
        let draft = DestinationDraft {
            name: "Paris".to_string(),
            location: "France".to_string(),
            ..Default::default()
        };
        let created: Destination = service.create(&draft).await.unwrap();
        assert_eq!(created.id, RecordId::new(1));

        let patch = DestinationPatch {
            rating: Some(4.9),
            ..Default::default()
        };
        let updated: Destination = service.update(created.id, &patch).await.unwrap();
        assert_eq!(updated.rating, 4.9);
        assert_eq!(updated.name, "Paris");

        let fetched: Destination = service.get(created.id).await.unwrap();
        assert_eq!(fetched, updated);

        service.delete::<Destination>(created.id).await.unwrap();
        let listed: Vec<Destination> = service.list().await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_missing_records_are_not_found() {
        let service = MemoryDataService::new();
        let id = RecordId::new(42);
        let err = service.get::<Package>(id).await.unwrap_err();
        assert!(err.is_not_found());
        assert_err!(service.update::<Package>(id, &PackagePatch::default()).await);
        assert!(service.delete::<Package>(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_by_filters_client_side_when_service_ignores_query() {
        let service = MemoryDataService::new();
        service.seed(&[
            itinerary(1, 7, 1, 1),
            itinerary(2, 8, 1, 1),
            itinerary(3, 7, 1, 2),
        ]);

        for ignore in [false, true] {
            service.ignore_query_filters(ignore);
            let found: Vec<Itinerary> = service
                .list_by(ForeignKey::Booking, RecordId::new(7))
                .await
                .unwrap();
            let ids: Vec<u64> = found.iter().map(|i| i.id.value()).collect();
            assert_eq!(ids, vec![1, 3]);
        }
    }

    #[tokio::test]
    async fn test_text_ids_are_normalized() {
        let service = MemoryDataService::new();
        service.use_text_ids(true);
        let draft = PackageDraft {
            name: "Paris Getaway".to_string(),
            description: String::new(),
            destination_id: RecordId::new(1),
            price: 500.0,
            duration: "5 days".to_string(),
            includes: vec![],
            available: true,
        };
        let created: Package = service.create(&draft).await.unwrap();
        assert_eq!(service.rows(ResourceKind::Packages)[0]["id"], "1");
        let fetched: Package = service.get(created.id).await.unwrap();
        assert_eq!(fetched.id, RecordId::new(1));
    }

    #[tokio::test]
    async fn test_injected_failures_are_transport_errors() {
        let service = MemoryDataService::new();
        service.fail_next_requests(1);
        let err = service.list::<Booking>().await.unwrap_err();
        assert!(matches!(err, ResourceError::Transport(_)));
        assert!(service.list::<Booking>().await.unwrap().is_empty());
        assert_eq!(service.request_count(), 2);
    }

    #[test]
    fn test_retain_foreign_key() {
        let packages = vec![package(10, "A", 1, 1.0), package(11, "B", 2, 1.0)];
        let kept = retain_foreign_key(packages, ForeignKey::Destination, RecordId::new(2));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, RecordId::new(11));
    }
}
