//! REST-backed coupon store
//!
//! Proxies the coupon API and keeps a local copy of the last collection it saw
//! so that mutations can republish a full snapshot without refetching. Until a
//! list has succeeded there is no local copy, and a mutation refetches instead.
//!
//! | operation           | request                     |
//! |---------------------|-----------------------------|
//! | list                | `GET /Coupons`              |
//! | get                 | `GET /Coupons/{id}`         |
//! | add                 | `POST /Coupons`             |
//! | update              | `PUT /Coupons/{id}`         |
//! | delete              | `DELETE /Coupons/{id}`      |
//! | customer_coupons    | `GET /Coupons/customer`     |
//! | community_coupons   | `GET /Coupons/community`    |
//! | search_by_name      | `GET /Coupons/search?name=` |

use crate::config::ApiConfig;
use crate::core::events::{SharedSnapshot, SnapshotBus};
use crate::core::{ConsoleError, Entity, EntityStore, Mutation};
use crate::entities::Coupon;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::watch;

/// Coupon store talking to the remote coupon API
#[derive(Clone)]
pub struct RemoteCouponStore {
    client: Client,
    base_url: String,
    /// `None` until the first successful list
    cache: Arc<RwLock<Option<Vec<Coupon>>>>,
    bus: Arc<SnapshotBus<Coupon>>,
}

impl RemoteCouponStore {
    /// Create a store for the API at `base_url` (e.g., "https://backoffice.example/api")
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a store from configuration, applying the request timeout if set
    pub fn from_config(config: &ApiConfig) -> Result<Self, ConsoleError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ConsoleError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: Arc::new(RwLock::new(None)),
            bus: Arc::new(SnapshotBus::new(Vec::new())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Coupons issued to individual customers. Degrades to empty on failure.
    pub async fn customer_coupons(&self) -> Vec<Coupon> {
        self.fetch_list("list customer coupons", &self.url("/Coupons/customer"), &[])
            .await
    }

    /// Coupons issued to communities. Degrades to empty on failure.
    pub async fn community_coupons(&self) -> Vec<Coupon> {
        self.fetch_list("list community coupons", &self.url("/Coupons/community"), &[])
            .await
    }

    /// Server-side search by coupon name. Degrades to empty on failure.
    pub async fn search_by_name(&self, name: &str) -> Vec<Coupon> {
        self.fetch_list(
            "search coupons",
            &self.url("/Coupons/search"),
            &[("name", name)],
        )
        .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/Coupons/{}", self.base_url, id)
    }

    async fn fetch_list(&self, operation: &str, url: &str, query: &[(&str, &str)]) -> Vec<Coupon> {
        match self.try_fetch_list(operation, url, query).await {
            Ok(coupons) => coupons,
            Err(e) => {
                tracing::warn!(operation, error = %e, "Coupon list unavailable, returning empty collection");
                Vec::new()
            }
        }
    }

    async fn try_fetch_list(
        &self,
        operation: &str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<Coupon>, ConsoleError> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ConsoleError::transport(operation, e))?;
        decode(operation, response).await
    }

    fn write_cache(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, Option<Vec<Coupon>>>, ConsoleError> {
        self.cache
            .write()
            .map_err(|e| ConsoleError::Internal(format!("Failed to acquire write lock: {}", e)))
    }

    /// Apply a confirmed mutation to the cache and publish the result.
    ///
    /// Publishing happens under the cache lock so snapshots land in mutation
    /// order. Without a loaded cache the collection is refetched instead.
    async fn apply_to_cache(&self, f: impl FnOnce(&mut Vec<Coupon>)) -> Result<(), ConsoleError> {
        let patched = {
            let mut cache = self.write_cache()?;
            match cache.as_mut() {
                Some(coupons) => {
                    f(coupons);
                    self.bus.publish(coupons.clone());
                    true
                }
                None => false,
            }
        };
        if !patched {
            self.list().await;
        }
        Ok(())
    }
}

/// Map a response to its JSON body, or to a transport failure naming `operation`
async fn decode<T: DeserializeOwned>(operation: &str, response: Response) -> Result<T, ConsoleError> {
    let response = check_status(operation, response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ConsoleError::transport(operation, e))
}

async fn check_status(operation: &str, response: Response) -> Result<Response, ConsoleError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    };
    Err(ConsoleError::transport(operation, message))
}

#[async_trait]
impl EntityStore<Coupon> for RemoteCouponStore {
    async fn list(&self) -> Vec<Coupon> {
        let operation = "list coupons";
        let coupons = match self.try_fetch_list(operation, &self.url("/Coupons"), &[]).await {
            Ok(coupons) => coupons,
            Err(e) => {
                // The cache stays stale until the next successful fetch
                tracing::warn!(operation, error = %e, "Coupon list unavailable, returning empty collection");
                return Vec::new();
            }
        };

        match self.write_cache() {
            Ok(mut cache) => {
                *cache = Some(coupons.clone());
                self.bus.publish(coupons.clone());
            }
            Err(e) => tracing::warn!(error = %e, "Coupon cache not refreshed"),
        }
        coupons
    }

    async fn get(&self, id: i64) -> Result<Coupon, ConsoleError> {
        let operation = "get coupon";
        let response = self
            .client
            .get(self.item_url(id))
            .send()
            .await
            .map_err(|e| ConsoleError::transport(operation, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ConsoleError::not_found(Coupon::resource_name_singular(), id));
        }
        decode(operation, response).await
    }

    async fn add(&self, draft: Coupon) -> Result<Coupon, ConsoleError> {
        let operation = "add coupon";
        let response = self
            .client
            .post(self.url("/Coupons"))
            .json(&draft)
            .send()
            .await
            .map_err(|e| ConsoleError::transport(operation, e))?;
        let created: Coupon = decode(operation, response).await?;

        let pushed = created.clone();
        self.apply_to_cache(|cache| cache.push(pushed)).await?;

        tracing::info!(id = created.id, code = %created.code, "Coupon created");
        Ok(created)
    }

    async fn update(&self, entity: Coupon) -> Result<Mutation, ConsoleError> {
        let operation = "update coupon";
        let id = entity.id;
        let response = self
            .client
            .put(self.item_url(id))
            .json(&entity)
            .send()
            .await
            .map_err(|e| ConsoleError::transport(operation, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(entity_type = "coupon", id, "Update skipped, id not found");
            return Ok(Mutation::NotFound);
        }
        check_status(operation, response).await?;

        self.apply_to_cache(|cache| match cache.iter_mut().find(|c| c.id == id) {
            Some(slot) => *slot = entity,
            None => cache.push(entity),
        })
        .await?;
        Ok(Mutation::Applied)
    }

    async fn delete(&self, id: i64) -> Result<Mutation, ConsoleError> {
        let operation = "delete coupon";
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| ConsoleError::transport(operation, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(entity_type = "coupon", id, "Delete skipped, id not found");
            return Ok(Mutation::NotFound);
        }
        check_status(operation, response).await?;

        self.apply_to_cache(|cache| cache.retain(|c| c.id != id)).await?;

        tracing::info!(id, "Coupon deleted");
        Ok(Mutation::Applied)
    }

    fn subscribe(&self) -> watch::Receiver<SharedSnapshot<Coupon>> {
        self.bus.subscribe()
    }

    fn close(&self) {
        self.bus.close();
    }
}
