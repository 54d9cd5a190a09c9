use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    errors::{StorageError, StorageResult},
    models::LifecycleConfiguration,
    value_objects::BucketName,
};
use crate::ports::storage::BucketStore;

/// In-memory implementation of BucketStore for testing and development
///
/// Holds a fixed bucket listing and records the last lifecycle
/// configuration applied per bucket. Failures can be injected for the
/// listing call or for individual buckets, and the peak number of
/// concurrent update calls is tracked so the dispatch bound is observable.
#[derive(Clone, Default)]
pub struct InMemoryBucketStore {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    buckets: Vec<BucketName>,
    listing_failure: Option<String>,
    put_failures: RwLock<HashMap<String, StorageError>>,
    applied: RwLock<HashMap<String, LifecycleConfiguration>>,
    put_delay_ms: AtomicU64,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl InMemoryBucketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with the given bucket listing
    pub fn with_buckets(buckets: Vec<BucketName>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                buckets,
                ..Default::default()
            }),
        }
    }

    /// Make the listing call fail with the given message
    pub fn with_listing_failure(message: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                listing_failure: Some(message.into()),
                ..Default::default()
            }),
        }
    }

    /// Delay every update call, making concurrent overlap observable
    pub fn with_put_delay(self, delay: Duration) -> Self {
        self.inner
            .put_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
        self
    }

    /// Inject a failure for updates against one bucket
    pub async fn fail_bucket(&self, bucket: &BucketName, error: StorageError) {
        self.inner
            .put_failures
            .write()
            .await
            .insert(bucket.as_str().to_string(), error);
    }

    /// The configuration last applied to the bucket, if any
    pub async fn configuration_for(
        &self,
        bucket: &BucketName,
    ) -> Option<LifecycleConfiguration> {
        self.inner.applied.read().await.get(bucket.as_str()).cloned()
    }

    /// Number of buckets that received a configuration
    pub async fn applied_count(&self) -> usize {
        self.inner.applied.read().await.len()
    }

    /// Highest number of update calls observed in flight at once
    pub fn max_in_flight(&self) -> usize {
        self.inner.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BucketStore for InMemoryBucketStore {
    async fn list_buckets(&self) -> StorageResult<Vec<BucketName>> {
        if let Some(message) = &self.inner.listing_failure {
            return Err(StorageError::ListBuckets {
                message: message.clone(),
            });
        }

        Ok(self.inner.buckets.clone())
    }

    async fn put_lifecycle_configuration(
        &self,
        bucket: &BucketName,
        config: &LifecycleConfiguration,
    ) -> StorageResult<()> {
        let in_flight = self.inner.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner
            .max_in_flight
            .fetch_max(in_flight, Ordering::SeqCst);

        let delay_ms = self.inner.put_delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let result = {
            if let Some(error) = self.inner.put_failures.read().await.get(bucket.as_str()) {
                Err(error.clone())
            } else {
                // Overwrite semantics: the previous configuration is replaced
                self.inner
                    .applied
                    .write()
                    .await
                    .insert(bucket.as_str().to_string(), config.clone());
                Ok(())
            }
        };

        self.inner.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: &str) -> BucketName {
        BucketName::new(name.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_listing_returns_seeded_buckets() {
        let store = InMemoryBucketStore::with_buckets(vec![bucket("my-test-a")]);
        let listed = store.list_buckets().await.unwrap();
        assert_eq!(listed, vec![bucket("my-test-a")]);
    }

    #[tokio::test]
    async fn test_put_overwrites_previous_configuration() {
        let store = InMemoryBucketStore::with_buckets(vec![bucket("my-test-a")]);
        let target = bucket("my-test-a");

        store
            .put_lifecycle_configuration(&target, &LifecycleConfiguration::retention_policy(7))
            .await
            .unwrap();
        store
            .put_lifecycle_configuration(&target, &LifecycleConfiguration::retention_policy(1))
            .await
            .unwrap();

        let config = store.configuration_for(&target).await.unwrap();
        assert_eq!(config.rules[0].expiration_days, Some(1));
        assert_eq!(store.applied_count().await, 1);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let store = InMemoryBucketStore::with_listing_failure("connection refused");
        assert!(matches!(
            store.list_buckets().await,
            Err(StorageError::ListBuckets { .. })
        ));

        let store = InMemoryBucketStore::new();
        let target = bucket("my-test-a");
        store
            .fail_bucket(
                &target,
                StorageError::AccessDenied {
                    bucket: target.clone(),
                },
            )
            .await;
        let result = store
            .put_lifecycle_configuration(&target, &LifecycleConfiguration::retention_policy(1))
            .await;
        assert!(matches!(result, Err(StorageError::AccessDenied { .. })));
        assert_eq!(store.applied_count().await, 0);
    }
}
