use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::domain::{
    errors::{StorageError, StorageResult, ValidationError},
    models::LifecycleConfiguration,
    value_objects::BucketName,
};
use crate::ports::storage::BucketStore;

/// Default bucket name prefix swept when none is configured
pub const DEFAULT_BUCKET_PREFIX: &str = "my-test-";

/// Default number of days before objects, versions and uploads expire
pub const DEFAULT_RETENTION_DAYS: u32 = 1;

/// Default bound on concurrent lifecycle update requests
pub const DEFAULT_MAX_CONCURRENT_UPDATES: usize = 15;

/// Tunables for a single sweep run
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Only buckets whose name starts with this prefix are updated.
    /// An empty prefix matches every bucket in the account.
    pub prefix: String,
    /// Days before current objects and noncurrent versions expire and
    /// incomplete multipart uploads are aborted. Must be at least 1.
    pub retention_days: u32,
    /// Maximum lifecycle update requests in flight at once. Must be at
    /// least 1.
    pub max_concurrent: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_BUCKET_PREFIX.to_string(),
            retention_days: DEFAULT_RETENTION_DAYS,
            max_concurrent: DEFAULT_MAX_CONCURRENT_UPDATES,
        }
    }
}

impl SweepConfig {
    /// Create a configuration with the documented defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bucket name prefix to sweep
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the retention period in days
    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    /// Set the concurrency bound for update requests
    pub fn with_max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent = max;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.retention_days == 0 {
            return Err(ValidationError::InvalidField {
                field: "retention_days".to_string(),
                value: self.retention_days.to_string(),
                expected: "at least 1".to_string(),
            });
        }

        if self.max_concurrent == 0 {
            return Err(ValidationError::InvalidField {
                field: "max_concurrent".to_string(),
                value: self.max_concurrent.to_string(),
                expected: "at least 1".to_string(),
            });
        }

        Ok(())
    }
}

/// Per-bucket outcomes of a completed sweep run
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Buckets whose lifecycle configuration was replaced
    pub applied: Vec<BucketName>,
    /// Buckets whose update failed, with the cause
    pub failed: Vec<(BucketName, StorageError)>,
}

impl SweepReport {
    /// Number of buckets that matched the prefix and were attempted
    pub fn matched(&self) -> usize {
        self.applied.len() + self.failed.len()
    }

    /// True when every attempted bucket was updated successfully
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Sweeps matching buckets with the fixed retention lifecycle policy
///
/// Lists all buckets, keeps the ones matching the configured prefix and
/// fans the lifecycle updates out over a bounded pool of concurrent tasks.
/// Each bucket is processed independently; one bucket's failure never
/// aborts the others. `run` resolves only after every submitted update has
/// completed, successfully or not.
pub struct SweepService {
    store: Arc<dyn BucketStore>,
    config: SweepConfig,
}

impl SweepService {
    /// Create a sweep service over the given storage port
    pub fn new(store: Arc<dyn BucketStore>, config: SweepConfig) -> Self {
        Self { store, config }
    }

    /// The configuration this service runs with
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run one sweep and report the per-bucket outcomes.
    ///
    /// A listing failure is fatal and propagates; per-bucket update
    /// failures are caught, logged with the bucket name and recorded in
    /// the report.
    pub async fn run(&self) -> StorageResult<SweepReport> {
        self.config.validate()?;

        let buckets = self.store.list_buckets().await?;
        let total = buckets.len();

        let matching: Vec<BucketName> = buckets
            .into_iter()
            .filter(|bucket| bucket.has_prefix(&self.config.prefix))
            .collect();

        debug!(
            total,
            matched = matching.len(),
            prefix = %self.config.prefix,
            "filtered bucket listing"
        );

        let policy = LifecycleConfiguration::retention_policy(self.config.retention_days);
        policy.validate()?;

        let outcomes: Vec<(BucketName, StorageResult<()>)> = stream::iter(matching)
            .map(|bucket| {
                let store = Arc::clone(&self.store);
                let policy = policy.clone();
                async move {
                    let result = store.put_lifecycle_configuration(&bucket, &policy).await;
                    match &result {
                        Ok(()) => info!("Updated lifecycle policy for bucket: {}", bucket),
                        Err(err) => {
                            warn!("Error updating lifecycle for bucket {}: {}", bucket, err)
                        }
                    }
                    (bucket, result)
                }
            })
            .buffer_unordered(self.config.max_concurrent)
            .collect()
            .await;

        let mut report = SweepReport::default();
        for (bucket, result) in outcomes {
            match result {
                Ok(()) => report.applied.push(bucket),
                Err(err) => report.failed.push((bucket, err)),
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SweepConfig::default();
        assert_eq!(config.prefix, "my-test-");
        assert_eq!(config.retention_days, 1);
        assert_eq!(config.max_concurrent, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SweepConfig::new()
            .with_prefix("staging-")
            .with_retention_days(7)
            .with_max_concurrent(4);

        assert_eq!(config.prefix, "staging-");
        assert_eq!(config.retention_days, 7);
        assert_eq!(config.max_concurrent, 4);
    }

    #[test]
    fn test_config_rejects_zero_values() {
        let config = SweepConfig::new().with_retention_days(0);
        assert!(config.validate().is_err());

        let config = SweepConfig::new().with_max_concurrent(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_report_counters() {
        let mut report = SweepReport::default();
        assert_eq!(report.matched(), 0);
        assert!(report.is_clean());

        let bucket = BucketName::new("my-test-a".to_string()).unwrap();
        report.applied.push(bucket.clone());
        report.failed.push((
            bucket.clone(),
            StorageError::AccessDenied { bucket },
        ));

        assert_eq!(report.matched(), 2);
        assert!(!report.is_clean());
    }
}
