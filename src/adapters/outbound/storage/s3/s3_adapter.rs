use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::put_bucket_lifecycle_configuration::PutBucketLifecycleConfigurationError;
use aws_sdk_s3::types;
use tracing::warn;

use crate::domain::{
    errors::{StorageError, StorageResult},
    models::{LifecycleConfiguration, LifecycleRule, RuleStatus},
    value_objects::BucketName,
};
use crate::ports::storage::BucketStore;

/// BucketStore backed by the AWS S3 control-plane API
///
/// The wrapped SDK client is cheaply cloneable and safe to share across
/// tasks, which satisfies the concurrency precondition of the port.
pub struct S3BucketStore {
    client: aws_sdk_s3::Client,
}

impl S3BucketStore {
    /// Wrap an explicitly constructed SDK client
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }

    /// Build a client from the ambient credential chain (environment,
    /// shared config files, instance metadata)
    pub async fn from_env() -> Self {
        let config = aws_config::load_from_env().await;
        Self::new(aws_sdk_s3::Client::new(&config))
    }
}

#[async_trait]
impl BucketStore for S3BucketStore {
    async fn list_buckets(&self) -> StorageResult<Vec<BucketName>> {
        let output = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|err| StorageError::ListBuckets {
                message: DisplayErrorContext(&err).to_string(),
            })?;

        let mut names = Vec::new();
        for bucket in output.buckets() {
            let Some(name) = bucket.name() else {
                continue;
            };
            match BucketName::new(name.to_string()) {
                Ok(bucket_name) => names.push(bucket_name),
                // Legacy names (dots, uppercase) fall outside the grammar
                // this tool supports; skip them rather than abort the run
                Err(err) => warn!("Skipping bucket with unsupported name '{}': {}", name, err),
            }
        }

        Ok(names)
    }

    async fn put_lifecycle_configuration(
        &self,
        bucket: &BucketName,
        config: &LifecycleConfiguration,
    ) -> StorageResult<()> {
        let lifecycle = build_lifecycle_configuration(config)?;

        self.client
            .put_bucket_lifecycle_configuration()
            .bucket(bucket.as_str())
            .lifecycle_configuration(lifecycle)
            .send()
            .await
            .map_err(|err| map_put_error(bucket, err))?;

        Ok(())
    }
}

/// Translate the domain lifecycle model into the SDK request body
fn build_lifecycle_configuration(
    config: &LifecycleConfiguration,
) -> StorageResult<types::BucketLifecycleConfiguration> {
    config.validate()?;

    let mut rules = Vec::with_capacity(config.rules.len());
    for rule in &config.rules {
        rules.push(build_rule(rule)?);
    }

    types::BucketLifecycleConfiguration::builder()
        .set_rules(Some(rules))
        .build()
        .map_err(|err| StorageError::InvalidConfiguration {
            message: err.to_string(),
        })
}

fn build_rule(rule: &LifecycleRule) -> StorageResult<types::LifecycleRule> {
    let mut builder = types::LifecycleRule::builder()
        .id(&rule.id)
        .status(build_status(&rule.status))
        .filter(
            types::LifecycleRuleFilter::builder()
                .prefix(rule.filter.prefix())
                .build(),
        );

    if rule.expiration_days.is_some() || rule.expired_object_delete_marker.is_some() {
        let mut expiration = types::LifecycleExpiration::builder();
        if let Some(days) = rule.expiration_days {
            expiration = expiration.days(build_days(days)?);
        }
        if let Some(marker) = rule.expired_object_delete_marker {
            expiration = expiration.expired_object_delete_marker(marker);
        }
        builder = builder.expiration(expiration.build());
    }

    if let Some(days) = rule.noncurrent_version_expiration_days {
        builder = builder.noncurrent_version_expiration(
            types::NoncurrentVersionExpiration::builder()
                .noncurrent_days(build_days(days)?)
                .build(),
        );
    }

    if let Some(days) = rule.abort_incomplete_multipart_upload_days {
        builder = builder.abort_incomplete_multipart_upload(
            types::AbortIncompleteMultipartUpload::builder()
                .days_after_initiation(build_days(days)?)
                .build(),
        );
    }

    builder
        .build()
        .map_err(|err| StorageError::InvalidConfiguration {
            message: err.to_string(),
        })
}

fn build_status(status: &RuleStatus) -> types::ExpirationStatus {
    match status {
        RuleStatus::Enabled => types::ExpirationStatus::Enabled,
        RuleStatus::Disabled => types::ExpirationStatus::Disabled,
    }
}

fn build_days(days: u32) -> StorageResult<i32> {
    i32::try_from(days).map_err(|_| StorageError::InvalidConfiguration {
        message: format!("Day count out of range: {}", days),
    })
}

fn map_put_error(
    bucket: &BucketName,
    err: SdkError<PutBucketLifecycleConfigurationError>,
) -> StorageError {
    match err.as_service_error().and_then(|service_err| service_err.code()) {
        Some("AccessDenied") => StorageError::AccessDenied {
            bucket: bucket.clone(),
        },
        Some("NoSuchBucket") => StorageError::BucketNotFound {
            bucket: bucket.clone(),
        },
        _ => StorageError::PutLifecycle {
            bucket: bucket.clone(),
            message: DisplayErrorContext(&err).to_string(),
        },
    }
}
