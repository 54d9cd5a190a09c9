use crate::domain::{
    errors::StorageResult, models::LifecycleConfiguration, value_objects::BucketName,
};
use async_trait::async_trait;

/// Storage port for bucket control-plane operations
///
/// Implementations must be safe for concurrent use: the sweep dispatcher
/// calls `put_lifecycle_configuration` from many tasks against one shared
/// instance, so all methods take `&self` and any internal handles must be
/// cheaply shareable.
#[async_trait]
pub trait BucketStore: Send + Sync + 'static {
    /// List every bucket visible to the caller's credentials.
    ///
    /// Issues a single listing call and returns one response page; accounts
    /// with more buckets than fit in a page are not fully enumerated.
    async fn list_buckets(&self) -> StorageResult<Vec<BucketName>>;

    /// Replace the bucket's lifecycle configuration with `config`.
    ///
    /// The previous configuration, if any, is overwritten, not merged.
    async fn put_lifecycle_configuration(
        &self,
        bucket: &BucketName,
        config: &LifecycleConfiguration,
    ) -> StorageResult<()>;
}
