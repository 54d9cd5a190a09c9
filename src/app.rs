use std::sync::Arc;

use crate::{
    adapters::outbound::storage::{InMemoryBucketStore, S3BucketStore},
    domain::value_objects::BucketName,
    ports::storage::BucketStore,
    services::{SweepConfig, SweepService},
};

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sweep: SweepConfig,
    pub storage_backend: StorageBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sweep: SweepConfig::default(),
            storage_backend: StorageBackend::S3,
        }
    }
}

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// AWS S3, authenticated through the ambient credential chain
    S3,
    /// In-memory store seeded with the given bucket names
    InMemory { buckets: Vec<String> },
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure the sweep tunables
    pub fn with_sweep_config(mut self, sweep: SweepConfig) -> Self {
        self.config.sweep = sweep;
        self
    }

    /// Configure the storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    /// Build the sweep service with its storage dependency wired in
    pub async fn build(self) -> Result<SweepService, AppError> {
        self.config
            .sweep
            .validate()
            .map_err(|err| AppError::Configuration {
                message: err.to_string(),
            })?;

        let store = self.create_store().await?;

        Ok(SweepService::new(store, self.config.sweep))
    }

    /// Create the storage adapter based on configuration
    async fn create_store(&self) -> Result<Arc<dyn BucketStore>, AppError> {
        match &self.config.storage_backend {
            StorageBackend::S3 => Ok(Arc::new(S3BucketStore::from_env().await)),
            StorageBackend::InMemory { buckets } => {
                let mut names = Vec::with_capacity(buckets.len());
                for name in buckets {
                    let bucket = BucketName::new(name.clone()).map_err(|err| {
                        AppError::Configuration {
                            message: format!("Invalid seeded bucket name '{}': {}", name, err),
                        }
                    })?;
                    names.push(bucket);
                }
                Ok(Arc::new(InMemoryBucketStore::with_buckets(names)))
            }
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Convenience functions for common configurations
///
/// Create an S3-backed sweep service using ambient credentials
pub async fn create_s3_app(sweep: SweepConfig) -> Result<SweepService, AppError> {
    AppBuilder::new()
        .with_sweep_config(sweep)
        .with_storage_backend(StorageBackend::S3)
        .build()
        .await
}

/// Create an in-memory sweep service for testing and development
pub async fn create_in_memory_app(
    sweep: SweepConfig,
    buckets: Vec<String>,
) -> Result<SweepService, AppError> {
    AppBuilder::new()
        .with_sweep_config(sweep)
        .with_storage_backend(StorageBackend::InMemory { buckets })
        .build()
        .await
}
