pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    BucketName,

    LifecycleConfiguration,
    LifecycleRule,
    RuleFilter,
    RuleStatus,

    // Errors
    StorageError,
    StorageResult,
    ValidationError,

    // Fixed rule ids of the retention policy
    ABORT_MULTIPART_RULE_ID,
    EXPIRE_DELETE_MARKERS_RULE_ID,
    EXPIRE_OBJECTS_RULE_ID,
};

// Port types - interfaces for external systems
pub use ports::BucketStore;

// Service implementations - business logic
pub use services::{
    SweepConfig, SweepReport, SweepService, DEFAULT_BUCKET_PREFIX,
    DEFAULT_MAX_CONCURRENT_UPDATES, DEFAULT_RETENTION_DAYS,
};

// Application factory and configuration
pub use app::{
    create_in_memory_app, create_s3_app, AppBuilder, AppConfig, AppError, StorageBackend,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::storage::{InMemoryBucketStore, S3BucketStore};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_in_memory_app, create_s3_app, AppBuilder, BucketName, BucketStore,
        InMemoryBucketStore, LifecycleConfiguration, LifecycleRule, S3BucketStore, SweepConfig,
        SweepReport, SweepService,
    };
}
