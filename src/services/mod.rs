mod sweep_service;

pub use sweep_service::{
    SweepConfig, SweepReport, SweepService, DEFAULT_BUCKET_PREFIX,
    DEFAULT_MAX_CONCURRENT_UPDATES, DEFAULT_RETENTION_DAYS,
};
