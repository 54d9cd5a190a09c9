pub mod storage;

pub use storage::{InMemoryBucketStore, S3BucketStore};
