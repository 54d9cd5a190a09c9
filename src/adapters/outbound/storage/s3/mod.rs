//! S3 storage adapter backed by the AWS SDK
//!
//! Implements the BucketStore port over the S3 control-plane API using a
//! client built from the ambient credential chain.

pub mod s3_adapter;

pub use s3_adapter::S3BucketStore;
