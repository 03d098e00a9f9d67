use crate::config::{Config, ObjectVisibility};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::{
    config::{Credentials, Region},
    error::DisplayErrorContext,
    primitives::{ByteStream, ByteStreamError},
    types::ObjectCannedAcl,
    Client,
};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Per-object hints passed along with an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub content_type: Option<String>,
    pub visibility: ObjectVisibility,
}

/// The single operation this tool needs from an object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload_object(
        &self,
        path: &Path,
        bucket: &str,
        key: &str,
        options: &UploadOptions,
    ) -> Result<(), StorageError>;
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not read file: {0}")]
    Read(#[from] ByteStreamError),
    #[error("{0}")]
    Request(String),
}

pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a path-style client for the configured S3-compatible endpoint.
    pub async fn connect(config: &Config) -> Self {
        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "static",
        );

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url(&config.endpoint_url)
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(true)
            .build();

        Self::new(Client::from_conf(s3_config))
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn upload_object(
        &self,
        path: &Path,
        bucket: &str,
        key: &str,
        options: &UploadOptions,
    ) -> Result<(), StorageError> {
        let body = ByteStream::from_path(path).await?;

        let acl = match options.visibility {
            ObjectVisibility::PublicRead => Some(ObjectCannedAcl::PublicRead),
            ObjectVisibility::Default => None,
        };

        let output = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .set_content_type(options.content_type.clone())
            .set_acl(acl)
            .send()
            .await
            .map_err(|err| StorageError::Request(DisplayErrorContext(&err).to_string()))?;

        debug!("Stored {bucket}/{key}, etag {:?}", output.e_tag());

        Ok(())
    }
}
