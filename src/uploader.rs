use crate::{
    config::Config,
    error::Error,
    object_url::build_object_url,
    response::{UploadReport, UploadResult},
    storage::{ObjectStore, UploadOptions},
};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

/// Uploads `files` one after another, writing a line per file to `out`.
///
/// A failed file is reported and skipped; only writing to `out` can abort
/// the batch.
pub async fn upload_all<S, W>(
    store: &S,
    config: &Config,
    files: &[PathBuf],
    out: &mut W,
) -> io::Result<UploadReport>
where
    S: ObjectStore + ?Sized,
    W: Write,
{
    let mut report = UploadReport::default();

    for path in files {
        match upload_one(store, config, path).await {
            Ok(result) => {
                writeln!(
                    out,
                    "Uploaded {} -> {}",
                    result.source_path.display(),
                    result.public_url
                )?;
                report.uploaded.push(result);
            }
            Err(err) => {
                writeln!(out, "Error uploading {}: {err}", path.display())?;
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

async fn upload_one<S>(store: &S, config: &Config, path: &Path) -> Result<UploadResult, Error>
where
    S: ObjectStore + ?Sized,
{
    let key = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::MissingFileName(path.to_owned()))?;

    let options = UploadOptions {
        content_type: mime_guess::from_path(path)
            .first()
            .map(|mime| mime.to_string()),
        visibility: config.visibility(),
    };

    debug!(
        "Uploading {key} (content type {:?}, {:?})",
        options.content_type, options.visibility
    );

    store
        .upload_object(path, &config.bucket, &key, &options)
        .await?;

    let public_url = build_object_url(&config.endpoint_url, &config.bucket, &key)?;

    Ok(UploadResult {
        source_path: path.to_owned(),
        public_url,
    })
}
