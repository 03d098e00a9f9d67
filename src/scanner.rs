use crate::error::Error;
use std::{io::ErrorKind, path::Path, path::PathBuf};
use tokio::fs;
use tracing::warn;

pub const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".webp", ".bmp"];

/// Lists the image files directly inside `dir`, in listing order.
pub async fn list_images(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut entries = fs::read_dir(dir).await.map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::DirectoryNotFound(dir.to_owned()),
        _ => Error::IoError(err),
    })?;

    let mut images = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let file_name = entry.file_name();

        match file_name.to_str() {
            Some(name) if is_image(name) => images.push(dir.join(name)),
            Some(_) => (),
            None => warn!("Skipping non UTF-8 entry {file_name:?}"),
        }
    }

    Ok(images)
}

pub fn is_image(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}
