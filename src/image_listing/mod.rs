//! ImageListingService - Per-camp Photo Listing
//!
//! ## Responsibilities
//!
//! - Normalize camp ids into zero-padded directory names (`id_007`)
//! - Resolve `<data_dir>/fotos_stl/id_<padded>/`
//! - Enumerate image files (jpg, jpeg, png, gif; case-insensitive)
//! - Build public paths `data/fotos_stl/id_<padded>/<filename>`
//!
//! A missing directory is an empty listing, not an error.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Directory under the data root holding one folder per camp
pub const PHOTOS_DIR: &str = "fotos_stl";

/// URL prefix under which the data root is served
pub const PUBLIC_DATA_PREFIX: &str = "data";

/// Minimum width of the zero-padded camp id
const MIN_ID_WIDTH: usize = 3;

/// Accepted image extensions (lowercase, without dot)
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Zero-pad a camp id to at least three digits.
///
/// Longer ids are kept as they are: `7` -> `007`, `1000` -> `1000`.
pub fn pad_camp_id(raw: &str) -> String {
    format!("{:0>width$}", raw, width = MIN_ID_WIDTH)
}

/// Directory name for a camp (`id_007`)
pub fn camp_dir_name(raw: &str) -> String {
    format!("id_{}", pad_camp_id(raw))
}

/// True when the file name carries one of the accepted image extensions
pub fn is_image_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Only plain decimal ids can name a photo directory
fn is_valid_camp_id(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// ImageListingService instance
#[derive(Debug, Clone)]
pub struct ImageListingService {
    /// Root of the served data tree (contains `fotos_stl/`)
    data_dir: PathBuf,
}

impl ImageListingService {
    /// Create new ImageListingService rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Data root this service reads from
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve the photo directory for a camp id
    pub fn camp_dir(&self, raw_id: &str) -> PathBuf {
        self.data_dir.join(PHOTOS_DIR).join(camp_dir_name(raw_id))
    }

    /// List the public image paths for a camp.
    ///
    /// Returns an empty list when the directory does not exist. Any other
    /// filesystem failure yields `Error::ImageListing`; no partial result is
    /// returned in that case. Paths are sorted by file name.
    pub async fn list_images(&self, raw_id: &str) -> Result<Vec<String>> {
        let raw_id = raw_id.trim();
        if !is_valid_camp_id(raw_id) {
            tracing::debug!(camp_id = %raw_id, "Non-numeric camp id, no photo directory");
            return Ok(Vec::new());
        }

        let padded = pad_camp_id(raw_id);
        let dir = self.camp_dir(raw_id);
        let fail = |source: std::io::Error| Error::ImageListing {
            camp_id: padded.clone(),
            source,
        };

        if !fs::try_exists(&dir).await.map_err(fail)? {
            tracing::debug!(camp_id = %padded, dir = %dir.display(), "Photo directory missing");
            return Ok(Vec::new());
        }

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            // Removed between the existence check and the read
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(fail(e)),
        };

        let mut file_names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(fail)? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                tracing::warn!(
                    camp_id = %padded,
                    file_name = ?name,
                    "Skipping non UTF-8 file name"
                );
                continue;
            };
            if is_image_file(name) {
                file_names.push(name.to_string());
            }
        }
        file_names.sort();

        let images: Vec<String> = file_names
            .into_iter()
            .map(|name| {
                format!(
                    "{}/{}/id_{}/{}",
                    PUBLIC_DATA_PREFIX, PHOTOS_DIR, padded, name
                )
            })
            .collect();

        tracing::debug!(camp_id = %padded, count = images.len(), "Listed camp images");
        Ok(images)
    }
}
