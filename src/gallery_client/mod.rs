//! GalleryClient - Camp Photo Fetching for Views
//!
//! ## Responsibilities
//!
//! - Call `GET /api/campamento-imagenes/:id` on the server
//! - Open the lightbox with the fetched image sequence

use crate::error::{Error, Result};
use crate::modal_store::ModalStore;
use crate::models::{ErrorBody, ImagesResponse};
use std::time::Duration;

/// HTTP client for the photo listing endpoint
pub struct GalleryClient {
    client: reqwest::Client,
    base_url: String,
}

impl GalleryClient {
    /// Create new client
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Create new client with custom timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Image paths for a camp
    pub async fn fetch_images(&self, camp_id: &str) -> Result<Vec<String>> {
        let url = format!("{}/api/campamento-imagenes/{}", self.base_url, camp_id);
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("Image listing failed: {}", status),
            };
            tracing::warn!(camp_id = %camp_id, status = %status, error = %message, "Image listing request failed");
            return Err(Error::Api(message));
        }

        let body: ImagesResponse = resp.json().await?;
        Ok(body.images)
    }

    /// Fetch a camp's images and show them in the lightbox at `start_index`.
    ///
    /// The modal stays closed when the request fails. Returns the number of
    /// images opened.
    pub async fn open_gallery(
        &self,
        camp_id: &str,
        modal: &ModalStore,
        start_index: usize,
    ) -> Result<usize> {
        let images = self.fetch_images(camp_id).await?;
        let count = images.len();
        modal.open(images, start_index);
        Ok(count)
    }
}
