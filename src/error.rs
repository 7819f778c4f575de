//! Error handling for the campamentos server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorBody;

/// Message returned to clients when a camp's photo directory cannot be read
pub const IMAGE_LISTING_FAILED: &str = "Error al obtener las imágenes";

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Photo directory exists but could not be inspected or read
    #[error("Error al obtener las imágenes")]
    ImageListing {
        camp_id: String,
        #[source]
        source: std::io::Error,
    },

    /// Camp dataset could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote API answered with an error body
    #[error("API error: {0}")]
    Api(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::ImageListing { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Http(_) => StatusCode::BAD_GATEWAY,
            Error::Api(_) => StatusCode::BAD_GATEWAY,
        };

        match &self {
            Error::ImageListing { camp_id, source } => tracing::error!(
                status = %status,
                camp_id = %camp_id,
                error = %source,
                "Error al obtener imágenes"
            ),
            other => tracing::error!(status = %status, error = %other, "Request error"),
        }

        let body = Json(ErrorBody {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
