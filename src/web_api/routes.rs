//! API Routes

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::error::Result;
use crate::models::ImagesResponse;
use crate::state::AppState;

/// Create API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(super::health_check))
        // Camps
        .route("/api/campamentos", get(list_camps))
        .route("/api/campamento-imagenes/:id", get(list_camp_images))
        .with_state(state)
}

// ========================================
// Camp Handlers
// ========================================

/// Photo paths for one camp; empty when the camp has no photo directory
async fn list_camp_images(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ImagesResponse>> {
    let images = state.image_listing.list_images(&id).await?;
    Ok(Json(ImagesResponse { images }))
}

/// Full camp dataset with flattened coordinates
async fn list_camps(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.camps().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camp_catalog::CampCatalog;
    use crate::image_listing::PHOTOS_DIR;
    use crate::models::{ErrorBody, HealthResponse};
    use crate::state::AppConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_state(data_dir: &std::path::Path, catalog: CampCatalog) -> AppState {
        let config = AppConfig {
            data_dir: data_dir.to_path_buf(),
            ..AppConfig::default()
        };
        AppState::new(config, catalog)
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_lists_filtered_images() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(PHOTOS_DIR).join("id_003");
        std::fs::create_dir_all(&dir).unwrap();
        for file in ["a.jpg", "b.PNG", "notes.txt"] {
            std::fs::write(dir.join(file), b"x").unwrap();
        }

        let router = create_router(test_state(tmp.path(), CampCatalog::default()));
        let (status, body) = get(router, "/api/campamento-imagenes/3").await;

        assert_eq!(status, StatusCode::OK);
        let response: ImagesResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            response.images,
            vec![
                "data/fotos_stl/id_003/a.jpg".to_string(),
                "data/fotos_stl/id_003/b.PNG".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_directory_returns_empty_list() {
        let tmp = TempDir::new().unwrap();
        let router = create_router(test_state(tmp.path(), CampCatalog::default()));
        let (status, body) = get(router, "/api/campamento-imagenes/42").await;

        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, serde_json::json!({ "images": [] }));
    }

    #[tokio::test]
    async fn test_unreadable_directory_returns_500() {
        let tmp = TempDir::new().unwrap();
        let photos = tmp.path().join(PHOTOS_DIR);
        std::fs::create_dir_all(&photos).unwrap();
        std::fs::write(photos.join("id_007"), b"not a directory").unwrap();

        let router = create_router(test_state(tmp.path(), CampCatalog::default()));
        let (status, body) = get(router, "/api/campamento-imagenes/7").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "Error al obtener las imágenes");
    }

    #[tokio::test]
    async fn test_list_camps() {
        let tmp = TempDir::new().unwrap();
        let catalog = CampCatalog::from_json(
            r#"{ "campamentos": [ { "id": 5, "nombre": "Sierra", "coordenadas": { "lat": 1.5, "lng": 2.5 } } ] }"#,
        )
        .unwrap();
        let router = create_router(test_state(tmp.path(), catalog));
        let (status, body) = get(router, "/api/campamentos").await;

        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!([ { "id": 5, "nombre": "Sierra", "lat": 1.5, "lng": 2.5 } ])
        );
    }

    #[tokio::test]
    async fn test_health_check() {
        let tmp = TempDir::new().unwrap();
        let router = create_router(test_state(tmp.path(), CampCatalog::default()));
        let (status, body) = get(router, "/healthz").await;

        assert_eq!(status, StatusCode::OK);
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.camp_count, 0);
    }
}
