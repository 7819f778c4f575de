//! Campamentos Server Library
//!
//! Camp catalog with per-camp photo galleries.
//!
//! ## Architecture
//!
//! 1. ImageListingService - Photo files on disk for one camp
//! 2. CampCatalog - Read-only camp dataset
//! 3. WebAPI - Listing endpoint, catalog endpoint, static files
//! 4. Store - Observable state primitives
//! 5. CampStore - Selected camp state
//! 6. ModalStore - Lightbox state and transitions
//! 7. ScrollLock - Page overflow effect bound to lightbox transitions
//! 8. GalleryClient - Fetches a camp's photos and opens the lightbox
//!
//! Stores are plain values created once per application context and passed
//! to the views that use them.

pub mod camp_catalog;
pub mod camp_store;
pub mod error;
pub mod gallery_client;
pub mod image_listing;
pub mod modal_store;
pub mod models;
pub mod scroll_lock;
pub mod state;
pub mod store;
pub mod web_api;

pub use error::{Error, Result};
pub use state::AppState;
