//! CORS middleware configuration
//!
//! The API is consumed by a browser frontend served from a different
//! origin, so every response carries permissive CORS headers.

use tower_http::cors::CorsLayer;

/// Create the CORS layer (allows any origin, method, and header)
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
