use tower_http::cors::{Any, CorsLayer};

// Open CORS policy; the service fronts a browser client on another origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
