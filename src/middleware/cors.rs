//! Middleware de CORS
//! 
//! El frontend se sirve desde otro origen, así que se permite cualquiera.

use tower_http::cors::CorsLayer;

pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
