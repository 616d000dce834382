use axum::Router;
use registry::AppRegistry;
use std::path::Path;
use tower_http::services::ServeDir;

// アップロード画像はファイル名だけで誰でも取得できる
pub fn build_upload_routers(dir: &Path) -> Router<AppRegistry> {
    Router::new().nest_service("/uploads", ServeDir::new(dir))
}
