use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    event::{create_event, show_event_list},
    registration::register_event,
};

pub fn build_event_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/events", get(show_event_list))
        // 画像のサイズは制限しない
        .route(
            "/events/create",
            post(create_event).layer(DefaultBodyLimit::disable()),
        )
        .route("/events/register", post(register_event))
}
