use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    auth::login,
    registration::show_registered_events,
    user::{get_current_user, register_user},
};

pub fn build_user_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/users/create", post(register_user))
        .route("/users/login", post(login))
        .route("/users/me", get(get_current_user))
        .route("/users/registered-events", get(show_registered_events))
}
