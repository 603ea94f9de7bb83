use axum::{
    routing::get,
    Router,
};
use crate::handlers::user::{
    get_users, get_user, create_user, update_user, delete_user,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
}
