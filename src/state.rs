// src/state.rs
use sqlx::sqlite::SqlitePool;

use crate::repository::user::UserRepository;
use crate::services::user::UserService;

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self {
            users: UserService::new(UserRepository::new(db_pool)),
        }
    }
}
