// src/services/user.rs
use crate::dtos::page::PageRequest;
use crate::dtos::user::NewUser;
use crate::error::AppError;
use crate::models::user::User;
use crate::repository::user::UserRepository;

/// Service layer over [`UserRepository`]. Translates missing-row outcomes
/// into NotFound failures; the path identifier is authoritative for every
/// write (the [`NewUser`] input carries no id at all).
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    fn not_found(id: i64) -> AppError {
        AppError::not_found(format!("User with id {id} can not be found"))
    }

    pub async fn count_users(&self) -> Result<i64, AppError> {
        Ok(self.repo.count().await?)
    }

    pub async fn get_users(&self, request: &PageRequest) -> Result<(Vec<User>, i64), AppError> {
        Ok(self.repo.find_page(request).await?)
    }

    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Persists a new user and returns the storage-assigned id.
    pub async fn create_user(&self, user: NewUser) -> Result<i64, AppError> {
        Ok(self.repo.insert(&user).await?)
    }

    /// Full overwrite of username/password for the row at `id`.
    pub async fn update_user(&self, id: i64, user: NewUser) -> Result<(), AppError> {
        if !self.repo.update(id, &user).await? {
            return Err(Self::not_found(id));
        }
        Ok(())
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
