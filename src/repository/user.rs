// src/repository/user.rs
use sqlx::sqlite::SqlitePool;

use crate::dtos::page::PageRequest;
use crate::dtos::user::NewUser;
use crate::models::user::User;

/// Storage access for the `users` table. Each method is a single SQL
/// statement, atomic under the store's default transaction semantics.
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
    }

    /// Windowed, ordered read plus the total row count. Absent sort falls
    /// back to ordering by id, which is stable across identical reads.
    ///
    /// Count and page run inside one read transaction so the returned pair
    /// is a consistent snapshot even with concurrent writers.
    pub async fn find_page(&self, request: &PageRequest) -> Result<(Vec<User>, i64), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await?;

        // The ORDER BY clause is assembled from enum-backed static strings
        // only, never from raw client input.
        let order_by = match &request.sort {
            Some(sort) => format!("{} {}", sort.field.column(), sort.direction.keyword()),
            None => "id ASC".to_string(),
        };
        let sql = format!(
            "SELECT id, username, password FROM users ORDER BY {order_by} LIMIT $1 OFFSET $2"
        );

        let limit = i64::from(request.size);
        let offset = i64::from(request.page) * limit;

        let users = sqlx::query_as::<_, User>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok((users, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Inserts a new row; the id is always assigned by storage.
    pub async fn insert(&self, user: &NewUser) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO users (username, password) VALUES ($1, $2) RETURNING id")
            .bind(&user.username)
            .bind(&user.password)
            .fetch_one(&self.pool)
            .await
    }

    /// Full-field conditional update; returns whether a row with that id
    /// existed. Folding the existence check into the statement leaves no
    /// window for a concurrent delete between check and write.
    pub async fn update(&self, id: i64, user: &NewUser) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET username = $1, password = $2 WHERE id = $3")
            .bind(&user.username)
            .bind(&user.password)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Conditional delete; returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn find_page_is_a_consistent_snapshot_under_concurrent_inserts() {
        // Shared-cache in-memory database with several connections, so the
        // writer task and the paging reads run on distinct connections.
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect("sqlite:file:find_page_snapshot?mode=memory&cache=shared")
            .await
            .unwrap();
        database::init_schema(&pool).await.unwrap();
        let repo = UserRepository::new(pool);

        let writer = {
            let repo = repo.clone();
            tokio::spawn(async move {
                for i in 0..200 {
                    let user = NewUser {
                        username: format!("user{i}"),
                        password: "pass".to_string(),
                    };
                    repo.insert(&user).await.unwrap();
                }
            })
        };

        // A page covering the whole table can never hold more rows than the
        // total reported alongside it if both come from one snapshot.
        let request = PageRequest {
            page: 0,
            size: 1000,
            sort: None,
        };
        for _ in 0..100 {
            let (users, total) = repo.find_page(&request).await.unwrap();
            assert!(
                users.len() as i64 <= total,
                "page contains {} rows but total says {total}",
                users.len()
            );
        }

        writer.await.unwrap();
    }
}
