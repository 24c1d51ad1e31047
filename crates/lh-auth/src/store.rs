//! User lookup and password updates

use crate::error::{AuthError, AuthResult};
use async_trait::async_trait;
use sqlx::any::AnyPoolOptions;
use sqlx::{AnyPool, Row};
use tracing::{debug, info};

/// The columns of a user row the tooling cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    /// Primary key
    pub id: i64,
    /// Email address, if set
    pub email: Option<String>,
    /// Username, if set
    pub username: Option<String>,
}

/// Database operations needed to reset a password
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the first user whose email or username matches
    async fn find_admin(&self, email: &str, username: &str) -> AuthResult<Option<AdminUser>>;

    /// Overwrite the stored password hash of a user
    async fn update_password(&self, user_id: i64, password_hash: &str) -> AuthResult<()>;

    /// Read back the stored password hash of a user
    async fn password_hash(&self, user_id: i64) -> AuthResult<Option<String>>;
}

/// [`UserStore`] over the `users` table of a Postgres or SQLite database
#[derive(Debug, Clone)]
pub struct SqlUserStore {
    pool: AnyPool,
}

impl SqlUserStore {
    /// Connect to `url` (`postgres://…` or `sqlite://…`)
    pub async fn connect(url: &str, max_connections: u32) -> AuthResult<Self> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        info!("Connected to user database");
        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    async fn find_admin(&self, email: &str, username: &str) -> AuthResult<Option<AdminUser>> {
        debug!("Looking up admin by email {} or username {}", email, username);

        let row = sqlx::query(
            "SELECT CAST(id AS BIGINT) AS id, email, username FROM users \
             WHERE email = $1 OR username = $2 ORDER BY id LIMIT 1",
        )
        .bind(email)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        // The Any driver reports NULL cells as their own type, so nullable
        // text columns skip the type check.
        row.map(|row| -> AuthResult<AdminUser> {
            Ok(AdminUser {
                id: row.try_get("id")?,
                email: row.try_get_unchecked::<Option<String>, _>("email")?,
                username: row.try_get_unchecked::<Option<String>, _>("username")?,
            })
        })
        .transpose()
    }

    async fn update_password(&self, user_id: i64, password_hash: &str) -> AuthResult<()> {
        let result = sqlx::query("UPDATE users SET password = $1 WHERE id = $2")
            .bind(password_hash)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AuthError::NotUpdated { user_id });
        }

        info!("Updated password hash for user {}", user_id);
        Ok(())
    }

    async fn password_hash(&self, user_id: i64) -> AuthResult<Option<String>> {
        let row = sqlx::query("SELECT password FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(match row {
            Some(row) => row.try_get_unchecked::<Option<String>, _>("password")?,
            None => None,
        })
    }
}
