//! Admin password reset

use crate::error::{AuthError, AuthResult};
use crate::password::PasswordHasher;
use crate::store::{AdminUser, UserStore};
use tracing::{info, warn};

/// How to find the admin account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLookup {
    /// Admin email address
    pub email: String,
    /// Admin username
    pub username: String,
}

impl Default for AdminLookup {
    fn default() -> Self {
        Self {
            email: "admin@school.dev".to_string(),
            username: "admin".to_string(),
        }
    }
}

/// Result of a reset attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The admin's password hash was replaced
    Updated(AdminUser),
    /// No user matched; nothing was written
    NotFound,
}

/// Replace the admin's stored password hash with a hash of `new_password`.
///
/// The new hash is read back and verified after the write.
pub async fn reset_admin_password<S, H>(
    store: &S,
    hasher: &H,
    lookup: &AdminLookup,
    new_password: &str,
) -> AuthResult<ResetOutcome>
where
    S: UserStore + ?Sized,
    H: PasswordHasher + ?Sized,
{
    let Some(user) = store.find_admin(&lookup.email, &lookup.username).await? else {
        warn!(
            "Admin user not found (email {}, username {})",
            lookup.email, lookup.username
        );
        return Ok(ResetOutcome::NotFound);
    };

    let password_hash = hasher.hash_password(new_password);
    store.update_password(user.id, &password_hash).await?;

    let stored = store.password_hash(user.id).await?;
    match stored {
        Some(stored) if hasher.verify_password(new_password, &stored)? => {}
        _ => return Err(AuthError::NotUpdated { user_id: user.id }),
    }

    info!("Reset password for admin user {}", user.id);
    Ok(ResetOutcome::Updated(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::Pbkdf2Sha256;
    use crate::store::MockUserStore;
    use mockall::predicate::{always, eq};
    use std::sync::{Arc, Mutex};

    fn admin() -> AdminUser {
        AdminUser {
            id: 7,
            email: Some("admin@school.dev".to_string()),
            username: Some("admin".to_string()),
        }
    }

    #[tokio::test]
    async fn test_not_found_writes_nothing() {
        let mut store = MockUserStore::new();
        store
            .expect_find_admin()
            .with(eq("admin@school.dev"), eq("admin"))
            .times(1)
            .returning(|_, _| Ok(None));
        store.expect_update_password().never();

        let outcome = reset_admin_password(
            &store,
            &Pbkdf2Sha256::new(1000),
            &AdminLookup::default(),
            "NewPassword123",
        )
        .await
        .unwrap();

        assert_eq!(outcome, ResetOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_updates_with_verifiable_hash() {
        let written = Arc::new(Mutex::new(None::<String>));

        let mut store = MockUserStore::new();
        store
            .expect_find_admin()
            .returning(|_, _| Ok(Some(admin())));
        let sink = Arc::clone(&written);
        store
            .expect_update_password()
            .with(eq(7), always())
            .times(1)
            .returning(move |_, hash| {
                *sink.lock().unwrap() = Some(hash.to_string());
                Ok(())
            });
        let source = Arc::clone(&written);
        store
            .expect_password_hash()
            .returning(move |_| Ok(source.lock().unwrap().clone()));

        let hasher = Pbkdf2Sha256::new(1000);
        let outcome = reset_admin_password(&store, &hasher, &AdminLookup::default(), "NewPassword123")
            .await
            .unwrap();

        assert_eq!(outcome, ResetOutcome::Updated(admin()));
        let stored = written.lock().unwrap().clone().unwrap();
        assert!(stored.starts_with("$pbkdf2-sha256$1000$"));
        assert!(hasher.verify_password("NewPassword123", &stored).unwrap());
    }

    #[tokio::test]
    async fn test_lost_write_is_an_error() {
        let mut store = MockUserStore::new();
        store
            .expect_find_admin()
            .returning(|_, _| Ok(Some(admin())));
        store.expect_update_password().returning(|_, _| Ok(()));
        store.expect_password_hash().returning(|_| Ok(None));

        let err = reset_admin_password(
            &store,
            &Pbkdf2Sha256::new(1000),
            &AdminLookup::default(),
            "NewPassword123",
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AuthError::NotUpdated { user_id: 7 }));
    }
}
