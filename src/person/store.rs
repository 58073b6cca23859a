use crate::db::{DbConnection, Pool};
use crate::person::{NewUser, User};
use crate::schema::users;
use actix_web::error::BlockingError;
use chrono::{DateTime, Utc};
use derive_more::Display;
use diesel::prelude::*;
use std::error::Error;

/// Create/read access to stored users. Implementations must be safe to
/// share between workers; every call goes straight to the store.
pub trait UserStore: Send + Sync {
    /// Stores a new user and returns it with its assigned identifier.
    fn create_user(&self, candidate: NewUser) -> Result<User, StorageError>;

    fn get_user_by_id(&self, id: i64) -> Result<User, StorageError>;
}

#[derive(Debug, Display)]
pub enum StorageError {
    #[display(fmt = "database unavailable: {}", _0)]
    Unavailable(String),
    #[display(fmt = "record not found")]
    NotFound,
    #[display(fmt = "query failed: {}", _0)]
    Query(diesel::result::Error),
    #[display(fmt = "blocking task was canceled")]
    Canceled,
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StorageError::Query(e) => Some(e),
            _ => None,
        }
    }
}

impl From<diesel::result::Error> for StorageError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => StorageError::NotFound,
            e => StorageError::Query(e),
        }
    }
}

impl From<BlockingError> for StorageError {
    fn from(_: BlockingError) -> Self {
        StorageError::Canceled
    }
}

#[derive(Insertable)]
#[table_name = "users"]
struct UserRecord<'a> {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: &'a str,
    email: &'a str,
    age: i64,
    username: &'a str,
    password: &'a str,
}

/// Postgres-backed store drawing connections from an r2d2 pool.
pub struct PgUserStore {
    pool: Pool,
}

impl PgUserStore {
    pub fn new(pool: Pool) -> Self {
        PgUserStore { pool }
    }

    fn connection(&self) -> Result<DbConnection, StorageError> {
        self.pool
            .get()
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl UserStore for PgUserStore {
    fn create_user(&self, candidate: NewUser) -> Result<User, StorageError> {
        let conn = self.connection()?;

        let now = Utc::now();
        let record = UserRecord {
            created_at: now,
            updated_at: now,
            name: &candidate.name,
            email: &candidate.email,
            age: candidate.age,
            username: &candidate.username,
            password: &candidate.password,
        };

        let user: User = diesel::insert_into(users::table)
            .values(&record)
            .get_result(&conn)?;

        debug!("Inserted user {}", user.id);

        Ok(user)
    }

    fn get_user_by_id(&self, id: i64) -> Result<User, StorageError> {
        let conn = self.connection()?;

        let user = users::table.filter(users::id.eq(id)).first(&conn)?;

        debug!("Loaded user {}", id);

        Ok(user)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let error = StorageError::from(diesel::result::Error::NotFound);

        assert!(matches!(error, StorageError::NotFound));
    }

    #[test]
    fn other_diesel_errors_keep_their_source() {
        let error = StorageError::from(diesel::result::Error::RollbackTransaction);

        assert!(matches!(error, StorageError::Query(_)));
        assert!(error.source().is_some());
    }
}
