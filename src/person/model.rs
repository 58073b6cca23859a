use crate::person::PersonPayload;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user row. Field names on the wire match the stored column
/// names in PascalCase, with the identifier spelled `ID`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(rename = "ID")]
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker. Nothing in this service sets it, and reads do not
    /// add a `deleted_at IS NULL` scope: a marked row is still returned.
    pub deleted_at: Option<DateTime<Utc>>,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub username: String,
    pub password: String,
}

/// A user that has not been stored yet, so it has no identifier or timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub username: String,
    pub password: String,
}

impl From<PersonPayload> for NewUser {
    fn from(person: PersonPayload) -> Self {
        NewUser {
            name: person.name,
            email: person.email,
            age: person.age,
            username: person.username,
            password: person.password,
        }
    }
}
