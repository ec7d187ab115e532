use serde::Deserialize;

/// A directory entry as returned by the user data source. Consumed read-only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub avatar: String,
    pub role: String,
    pub join_date: String,
    #[serde(default)]
    pub description: String,
}

/// The `{ "data": { "users": [...] } }` response envelope.
///
/// Every layer defaults to empty so a missing or partial body yields an empty
/// user list rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub data: UsersPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersPayload {
    #[serde(default)]
    pub users: Vec<User>,
}

impl UsersEnvelope {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the body is not
    /// valid JSON or the user records are malformed.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Consume the envelope, yielding the user list.
    #[must_use]
    pub fn into_users(self) -> Vec<User> {
        self.data.users
    }
}
