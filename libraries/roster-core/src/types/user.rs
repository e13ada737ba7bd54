//! User types

use crate::slug::slugify;
use serde::{Deserialize, Serialize};

/// User identifier, assigned by storage
pub type UserId = i64;

/// A stored user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name, unique across users
    pub username: String,

    /// Given name
    pub firstname: String,

    /// Family name
    pub lastname: String,

    /// Age in years
    pub age: i64,

    /// URL-safe rendering of `username`, fixed at creation
    pub slug: String,
}

/// Data for creating a new user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login name
    pub username: String,
    /// Given name
    pub firstname: String,
    /// Family name
    pub lastname: String,
    /// Age in years
    pub age: i64,
}

impl CreateUser {
    /// Slug derived from the username
    pub fn slug(&self) -> String {
        slugify(&self.username)
    }
}

/// Replacement values for a user's mutable fields
///
/// Every field is overwritten. `username` and `slug` are not part of this
/// type, so they can never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    /// Given name
    pub firstname: String,
    /// Family name
    pub lastname: String,
    /// Age in years
    pub age: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_slug_follows_username() {
        let input = CreateUser {
            username: "John Doe".to_string(),
            firstname: "John".to_string(),
            lastname: "Doe".to_string(),
            age: 30,
        };
        assert_eq!(input.slug(), "john-doe");
    }

    #[test]
    fn update_user_ignores_identity_fields() {
        let update: UpdateUser = serde_json::from_str(
            r#"{"username": "new", "slug": "new", "firstname": "A", "lastname": "B", "age": 5}"#,
        )
        .unwrap();

        assert_eq!(
            update,
            UpdateUser {
                firstname: "A".to_string(),
                lastname: "B".to_string(),
                age: 5,
            }
        );
    }

    #[test]
    fn user_serializes_all_fields() {
        let user = User {
            id: 1,
            username: "jd".to_string(),
            firstname: "John".to_string(),
            lastname: "Doe".to_string(),
            age: 30,
            slug: "jd".to_string(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["username"], "jd");
        assert_eq!(value["slug"], "jd");
        assert_eq!(value.as_object().unwrap().len(), 6);
    }
}
