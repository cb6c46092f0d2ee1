//! Account entity representing a registered user.

use sqlx::FromRow;

/// A user account that owns favorites.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl Account {
    /// Creates a new Account instance.
    pub fn new(id: String, username: String, first_name: String, last_name: String) -> Self {
        Self {
            id,
            username,
            first_name,
            last_name,
        }
    }
}

/// Input data for creating a new account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let account = Account::new(
            "id-1".to_string(),
            "jdoe".to_string(),
            "Jane".to_string(),
            "Doe".to_string(),
        );

        assert_eq!(account.id, "id-1");
        assert_eq!(account.username, "jdoe");
        assert_eq!(account.first_name, "Jane");
        assert_eq!(account.last_name, "Doe");
    }
}
