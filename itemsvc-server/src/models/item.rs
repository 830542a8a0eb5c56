//! Item entity and name validation

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for item names, matching the `VARCHAR(255)` column.
pub const MAX_ITEM_NAME_LEN: usize = 255;

/// Persisted item row.
///
/// `id` and `created_at` are always assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Validated item name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name.
    ///
    /// # Rules
    /// - Must not be empty
    /// - Max 255 characters
    /// - Whitespace-only names are accepted as-is
    ///
    /// # Example
    /// ```
    /// use itemsvc_server::models::ItemName;
    ///
    /// assert!(ItemName::new("widget").is_ok());
    /// assert!(ItemName::new("0").is_ok());
    /// assert!(ItemName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Missing { field: "name" });
        }

        if s.chars().count() > MAX_ITEM_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_ITEM_NAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Validate an optional name, treating absence like emptiness.
    pub fn from_optional(s: Option<&str>) -> Result<Self, ValidationError> {
        match s {
            Some(s) => Self::new(s),
            None => Err(ValidationError::Missing { field: "name" }),
        }
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
