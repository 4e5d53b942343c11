use serde::{Deserialize, Serialize};

/// Role assigned to an identity by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::User => "User",
            UserRole::Guest => "Guest",
            UserRole::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_does_not_error() {
        let parsed: UserRole = serde_json::from_str("\"superuser\"").unwrap();
        assert_eq!(parsed, UserRole::Unknown);
        assert!(!parsed.is_admin());
    }
}
