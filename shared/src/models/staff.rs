//! Staff Model
//!
//! Team members and the role tiers that drive permission checks.

use serde::{Deserialize, Serialize};

/// Staff role tier
///
/// Ordered by privilege: Basic < Advanced < Admin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Basic,
    Advanced,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Basic => "BASIC",
            Role::Advanced => "ADVANCED",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BASIC" => Ok(Role::Basic),
            "ADVANCED" => Ok(Role::Advanced),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Error for unrecognized role strings
#[derive(Debug, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Staff account status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffStatus {
    #[default]
    Active,
    Inactive,
}

/// Team member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub email: String,
    pub status: StaffStatus,
}

/// Create team member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMemberCreate {
    pub name: String,
    pub role: Role,
    pub email: String,
}

/// Update team member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMemberUpdate {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub email: Option<String>,
    pub status: Option<StaffStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Basic, Role::Advanced, Role::Admin] {
            assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
        assert_eq!(Role::from_str("Advanced").unwrap(), Role::Advanced);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(Role::from_str("superuser").is_err());
    }
}
