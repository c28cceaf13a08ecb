//! Shared types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Role of a user within a workspace
///
/// Owned by the identity layer; badges only consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    TeamMember,
    Visitor,
}

impl Role {
    /// Every role, in display order
    pub const ALL: [Role; 3] = [Role::Admin, Role::TeamMember, Role::Visitor];

    /// Wire name (`admin`, `team_member`, `visitor`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::TeamMember => "team_member",
            Role::Visitor => "visitor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Exact match on the wire name. No case folding, no fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "team_member" => Ok(Role::TeamMember),
            "visitor" => Ok(Role::Visitor),
            other => Err(Error::UnknownRole(other.to_string())),
        }
    }
}

/// Semantic state shown by a status pill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
}

impl Status {
    /// Every status, in display order
    pub const ALL: [Status; 5] = [
        Status::Success,
        Status::Warning,
        Status::Error,
        Status::Info,
        Status::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Warning => "warning",
            Status::Error => "error",
            Status::Info => "info",
            Status::Neutral => "neutral",
        }
    }

    /// Human-readable name, used when a pill has no explicit content
    pub fn label(&self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::Warning => "Warning",
            Status::Error => "Error",
            Status::Info => "Info",
            Status::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Status::Success),
            "warning" => Ok(Status::Warning),
            "error" => Ok(Status::Error),
            "info" => Ok(Status::Info),
            "neutral" => Ok(Status::Neutral),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_exact() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }

        // No case folding or partial matches
        assert!(matches!("Admin".parse::<Role>(), Err(Error::UnknownRole(_))));
        assert!(matches!("team-member".parse::<Role>(), Err(Error::UnknownRole(_))));
        assert!(matches!("".parse::<Role>(), Err(Error::UnknownRole(_))));
    }

    #[test]
    fn test_status_parse_exact() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }

        let err = "critical".parse::<Status>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown status: critical");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&Role::TeamMember).unwrap(),
            "\"team_member\""
        );
        assert_eq!(serde_json::to_string(&Status::Neutral).unwrap(), "\"neutral\"");

        let role: Role = serde_json::from_str("\"visitor\"").unwrap();
        assert_eq!(role, Role::Visitor);
        assert!(serde_json::from_str::<Role>("\"owner\"").is_err());
    }
}
