//! Conversation roles.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Who authored a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Agent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Agent => "agent",
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

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "human" => Ok(Role::User),
            "agent" | "assistant" | "model" => Ok(Role::Agent),
            _ => Err(Error::UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!(" Human ".parse::<Role>().unwrap(), Role::User);
        assert_eq!("ASSISTANT".parse::<Role>().unwrap(), Role::Agent);
        assert_eq!("model".parse::<Role>().unwrap(), Role::Agent);
    }

    #[test]
    fn test_unknown_role() {
        let err = "system".parse::<Role>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown role: system");
    }

    #[test]
    fn test_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Agent.to_string(), "agent");
    }
}
