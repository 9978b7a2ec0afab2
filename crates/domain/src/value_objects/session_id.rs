//! Session identifier for agent memory

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Identifies one conversation's memory namespace
///
/// Hosts usually pass their own thread identifiers, so any short token of
/// ASCII letters, digits and `_ . : -` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Maximum identifier length
    pub const MAX_LEN: usize = 128;

    /// Parse a session ID from a string
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.is_empty() || s.len() > Self::MAX_LEN {
            return Err(DomainError::InvalidSessionId(s.to_string()));
        }
        let valid = s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b':' | b'-'));
        if !valid {
            return Err(DomainError::InvalidSessionId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Borrow the identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SessionId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_host_thread_ids() {
        assert!(SessionId::parse("default").is_ok());
        assert!(SessionId::parse("thread:42-a.b_c").is_ok());
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert!(SessionId::parse("").is_err());
        assert!(SessionId::parse(&"a".repeat(129)).is_err());
        assert!(SessionId::parse(&"a".repeat(128)).is_ok());
    }

    #[test]
    fn rejects_whitespace_and_symbols() {
        assert!(matches!(
            SessionId::parse("a b"),
            Err(DomainError::InvalidSessionId(_))
        ));
        assert!(SessionId::parse("x/../y").is_err());
    }

    #[test]
    fn display_matches_input() {
        let id = SessionId::parse("abc").unwrap();
        assert_eq!(id.to_string(), "abc");
    }
}
