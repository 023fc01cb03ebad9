use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Canonical task identifier: 16 lowercase hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskIdParseError {
    #[error("task id must not be empty")]
    Empty,

    #[error("task id must be 16 characters, got {0}")]
    InvalidLength(usize),

    #[error("task id must contain only hexadecimal characters")]
    InvalidCharacter,
}

#[derive(Debug, Error)]
#[error("could not draw random bytes: {0}")]
pub struct TaskIdGenerationError(getrandom::Error);

impl TaskId {
    pub const HEX_LEN: usize = 16;

    /// Generate a fresh task ID using OS-backed CSPRNG entropy.
    pub fn generate() -> std::result::Result<Self, TaskIdGenerationError> {
        Self::generate_with(|bytes| getrandom::fill(bytes).map_err(TaskIdGenerationError))
    }

    /// Test hook: inject deterministic random bytes when needed.
    pub(crate) fn generate_with<F>(
        mut fill_random: F,
    ) -> std::result::Result<Self, TaskIdGenerationError>
    where
        F: FnMut(&mut [u8]) -> std::result::Result<(), TaskIdGenerationError>,
    {
        let mut bytes = [0_u8; std::mem::size_of::<u64>()];
        fill_random(&mut bytes)?;
        Ok(Self::from(u64::from_be_bytes(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for TaskId {
    fn from(n: u64) -> Self {
        Self(format!("{n:016x}"))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TaskId {
    type Err = TaskIdParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TaskIdParseError::Empty);
        }
        if trimmed.len() != Self::HEX_LEN {
            return Err(TaskIdParseError::InvalidLength(trimmed.len()));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TaskIdParseError::InvalidCharacter);
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }
}

impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_canonical_hex() {
        let id = TaskId::generate().unwrap();
        assert_eq!(id.as_str().len(), TaskId::HEX_LEN);
        assert!(id.as_str().bytes().all(|b| b.is_ascii_hexdigit()));
        assert_eq!(id.as_str(), id.as_str().to_ascii_lowercase());
    }

    #[test]
    fn generate_with_is_deterministic() {
        let fill = |bytes: &mut [u8]| {
            bytes.copy_from_slice(&[0, 0, 0, 0, 0, 0, 0xab, 0xcd]);
            Ok(())
        };
        let id = TaskId::generate_with(fill).unwrap();
        assert_eq!(id.as_str(), "000000000000abcd");
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let id: TaskId = "  00000000DEADBEEF ".parse().unwrap();
        assert_eq!(id.as_str(), "00000000deadbeef");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!("".parse::<TaskId>(), Err(TaskIdParseError::Empty));
        assert_eq!("   ".parse::<TaskId>(), Err(TaskIdParseError::Empty));
        assert_eq!(
            "abc".parse::<TaskId>(),
            Err(TaskIdParseError::InvalidLength(3))
        );
        assert_eq!(
            "zzzzzzzzzzzzzzzz".parse::<TaskId>(),
            Err(TaskIdParseError::InvalidCharacter)
        );
    }

    #[test]
    fn serde_round_trips_as_plain_string() {
        let id = TaskId::from(0x1234_u64);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""0000000000001234""#);
        let back: TaskId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn deserialize_rejects_malformed_id() {
        assert!(serde_json::from_str::<TaskId>(r#""nope""#).is_err());
        assert!(serde_json::from_str::<TaskId>("42").is_err());
    }
}
