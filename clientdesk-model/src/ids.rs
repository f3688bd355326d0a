use crate::error::ModelError;
use std::str::FromStr;

/// Strongly typed client identifier.
///
/// Identifiers order numerically, so `ClientId(9) < ClientId(10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClientId(pub u64);

impl ClientId {
    pub fn new(value: u64) -> Self {
        ClientId(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ClientId {
    fn from(value: u64) -> Self {
        ClientId(value)
    }
}

impl FromStr for ClientId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ClientId(s.trim().parse()?))
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numeric_ids() {
        assert_eq!(" 42 ".parse::<ClientId>().unwrap(), ClientId(42));
        assert!("abc".parse::<ClientId>().is_err());
    }

    #[test]
    fn orders_numerically() {
        assert!(ClientId(9) < ClientId(10));
    }
}
