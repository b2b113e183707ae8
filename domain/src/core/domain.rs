//! Research domain value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Research domains used to route questions to specialized agents (Value Object)
///
/// The set is fixed: four specialist domains plus `General` as the
/// catch-all for questions that fit none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Security,
    Technical,
    Business,
    Partnership,
    General,
}

impl Domain {
    /// Get the string identifier for this domain
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Security => "security",
            Domain::Technical => "technical",
            Domain::Business => "business",
            Domain::Partnership => "partnership",
            Domain::General => "general",
        }
    }

    /// All domains, in routing order
    pub fn all() -> [Domain; 5] {
        [
            Domain::Security,
            Domain::Technical,
            Domain::Business,
            Domain::Partnership,
            Domain::General,
        ]
    }

    /// The four specialist domains (everything except `General`)
    pub fn specialists() -> [Domain; 4] {
        [
            Domain::Security,
            Domain::Technical,
            Domain::Business,
            Domain::Partnership,
        ]
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = std::convert::Infallible;

    /// Unknown domain strings map to `General` rather than failing: the
    /// upstream producer is a language model, not a trusted source.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "security" => Domain::Security,
            "technical" => Domain::Technical,
            "business" => Domain::Business,
            "partnership" => Domain::Partnership,
            _ => Domain::General,
        })
    }
}

impl Serialize for Domain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Domain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().expect("domain parsing is infallible"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_roundtrip() {
        for domain in Domain::all() {
            let s = domain.to_string();
            let parsed: Domain = s.parse().unwrap();
            assert_eq!(domain, parsed);
        }
    }

    #[test]
    fn test_unknown_domain_maps_to_general() {
        let parsed: Domain = "finance".parse().unwrap();
        assert_eq!(parsed, Domain::General);

        let parsed: Domain = "".parse().unwrap();
        assert_eq!(parsed, Domain::General);
    }

    #[test]
    fn test_case_insensitive_parse() {
        let parsed: Domain = " Security ".parse().unwrap();
        assert_eq!(parsed, Domain::Security);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Domain::Partnership).unwrap();
        assert_eq!(json, "\"partnership\"");

        let back: Domain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Domain::Partnership);
    }
}
