use std::fmt::Display;

/// Encrypted summoner id as handed out by the summoner endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SummonerId(String);

impl SummonerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SummonerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SummonerId {
    fn from(value: String) -> Self {
        SummonerId(value)
    }
}

impl From<&str> for SummonerId {
    fn from(value: &str) -> Self {
        SummonerId(value.to_string())
    }
}
