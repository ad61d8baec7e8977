use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Статус активности (клиенты, курьеры, тарифные планы)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityStatus {
    #[default]
    Active,
    Inactive,
}

impl ActivityStatus {
    pub const ALL: [ActivityStatus; 2] = [ActivityStatus::Active, ActivityStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl FromStr for ActivityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| format!("Unknown status: {}", s))
    }
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_str() {
        assert_eq!("Inactive".parse::<ActivityStatus>(), Ok(ActivityStatus::Inactive));
        assert!("inactive".parse::<ActivityStatus>().is_err());
        assert_eq!(ActivityStatus::Active.to_string(), "Active");
    }
}
