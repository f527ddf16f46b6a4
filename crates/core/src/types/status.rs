//! Status and mode enums shared by the demos.

use serde::{Deserialize, Serialize};

/// Completion filter for the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskStatus {
    /// Whether a task with the given completion flag passes this filter.
    #[must_use]
    pub const fn admits(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Active => write!(f, "Active"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid task status: {s}")),
        }
    }
}

/// Product ordering for the shop listing.
///
/// Wire names are `name`, `price-low`, `price-high` and `rating`. Any other
/// name is kept as [`SortBy::Unrecognized`] and leaves the order unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SortBy {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Rating,
    Unrecognized(String),
}

impl SortBy {
    /// The wire name of this ordering.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Unrecognized(other) => other,
        }
    }
}

impl From<&str> for SortBy {
    fn from(s: &str) -> Self {
        match s {
            "name" => Self::Name,
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" => Self::Rating,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for SortBy {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<SortBy> for String {
    fn from(sort: SortBy) -> Self {
        match sort {
            SortBy::Unrecognized(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout of the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grid => write!(f, "grid"),
            Self::List => write!(f, "list"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            _ => Err(format!("invalid view mode: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_admits() {
        assert!(TaskStatus::All.admits(true));
        assert!(TaskStatus::All.admits(false));
        assert!(TaskStatus::Active.admits(false));
        assert!(!TaskStatus::Active.admits(true));
        assert!(TaskStatus::Completed.admits(true));
        assert!(!TaskStatus::Completed.admits(false));
    }

    #[test]
    fn test_task_status_parse_is_case_insensitive() {
        assert_eq!("ACTIVE".parse::<TaskStatus>().unwrap(), TaskStatus::Active);
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_sort_by_wire_names() {
        assert_eq!(SortBy::from("price-low"), SortBy::PriceLow);
        assert_eq!(SortBy::PriceHigh.to_string(), "price-high");
        assert_eq!(
            SortBy::from("newest"),
            SortBy::Unrecognized("newest".to_string())
        );
    }

    #[test]
    fn test_sort_by_serde_uses_wire_names() {
        let json = serde_json::to_string(&SortBy::Rating).unwrap();
        assert_eq!(json, "\"rating\"");
        let parsed: SortBy = serde_json::from_str("\"popularity\"").unwrap();
        assert_eq!(parsed.as_str(), "popularity");
    }

    #[test]
    fn test_view_mode_serde() {
        assert_eq!(serde_json::to_string(&ViewMode::List).unwrap(), "\"list\"");
        assert_eq!("grid".parse::<ViewMode>().unwrap(), ViewMode::Grid);
    }
}
