//! Product category enum.

use serde::{Deserialize, Serialize};

/// The category a catalog product belongs to.
///
/// Serialized exactly as "Fruit" / "Vegetable" to stay compatible with the
/// persisted cart format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Fruit,
    Vegetable,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fruit => write!(f, "Fruit"),
            Self::Vegetable => write!(f, "Vegetable"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fruit" => Ok(Self::Fruit),
            "Vegetable" => Ok(Self::Vegetable),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_exact_names() {
        assert_eq!(serde_json::to_string(&Category::Fruit).unwrap(), "\"Fruit\"");
        assert_eq!(
            serde_json::to_string(&Category::Vegetable).unwrap(),
            "\"Vegetable\""
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Fruit".parse::<Category>().unwrap(), Category::Fruit);
        assert_eq!(
            "Vegetable".parse::<Category>().unwrap(),
            Category::Vegetable
        );
        assert!("Dairy".parse::<Category>().is_err());
    }
}
