//! Service categories
//!
//! The catalog uses a fixed, ordered set of categories. Display order always
//! follows [`Category::ALL`], never the order categories appear in the sheet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Repair,
    Services,
    #[serde(rename = "Restoration Kits")]
    RestorationKits,
    Suspensions,
    Brakes,
    Engines,
    Transmissions,
    Tires,
    Turbo,
}

impl Category {
    /// All categories in their fixed display order
    pub const ALL: [Category; 9] = [
        Category::Repair,
        Category::Services,
        Category::RestorationKits,
        Category::Suspensions,
        Category::Brakes,
        Category::Engines,
        Category::Transmissions,
        Category::Tires,
        Category::Turbo,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Repair => "Repair",
            Category::Services => "Services",
            Category::RestorationKits => "Restoration Kits",
            Category::Suspensions => "Suspensions",
            Category::Brakes => "Brakes",
            Category::Engines => "Engines",
            Category::Transmissions => "Transmissions",
            Category::Tires => "Tires",
            Category::Turbo => "Turbo",
        }
    }

    /// Position in the fixed display order
    pub fn sort_order(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(usize::MAX)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parse a category label (case-insensitive, hyphens accepted for spaces)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', " ");
        Self::ALL
            .iter()
            .find(|c| c.label().to_lowercase() == normalized)
            .copied()
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order_is_fixed() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Repair",
                "Services",
                "Restoration Kits",
                "Suspensions",
                "Brakes",
                "Engines",
                "Transmissions",
                "Tires",
                "Turbo",
            ]
        );
    }

    #[test]
    fn test_parse_label() {
        assert_eq!("Brakes".parse::<Category>().unwrap(), Category::Brakes);
        assert_eq!("brakes".parse::<Category>().unwrap(), Category::Brakes);
        assert_eq!(
            "restoration kits".parse::<Category>().unwrap(),
            Category::RestorationKits
        );
        assert_eq!(
            "restoration-kits".parse::<Category>().unwrap(),
            Category::RestorationKits
        );
        assert!("Exhaust".parse::<Category>().is_err());
    }

    #[test]
    fn test_sort_order() {
        assert_eq!(Category::Repair.sort_order(), 0);
        assert_eq!(Category::Turbo.sort_order(), 8);
        assert!(Category::Brakes.sort_order() < Category::Tires.sort_order());
    }

    #[test]
    fn test_serde_label() {
        let json = serde_json::to_string(&Category::RestorationKits).unwrap();
        assert_eq!(json, "\"Restoration Kits\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::RestorationKits);
    }
}
