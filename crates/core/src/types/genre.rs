//! Genre taxonomy

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A genre a book can be filed under
///
/// The label of each variant is the exact text stored in a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "Фантастика")]
    Fantasy,
    #[serde(rename = "Ужасы")]
    Horror,
    #[serde(rename = "Детективы")]
    Detective,
    #[serde(rename = "Мультфильмы")]
    Cartoon,
    #[serde(rename = "Комедии")]
    Comedy,
}

impl Genre {
    /// Every known genre, in catalog display order
    pub const ALL: [Genre; 5] = [
        Genre::Fantasy,
        Genre::Horror,
        Genre::Detective,
        Genre::Cartoon,
        Genre::Comedy,
    ];

    /// Returns the label stored in a catalog for this genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fantasy => "Фантастика",
            Self::Horror => "Ужасы",
            Self::Detective => "Детективы",
            Self::Cartoon => "Мультфильмы",
            Self::Comedy => "Комедии",
        }
    }

    /// Returns true if the genre carries an age rating
    pub fn is_age_rated(&self) -> bool {
        matches!(self, Self::Horror | Self::Detective)
    }

    /// Returns true if books of this genre may be shown to children
    pub fn is_for_children(&self) -> bool {
        !self.is_age_rated()
    }

    /// Labels of all known genres
    pub fn labels() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(|g| g.as_str())
    }

    /// Labels of the child-safe genres
    pub fn children_labels() -> impl Iterator<Item = &'static str> {
        Self::ALL
            .into_iter()
            .filter(|g| g.is_for_children())
            .map(|g| g.as_str())
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| CoreError::unknown_genre(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_in_order() {
        let labels: Vec<_> = Genre::labels().collect();
        assert_eq!(
            labels,
            vec!["Фантастика", "Ужасы", "Детективы", "Мультфильмы", "Комедии"]
        );
    }

    #[test]
    fn test_age_rating() {
        assert!(Genre::Horror.is_age_rated());
        assert!(Genre::Detective.is_age_rated());
        assert!(Genre::Fantasy.is_for_children());
        assert!(Genre::Cartoon.is_for_children());
        assert!(Genre::Comedy.is_for_children());
    }

    #[test]
    fn test_children_labels() {
        let labels: Vec<_> = Genre::children_labels().collect();
        assert_eq!(labels, vec!["Фантастика", "Мультфильмы", "Комедии"]);
    }

    #[test]
    fn test_from_str_known() {
        assert_eq!("Ужасы".parse::<Genre>(), Ok(Genre::Horror));
        assert_eq!("Комедии".parse::<Genre>(), Ok(Genre::Comedy));
    }

    #[test]
    fn test_from_str_is_exact() {
        assert!("Боевик".parse::<Genre>().is_err());
        assert!("ужасы".parse::<Genre>().is_err());
        assert!(" Ужасы".parse::<Genre>().is_err());
        assert!("".parse::<Genre>().is_err());
    }

    #[test]
    fn test_display_matches_label() {
        for genre in Genre::ALL {
            assert_eq!(genre.to_string(), genre.as_str());
        }
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Genre::Detective).unwrap();
        assert_eq!(json, "\"Детективы\"");
        let parsed: Genre = serde_json::from_str("\"Мультфильмы\"").unwrap();
        assert_eq!(parsed, Genre::Cartoon);
    }
}
