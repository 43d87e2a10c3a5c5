//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

/// Book genre classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    #[default]
    Unknown,
    Fiction,
    Classic,
    Poetry,
    Theatre,
    Philosophy,
    Science,
    History,
    Biography,
    Children,
    Technical,
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Genre::Unknown => "Unknown",
            Genre::Fiction => "Fiction",
            Genre::Classic => "Classic",
            Genre::Poetry => "Poetry",
            Genre::Theatre => "Theatre",
            Genre::Philosophy => "Philosophy",
            Genre::Science => "Science",
            Genre::History => "History",
            Genre::Biography => "Biography",
            Genre::Children => "Children",
            Genre::Technical => "Technical",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// AgeRating
// ---------------------------------------------------------------------------

/// Audience rating carried by discs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeRating {
    #[default]
    Unrated,
    G,
    Pg,
    Pg13,
    R,
    Nc17,
}

impl std::fmt::Display for AgeRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AgeRating::Unrated => "Unrated",
            AgeRating::G => "G",
            AgeRating::Pg => "PG",
            AgeRating::Pg13 => "PG-13",
            AgeRating::R => "R",
            AgeRating::Nc17 => "NC-17",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Genre::Classic.to_string(), "Classic");
        assert_eq!(AgeRating::Pg13.to_string(), "PG-13");
        assert_eq!(AgeRating::default(), AgeRating::Unrated);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_value(AgeRating::Nc17).unwrap(), "nc17");
        let genre: Genre = serde_json::from_str("\"science\"").unwrap();
        assert_eq!(genre, Genre::Science);
    }
}
