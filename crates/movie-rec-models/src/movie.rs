use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: String, // Free-text label, compared verbatim
    pub year: i32,
    pub rating: f64,
}

impl Movie {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genre: genre.into(),
            year,
            rating,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {:.1}",
            self.id, self.title, self.genre, self.year, self.rating
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let movie = Movie::new("M001", "Heat", "Crime", 1995, 8.3);
        assert_eq!(movie.to_string(), "M001 | Heat | Crime | 1995 | 8.3");
    }

    #[test]
    fn test_json_shape() {
        let movie = Movie::new("M002", "Alien", "Horror", 1979, 8.5);
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["id"], "M002");
        assert_eq!(value["year"], 1979);
    }
}
