use serde::{Deserialize, Serialize};

use crate::MovieId;

/// A single entry in the movie listing.
///
/// The catalog owns this shape; clients treat entries as opaque list items
/// and only read fields for display. Presentation fields are optional so a
/// catalog that omits them still produces a readable listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_listing_body_is_accepted() {
        let movies: Vec<Movie> = serde_json::from_str(
            r#"[{"id":1,"title":"A"},{"id":2,"title":"B"}]"#,
        )
        .unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, MovieId(1));
        assert_eq!(movies[0].title, "A");
        assert_eq!(movies[0].year, None);
        assert_eq!(movies[0].poster_url, None);
    }

    #[test]
    fn absent_optional_fields_stay_off_the_wire() {
        let movie = Movie {
            id: MovieId(7),
            title: "Solaris".into(),
            year: None,
            poster_url: None,
        };
        let body = serde_json::to_value(&movie).unwrap();
        assert_eq!(body, serde_json::json!({"id": 7, "title": "Solaris"}));
    }
}
