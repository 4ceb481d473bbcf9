//! In-memory movie catalog backing the listing endpoint.

use payloads::{MovieId, responses::Movie};

/// Source of movie listings for the service.
///
/// `Unavailable` makes every listing request fail. test-helpers spawns the
/// server with it to exercise client-side failure handling.
#[derive(Debug, Clone)]
pub enum Catalog {
    Movies(Vec<Movie>),
    Unavailable,
}

impl Catalog {
    /// The listing in stored order.
    pub fn list(&self) -> Result<Vec<Movie>, CatalogError> {
        match self {
            Catalog::Movies(movies) => Ok(movies.clone()),
            Catalog::Unavailable => Err(CatalogError::Unavailable),
        }
    }

    /// A small catalog for local development and the standalone binary.
    pub fn sample() -> Self {
        let titles = [
            (1, "The Straight Story", 1999),
            (2, "Paris, Texas", 1984),
            (3, "Stalker", 1979),
            (4, "In the Mood for Love", 2000),
            (5, "Yi Yi", 2000),
            (6, "Close-Up", 1990),
        ];
        Catalog::Movies(
            titles
                .into_iter()
                .map(|(id, title, year)| Movie {
                    id: MovieId(id),
                    title: title.into(),
                    year: Some(year),
                    poster_url: None,
                })
                .collect(),
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable")]
    Unavailable,
}
