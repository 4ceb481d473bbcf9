pub mod use_fetch;
pub mod use_movies;
pub mod use_system_theme;

pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_movies::use_movies;
pub use use_system_theme::use_system_theme;

/// Distinguishes "not fetched yet" from "fetched", so consumers can tell an
/// empty result apart from one that never loaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchState::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::Fetched(data) => Some(data),
            FetchState::NotFetched => None,
        }
    }
}
