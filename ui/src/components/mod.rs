pub mod dark_mode_toggle;
pub mod layout;
pub mod movie_card;
pub mod movie_list;

pub use dark_mode_toggle::DarkModeToggle;
pub use movie_card::MovieCard;
pub use movie_list::MovieList;
