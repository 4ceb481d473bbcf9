use yewdux::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::System
    }
}

/// Global UI chrome state. Listing data is deliberately not cached here;
/// each mounted consumer owns its own fetch lifecycle.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub theme_mode: ThemeMode,
    pub system_prefers_dark: bool,
}

impl State {
    pub fn is_dark_mode(&self) -> bool {
        match self.theme_mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => self.system_prefers_dark,
        }
    }
}
