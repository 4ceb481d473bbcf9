use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, ThemeMode};

#[function_component]
pub fn DarkModeToggle() -> Html {
    let (state, dispatch) = use_store::<State>();
    let is_dark = state.is_dark_mode();

    let onclick = dispatch.reduce_mut_callback(|state| {
        state.theme_mode = if state.is_dark_mode() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
    });

    html! {
        <button
            {onclick}
            aria-label="Toggle dark mode"
            class="p-2 rounded-md text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700"
        >
            { if is_dark { "☀️" } else { "🌙" } }
        </button>
    }
}
