use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Hook to track the system color scheme preference in global state.
#[hook]
pub fn use_system_theme() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            let prefers_dark = system_prefers_dark();
            dispatch.reduce_mut(move |state| {
                state.system_prefers_dark = prefers_dark;
            });

            // Follow live preference changes for as long as we're mounted.
            let window = web_sys::window().unwrap();
            let media_query: MediaQueryList =
                window.match_media(DARK_SCHEME_QUERY).unwrap().unwrap();

            let dispatch = dispatch.clone();
            let on_change =
                Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                    let prefers_dark = event.matches();
                    dispatch.reduce_mut(move |state| {
                        state.system_prefers_dark = prefers_dark;
                    });
                })
                    as Box<dyn FnMut(MediaQueryListEvent)>);

            media_query
                .add_event_listener_with_callback(
                    "change",
                    on_change.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Rust retains ownership of the closure; JS only holds a pointer.
            move || {
                let _ = media_query.remove_event_listener_with_callback(
                    "change",
                    on_change.as_ref().unchecked_ref(),
                );
                drop(on_change);
            }
        }
    });
}
