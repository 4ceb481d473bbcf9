use yew::prelude::*;

use crate::components::MovieList;
use crate::hooks::use_movies;

#[function_component]
pub fn HomePage() -> Html {
    let movies = use_movies();

    let listing = if movies.is_initial_loading() {
        html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading movies..."}
                </p>
            </div>
        }
    } else if let Some(error) = &movies.error {
        let onretry = {
            let refetch = movies.refetch.clone();
            Callback::from(move |_| refetch.emit(()))
        };
        html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {error.clone()}
                </p>
                <button
                    onclick={onretry}
                    class="mt-2 text-sm font-medium text-red-700 dark:text-red-400 underline"
                >
                    {"Try again"}
                </button>
            </div>
        }
    } else {
        let data = movies.data.as_ref().cloned().unwrap_or_default();
        html! { <MovieList movies={data} /> }
    };

    html! {
        <div class="px-12 mt-4 space-y-8">
            <div>
                <p class="text-black dark:text-white text-2xl font-semibold mb-4">
                    {"Popular Shows"}
                </p>
                {listing}
            </div>
        </div>
    }
}
