use payloads::responses::Movie;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub movie: Movie,
}

#[function_component]
pub fn MovieCard(props: &Props) -> Html {
    let movie = &props.movie;

    let poster = match &movie.poster_url {
        Some(url) => html! {
            <img
                src={url.clone()}
                alt={movie.title.clone()}
                class="w-full h-60 object-cover"
            />
        },
        None => html! {
            <div class="w-full h-60 flex items-center justify-center bg-neutral-200 dark:bg-neutral-700">
                <span class="text-4xl text-neutral-400 dark:text-neutral-500">{"🎬"}</span>
            </div>
        },
    };

    html! {
        <div class="w-44 rounded-lg overflow-hidden bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 shadow-sm">
            {poster}
            <div class="p-3">
                <p class="text-sm font-semibold text-gray-900 dark:text-gray-100 truncate" title={movie.title.clone()}>
                    {&movie.title}
                </p>
                {
                    if let Some(year) = movie.year {
                        html! {
                            <p class="text-xs text-gray-600 dark:text-gray-400">{year}</p>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
