use payloads::responses::Movie;
use yew::prelude::*;

use super::MovieCard;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub movies: Vec<Movie>,
}

#[function_component]
pub fn MovieList(props: &Props) -> Html {
    if props.movies.is_empty() {
        return html! {
            <div class="text-center py-8 text-neutral-600 dark:text-neutral-400">
                {"No movies yet"}
            </div>
        };
    }

    html! {
        <div class="flex flex-wrap gap-2 justify-between">
            {
                props.movies.iter().map(|movie| {
                    html! {
                        <MovieCard
                            key={movie.id.0.to_string()}
                            movie={movie.clone()}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
