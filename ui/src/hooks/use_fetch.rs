use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Snapshot of a single fetch lifecycle.
///
/// Invariant: `data` and `error` are never both present, and while a load is
/// in flight both are absent. The reducer below is the only writer.
pub struct Fetch<T> {
    pub data: FetchState<T>,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Self {
            data: FetchState::NotFetched,
            error: None,
            is_loading: false,
        }
    }
}

pub enum FetchAction<T> {
    /// A load was dispatched and is now in flight.
    Started,
    /// The call resolved with a payload.
    Loaded(T),
    /// The call failed; the message is what consumers may display.
    Failed(String),
}

impl<T: Clone> Reducible for Fetch<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // A fresh load drops prior results and errors.
            FetchAction::Started => Rc::new(Self {
                data: FetchState::NotFetched,
                error: None,
                is_loading: true,
            }),
            FetchAction::Loaded(data) => Rc::new(Self {
                data: FetchState::Fetched(data),
                error: None,
                is_loading: false,
            }),
            FetchAction::Failed(message) => Rc::new(Self {
                data: FetchState::NotFetched,
                error: Some(message),
                is_loading: false,
            }),
        }
    }
}

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Returns true if this is the initial load (data not yet fetched,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && !self.data.is_fetched() && self.error.is_none()
    }
}

/// Generic fetch hook composer.
///
/// Automatically fetches on mount and provides refetch capability. The fetch
/// function captures dependencies from the closure, and the deps parameter
/// is used only for dependency tracking in use_callback and use_effect_with.
///
/// Overlapping invocations are resolved by generation: each dispatch takes
/// the next value from a shared counter and a response is committed only if
/// its generation is still current, so the last dispatched fetch wins
/// regardless of completion order. Unmount also advances the counter, which
/// turns a response arriving after teardown into a no-op.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_user_data(user_id: UserId) -> FetchHookReturn<UserData> {
///     use_fetch(
///         user_id,
///         || async move {
///             let api_client = get_api_client();
///             api_client
///                 .get_user_data(user_id)
///                 .await
///                 .map_err(|e| e.to_string())
///         },
///     )
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_reducer(Fetch::<T>::default);
    let generation = use_mut_ref(|| 0u64);

    let refetch = {
        let state = state.clone();
        let generation = generation.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let state = state.clone();
            let generation = generation.clone();
            let fetch_fn = fetch_fn.clone();

            let this_generation = {
                let mut current = generation.borrow_mut();
                *current += 1;
                *current
            };

            state.dispatch(FetchAction::Started);
            yew::platform::spawn_local(async move {
                let result = fetch_fn().await;
                if *generation.borrow() != this_generation {
                    // A newer dispatch superseded this one, or the consumer
                    // unmounted while the call was in flight.
                    return;
                }
                match result {
                    Ok(data) => state.dispatch(FetchAction::Loaded(data)),
                    Err(e) => state.dispatch(FetchAction::Failed(e)),
                }
            });
        })
    };

    // Auto-fetch on mount and when deps change; invalidate in-flight
    // responses on unmount.
    {
        let refetch = refetch.clone();
        let generation = generation.clone();

        use_effect_with(deps, move |_| {
            refetch.emit(());
            move || {
                *generation.borrow_mut() += 1;
            }
        });
    }

    FetchHookReturn {
        data: state.data.clone(),
        is_loading: state.is_loading,
        error: state.error.clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exclusive(state: &Fetch<Vec<u32>>) {
        // data and error never coexist; loading implies neither.
        assert!(!(state.data.is_fetched() && state.error.is_some()));
        if state.is_loading {
            assert!(!state.data.is_fetched());
            assert!(state.error.is_none());
        }
    }

    #[test]
    fn starts_idle_with_nothing_set() {
        let state = Fetch::<Vec<u32>>::default();
        assert!(!state.is_loading);
        assert!(!state.data.is_fetched());
        assert!(state.error.is_none());
    }

    #[test]
    fn started_precedes_any_terminal_state() {
        let state = Rc::new(Fetch::<Vec<u32>>::default());
        let state = state.reduce(FetchAction::Started);
        assert!(state.is_loading);
        assert!(!state.data.is_fetched());
        assert!(state.error.is_none());
    }

    #[test]
    fn load_resolves_to_data_without_error() {
        let state = Rc::new(Fetch::default());
        let state = state.reduce(FetchAction::Started);
        let state = state.reduce(FetchAction::Loaded(vec![1, 2]));
        assert!(!state.is_loading);
        assert_eq!(state.data.as_ref(), Some(&vec![1, 2]));
        assert!(state.error.is_none());
    }

    #[test]
    fn failure_resolves_to_error_without_data() {
        let state = Rc::new(Fetch::<Vec<u32>>::default());
        let state = state.reduce(FetchAction::Started);
        let state =
            state.reduce(FetchAction::Failed("Something went wrong".into()));
        assert!(!state.is_loading);
        assert!(!state.data.is_fetched());
        assert_eq!(state.error.as_deref(), Some("Something went wrong"));
    }

    #[test]
    fn fresh_load_clears_prior_data() {
        let state = Rc::new(Fetch::default());
        let state = state.reduce(FetchAction::Loaded(vec![1]));
        let state = state.reduce(FetchAction::Started);
        assert!(state.is_loading);
        assert!(!state.data.is_fetched());
        assert!(state.error.is_none());
    }

    #[test]
    fn fresh_load_clears_prior_error() {
        let state = Rc::new(Fetch::<Vec<u32>>::default());
        let state = state.reduce(FetchAction::Failed("nope".into()));
        let state = state.reduce(FetchAction::Started);
        assert!(state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn exclusivity_holds_across_every_transition() {
        let transitions = [
            FetchAction::Started,
            FetchAction::Loaded(vec![1, 2, 3]),
            FetchAction::Started,
            FetchAction::Failed("Something went wrong".into()),
            FetchAction::Started,
            FetchAction::Loaded(vec![]),
        ];
        let mut state = Rc::new(Fetch::default());
        assert_exclusive(&state);
        for action in transitions {
            state = state.reduce(action);
            assert_exclusive(&state);
        }
    }
}
