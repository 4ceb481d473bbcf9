use payloads::{ClientError, responses};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// Message shown for any listing failure, regardless of cause.
const FETCH_FAILED_MESSAGE: &str = "Something went wrong";

/// Hook to load the movie listing.
///
/// The listing is fetched once per mounted consumer; `refetch` runs a new
/// cycle on demand. Whether to retry after a failure is the consumer's call.
#[hook]
pub fn use_movies() -> FetchHookReturn<Vec<responses::Movie>> {
    use_fetch((), || async move {
        let api_client = get_api_client();
        api_client.list_movies().await.map_err(surface_error)
    })
}

/// Collapse a client error into the fixed user-facing message, keeping the
/// structured cause in the logs.
fn surface_error(error: ClientError) -> String {
    tracing::warn!(%error, "movie listing fetch failed");
    FETCH_FAILED_MESSAGE.to_string()
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    #[test]
    fn server_errors_collapse_to_fixed_message() {
        let error = ClientError::APIError(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong".into(),
        );
        assert_eq!(surface_error(error), FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn client_error_bodies_are_not_surfaced() {
        let error = ClientError::APIError(
            StatusCode::BAD_GATEWAY,
            "upstream exploded: socket 0x7f deadbeef".into(),
        );
        // The displayed message carries no cause-specific details.
        assert_eq!(surface_error(error), "Something went wrong");
    }
}
