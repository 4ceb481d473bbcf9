//! Wire types shared between the catalog service and its clients, plus the
//! HTTP client used to talk to it.

pub mod api_client;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifier for a movie, assigned by the catalog service.
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct MovieId(pub i64);
