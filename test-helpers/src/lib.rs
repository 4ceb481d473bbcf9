use api::{Config, catalog::Catalog, telemetry};
use payloads::{MovieId, responses::Movie};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
}

pub async fn spawn_app_on_port_with_catalog(
    port: u16,
    catalog: Catalog,
) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let server = api::build(&mut config, catalog).await.unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: client,
        },
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app_with_catalog(catalog: Catalog) -> TestApp {
    spawn_app_on_port_with_catalog(0, catalog).await
}

/// Spawn with the sample catalog on an OS-assigned port.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_catalog(Catalog::sample()).await
}

/// A listing whose ids are deliberately out of order, so tests can tell
/// catalog order apart from id order.
pub fn unordered_listing() -> Vec<Movie> {
    vec![
        Movie {
            id: MovieId(3),
            title: "Ran".into(),
            year: Some(1985),
            poster_url: None,
        },
        Movie {
            id: MovieId(1),
            title: "Ikiru".into(),
            year: Some(1952),
            poster_url: None,
        },
        Movie {
            id: MovieId(2),
            title: "High and Low".into(),
            year: Some(1963),
            poster_url: None,
        },
    ]
}

/// The two-movie listing from the endpoint's documented success case.
pub fn two_movie_listing() -> Vec<Movie> {
    vec![
        Movie {
            id: MovieId(1),
            title: "A".into(),
            year: None,
            poster_url: None,
        },
        Movie {
            id: MovieId(2),
            title: "B".into(),
            year: None,
            poster_url: None,
        },
    ]
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
