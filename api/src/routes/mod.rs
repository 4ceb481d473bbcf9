pub mod movies;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get,
};

use crate::catalog::CatalogError;

pub fn api_services() -> impl HttpServiceFactory {
    (health_check, movies::list_movies)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            // The cause stays in the logs; clients get the generic message.
            Self::UnexpectedError(_) => {
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<CatalogError> for APIError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Unavailable => APIError::UnexpectedError(e.into()),
        }
    }
}
