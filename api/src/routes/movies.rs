use actix_web::{HttpResponse, get, web};

use super::APIError;
use crate::catalog::Catalog;

/// List the catalog in its stored order.
#[tracing::instrument(skip(catalog))]
#[get("/movies/list")]
pub async fn list_movies(
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, APIError> {
    let movies = catalog.list()?;
    Ok(HttpResponse::Ok().json(movies))
}
