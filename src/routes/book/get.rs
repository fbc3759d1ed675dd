use std::{error::Error, fmt::Debug};

use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use thiserror::Error;

use crate::{db_interaction::list_book_entries, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, get_pooled_connection, DbPool}};

#[derive(Error)]
pub enum GetBooksError{
    #[error("Failed to load the book list")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for GetBooksError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for GetBooksError {
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::InternalServerError().body(format!("{}", self))
    }
}

#[tracing::instrument(
    "Get book entries",
    skip(pool)
)]
pub async fn get_books(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, GetBooksError> {
    let mut conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let entries = spawn_blocking_with_tracing(move || {
        list_book_entries(&mut conn)
            .context("Failed to query book entries")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(HttpResponse::Ok().json(entries))
}
