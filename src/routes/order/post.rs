use std::{error::Error, fmt::Debug};

use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    db_interaction::record_sale,
    domain::{BookChoice, SalePrice},
    session_state::SelectedCustomer,
    startup::InsertRetries,
    telemetry::spawn_blocking_with_tracing,
    utils::{error_fmt_chain, get_pooled_connection, DbPool},
};

#[derive(Deserialize, Debug)]
pub struct SaleForm{
    // `id,name` entry from the book list
    #[serde(default)]
    book: String,
    #[serde(default)]
    price: String
}

#[derive(Error)]
pub enum PostOrderError{
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to insert order: {0}")]
    InsertError(#[source] diesel::result::Error),
    #[error("Failed due to internal server error")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for PostOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for PostOrderError {
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            PostOrderError::ValidationError(_) => HttpResponse::BadRequest().body(format!("{}", self)),
            _ => HttpResponse::InternalServerError().body(format!("{}", self))
        }
    }
}

#[tracing::instrument(
    "Posting order",
    skip(pool, retries, selected),
    fields(custid = selected.0.custid)
)]
pub async fn post_order(
    selected: SelectedCustomer,
    pool: web::Data<DbPool>,
    retries: web::Data<InsertRetries>,
    form: web::Form<SaleForm>
) -> Result<HttpResponse, PostOrderError> {
    let book = BookChoice::parse(&form.book)
                .map_err(PostOrderError::ValidationError)?;
    let price = SalePrice::parse(&form.price)
                .map_err(PostOrderError::ValidationError)?;

    let mut conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let customer = selected.0;
    let attempts = retries.0;
    let sale = spawn_blocking_with_tracing(move || {
        record_sale(&mut conn, &customer, book, price, attempts)
    })
    .await
    .context("Failed due to threadpool error")?
    .map_err(PostOrderError::InsertError)?;

    Ok(HttpResponse::Ok().json(sale))
}
