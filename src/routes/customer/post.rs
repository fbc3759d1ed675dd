use std::{error::Error, fmt::Debug};

use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    db_interaction::{register_customer as insert_customer, NewCustomer},
    domain::CustomerName,
    startup::InsertRetries,
    telemetry::spawn_blocking_with_tracing,
    utils::{error_fmt_chain, get_pooled_connection, DbPool},
};

#[derive(Deserialize, Debug)]
pub struct RegistrationForm{
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    phone: String
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Registered{
    pub custid: i32
}

#[derive(Error)]
pub enum RegisterError{
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to register customer: {0}")]
    InsertError(#[source] diesel::result::Error),
    #[error("Failed due to internal server error")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for RegisterError{
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            RegisterError::ValidationError(_) => HttpResponse::BadRequest().body(format!("{}", self)),
            _ => HttpResponse::InternalServerError().body(format!("{}", self))
        }
    }
}

#[tracing::instrument(
    "Customer registration started",
    skip(pool, retries)
)]
pub async fn register_customer(
    pool: web::Data<DbPool>,
    retries: web::Data<InsertRetries>,
    form: web::Form<RegistrationForm>
) -> Result<HttpResponse, RegisterError> {
    let form = form.into_inner();
    let new_customer = NewCustomer{
        name: CustomerName::parse(form.name).map_err(RegisterError::ValidationError)?,
        address: form.address,
        phone: form.phone
    };

    let mut conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let attempts = retries.0;
    let custid = spawn_blocking_with_tracing(move || {
        insert_customer(&mut conn, new_customer, attempts)
    })
    .await
    .context("Failed due to threadpool error")?
    .map_err(RegisterError::InsertError)?;

    Ok(HttpResponse::Ok().json(Registered{ custid }))
}
