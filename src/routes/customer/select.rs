use std::{error::Error, fmt::Debug};

use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use diesel::QueryResult;
use thiserror::Error;

use crate::{
    db_interaction::{get_customer, order_history},
    domain::Selection,
    session_state::TypedSession,
    telemetry::spawn_blocking_with_tracing,
    utils::{error_fmt_chain, get_pooled_connection, DbPool},
};

use super::CustomerView;

#[derive(Error)]
pub enum SelectCustomerError{
    #[error("No customer with id {0}")]
    NotFound(i32),
    #[error("Failed due to internal server error")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for SelectCustomerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for SelectCustomerError {
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            SelectCustomerError::NotFound(_) => HttpResponse::NotFound().body(format!("{}", self)),
            SelectCustomerError::UnexpectedError(_) => HttpResponse::InternalServerError().body(format!("{}", self))
        }
    }
}

// Resolves an ambiguous name lookup by picking one customer by id
#[tracing::instrument(
    "Selecting customer by id",
    skip(pool, session)
)]
pub async fn select_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    session: TypedSession
) -> Result<HttpResponse, SelectCustomerError>{
    let custid = path.into_inner();

    let mut conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let found = spawn_blocking_with_tracing(move || -> QueryResult<_> {
        match get_customer(&mut conn, custid)? {
            Some(customer) => {
                let history = order_history(&mut conn, customer.custid)?;
                Ok(Some((customer, history)))
            },
            None => Ok(None)
        }
    })
    .await
    .context("Failed due to threadpool error")?
    .context("Failed to query customer")?;

    match found {
        Some((customer, history)) => {
            session.insert_selection(&Selection::from(&customer))
                .context("Failed to store selection in session")?;

            Ok(HttpResponse::Ok().json(CustomerView::new(customer, history)))
        },
        None => {
            session.clear_selection();
            Err(SelectCustomerError::NotFound(custid))
        }
    }
}
