use std::{error::Error, fmt::Debug};

use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use diesel::QueryResult;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    db_interaction::{find_customer, order_history, CustomerLookup},
    domain::Selection,
    models::Customer,
    session_state::TypedSession,
    telemetry::spawn_blocking_with_tracing,
    utils::{error_fmt_chain, get_pooled_connection, DbPool},
};

use super::CustomerView;

#[derive(Deserialize, Debug)]
pub struct LookupQuery{
    name: String
}

#[derive(Error)]
pub enum LookupError{
    #[error("{0}")]
    ValidationError(String),
    #[error("No customer named {0:?}")]
    NotFound(String),
    #[error("{} customers are named {name:?}, select one by id", .candidates.len())]
    Ambiguous{
        name: String,
        candidates: Vec<Customer>
    },
    #[error("Failed due to internal server error")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for LookupError {
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            LookupError::ValidationError(_) => HttpResponse::BadRequest().body(format!("{}", self)),
            LookupError::NotFound(_) => HttpResponse::NotFound().body(format!("{}", self)),
            LookupError::Ambiguous { candidates, .. } => HttpResponse::Conflict().json(serde_json::json!({
                "message": format!("{}", self),
                "candidates": candidates
            })),
            LookupError::UnexpectedError(_) => HttpResponse::InternalServerError().body(format!("{}", self))
        }
    }
}

#[tracing::instrument(
    "Looking up customer",
    skip(pool, session)
)]
pub async fn lookup_customer(
    pool: web::Data<DbPool>,
    query: web::Query<LookupQuery>,
    session: TypedSession
) -> Result<HttpResponse, LookupError>{
    // Exact match: the name is searched as typed, surrounding whitespace included
    let name = query.0.name;
    if name.is_empty(){
        session.clear_selection();
        return Err(LookupError::ValidationError("Customer name must not be empty".to_string()))
    }

    let mut conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let search = name.clone();
    let (lookup, history) = spawn_blocking_with_tracing(move || -> QueryResult<_> {
        let lookup = find_customer(&mut conn, &search)?;

        let history = match &lookup {
            CustomerLookup::Found(customer) => order_history(&mut conn, customer.custid)?,
            _ => Vec::new()
        };

        Ok((lookup, history))
    })
    .await
    .context("Failed due to threadpool error")?
    .context("Failed to query customer")?;

    match lookup {
        CustomerLookup::Found(customer) => {
            session.insert_selection(&Selection::from(&customer))
                .context("Failed to store selection in session")?;

            Ok(HttpResponse::Ok().json(CustomerView::new(customer, history)))
        },
        CustomerLookup::NotFound => {
            session.clear_selection();
            Err(LookupError::NotFound(name))
        },
        CustomerLookup::Ambiguous(candidates) => {
            session.clear_selection();
            Err(LookupError::Ambiguous{ name, candidates })
        }
    }
}
