use actix_web::{error::ErrorInternalServerError, HttpResponse};
use anyhow::Context;

use crate::session_state::TypedSession;

#[tracing::instrument(
    "Getting selected customer",
    skip(session)
)]
pub async fn get_selection(
    session: TypedSession
) -> Result<HttpResponse, actix_web::Error>{
    let selection = session.get_selection()
                .context("Failed to read selection from session")
                .map_err(ErrorInternalServerError)?;

    match selection {
        Some(selection) => Ok(HttpResponse::Ok().json(selection)),
        None => Ok(HttpResponse::NotFound().body("No customer selected"))
    }
}

#[tracing::instrument(
    "Clearing selected customer",
    skip(session)
)]
pub async fn clear_selection(session: TypedSession) -> HttpResponse{
    session.clear_selection();
    HttpResponse::Ok().finish()
}
