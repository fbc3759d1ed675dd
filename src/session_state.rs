use actix_session::{Session, SessionExt, SessionGetError, SessionInsertError};
use actix_web::{error::{ErrorForbidden, ErrorInternalServerError}, FromRequest};
use futures_util::future::{ready, Ready};

use crate::domain::Selection;

const SELECTION_KEY: &str = "selection";

/// The clerk's session. It only remembers the selected customer.
pub struct TypedSession(pub Session);

impl TypedSession {
    pub fn get_selection(&self) -> Result<Option<Selection>, SessionGetError>{
        self.0.get(SELECTION_KEY)
    }

    pub fn insert_selection(&self, selection: &Selection) -> Result<(), SessionInsertError>{
        self.0.insert(SELECTION_KEY, selection)
    }

    pub fn clear_selection(&self){
        self.0.remove(SELECTION_KEY);
    }
}

impl FromRequest for TypedSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let session = req.get_session();
        ready(Ok(TypedSession(session)))
    }
}

// Extractor that refuses the request unless a customer is selected
pub struct SelectedCustomer(pub Selection);

impl FromRequest for SelectedCustomer {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let session = TypedSession(req.get_session());

        match session.get_selection() {
            Ok(Some(selection)) => ready(Ok(SelectedCustomer(selection))),
            Ok(None) => ready(Err(ErrorForbidden("No customer selected, look up a customer first"))),
            Err(e) => {
                tracing::error!("Failed to read selection from session: {}", e);
                ready(Err(ErrorInternalServerError("Failed to read session")))
            }
        }
    }
}
