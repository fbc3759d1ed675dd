use std::{fmt::Debug, error::Error, net::TcpListener, path::Path};

use actix_session::{config::PersistentSession, storage::CookieSessionStore, SessionMiddleware};
use actix_web::{cookie::{time::Duration, Key}, dev::Server, web, App, HttpServer};
use anyhow::Context;
use diesel::r2d2::ConnectionManager;
use r2d2::Pool;
use secrecy::ExposeSecret;
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::{DatabaseSettings, Settings},
    db_interaction::{list_book_entries, run_migrations},
    routes::{clear_selection, get_books, get_selection, health_check, lookup_customer, post_order, register_customer, select_customer},
    utils::{error_fmt_chain, ConnectionOptions, DbPool},
};

/// How many times an insert re-allocates its id after a unique-key conflict.
#[derive(Debug, Clone, Copy)]
pub struct InsertRetries(pub u32);

#[derive(Error)]
pub enum StartupError{
    #[error("Database file {0:?} does not exist, check that the bookstore database is in place")]
    StoreMissing(String),
    #[error("Failed to open database {0:?}, check that the file is a readable bookstore database")]
    StoreUnavailable(String, #[source] anyhow::Error),
    #[error("Failed to run database migrations")]
    MigrationError(#[source] anyhow::Error),
    #[error("Session key must be at least 64 bytes long")]
    InvalidSessionKey,
    #[error("Failed to bind listener")]
    BindError(#[from] std::io::Error)
}

impl Debug for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

/// Opens the store and, when configured, brings its schema up to date.
#[tracing::instrument(
    "Opening connection pool"
)]
pub fn get_connection_pool(settings: &DatabaseSettings) -> Result<DbPool, StartupError>{
    if !settings.create_if_missing && !Path::new(&settings.path).exists(){
        return Err(StartupError::StoreMissing(settings.path.clone()))
    }

    let pool = Pool::builder()
        .max_size(settings.max_connections)
        .connection_customizer(Box::new(ConnectionOptions{
            busy_timeout: settings.busy_timeout()
        }))
        .build(ConnectionManager::new(settings.path.as_str()))
        .map_err(|e| StartupError::StoreUnavailable(settings.path.clone(), e.into()))?;

    let mut conn = pool.get()
        .map_err(|e| StartupError::StoreUnavailable(settings.path.clone(), e.into()))?;

    if settings.run_migrations{
        run_migrations(&mut conn)
            .map_err(|e| StartupError::MigrationError(anyhow::anyhow!(e)))?;
    }

    // The book list backs the sale form; a store that cannot serve it is unusable
    let books = list_book_entries(&mut conn)
        .context("Failed to load the book list")
        .map_err(|e| StartupError::StoreUnavailable(settings.path.clone(), e))?;
    tracing::info!(books = books.len(), "Book list loaded");

    drop(conn);
    Ok(pool)
}

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    pub fn build(settings: Settings) -> Result<Self, StartupError>{
        let pool = get_connection_pool(&settings.database)?;

        let session_key = Key::try_from(settings.application.session_key.expose_secret().as_bytes())
            .map_err(|_| StartupError::InvalidSessionKey)?;

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))?;
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            pool,
            session_key,
            Duration::minutes(settings.application.session_ttl_minutes),
            InsertRetries(settings.database.insert_retries)
        )?;

        tracing::info!(host = %settings.application.host, port, "Bookstore service listening");

        Ok(Application{
            host: settings.application.host,
            port,
            server
        })
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error>{
        self.server.await
    }
}

fn run(
    listener: TcpListener,
    pool: DbPool,
    session_key: Key,
    session_ttl: Duration,
    retries: InsertRetries
) -> Result<Server, std::io::Error>{
    let pool = web::Data::new(pool);
    let retries = web::Data::new(retries);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .session_lifecycle(PersistentSession::default().session_ttl(session_ttl))
                    .build()
            )
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .route("/books", web::get().to(get_books))
            .route("/customers", web::get().to(lookup_customer))
            .route("/customers", web::post().to(register_customer))
            .route("/customers/{custid}/select", web::post().to(select_customer))
            .route("/selection", web::get().to(get_selection))
            .route("/selection", web::delete().to(clear_selection))
            .route("/orders", web::post().to(post_order))
            .app_data(pool.clone())
            .app_data(retries.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
