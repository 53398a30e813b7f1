use crate::errors::ApiError;
use crate::server::AppState;
use actix_web::dev::Payload;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::PgConnection;
use std::cell::{RefCell, RefMut};
use std::future::{ready, Ready};
use std::rc::Rc;

type PooledPgConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// A database connection checked out for the lifetime of one request. The
/// first extractor use takes a connection from the pool and caches it in the
/// request extensions; every later extractor on the same request shares it,
/// and the pool gets it back when the request finishes.
#[derive(Clone)]
pub struct Connection {
    inner: Rc<RefCell<PooledPgConnection>>,
}

impl From<PooledPgConnection> for Connection {
    fn from(connection: PooledPgConnection) -> Self {
        Connection {
            inner: Rc::new(RefCell::new(connection)),
        }
    }
}

impl Connection {
    pub fn get(&self) -> RefMut<PooledPgConnection> {
        self.inner.borrow_mut()
    }
}

impl FromRequest for Connection {
    type Error = ApiError;
    type Future = Ready<Result<Connection, ApiError>>;

    fn from_request(request: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if let Some(connection) = request.extensions().get::<Connection>() {
            return ready(Ok(connection.clone()));
        }

        let state = request
            .app_data::<Data<AppState>>()
            .expect("critical: AppState not configured for App");

        match state.database.get_connection() {
            Ok(connection) => {
                request.extensions_mut().insert(connection.clone());
                ready(Ok(connection))
            }
            Err(e) => ready(Err(e.into())),
        }
    }
}
