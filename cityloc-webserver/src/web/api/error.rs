use super::{json_error_response, server_error_response};
use cityloc_core::{repositories::Error as RepoError, usecases::Error as LookupError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    tokio::task::JoinError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] LookupError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        LookupError::from(err).into()
    }
}

impl From<JoinError> for Error {
    fn from(err: JoinError) -> Self {
        Self::Other(err.into())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => match err {
                LookupError::EmptyCity => json_error_response(req, &err, Status::BadRequest),
                LookupError::CityNotFound => json_error_response(req, &err, Status::NotFound),
                LookupError::ProviderUnavailable(_) | LookupError::Repo(_) => {
                    error!("Error: {err}");
                    server_error_response(req, &err)
                }
            },
            Error::Other(err) => {
                error!("Error: {err}");
                server_error_response(req, &err)
            }
        }
    }
}
