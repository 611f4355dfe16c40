use rocket::http::Status;
use rocket::response::Responder;
use thiserror::Error;
use poll_core::PollError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Poll(#[from] PollError),
    #[error("No such poll found.")]
    NotFound,
    #[error("{0}")]
    Malformed(String),
    #[error("Unable to determine voter address.")]
    UnknownVoter,
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Poll(PollError::StoreUnavailable) => Status::InternalServerError,
            ApiError::Poll(_) => Status::BadRequest,
            ApiError::NotFound => Status::NotFound,
            ApiError::Malformed(_) => Status::BadRequest,
            ApiError::UnknownVoter => Status::BadRequest,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        rocket::Response::build_from(self.to_string().respond_to(req)?)
            .status(status)
            .ok()
    }
}

impl<'a> From<rocket::serde::json::Error<'a>> for ApiError {
    fn from(err: rocket::serde::json::Error<'a>) -> Self {
        match err {
            rocket::serde::json::Error::Io(e) => ApiError::Malformed(e.to_string()),
            rocket::serde::json::Error::Parse(_, e) => ApiError::Malformed(e.to_string()),
        }
    }
}
