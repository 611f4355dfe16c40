use rocket::{Request, catch, serde::json::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorMessage {
    error: String,
    status: u16,
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: format!("No route for {} {}.", req.method(), req.uri().path()),
        status: 404
    })
}

#[catch(500)]
pub fn internal_error(req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: format!("Poll service failed to handle {} {}.", req.method(), req.uri().path()),
        status: 500
    })
}
