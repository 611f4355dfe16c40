pub mod config;
pub mod routes;
pub mod store;
pub mod error;
pub mod catchers;
pub use poll_core::{models::*, user_info::*, PollError};

use rocket::{catchers, routes, Build, Rocket};
use crate::{
    catchers::{internal_error, not_found},
    config::PollConfig,
    routes::{cast_vote, create_poll, delete_poll, get_poll, home, list_polls, AppState},
};

/// Assembles the poll service around a fresh in-memory store.
pub fn build_rocket(rocket: Rocket<Build>, config: PollConfig) -> Rocket<Build> {
    rocket
        .manage(AppState::new(config))
        .mount("/", routes![home])
        .mount(
            "/api",
            routes![list_polls, get_poll, create_poll, delete_poll, cast_vote],
        )
        .register("/", catchers![not_found, internal_error])
}
