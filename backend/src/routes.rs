use std::collections::HashMap;
use rocket::{State, get, post, delete, serde::json::{self, Json}};
use tracing::{debug, info, instrument, warn};
use poll_core::{CreatePollRequest, CreatedPoll, Poll, PollError, VoteRequest, VoterInfo};
use crate::{config::PollConfig, error::ApiError, store::PollStore};

pub const HOME_BANNER: &str = "Hello!\nThis application doesn't have a UI yet, only a REST API.\n";

pub struct AppState {
    pub store: PollStore,
    pub config: PollConfig,
}

impl AppState {
    pub fn new(config: PollConfig) -> Self {
        let store = if config.seed_examples {
            PollStore::with_examples(config.rules())
        } else {
            PollStore::new(config.rules())
        };
        Self { store, config }
    }
}

#[get("/")]
pub fn home() -> &'static str {
    HOME_BANNER
}

#[get("/polls")]
pub fn list_polls(state: &State<AppState>) -> Result<Json<HashMap<String, Poll>>, ApiError> {
    Ok(Json(state.store.list()?))
}

#[get("/poll/<id>")]
pub fn get_poll(state: &State<AppState>, id: &str) -> Result<Json<Poll>, ApiError> {
    state.store.get(id)
        .map(Json)
        .map_err(|e| match e {
            PollError::PollNotFound => ApiError::NotFound,
            other => other.into(),
        })
}

#[instrument(skip(state, request), fields(poll_id))]
#[post("/poll", data = "<request>")]
pub fn create_poll(
    state: &State<AppState>,
    request: Result<Json<CreatePollRequest>, json::Error<'_>>,
) -> Result<Json<CreatedPoll>, ApiError> {
    let request = request?.into_inner();
    let (id, poll) = state.store.create(&request).map_err(|e| {
        warn!("Rejected poll creation: {}", e);
        e
    })?;
    tracing::Span::current().record("poll_id", id.as_str());
    Ok(Json(CreatedPoll { id, poll }))
}

#[instrument(skip(state), fields(poll_id = %id))]
#[delete("/poll/<id>")]
pub fn delete_poll(state: &State<AppState>, id: &str) -> Result<(), ApiError> {
    Ok(state.store.delete(id)?)
}

#[instrument(skip(state, vote, voter), fields(poll_id = %id))]
#[post("/poll/<id>", data = "<vote>")]
pub fn cast_vote(
    state: &State<AppState>,
    id: &str,
    vote: Result<Json<VoteRequest>, json::Error<'_>>,
    voter: VoterInfo,
) -> Result<(), ApiError> {
    if !state.store.contains(id)? {
        debug!("Vote rejected: unknown poll");
        return Err(PollError::PollNotFound.into());
    }

    let vote = vote?.into_inner();
    let Some(voter_key) = state.config.missing_address.voter_key(&voter) else {
        warn!("Vote refused: no client address available");
        return Err(ApiError::UnknownVoter);
    };
    debug!(voter = %voter_key, "Resolved voter");

    match state.store.cast_vote(id, &vote.answer, &voter_key) {
        Ok(count) => {
            info!(answer = %vote.answer, count, "Vote recorded");
            Ok(())
        }
        Err(e) => {
            debug!("Vote rejected: {}", e);
            Err(e.into())
        }
    }
}
