use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info};
use poll_core::{validation::{distinct_answers, PollRules}, CreatePollRequest, Poll, PollError, Result};

/// Counter value before the first allocation. The two example polls take
/// the next two identifiers.
pub const ID_BASELINE: u64 = 10;

/// Hands out poll identifiers. Values are never repeated, even for polls
/// that were deleted.
#[derive(Debug)]
pub struct IdAllocator {
    counter: AtomicU64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::starting_after(ID_BASELINE)
    }
}

impl IdAllocator {
    pub fn starting_after(baseline: u64) -> Self {
        Self { counter: AtomicU64::new(baseline) }
    }

    pub fn next(&self) -> String {
        (self.counter.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }
}

/// All polls known to this process, behind one lock.
#[derive(Debug, Default)]
pub struct PollStore {
    polls: Mutex<HashMap<String, Poll>>,
    ids: IdAllocator,
    rules: PollRules,
}

impl PollStore {
    pub fn new(rules: PollRules) -> Self {
        Self {
            polls: Mutex::new(HashMap::new()),
            ids: IdAllocator::default(),
            rules,
        }
    }

    /// Store pre-filled with the "why?" and "who is god?" example polls.
    pub fn with_examples(rules: PollRules) -> Self {
        let store = Self::new(rules);
        store.seed(Poll::with_tallies("why?", [("idk", 0), ("i do know", 1)]));
        store.seed(Poll::with_tallies("who is god?", [("idk2", 1), ("i do know2", 2)]));
        info!("Seeded example polls");
        store
    }

    fn seed(&self, poll: Poll) {
        match self.lock() {
            Ok(mut polls) => {
                polls.insert(self.ids.next(), poll);
            }
            Err(e) => error!("Skipped seeding \"{}\": {}", poll.question, e),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Poll>>> {
        self.polls.lock().map_err(|e| {
            error!("Failed to acquire poll store lock: {}", e);
            PollError::StoreUnavailable
        })
    }

    pub fn list(&self) -> Result<HashMap<String, Poll>> {
        Ok(self.lock()?.clone())
    }

    pub fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.lock()?.contains_key(id))
    }

    pub fn get(&self, id: &str) -> Result<Poll> {
        self.lock()?.get(id).cloned().ok_or(PollError::PollNotFound)
    }

    /// Validates the request, assigns the next identifier and publishes the
    /// poll in one critical section.
    pub fn create(&self, request: &CreatePollRequest) -> Result<(String, Poll)> {
        let labels = distinct_answers(request, self.rules)?;
        let poll = Poll::new(request.question.clone(), labels);

        let mut polls = self.lock()?;
        let id = self.ids.next();
        polls.insert(id.clone(), poll.clone());
        info!(poll_id = %id, answers = poll.answers.len(), "Created poll");
        Ok((id, poll))
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        match self.lock()?.remove(id) {
            Some(_) => {
                info!(poll_id = %id, "Deleted poll");
                Ok(())
            }
            None => Err(PollError::PollNotFound),
        }
    }

    /// Looks up the poll and applies the vote while holding the store lock,
    /// so two requests from the same new voter cannot both be counted.
    pub fn cast_vote(&self, id: &str, answer: &str, voter: &str) -> Result<u64> {
        let mut polls = self.lock()?;
        let poll = polls.get_mut(id).ok_or(PollError::PollNotFound)?;
        let count = poll.cast_vote(answer, voter)?;
        debug!(poll_id = %id, answer, count, "Vote accepted");
        Ok(count)
    }
}
