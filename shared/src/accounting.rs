use tracing::debug;

use crate::error::{PollError, Result};
use crate::models::Poll;

impl Poll {
    /// Records one vote for `answer` on behalf of `voter`.
    ///
    /// Checks run in order: answer label, then duplicate voter. Nothing is
    /// touched unless both pass, and then the voter set and the tally change
    /// together. Callers holding the poll behind a shared lock must keep the
    /// lock for the whole call.
    pub fn cast_vote(&mut self, answer: &str, voter: &str) -> Result<u64> {
        let Some(count) = self.answers.get_mut(answer) else {
            return Err(PollError::AnswerNotFound);
        };

        if self.voters.contains(voter) {
            debug!(voter, "Rejected repeat vote");
            return Err(PollError::AlreadyVoted);
        }

        self.voters.insert(voter.to_string());
        *count += 1;
        Ok(*count)
    }
}
