use std::collections::HashSet;
use serde::{Serialize, Deserialize};

use crate::error::{PollError, Result};
use crate::models::CreatePollRequest;

/// Tunable checks applied to a poll before it is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollRules {
    /// Legacy clients could create polls without answers that nobody can
    /// vote on. Off unless explicitly allowed.
    pub allow_empty_answers: bool,
}

/// Returns the distinct answer labels of `request`, first occurrence wins.
pub fn distinct_answers(request: &CreatePollRequest, rules: PollRules) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let labels: Vec<String> = request.answers.iter()
        .filter(|label| seen.insert(label.as_str()))
        .cloned()
        .collect();

    if labels.is_empty() && !rules.allow_empty_answers {
        return Err(PollError::NoAnswers);
    }

    Ok(labels)
}
