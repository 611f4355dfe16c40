use serde::{Serialize, Deserialize};
use std::collections::{HashMap, HashSet};

/// A question with a fixed set of answers and their tallies.
///
/// `voters` holds the fingerprints of everyone who already voted and is
/// never serialized.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Poll {
    pub question: String,
    pub answers: HashMap<String, u64>,
    #[serde(skip)]
    pub(crate) voters: HashSet<String>,
}

impl Poll {
    pub fn new<I, S>(question: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_tallies(question, labels.into_iter().map(|label| (label, 0)))
    }

    /// Builds a poll whose answers start from the given counts.
    pub fn with_tallies<I, S>(question: impl Into<String>, tallies: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            answers: tallies.into_iter().map(|(label, count)| (label.into(), count)).collect(),
            voters: HashSet::new(),
        }
    }

    pub fn tally(&self, label: &str) -> Option<u64> {
        self.answers.get(label).copied()
    }

    pub fn total_votes(&self) -> u64 {
        self.answers.values().sum()
    }

    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    pub fn has_voted(&self, voter: &str) -> bool {
        self.voters.contains(voter)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CreatePollRequest {
    pub question: String,
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VoteRequest {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreatedPoll {
    pub id: String,
    #[serde(flatten)]
    pub poll: Poll,
}
