use rocket::figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use poll_core::{validation::PollRules, VoterInfo};

/// Voter bucket shared by every request without a usable address.
pub const ANONYMOUS_VOTER: &str = "anonymous";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingAddressPolicy {
    #[default]
    Reject,
    Shared,
}

impl MissingAddressPolicy {
    /// Voter key used for deduplication, or `None` when the vote must be refused.
    pub fn voter_key(self, info: &VoterInfo) -> Option<String> {
        match (&info.voter_fingerprint, self) {
            (Some(fingerprint), _) => Some(fingerprint.clone()),
            (None, MissingAddressPolicy::Shared) => Some(ANONYMOUS_VOTER.to_string()),
            (None, MissingAddressPolicy::Reject) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    pub allow_empty_answers: bool,
    pub missing_address: MissingAddressPolicy,
    pub seed_examples: bool,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            allow_empty_answers: false,
            missing_address: MissingAddressPolicy::Reject,
            seed_examples: true,
        }
    }
}

impl PollConfig {
    pub fn from_figment(figment: &Figment) -> Self {
        match figment.extract::<PollConfig>() {
            Ok(config) => {
                info!(?config, "Loaded poll configuration");
                config
            }
            Err(e) => {
                warn!("Invalid poll configuration, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn rules(&self) -> PollRules {
        PollRules { allow_empty_answers: self.allow_empty_answers }
    }
}
