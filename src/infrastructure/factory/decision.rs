//! Decision engine factory.

use crate::application::decision::engine::DecisionEngine;
use crate::infrastructure::config::settings::Config;

use super::fusion::build_fuser;

/// Build the decision engine from configuration.
#[must_use]
pub fn build_engine(config: &Config) -> DecisionEngine {
    DecisionEngine::new(build_fuser(config), config.risk.clone().into())
}
