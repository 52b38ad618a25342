//! Fusion strategy factory.
//!
//! The strategy is chosen once from configuration and never switched while
//! the process runs.

use tracing::info;

use crate::application::fusion::{classifier::ClassifierFuser, ensemble::EnsembleFuser};
use crate::infrastructure::config::fusion::FusionStrategy;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::fusion::Fuser;

/// Build the configured fusion strategy.
///
/// A classifier whose model cannot be loaded still builds; it degrades every
/// forecast to 0.5 and says so in the log.
#[must_use]
pub fn build_fuser(config: &Config) -> Box<dyn Fuser> {
    let fuser: Box<dyn Fuser> = match config.fusion.strategy {
        FusionStrategy::WeightedEnsemble => Box::new(EnsembleFuser::new(
            config.signals.weights,
            config.signals.confidence,
        )),
        FusionStrategy::TrainedClassifier => match &config.fusion.model_path {
            Some(path) => Box::new(ClassifierFuser::from_path(path)),
            None => Box::new(ClassifierFuser::unloaded("model_path not configured")),
        },
    };
    info!(
        strategy = fuser.name(),
        requires_training = fuser.requires_training(),
        "Fusion strategy selected"
    );
    fuser
}
