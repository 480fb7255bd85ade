//! Wizard module - step navigation, collected data and generation lifecycle.

mod loading_ticker;
mod wizard_model;
mod wizard_state;

pub use loading_ticker::LoadingTicker;
pub use wizard_model::{GenerationOutcome, WizardPhase, WizardStep};
pub use wizard_state::WizardState;
