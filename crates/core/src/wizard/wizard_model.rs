use serde::Serialize;

use crate::constants::STEP_LABELS;
use crate::errors::GenerationError;

/// The five input steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    Profile,
    Goals,
    Assets,
    Debts,
    Risk,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Profile,
        WizardStep::Goals,
        WizardStep::Assets,
        WizardStep::Debts,
        WizardStep::Risk,
    ];

    /// Position in the wizard, 0 to 4.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Profile => 0,
            WizardStep::Goals => 1,
            WizardStep::Assets => 2,
            WizardStep::Debts => 3,
            WizardStep::Risk => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Stepper label shown above the form.
    pub fn label(&self) -> &'static str {
        STEP_LABELS[self.index()]
    }
}

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "phase", content = "step")]
pub enum WizardPhase {
    Editing(WizardStep),
    /// A generation call is in flight.
    Loading,
    Results,
}

impl WizardPhase {
    /// Step index, with 5 standing for the generation/result pseudo-step.
    pub fn index(&self) -> usize {
        match self {
            WizardPhase::Editing(step) => step.index(),
            WizardPhase::Loading | WizardPhase::Results => WizardStep::ALL.len(),
        }
    }
}

/// What happened to a finished generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// Results are stored; `active_portfolio` is the initially selected one.
    Completed { active_portfolio: usize },
    /// The wizard went back to the risk step. The error is for logs only.
    Failed(GenerationError),
}
