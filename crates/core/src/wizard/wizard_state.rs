//! Session state of the five-step wizard.
//!
//! `WizardState` is the single owner of everything the client entered. Every
//! operation takes `&mut self`; no state lives outside this container.

use log::{debug, error, info};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::analysis::{AnalysisGeneratorTrait, AnalysisRequest, AnalysisResponse, Portfolio};
use crate::constants::{GENERATION_FAILED_NOTICE, LOADING_MESSAGES, LOADING_MESSAGE_INTERVAL};
use crate::errors::{Error, GenerationError, Result};
use crate::goals::{GoalTemplate, GoalUpdate, LifeGoal};
use crate::patrimony::{AssetUpdate, CurrentAsset, Debt, DebtUpdate};
use crate::profile::{ClientProfile, ProfileUpdate};
use crate::risk::{RiskLabel, RiskProfile};
use crate::wizard::{GenerationOutcome, LoadingTicker, WizardPhase, WizardStep};

#[derive(Debug)]
pub struct WizardState {
    phase: WizardPhase,
    profile: ClientProfile,
    goals: Vec<LifeGoal>,
    assets: Vec<CurrentAsset>,
    debts: Vec<Debt>,
    risk: RiskProfile,
    additional_context: String,
    results: Option<AnalysisResponse>,
    active_portfolio: usize,
    notification: Option<String>,
    loading_index: Arc<AtomicUsize>,
    ticker: Option<LoadingTicker>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Fresh session on the profile step with default values.
    pub fn new() -> Self {
        Self {
            phase: WizardPhase::Editing(WizardStep::Profile),
            profile: ClientProfile::default(),
            goals: Vec::new(),
            assets: Vec::new(),
            debts: Vec::new(),
            risk: RiskProfile::default(),
            additional_context: String::new(),
            results: None,
            active_portfolio: 0,
            notification: None,
            loading_index: Arc::new(AtomicUsize::new(0)),
            ticker: None,
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// Current input step, `None` while loading or showing results.
    pub fn step(&self) -> Option<WizardStep> {
        match self.phase {
            WizardPhase::Editing(step) => Some(step),
            _ => None,
        }
    }

    pub fn step_index(&self) -> usize {
        self.phase.index()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == WizardPhase::Loading
    }

    /// Move to the next input step. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        self.move_to(WizardStep::next)
    }

    /// Move to the previous input step. Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        self.move_to(WizardStep::previous)
    }

    fn move_to(&mut self, target: impl Fn(&WizardStep) -> Option<WizardStep>) -> bool {
        let WizardPhase::Editing(step) = self.phase else {
            return false;
        };
        match target(&step) {
            Some(next) => {
                self.phase = WizardPhase::Editing(next);
                true
            }
            None => false,
        }
    }

    /// Back to the first step, discarding results but keeping entered data.
    pub fn restart(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.results = None;
        self.active_portfolio = 0;
        self.phase = WizardPhase::Editing(WizardStep::Profile);
        Ok(())
    }

    /// Forget everything and start a new session.
    pub fn reset(&mut self) -> Result<()> {
        self.ensure_editable()?;
        *self = Self::new();
        Ok(())
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.is_loading() {
            Err(Error::GenerationInProgress)
        } else {
            Ok(())
        }
    }

    // ========================================================================
    // Profile
    // ========================================================================

    pub fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<()> {
        self.ensure_editable()?;
        self.profile.apply(update)?;
        Ok(())
    }

    // ========================================================================
    // Goals
    // ========================================================================

    pub fn goals(&self) -> &[LifeGoal] {
        &self.goals
    }

    /// Append a goal and return its id.
    pub fn add_goal(&mut self, template: Option<&GoalTemplate>) -> Result<String> {
        self.ensure_editable()?;
        let goal = LifeGoal::new(template);
        let id = goal.id.clone();
        self.goals.push(goal);
        Ok(id)
    }

    pub fn remove_goal(&mut self, id: &str) -> Result<LifeGoal> {
        self.ensure_editable()?;
        let position = find_position(&self.goals, "goal", id, |g| &g.id)?;
        Ok(self.goals.remove(position))
    }

    pub fn update_goal(&mut self, id: &str, update: GoalUpdate) -> Result<()> {
        self.ensure_editable()?;
        let position = find_position(&self.goals, "goal", id, |g| &g.id)?;
        self.goals[position].apply(update)?;
        Ok(())
    }

    // ========================================================================
    // Assets
    // ========================================================================

    pub fn assets(&self) -> &[CurrentAsset] {
        &self.assets
    }

    pub fn add_asset(&mut self) -> Result<String> {
        self.ensure_editable()?;
        let asset = CurrentAsset::new();
        let id = asset.id.clone();
        self.assets.push(asset);
        Ok(id)
    }

    pub fn remove_asset(&mut self, id: &str) -> Result<CurrentAsset> {
        self.ensure_editable()?;
        let position = find_position(&self.assets, "asset", id, |a| &a.id)?;
        Ok(self.assets.remove(position))
    }

    pub fn update_asset(&mut self, id: &str, update: AssetUpdate) -> Result<()> {
        self.ensure_editable()?;
        let position = find_position(&self.assets, "asset", id, |a| &a.id)?;
        self.assets[position].apply(update)?;
        Ok(())
    }

    // ========================================================================
    // Debts
    // ========================================================================

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn add_debt(&mut self) -> Result<String> {
        self.ensure_editable()?;
        let debt = Debt::new();
        let id = debt.id.clone();
        self.debts.push(debt);
        Ok(id)
    }

    pub fn remove_debt(&mut self, id: &str) -> Result<Debt> {
        self.ensure_editable()?;
        let position = find_position(&self.debts, "debt", id, |d| &d.id)?;
        Ok(self.debts.remove(position))
    }

    pub fn update_debt(&mut self, id: &str, update: DebtUpdate) -> Result<()> {
        self.ensure_editable()?;
        let position = find_position(&self.debts, "debt", id, |d| &d.id)?;
        self.debts[position].apply(update)?;
        Ok(())
    }

    // ========================================================================
    // Risk and context
    // ========================================================================

    pub fn risk(&self) -> &RiskProfile {
        &self.risk
    }

    /// Select a discrete preset: score and label are replaced together.
    pub fn set_risk_preset(&mut self, score: u8, label: RiskLabel) -> Result<()> {
        self.ensure_editable()?;
        let mut risk = RiskProfile::new(score, label)?;
        risk.description = self.risk.description.clone();
        self.risk = risk;
        Ok(())
    }

    /// Set the score from a continuous slider; the label follows the banding.
    pub fn set_risk_from_continuous_score(&mut self, score: u8) -> Result<()> {
        self.ensure_editable()?;
        let mut risk = RiskProfile::from_score(score)?;
        risk.description = self.risk.description.clone();
        self.risk = risk;
        Ok(())
    }

    pub fn set_risk_description(&mut self, description: Option<String>) -> Result<()> {
        self.ensure_editable()?;
        self.risk.description = description;
        Ok(())
    }

    pub fn additional_context(&self) -> &str {
        &self.additional_context
    }

    pub fn set_additional_context(&mut self, context: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        self.additional_context = context.into();
        Ok(())
    }

    /// Snapshot of the collected data, as sent to the generator.
    pub fn request(&self) -> AnalysisRequest {
        AnalysisRequest {
            profile: self.profile.clone(),
            goals: self.goals.clone(),
            assets: self.assets.clone(),
            debts: self.debts.clone(),
            risk: self.risk.clone(),
            additional_context: self.additional_context.clone(),
        }
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Enter the loading state and return the request to send.
    ///
    /// Only valid from the risk step. Fails with `GenerationInProgress` while a
    /// previous generation has not finished, so at most one call is in flight.
    pub fn begin_generation(&mut self) -> Result<AnalysisRequest> {
        match self.phase {
            WizardPhase::Loading => return Err(Error::GenerationInProgress),
            WizardPhase::Editing(WizardStep::Risk) => {}
            other => {
                return Err(Error::InvalidTransition(format!(
                    "generation can only start from the risk step (current: {:?})",
                    other
                )))
            }
        }

        self.phase = WizardPhase::Loading;
        self.results = None;
        self.active_portfolio = 0;
        self.notification = None;
        self.loading_index.store(0, Ordering::SeqCst);
        self.ticker = LoadingTicker::try_start(
            self.loading_index.clone(),
            LOADING_MESSAGES.len(),
            LOADING_MESSAGE_INTERVAL,
        );

        info!(
            "Starting portfolio generation ({} goals, {} assets, {} debts, risk {})",
            self.goals.len(),
            self.assets.len(),
            self.debts.len(),
            self.risk.label()
        );
        Ok(self.request())
    }

    /// Leave the loading state with the generator's outcome.
    ///
    /// On success the response is stored and the initial portfolio selected.
    /// On failure the wizard returns to the risk step with all entered data
    /// intact and a single user-facing notification is queued.
    pub fn finish_generation(
        &mut self,
        outcome: std::result::Result<AnalysisResponse, GenerationError>,
    ) -> Result<GenerationOutcome> {
        if !self.is_loading() {
            return Err(Error::InvalidTransition(
                "no generation is in progress".to_string(),
            ));
        }

        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }

        match outcome {
            Ok(response) => {
                let active = response.preferred_portfolio_index(self.risk.label().as_str());
                debug!(
                    "Generation completed with {} portfolios, active index {}",
                    response.portfolios.len(),
                    active
                );
                self.results = Some(response);
                self.active_portfolio = active;
                self.phase = WizardPhase::Results;
                Ok(GenerationOutcome::Completed {
                    active_portfolio: active,
                })
            }
            Err(e) => {
                error!("Portfolio generation failed: {}", e);
                self.notification = Some(GENERATION_FAILED_NOTICE.to_string());
                self.phase = WizardPhase::Editing(WizardStep::Risk);
                Ok(GenerationOutcome::Failed(e))
            }
        }
    }

    /// Run one generation with `generator`.
    pub async fn generate<G>(&mut self, generator: &G) -> Result<GenerationOutcome>
    where
        G: AnalysisGeneratorTrait + ?Sized,
    {
        let request = self.begin_generation()?;
        let outcome = generator.generate(&request).await;
        self.finish_generation(outcome)
    }

    /// Loading message to display, while a generation is in flight.
    pub fn loading_message(&self) -> Option<&'static str> {
        if !self.is_loading() {
            return None;
        }
        let index = self.loading_index.load(Ordering::SeqCst) % LOADING_MESSAGES.len();
        Some(LOADING_MESSAGES[index])
    }

    /// Pending user-facing message, cleared once read.
    pub fn take_notification(&mut self) -> Option<String> {
        self.notification.take()
    }

    // ========================================================================
    // Results
    // ========================================================================

    pub fn results(&self) -> Option<&AnalysisResponse> {
        self.results.as_ref()
    }

    pub fn active_portfolio_index(&self) -> Option<usize> {
        self.results.as_ref().map(|_| self.active_portfolio)
    }

    pub fn active_portfolio(&self) -> Option<&Portfolio> {
        self.results
            .as_ref()
            .and_then(|r| r.portfolios.get(self.active_portfolio))
    }

    pub fn select_active_portfolio(&mut self, index: usize) -> Result<()> {
        if self.phase != WizardPhase::Results {
            return Err(Error::NoResults);
        }
        let len = self.results.as_ref().map_or(0, |r| r.portfolios.len());
        if index >= len {
            return Err(Error::PortfolioOutOfRange { index, len });
        }
        self.active_portfolio = index;
        Ok(())
    }
}

fn find_position<T>(
    items: &[T],
    kind: &'static str,
    id: &str,
    key: impl Fn(&T) -> &String,
) -> Result<usize> {
    items
        .iter()
        .position(|item| key(item).as_str() == id)
        .ok_or_else(|| Error::NotFound {
            kind,
            id: id.to_string(),
        })
}
