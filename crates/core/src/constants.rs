use std::time::Duration;

/// Marginal tax rates (TMI) offered by the profile step, in percent.
pub const TAX_BRACKETS: [u8; 5] = [0, 11, 30, 41, 45];

/// Labels of the five input steps, in order.
pub const STEP_LABELS: [&str; 5] = ["Profil", "Objectifs", "Actifs", "Passif", "Risque"];

/// Status lines cycled while a generation is in flight.
pub const LOADING_MESSAGES: [&str; 6] = [
    "Analyse de votre patrimoine net...",
    "Calcul des projections actuarielles à 10 ans...",
    "Sélection des meilleures enveloppes fiscales...",
    "Optimisation de l'allocation d'actifs par l'IA...",
    "Vérification de la faisabilité de vos projets...",
    "Finalisation de votre audit personnalisé...",
];

/// Period between two loading messages
pub const LOADING_MESSAGE_INTERVAL: Duration = Duration::from_millis(3500);

/// Message shown when a generation fails, whatever the cause.
pub const GENERATION_FAILED_NOTICE: &str = "Erreur de génération. Veuillez réessayer.";

/// Placeholder sent to the model when the client gave no extra context.
pub const EMPTY_CONTEXT_PLACEHOLDER: &str = "Aucune contrainte particulière signalée par le client.";

/// Projection horizon used by the compound-growth formula, in years.
pub const PROJECTION_YEARS: i32 = 10;

/// Number of portfolios the model must return.
pub const PORTFOLIO_COUNT: usize = 3;

/// Index selected when no portfolio name matches the client's risk label.
pub const FALLBACK_PORTFOLIO_INDEX: usize = 1;

// Session defaults
pub const DEFAULT_AGE: u32 = 40;
pub const DEFAULT_TAX_BRACKET: u8 = 30;
pub const DEFAULT_MONTHLY_INCOME: f64 = 5000.0;
pub const DEFAULT_MONTHLY_SAVINGS: f64 = 1000.0;
pub const DEFAULT_RISK_SCORE: u8 = 5;
pub const DEFAULT_GOAL_HORIZON: u32 = 10;
pub const DEFAULT_GOAL_TARGET: f64 = 100_000.0;
pub const DEFAULT_DEBT_INTEREST_RATE: f64 = 1.5;
