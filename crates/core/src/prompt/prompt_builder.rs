//! Instruction payload for the portfolio generation call.
//!
//! The builder is pure: the same request and options always render the same
//! text. Figures that the model must reuse (net wealth, annual savings) are
//! written as literal numbers inside the projection formula.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::AnalysisRequest;
use crate::constants::{EMPTY_CONTEXT_PLACEHOLDER, PORTFOLIO_COUNT, PROJECTION_YEARS};
use crate::prompt::schema::analysis_response_schema;
use crate::prompt::FinancialSummary;
use crate::risk::RiskLabel;
use crate::utils::format_amount;

// ============================================================================
// Options
// ============================================================================

/// Return and volatility range expected for one risk tier, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBand {
    pub label: RiskLabel,
    pub min_return: f64,
    pub max_return: f64,
    pub min_volatility: f64,
    pub max_volatility: f64,
}

impl TierBand {
    pub fn new(
        label: RiskLabel,
        (min_return, max_return): (f64, f64),
        (min_volatility, max_volatility): (f64, f64),
    ) -> Self {
        Self {
            label,
            min_return,
            max_return,
            min_volatility,
            max_volatility,
        }
    }
}

/// Knobs of the prompt builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptOptions {
    /// One band per tier, written into the payload in this order.
    pub tier_bands: Vec<TierBand>,
    /// Sent instead of a blank free-text context.
    pub empty_context_placeholder: String,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            tier_bands: vec![
                TierBand::new(RiskLabel::Prudent, (2.0, 4.0), (3.0, 6.0)),
                TierBand::new(RiskLabel::Equilibre, (4.0, 6.0), (7.0, 11.0)),
                TierBand::new(RiskLabel::Dynamique, (6.0, 9.0), (12.0, 18.0)),
            ],
            empty_context_placeholder: EMPTY_CONTEXT_PLACEHOLDER.to_string(),
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Rendered prompt ready to be sent to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisPrompt {
    pub text: String,
    pub schema: Value,
    pub summary: FinancialSummary,
}

#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    options: PromptOptions,
}

impl PromptBuilder {
    pub fn new(options: PromptOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PromptOptions {
        &self.options
    }

    /// Render the instruction text and schema for `request`.
    pub fn build(&self, request: &AnalysisRequest) -> AnalysisPrompt {
        let summary = FinancialSummary::compute(&request.profile, &request.assets, &request.debts);

        let parts = vec![
            INTRODUCTION.to_string(),
            self.profile_section(request, &summary),
            self.patrimony_section(request),
            self.goals_section(request),
            self.context_section(request),
            self.mission_section(),
            self.bands_section(),
            self.formula_section(&summary),
            UNITS_SECTION.to_string(),
            TONE_SECTION.to_string(),
            OUTPUT_SECTION.to_string(),
        ];

        AnalysisPrompt {
            text: parts.join("\n\n"),
            schema: analysis_response_schema(),
            summary,
        }
    }

    fn profile_section(&self, request: &AnalysisRequest, summary: &FinancialSummary) -> String {
        let profile = &request.profile;
        let mut lines = vec!["### PROFIL CLIENT".to_string()];
        lines.push(format!(
            "- Investisseur : {} ({} ans)",
            display_or(&profile.first_name, "Client"),
            profile.age
        ));
        if !profile.profession.trim().is_empty() {
            lines.push(format!("- Profession : {}", profile.profession.trim()));
        }
        lines.push(format!(
            "- Revenus mensuels : {} €",
            format_amount(profile.monthly_income)
        ));
        lines.push(format!(
            "- Capital actuel total : {} €",
            format_amount(summary.total_current_capital)
        ));
        lines.push(format!(
            "- Dettes restant dues : {} €",
            format_amount(summary.total_remaining_debt)
        ));
        lines.push(format!(
            "- Patrimoine Net Actuel : {} €",
            format_amount(summary.net_wealth)
        ));
        lines.push(format!(
            "- Capacité d'Épargne Annuelle : {} €",
            format_amount(summary.annual_savings)
        ));
        lines.push(format!(
            "- Profil de Risque Cible : {} (Niveau {}/10)",
            request.risk.label(),
            request.risk.score()
        ));
        lines.push(format!("- TMI : {}", profile.tax_bracket));
        lines.join("\n")
    }

    fn patrimony_section(&self, request: &AnalysisRequest) -> String {
        let mut lines = vec!["### PATRIMOINE DÉTAILLÉ".to_string()];

        if request.assets.is_empty() {
            lines.push("- Actifs : aucun actif déclaré".to_string());
        } else {
            lines.push("Actifs :".to_string());
            for asset in &request.assets {
                let mut line = format!("- {} : {} €", asset.category, format_amount(asset.value));
                if !asset.description.trim().is_empty() {
                    line.push_str(&format!(" ({})", asset.description.trim()));
                }
                lines.push(line);
            }
        }

        if request.debts.is_empty() {
            lines.push("- Passif : aucun crédit en cours".to_string());
        } else {
            lines.push("Passif :".to_string());
            for debt in &request.debts {
                lines.push(format!(
                    "- {} : capital restant {} €, mensualité {} €, taux {} %",
                    debt.category,
                    format_amount(debt.remaining_capital),
                    format_amount(debt.monthly_payment),
                    debt.interest_rate
                ));
            }
        }

        lines.join("\n")
    }

    fn goals_section(&self, request: &AnalysisRequest) -> String {
        let mut lines = vec!["### OBJECTIFS DE VIE".to_string()];
        if request.goals.is_empty() {
            lines.push("- Aucun objectif de vie renseigné.".to_string());
        }
        for goal in &request.goals {
            lines.push(format!(
                "- {} : Cible {} € à horizon {} ans",
                display_or(&goal.title, "Objectif sans titre"),
                format_amount(goal.target_amount),
                goal.horizon
            ));
        }
        lines.join("\n")
    }

    fn context_section(&self, request: &AnalysisRequest) -> String {
        let context = request.additional_context.trim();
        let context = if context.is_empty() {
            self.options.empty_context_placeholder.as_str()
        } else {
            context
        };
        format!("### CONTEXTE ET CONTRAINTES DU CLIENT\n{}", context)
    }

    fn mission_section(&self) -> String {
        let tiers: Vec<&str> = RiskLabel::ALL.iter().map(|l| l.as_str()).collect();
        format!(
            "### VOTRE MISSION\n\
Générez exactement {} portefeuilles distincts, un par profil de risque, dans cet ordre : {}.\n\
Le nom de chaque portefeuille doit contenir le libellé de son profil (ex: \"Portefeuille {}\").\n\
Adoptez une approche de \"Bon Père de Famille\" moderne et sophistiquée.",
            PORTFOLIO_COUNT,
            tiers.join(", "),
            RiskLabel::Equilibre
        )
    }

    fn bands_section(&self) -> String {
        let mut lines = vec![
            "### FOURCHETTES PAR PROFIL".to_string(),
            "Chaque portefeuille doit rester dans la fourchette de son profil afin que les trois propositions soient cohérentes et clairement distinctes :".to_string(),
        ];
        for band in &self.options.tier_bands {
            lines.push(format!(
                "- {} : rendement annuel entre {} % et {} %, volatilité entre {} % et {} %",
                band.label, band.min_return, band.max_return, band.min_volatility, band.max_volatility
            ));
        }
        lines.join("\n")
    }

    fn formula_section(&self, summary: &FinancialSummary) -> String {
        format!(
            "### RÈGLES DE CALCUL CRITIQUES (MATHS)\n\
Pour chaque portefeuille, calculez la valeur projetée à {years} ans (projectedValue10y) selon la formule actuarielle exacte :\n\
V10 = [Capital_Net * (1 + r)^{years}] + [Epargne_Annuelle * (((1 + r)^{years} - 1) / r)]\n\
Où :\n\
- Capital_Net = {net}\n\
- Epargne_Annuelle = {savings}\n\
- r = rendement annuel estimé du portefeuille exprimé en fraction (ex: 0.07 pour 7 %)\n\
Soit, avec ces valeurs : V10 = {net} * (1 + r)^{years} + {savings} * (((1 + r)^{years} - 1) / r)",
            years = PROJECTION_YEARS,
            net = summary.net_wealth,
            savings = summary.annual_savings,
        )
    }
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// Build a prompt with the default options.
pub fn build_prompt(request: &AnalysisRequest) -> AnalysisPrompt {
    PromptBuilder::default().build(request)
}

const INTRODUCTION: &str = "En tant qu'Ingénieur Patrimonial expert pour le cabinet \"L'Ingé Patrimoine\", votre mission est de produire un audit stratégique complet et pédagogique.";

const UNITS_SECTION: &str = "### CONVENTIONS D'UNITÉS\n\
- expectedReturn, volatility et allocation[].percentage sont des pourcentages directs : 7.5 signifie 7,5 % (et non 0.075).\n\
- Dans la formule ci-dessus, r est en revanche une fraction : un expectedReturn de 7.5 correspond à r = 0.075.\n\
- projectedValue10y et les montants sont exprimés en euros.\n\
- Les pourcentages d'allocation d'un portefeuille totalisent 100.";

const TONE_SECTION: &str = "### TON & PÉDAGOGIE\n\
- Utilisez un langage clair, rassurant et professionnel.\n\
- Expliquez simplement pourquoi telle enveloppe (PEA, Assurance-vie, PER) est choisie.\n\
- Pour chaque objectif de vie, indiquez s'il est Atteignable, Partiel ou Difficile avec ce portefeuille.\n\
- Les stratégies doivent être compréhensibles par un néophyte tout en montrant votre expertise.";

const OUTPUT_SECTION: &str = "### STRUCTURE DE RÉPONSE\n\
Retournez UNIQUEMENT un objet JSON respectant le schéma fourni. Pas de texte avant ou après.";
