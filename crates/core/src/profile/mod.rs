//! Client profile module - identity, tax bracket and monthly figures.

mod profile_model;

pub use profile_model::{ClientProfile, ProfileUpdate, TaxBracket};
