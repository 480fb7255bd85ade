//! Patrimony module - assets held and debts owed by the household.

mod assets_model;
mod debts_model;

pub use assets_model::{AssetCategory, AssetUpdate, CurrentAsset};
pub use debts_model::{Debt, DebtCategory, DebtUpdate};
