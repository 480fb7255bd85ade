//! Goals module - life goals and their predefined templates.

mod goals_model;

pub use goals_model::{GoalTemplate, GoalUpdate, LifeGoal, PREDEFINED_GOALS};
