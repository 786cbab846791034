//! Prompt templates for the AI tasks.

pub mod chat;
pub mod generate;
pub mod meal_plan;
pub mod suggest;
