pub mod engine;
pub mod inputs;
pub mod projection;
pub mod tier;
pub mod validate;

pub use engine::{compute, PlanResults};
pub use inputs::{InputField, PlanInputs};
pub use tier::{motivation_message, Tier};
pub use validate::{validate, InputIssue};
