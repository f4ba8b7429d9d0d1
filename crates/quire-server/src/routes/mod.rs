pub mod assessments;
pub mod health;
