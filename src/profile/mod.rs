//! User profile capture: typed profile model and form aggregation.

pub mod form;
pub mod model;

pub use form::{FieldKind, ProfileForm, field_kind};
pub use model::{
    FinancialGoal, InvestmentExperience, JobCategory, KnowledgeLevel, MaritalStatus, UserProfile,
};
