//! User profile data model.
//!
//! Option values (`employee`, `growth`, `seoul`, ...) keep their wire
//! spellings because the backend contract depends on them; only the labels
//! shown in the form wizard are free-form.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Job category tags (the form's multi-select control).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    Student,
    Employee,
    SelfEmployed,
    Freelancer,
    Unemployed,
    Other,
}

impl FromStr for JobCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "employee" => Ok(Self::Employee),
            "self_employed" => Ok(Self::SelfEmployed),
            "freelancer" => Ok(Self::Freelancer),
            "unemployed" => Ok(Self::Unemployed),
            "other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
}

impl FromStr for MaritalStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "married" => Ok(Self::Married),
            _ => Err(()),
        }
    }
}

/// Self-reported financial knowledge level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeLevel {
    High,
    Mid,
    Low,
}

impl FromStr for KnowledgeLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "mid" => Ok(Self::Mid),
            "low" => Ok(Self::Low),
            _ => Err(()),
        }
    }
}

/// Financial goal tags (checkbox group).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialGoal {
    Growth,
    Retirement,
    Housing,
    Car,
    Debt,
}

impl FromStr for FinancialGoal {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "growth" => Ok(Self::Growth),
            "retirement" => Ok(Self::Retirement),
            "housing" => Ok(Self::Housing),
            "car" => Ok(Self::Car),
            "debt" => Ok(Self::Debt),
            _ => Err(()),
        }
    }
}

/// Investment experience tags (checkbox group). `None` is a real option
/// ("no experience"), not the absence of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentExperience {
    Deposit,
    Stock,
    Bond,
    Fund,
    Crypto,
    None,
}

impl FromStr for InvestmentExperience {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(Self::Deposit),
            "stock" => Ok(Self::Stock),
            "bond" => Ok(Self::Bond),
            "fund" => Ok(Self::Fund),
            "crypto" => Ok(Self::Crypto),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

/// The aggregated financial/demographic record captured via the profile form.
///
/// Replaced wholesale on each submission and attached verbatim to every
/// outgoing request until overwritten. Tag sets are order-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    /// Annual pre-tax income.
    pub income: u64,
    pub region: String,
    pub marital: MaritalStatus,
    pub children: bool,
    pub job: BTreeSet<JobCategory>,
    pub main_bank: String,
    pub credit_score: u32,
    pub financial_knowledge: KnowledgeLevel,
    pub financial_goals: BTreeSet<FinancialGoal>,
    pub investment_experience: BTreeSet<InvestmentExperience>,
    pub real_estate_owned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_estate_assets: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_assets: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_assets: Option<u64>,
}

impl UserProfile {
    /// A filled-in profile for tests.
    #[cfg(test)]
    pub fn sample() -> Self {
        Self {
            age: 30,
            income: 5000,
            region: "seoul".to_string(),
            marital: MaritalStatus::Single,
            children: false,
            job: [JobCategory::Employee].into_iter().collect(),
            main_bank: "kakao".to_string(),
            credit_score: 700,
            financial_knowledge: KnowledgeLevel::Mid,
            financial_goals: [FinancialGoal::Growth].into_iter().collect(),
            investment_experience: [InvestmentExperience::Deposit, InvestmentExperience::Stock]
                .into_iter()
                .collect(),
            real_estate_owned: false,
            real_estate_assets: None,
            car_assets: Some(2000),
            other_assets: None,
        }
    }
}
