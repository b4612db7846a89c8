//! Profile form aggregation.
//!
//! Turns the ordered field/value entries of a submitted form into a typed
//! [`UserProfile`]. Which fields aggregate as tag sets (instead of
//! last-write-wins scalars) is declared in [`field_kind`], not inferred at
//! runtime.

use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

use crate::error::FormError;
use crate::profile::model::{
    FinancialGoal, InvestmentExperience, JobCategory, KnowledgeLevel, MaritalStatus, UserProfile,
};

/// Valid credit score range (inclusive).
const CREDIT_SCORE_RANGE: std::ops::RangeInclusive<u32> = 0..=1000;

/// How a form field aggregates when it appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// At most one value; a repeat overwrites.
    Scalar,
    /// Repeat entries accumulate into a set of tags.
    Tags,
}

/// Declarative field schema.
pub fn field_kind(name: &str) -> FieldKind {
    match name {
        "job" | "financial_goals" | "investment_experience" => FieldKind::Tags,
        _ => FieldKind::Scalar,
    }
}

/// A submitted profile form: the generic ordered entry list plus the job
/// multi-select control's own selection.
///
/// The job selection is read from the control directly because list-type
/// multi-selects are not guaranteed to surface through the generic entry
/// enumeration in every environment. When present it overrides whatever the
/// entry walk collected for `job`; this is a cross-checked fallback, not
/// redundancy.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    entries: Vec<(String, String)>,
    job_selection: Option<Vec<String>>,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one field/value entry, in submission order.
    pub fn push_entry(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Record the job multi-select's selected values, read off the control.
    pub fn set_job_selection(&mut self, values: Vec<String>) {
        self.job_selection = Some(values);
    }

    /// Aggregate the entries into a typed profile.
    pub fn aggregate(&self) -> Result<UserProfile, FormError> {
        let mut scalars: HashMap<&str, &str> = HashMap::new();
        let mut tags: HashMap<&str, Vec<&str>> = HashMap::new();

        for (name, value) in &self.entries {
            match field_kind(name) {
                FieldKind::Scalar => {
                    scalars.insert(name, value);
                }
                FieldKind::Tags => {
                    tags.entry(name).or_default().push(value);
                }
            }
        }

        // Direct control read wins over the generic entry walk.
        if let Some(selection) = &self.job_selection {
            tags.insert("job", selection.iter().map(String::as_str).collect());
        }

        let credit_score = parse_u32(&scalars, "credit_score")?;
        if !CREDIT_SCORE_RANGE.contains(&credit_score) {
            return Err(FormError::CreditScoreOutOfRange(credit_score));
        }

        Ok(UserProfile {
            age: parse_u32(&scalars, "age")?,
            income: parse_u64(&scalars, "income")?,
            region: require(&scalars, "region")?.to_string(),
            marital: parse_value(&scalars, "marital")?,
            children: parse_flag(&scalars, "children")?,
            job: parse_tags(&tags, "job")?,
            main_bank: require(&scalars, "main_bank")?.to_string(),
            credit_score,
            financial_knowledge: parse_value(&scalars, "financial_knowledge")?,
            financial_goals: parse_tags(&tags, "financial_goals")?,
            investment_experience: parse_tags(&tags, "investment_experience")?,
            real_estate_owned: parse_flag(&scalars, "real_estate_owned")?,
            real_estate_assets: parse_optional_u64(&scalars, "real_estate_assets")?,
            car_assets: parse_optional_u64(&scalars, "car_assets")?,
            other_assets: parse_optional_u64(&scalars, "other_assets")?,
        })
    }
}

fn require<'a>(
    scalars: &HashMap<&str, &'a str>,
    field: &'static str,
) -> Result<&'a str, FormError> {
    match scalars.get(field).copied() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(FormError::MissingField(field)),
    }
}

fn parse_u32(scalars: &HashMap<&str, &str>, field: &'static str) -> Result<u32, FormError> {
    let value = require(scalars, field)?;
    value.parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_u64(scalars: &HashMap<&str, &str>, field: &'static str) -> Result<u64, FormError> {
    let value = require(scalars, field)?;
    value.parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Empty or absent optional numeric inputs become `None` (a blank number
/// input submits an empty string).
fn parse_optional_u64(
    scalars: &HashMap<&str, &str>,
    field: &'static str,
) -> Result<Option<u64>, FormError> {
    match scalars.get(field) {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| FormError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_flag(scalars: &HashMap<&str, &str>, field: &'static str) -> Result<bool, FormError> {
    match require(scalars, field)? {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(FormError::UnknownValue {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

fn parse_value<T: FromStr<Err = ()>>(
    scalars: &HashMap<&str, &str>,
    field: &'static str,
) -> Result<T, FormError> {
    let value = require(scalars, field)?;
    value.parse().map_err(|_| FormError::UnknownValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn parse_tags<T>(tags: &HashMap<&str, Vec<&str>>, field: &'static str) -> Result<BTreeSet<T>, FormError>
where
    T: FromStr<Err = ()> + Ord,
{
    let values = tags.get(field).map(Vec::as_slice).unwrap_or_default();
    values
        .iter()
        .map(|value| {
            value.parse().map_err(|_| FormError::UnknownValue {
                field: field.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}
