use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::EngineConfig;
use crate::types::{LoanField, LoanParameters, RawLoanInput};

pub const INVALID_PRINCIPAL: &str = "Please enter a valid loan amount";
pub const INVALID_RATE: &str = "Please enter a valid interest rate";
pub const INVALID_TENURE: &str = "Please enter a valid loan tenure";

/// per-field outcome of validating a request; `None` means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub principal: Option<String>,
    pub annual_rate_percent: Option<String>,
    pub tenure_years: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.principal.is_none() && self.annual_rate_percent.is_none() && self.tenure_years.is_none()
    }

    pub fn reason(&self, field: LoanField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: LoanField, reason: impl Into<String>) {
        *self.slot_mut(field) = Some(reason.into());
    }

    /// failing fields in declaration order
    pub fn errors(&self) -> impl Iterator<Item = (LoanField, &str)> + '_ {
        LoanField::ALL
            .into_iter()
            .filter_map(move |field| self.reason(field).map(|reason| (field, reason)))
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    fn slot(&self, field: LoanField) -> &Option<String> {
        match field {
            LoanField::Principal => &self.principal,
            LoanField::AnnualRatePercent => &self.annual_rate_percent,
            LoanField::TenureYears => &self.tenure_years,
        }
    }

    fn slot_mut(&mut self, field: LoanField) -> &mut Option<String> {
        match field {
            LoanField::Principal => &mut self.principal,
            LoanField::AnnualRatePercent => &mut self.annual_rate_percent,
            LoanField::TenureYears => &mut self.tenure_years,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        for (i, (field, reason)) in self.errors().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {reason}")?;
        }
        Ok(())
    }
}

/// check every field of `params`, collecting all failures
pub fn validate_with(params: &LoanParameters, config: &EngineConfig) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if let Some(reason) = check_principal(params.principal) {
        result.set(LoanField::Principal, reason);
    }
    if let Some(reason) = check_rate(params.annual_rate_percent) {
        result.set(LoanField::AnnualRatePercent, reason);
    }
    if let Some(reason) = check_tenure(params.tenure_years, config) {
        result.set(LoanField::TenureYears, reason);
    }

    result
}

/// parse raw form text and validate it, reporting parse and range failures together
pub fn parse_with(
    raw: &RawLoanInput,
    config: &EngineConfig,
) -> std::result::Result<LoanParameters, ValidationResult> {
    let mut result = ValidationResult::valid();

    let principal = parse_amount(&raw.loan_amount);
    let rate = parse_rate(&raw.interest_rate);
    let tenure = parse_tenure(&raw.loan_tenure);

    match principal {
        Some(value) => {
            if let Some(reason) = check_principal(value) {
                result.set(LoanField::Principal, reason);
            }
        }
        None => result.set(LoanField::Principal, INVALID_PRINCIPAL),
    }
    match rate {
        Some(value) => {
            if let Some(reason) = check_rate(value) {
                result.set(LoanField::AnnualRatePercent, reason);
            }
        }
        None => result.set(LoanField::AnnualRatePercent, INVALID_RATE),
    }
    match tenure {
        Some(value) => {
            if let Some(reason) = check_tenure(value, config) {
                result.set(LoanField::TenureYears, reason);
            }
        }
        None => result.set(LoanField::TenureYears, INVALID_TENURE),
    }

    match (principal, rate, tenure) {
        (Some(p), Some(r), Some(t)) if result.is_valid() => Ok(LoanParameters::new(p, r, t)),
        _ => Err(result),
    }
}

fn check_principal(principal: f64) -> Option<String> {
    if principal.is_finite() && principal > 0.0 {
        None
    } else {
        Some(INVALID_PRINCIPAL.to_string())
    }
}

fn check_rate(rate: f64) -> Option<String> {
    if rate.is_finite() && rate > 0.0 {
        None
    } else {
        Some(INVALID_RATE.to_string())
    }
}

fn check_tenure(tenure: f64, config: &EngineConfig) -> Option<String> {
    if tenure >= config.max_tenure_years {
        return Some(tenure_limit_message(config.max_tenure_years));
    }
    if !(tenure.is_finite() && tenure > 0.0) {
        return Some(INVALID_TENURE.to_string());
    }
    // must cover at least one monthly period
    if LoanParameters::new(1.0, 1.0, tenure).periods() == 0 {
        return Some(INVALID_TENURE.to_string());
    }
    None
}

pub fn tenure_limit_message(limit: f64) -> String {
    format!("Loan tenure over {limit}? Time travel not supported.")
}

/// digits only, after dropping grouping commas, spaces and the ruble sign
fn parse_amount(text: &str) -> Option<f64> {
    let normalized: String = text
        .chars()
        .filter(|c| *c != ',' && *c != '₽' && !c.is_whitespace())
        .collect();
    if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    normalized.parse().ok()
}

/// digits with at most one decimal point
fn parse_rate(text: &str) -> Option<f64> {
    let text = text.trim();
    let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
    let points = text.chars().filter(|c| *c == '.').count();
    if digits == 0 || points > 1 || digits + points != text.chars().count() {
        return None;
    }
    text.parse().ok()
}

/// whole years only
fn parse_tenure(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
