use serde::{Deserialize, Serialize};
use std::fmt;

/// months per year; schedules are always monthly
pub const PERIODS_PER_YEAR: u32 = 12;

/// input fields of a calculation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanField {
    Principal,
    AnnualRatePercent,
    TenureYears,
}

impl LoanField {
    pub const ALL: [LoanField; 3] = [
        LoanField::Principal,
        LoanField::AnnualRatePercent,
        LoanField::TenureYears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanField::Principal => "principal",
            LoanField::AnnualRatePercent => "annual_rate_percent",
            LoanField::TenureYears => "tenure_years",
        }
    }
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// loan parameters for a single calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: f64,
    /// nominal annual rate as a percentage (7.5 means 7.5%)
    pub annual_rate_percent: f64,
    pub tenure_years: f64,
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate_percent: f64, tenure_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_years,
        }
    }

    /// monthly interest rate as a fraction
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / PERIODS_PER_YEAR as f64
    }

    /// number of monthly periods, rounded to the nearest whole month
    pub fn periods(&self) -> u32 {
        let months = (self.tenure_years * PERIODS_PER_YEAR as f64).round();
        if months.is_finite() && months > 0.0 {
            months as u32
        } else {
            0
        }
    }
}

/// raw text as typed into the calculator form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLoanInput {
    pub loan_amount: String,
    pub interest_rate: String,
    pub loan_tenure: String,
}

impl RawLoanInput {
    pub fn new(
        loan_amount: impl Into<String>,
        interest_rate: impl Into<String>,
        loan_tenure: impl Into<String>,
    ) -> Self {
        Self {
            loan_amount: loan_amount.into(),
            interest_rate: interest_rate.into(),
            loan_tenure: loan_tenure.into(),
        }
    }
}

/// one monthly payment in a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// 1-based
    pub period_index: u32,
    pub payment_amount: f64,
    pub principal_component: f64,
    pub interest_component: f64,
    pub remaining_balance: f64,
}

impl PaymentRecord {
    pub fn is_finite(&self) -> bool {
        self.payment_amount.is_finite()
            && self.principal_component.is_finite()
            && self.interest_component.is_finite()
            && self.remaining_balance.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate_and_periods() {
        let params = LoanParameters::new(500_000.0, 7.5, 20.0);
        assert!((params.monthly_rate() - 0.00625).abs() < 1e-15);
        assert_eq!(params.periods(), 240);
    }

    #[test]
    fn test_fractional_tenure_rounds_to_nearest_month() {
        assert_eq!(LoanParameters::new(1_000.0, 5.0, 1.5).periods(), 18);
        assert_eq!(LoanParameters::new(1_000.0, 5.0, 0.04).periods(), 0);
        assert_eq!(LoanParameters::new(1_000.0, 5.0, 0.05).periods(), 1);
        assert_eq!(LoanParameters::new(1_000.0, 5.0, f64::NAN).periods(), 0);
    }

    #[test]
    fn test_field_names() {
        let names: Vec<&str> = LoanField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["principal", "annual_rate_percent", "tenure_years"]);
        assert_eq!(
            serde_json::to_string(&LoanField::TenureYears).unwrap(),
            "\"tenure_years\""
        );
    }
}
