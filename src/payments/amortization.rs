use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::errors::{AmortizeError, Result};
use crate::types::{LoanParameters, PaymentRecord, RawLoanInput};
use crate::validation::{self, ValidationResult};

/// fixed-payment amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub parameters: LoanParameters,
    pub monthly_rate: f64,
    pub payment_amount: f64,
    pub records: Vec<PaymentRecord>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaymentRecord> {
        self.records.iter()
    }

    /// get payment for a 1-based period
    pub fn get(&self, period_index: u32) -> Option<&PaymentRecord> {
        let index = period_index.checked_sub(1)?;
        self.records.get(index as usize)
    }

    /// remaining balance after a period; before the first payment this is the principal
    pub fn balance_after(&self, period_index: u32) -> f64 {
        self.get(period_index)
            .map(|p| p.remaining_balance)
            .unwrap_or(self.parameters.principal)
    }

    pub fn final_balance(&self) -> f64 {
        self.records
            .last()
            .map(|p| p.remaining_balance)
            .unwrap_or(self.parameters.principal)
    }

    pub fn total_interest(&self) -> f64 {
        self.records.iter().map(|p| p.interest_component).sum()
    }

    pub fn total_payment(&self) -> f64 {
        self.records.iter().map(|p| p.payment_amount).sum()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a PaymentRecord;
    type IntoIter = std::slice::Iter<'a, PaymentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// validates loan parameters and computes schedules; holds no per-call state
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    config: EngineConfig,
}

impl AmortizationEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn validate(&self, params: &LoanParameters) -> ValidationResult {
        validation::validate_with(params, &self.config)
    }

    /// parse form text into parameters; every failing field is reported at once
    pub fn parse_and_validate(&self, raw: &RawLoanInput) -> Result<LoanParameters> {
        validation::parse_with(raw, &self.config).map_err(|errors| {
            warn!(%errors, "rejected loan input");
            AmortizeError::InvalidParameters { errors }
        })
    }

    /// compute the full monthly schedule
    pub fn compute_schedule(&self, params: &LoanParameters) -> Result<Schedule> {
        let errors = self.validate(params);
        if !errors.is_valid() {
            warn!(%errors, "rejected loan parameters");
            return Err(AmortizeError::InvalidParameters { errors });
        }

        let monthly_rate = params.monthly_rate();
        let periods = params.periods();
        let payment_amount = fixed_payment(params.principal, monthly_rate, periods)?;

        let records: Vec<PaymentRecord> = (1..=periods)
            .scan(params.principal, |balance, period_index| {
                let interest_component = *balance * monthly_rate;
                let principal_component = payment_amount - interest_component;
                *balance -= principal_component;
                Some(PaymentRecord {
                    period_index,
                    payment_amount,
                    principal_component,
                    interest_component,
                    remaining_balance: *balance,
                })
            })
            .collect();

        if let Some(bad) = records.iter().find(|p| !p.is_finite()) {
            warn!(period = bad.period_index, "non-finite schedule record");
            return Err(AmortizeError::NumericOverflow {
                quantity: format!("payment record {}", bad.period_index),
            });
        }

        debug!(
            periods,
            payment_amount,
            final_balance = records.last().map(|p| p.remaining_balance),
            "computed amortization schedule"
        );

        Ok(Schedule {
            parameters: *params,
            monthly_rate,
            payment_amount,
            records,
        })
    }
}

/// validate with the default configuration
pub fn validate(params: &LoanParameters) -> ValidationResult {
    AmortizationEngine::default().validate(params)
}

/// compute a schedule with the default configuration
pub fn compute_schedule(params: &LoanParameters) -> Result<Schedule> {
    AmortizationEngine::default().compute_schedule(params)
}

/// fixed monthly payment for a positive rate
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), evaluated as P * r / (1 - (1 + r)^-n)
/// through `ln_1p`/`exp_m1` so tiny rates keep full precision
pub fn fixed_payment(principal: f64, monthly_rate: f64, periods: u32) -> Result<f64> {
    let log_compound = periods as f64 * monthly_rate.ln_1p();
    if !log_compound.is_finite() || log_compound > f64::MAX.ln() {
        warn!(monthly_rate, periods, "compound factor overflowed");
        return Err(AmortizeError::NumericOverflow {
            quantity: "compound factor".to_string(),
        });
    }

    // 1 - (1 + r)^-n
    let discount = -(-log_compound).exp_m1();
    let payment = principal * monthly_rate / discount;
    if !payment.is_finite() {
        warn!(principal, monthly_rate, periods, "payment amount is not finite");
        return Err(AmortizeError::NumericOverflow {
            quantity: "payment amount".to_string(),
        });
    }

    Ok(payment)
}
