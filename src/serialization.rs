//! display projection of a schedule for tables and export collaborators
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{AmortizeError, Result};
use crate::payments::{AmortizationEngine, Schedule};
use crate::types::LoanParameters;

/// one display row, amounts rounded for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    pub emi: Money,
    pub principal: Money,
    pub interest: Money,
    pub balance: Money,
}

/// serializable view of a computed schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleView {
    pub parameters: LoanParameters,
    pub periods: u32,
    pub emi: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    pub rows: Vec<ScheduleRow>,
}

impl ScheduleView {
    /// round every amount to `scale` places; with a first payment date each row is dated monthly
    pub fn from_schedule(
        schedule: &Schedule,
        scale: u32,
        first_payment: Option<NaiveDate>,
    ) -> Result<Self> {
        let rows = schedule
            .iter()
            .map(|record| -> Result<ScheduleRow> {
                let payment_date = first_payment
                    .map(|start| nth_payment_date(start, record.period_index))
                    .transpose()?;
                Ok(ScheduleRow {
                    month: record.period_index,
                    payment_date,
                    emi: Money::from_f64(record.payment_amount, scale)?,
                    principal: Money::from_f64(record.principal_component, scale)?,
                    interest: Money::from_f64(record.interest_component, scale)?,
                    balance: Money::from_f64(record.remaining_balance, scale)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ScheduleView {
            parameters: schedule.parameters,
            periods: rows.len() as u32,
            emi: Money::from_f64(schedule.payment_amount, scale)?,
            total_interest: Money::from_f64(schedule.total_interest(), scale)?,
            total_payment: Money::from_f64(schedule.total_payment(), scale)?,
            rows,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl AmortizationEngine {
    /// project a schedule using the configured display scale
    pub fn view(&self, schedule: &Schedule, first_payment: Option<NaiveDate>) -> Result<ScheduleView> {
        ScheduleView::from_schedule(schedule, self.config().display_scale, first_payment)
    }
}

fn nth_payment_date(first_payment: NaiveDate, period_index: u32) -> Result<NaiveDate> {
    first_payment
        .checked_add_months(Months::new(period_index.saturating_sub(1)))
        .ok_or_else(|| AmortizeError::InvalidDate {
            message: format!("payment {period_index} falls outside the supported calendar"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::compute_schedule;
    use rust_decimal_macros::dec;

    fn one_year() -> Schedule {
        compute_schedule(&LoanParameters::new(100_000.0, 10.0, 1.0)).unwrap()
    }

    #[test]
    fn test_rows_are_rounded() {
        let schedule = one_year();
        let view = AmortizationEngine::default().view(&schedule, None).unwrap();

        assert_eq!(view.periods, 12);
        assert_eq!(view.emi.as_decimal(), dec!(8791.59));
        assert_eq!(view.rows[0].interest.as_decimal(), dec!(833.33));
        assert_eq!(view.rows[0].principal.as_decimal(), dec!(7958.26));
        assert_eq!(view.rows[11].balance.to_string(), "0.00");
        assert!(view.rows.iter().all(|row| row.payment_date.is_none()));
    }

    #[test]
    fn test_projection_leaves_schedule_unrounded() {
        let schedule = one_year();
        let before = schedule.clone();
        let _ = ScheduleView::from_schedule(&schedule, 0, None).unwrap();
        assert_eq!(schedule, before);
        assert!(schedule.payment_amount.fract() != 0.0);
    }

    #[test]
    fn test_monthly_payment_dates() {
        let schedule = one_year();
        let first = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let view = ScheduleView::from_schedule(&schedule, 2, Some(first)).unwrap();

        assert_eq!(view.rows[0].payment_date, Some(first));
        assert_eq!(view.rows[1].payment_date, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(view.rows[11].payment_date, NaiveDate::from_ymd_opt(2024, 12, 31));
    }

    #[test]
    fn test_json_output() {
        let schedule = one_year();
        let view = AmortizationEngine::default().view(&schedule, None).unwrap();
        let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();

        assert_eq!(json["emi"], "8791.59");
        assert_eq!(json["rows"].as_array().unwrap().len(), 12);
        assert_eq!(json["rows"][0]["month"], 1);
        assert!(json["rows"][0].get("payment_date").is_none());
        assert!(view.to_json_pretty().unwrap().contains('\n'));
    }
}
