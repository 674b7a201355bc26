//! export - render a dated, rounded schedule as json
use amortize_rs::chrono::NaiveDate;
use amortize_rs::{AmortizationEngine, EngineConfig, LoanParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::from_json(r#"{ "max_tenure_years": 40, "display_scale": 2 }"#)?;
    let engine = AmortizationEngine::new(config)?;

    let schedule = engine.compute_schedule(&LoanParameters::new(100_000.0, 10.0, 1.0))?;
    let first_payment = NaiveDate::from_ymd_opt(2025, 1, 1).ok_or("invalid date")?;
    let view = engine.view(&schedule, Some(first_payment))?;

    println!("{}", view.to_json_pretty()?);

    Ok(())
}
