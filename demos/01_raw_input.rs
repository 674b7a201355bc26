//! form input - parse raw text and show every field error at once
use amortize_rs::{AmortizationEngine, AmortizeError, RawLoanInput};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("amortize_rs=debug")),
        )
        .init();

    let engine = AmortizationEngine::default();

    let bad = RawLoanInput::new("", "0", "150");
    match engine.parse_and_validate(&bad) {
        Err(AmortizeError::InvalidParameters { errors }) => {
            for (field, reason) in errors.errors() {
                println!("{field}: {reason}");
            }
        }
        other => println!("unexpected: {other:?}"),
    }

    let good = RawLoanInput::new("1,00,000", "10", "1");
    let params = engine.parse_and_validate(&good)?;
    let schedule = engine.compute_schedule(&params)?;
    println!("{} payments of {:.2}", schedule.len(), schedule.payment_amount);

    Ok(())
}
