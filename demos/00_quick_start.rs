//! quick start - compute a schedule and print the first few payments
use amortize_rs::{compute_schedule, LoanParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 20 year loan of 500,000 at 7.5%
    let params = LoanParameters::new(500_000.0, 7.5, 20.0);
    let schedule = compute_schedule(&params)?;

    println!("monthly payment: {:.2}", schedule.payment_amount);
    println!("total interest:  {:.2}", schedule.total_interest());

    for record in schedule.iter().take(3) {
        println!(
            "{:>3}  principal {:>10.2}  interest {:>10.2}  balance {:>12.2}",
            record.period_index,
            record.principal_component,
            record.interest_component,
            record.remaining_balance,
        );
    }

    Ok(())
}
