pub mod amortization;

pub use amortization::{
    compute_schedule, fixed_payment, validate, AmortizationEngine, Schedule,
};
