pub mod config;
pub mod decimal;
pub mod errors;
pub mod payments;
pub mod serialization;
pub mod types;
pub mod validation;

// re-export key types
pub use config::EngineConfig;
pub use decimal::Money;
pub use errors::{AmortizeError, Result};
pub use payments::{compute_schedule, fixed_payment, validate, AmortizationEngine, Schedule};
pub use serialization::{ScheduleRow, ScheduleView};
pub use types::{LoanField, LoanParameters, PaymentRecord, RawLoanInput, PERIODS_PER_YEAR};
pub use validation::ValidationResult;

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
