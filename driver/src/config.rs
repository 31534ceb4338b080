use std::path::PathBuf;

use error_stack::ResultExt;
use kernel::prelude::entity::LoanPeriod;
use kernel::KernelError;
use tracing::debug;

use crate::env;
use crate::error::ConvertError;

static LIBRARY_NAME: &str = "LIBRARY_NAME";
static LIBRARY_LOAN_PERIOD_DAYS: &str = "LIBRARY_LOAN_PERIOD_DAYS";
static LIBRARY_LOG_DIR: &str = "LIBRARY_LOG_DIR";

const DEFAULT_NAME: &str = "Library";
const DEFAULT_LOG_DIR: &str = "./logs/";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LibraryConfig {
    pub name: String,
    pub loan_period: LoanPeriod,
    pub log_dir: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            loan_period: LoanPeriod::default(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl LibraryConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let default = Self::default();
        let name = env(LIBRARY_NAME)?.unwrap_or(default.name);
        let loan_period = match env(LIBRARY_LOAN_PERIOD_DAYS)? {
            Some(days) => parse_loan_period(&days)?,
            None => default.loan_period,
        };
        let log_dir = env(LIBRARY_LOG_DIR)?
            .map(PathBuf::from)
            .unwrap_or(default.log_dir);
        let config = Self {
            name,
            loan_period,
            log_dir,
        };
        debug!("Loaded configuration: {config:?}");
        Ok(config)
    }
}

fn parse_loan_period(days: &str) -> error_stack::Result<LoanPeriod, KernelError> {
    let days = days
        .trim()
        .parse::<i64>()
        .convert_error()
        .attach_printable_lazy(|| format!("{LIBRARY_LOAN_PERIOD_DAYS} is not a number: {days}"))?;
    LoanPeriod::try_new(days)
        .attach_printable_lazy(|| format!("Invalid {LIBRARY_LOAN_PERIOD_DAYS}"))
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::LoanPeriod;
    use kernel::KernelError;

    use crate::config::{parse_loan_period, LibraryConfig};

    #[test]
    fn default_keeps_two_week_loans() {
        let config = LibraryConfig::default();
        assert_eq!(config.loan_period, LoanPeriod::new(14));
        assert_eq!(config.name, "Library");
    }

    #[test]
    fn loan_period_is_parsed() -> error_stack::Result<(), KernelError> {
        assert_eq!(parse_loan_period(" 21 ")?, LoanPeriod::new(21));
        Ok(())
    }

    #[test]
    fn invalid_loan_period_is_rejected() {
        let report = parse_loan_period("fortnight").unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Internal);
        assert!(parse_loan_period("-1").is_err());
        let report = parse_loan_period("99999999999999999").unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Internal);
    }
}
