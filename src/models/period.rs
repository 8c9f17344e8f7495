use crate::utils::date;
use chrono::NaiveDate;
use clap::ValueEnum;

/// Time span used to filter the punch listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Today,
    Week,
    Month,
    All,
}

impl Period {
    /// Whether a record dated `day` belongs to this period, seen from `today`.
    pub fn contains(self, day: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Period::Today => day == today,
            Period::Week => day >= date::week_start(today),
            Period::Month => day >= date::month_start(today),
            Period::All => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
            Period::All => "all",
        }
    }
}
