use super::{origin::Origin, punch_kind::PunchKind};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A single punch, as stored in the ledger blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchRecord {
    pub id: i64,
    #[serde(with = "day_month_year")]
    pub date: NaiveDate, // "dd/mm/yyyy"
    #[serde(with = "hour_minute_second")]
    pub time: NaiveTime, // "HH:MM:SS"
    pub kind: PunchKind,
    // records written before origins were tracked count as manual
    #[serde(default)]
    pub origin: Origin,
}

impl PunchRecord {
    pub fn new(id: i64, at: DateTime<Local>, kind: PunchKind, origin: Origin) -> Self {
        Self {
            id,
            date: at.date_naive(),
            time: at.time().with_nanosecond(0).unwrap_or_else(|| at.time()),
            kind,
            origin,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    /// One-line summary used for the "last punch" display.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}) on {} at {}",
            self.kind.label(),
            self.origin.as_str(),
            self.date_str(),
            self.time_str()
        )
    }
}

mod day_month_year {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(D::Error::custom)
    }
}

mod hour_minute_second {
    use super::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(D::Error::custom)
    }
}
