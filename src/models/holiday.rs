//! Holiday model and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RegionId;

/// The kind of holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    /// A national public holiday.
    Public,
    /// A regional anniversary day, observed only in the listed regions.
    Regional,
    /// A school holiday day. Nationwide by convention.
    School,
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayType::Public => write!(f, "Public"),
            HolidayType::Regional => write!(f, "Regional"),
            HolidayType::School => write!(f, "School"),
        }
    }
}

/// A single holiday occurrence.
///
/// One instance exists per occurrence per year; a school break is one
/// instance per calendar day of the break. Instances are immutable once
/// built, and the constructors enforce the region invariant: public and
/// school holidays carry no regions, regional holidays always carry at
/// least one.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::models::{Holiday, HolidayType, RegionId};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 24).unwrap();
/// let otago = Holiday::regional("otago-ann-2025", "Otago Anniversary", date, &[RegionId::Otago]);
/// assert_eq!(otago.kind(), HolidayType::Regional);
/// assert_eq!(otago.region_ids(), Some(&[RegionId::Otago][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    id: String,
    name: String,
    date: NaiveDate,
    #[serde(rename = "type")]
    kind: HolidayType,
    #[serde(skip_serializing_if = "Option::is_none")]
    region_ids: Option<Vec<RegionId>>,
}

impl Holiday {
    /// Creates a national public holiday.
    pub fn public(id: impl Into<String>, name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            kind: HolidayType::Public,
            region_ids: None,
        }
    }

    /// Creates a regional holiday observed in `regions`.
    ///
    /// `regions` must not be empty.
    pub fn regional(
        id: impl Into<String>,
        name: impl Into<String>,
        date: NaiveDate,
        regions: &[RegionId],
    ) -> Self {
        debug_assert!(!regions.is_empty(), "regional holiday without regions");
        Self {
            id: id.into(),
            name: name.into(),
            date,
            kind: HolidayType::Regional,
            region_ids: Some(regions.to_vec()),
        }
    }

    /// Creates a single school holiday day.
    pub fn school(id: impl Into<String>, name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            kind: HolidayType::School,
            region_ids: None,
        }
    }

    /// Identifier, unique within one year's holidays.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The observed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The holiday type.
    pub fn kind(&self) -> HolidayType {
        self.kind
    }

    /// Regions observing the holiday, or `None` when it applies nationwide.
    pub fn region_ids(&self) -> Option<&[RegionId]> {
        self.region_ids.as_deref()
    }
}
