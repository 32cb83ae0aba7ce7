//! Academic year models and payloads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use samaysetu_core::serde::{deserialize_optional_date, deserialize_optional_timestamp, parse_date};
use samaysetu_core::{ApiError, FieldErrors};

use crate::forms::{finish, is_blank, require};
use crate::ids::AcademicYearId;

/// An academic year such as `2024-25`. Nested references may carry only the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicYear {
    pub id: AcademicYearId,
    #[serde(default)]
    pub year_name: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// The year new divisions default to: the current one, else the first listed.
pub fn default_academic_year(years: &[AcademicYear]) -> Option<&AcademicYear> {
    years.iter().find(|y| y.is_current).or_else(|| years.first())
}

/// Dates are entered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default)]
pub struct AcademicYearForm {
    pub year_name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AcademicYearPayload {
    #[validate(length(max = 20, message = "Year name must be at most 20 characters"))]
    pub year_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_current: bool,
}

impl AcademicYearForm {
    pub fn into_payload(self) -> Result<AcademicYearPayload, ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "yearName", &self.year_name, "Year name is required");
        require(&mut errors, "startDate", &self.start_date, "Start date is required");
        require(&mut errors, "endDate", &self.end_date, "End date is required");

        let start = parse_date(&self.start_date);
        let end = parse_date(&self.end_date);
        if !is_blank(&self.start_date) && start.is_none() {
            errors.add("startDate", "Start date must be a valid date (YYYY-MM-DD)");
        }
        if !is_blank(&self.end_date) && end.is_none() {
            errors.add("endDate", "End date must be a valid date (YYYY-MM-DD)");
        }
        if matches!((start, end), (Some(start), Some(end)) if end <= start) {
            errors.add("endDate", "End date must be after start date");
        }

        finish(errors, || AcademicYearPayload {
            year_name: self.year_name.trim().to_string(),
            start_date: start.unwrap_or_default(),
            end_date: end.unwrap_or_default(),
            is_current: self.is_current,
        })
    }
}

impl From<&AcademicYear> for AcademicYearForm {
    fn from(year: &AcademicYear) -> Self {
        let format = |date: Option<NaiveDate>| {
            date.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        Self {
            year_name: year.year_name.clone(),
            start_date: format(year.start_date),
            end_date: format(year.end_date),
            is_current: year.is_current,
        }
    }
}
