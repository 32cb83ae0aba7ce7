//! Time slot models and payloads.
//!
//! The backend stores `startTime`/`endTime` as wall-clock times and expects
//! the client to send `durationMinutes` alongside them.

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use samaysetu_core::serde::{
    deserialize_optional_string, deserialize_optional_timestamp, deserialize_time, parse_time,
    serialize_time,
};
use samaysetu_core::{ApiError, FieldErrors};

use crate::courses::default_true;
use crate::forms::{finish, is_blank, minutes_between, require};
use crate::ids::TimeSlotId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: TimeSlotId,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub slot_name: Option<String>,
    #[serde(deserialize_with = "deserialize_time", serialize_with = "serialize_time")]
    pub start_time: NaiveTime,
    #[serde(deserialize_with = "deserialize_time", serialize_with = "serialize_time")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub duration_minutes: i32,
    #[serde(default)]
    pub is_break: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TimeSlot {
    /// `HH:MM - HH:MM`, the key the weekly grid uses for a row.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

/// Formats a time for display as `h:MM AM/PM`.
pub fn format_time_12h(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        time.minute(),
        if pm { "PM" } else { "AM" }
    )
}

/// Times are entered as `HH:MM`.
#[derive(Debug, Clone, Default)]
pub struct TimeSlotForm {
    pub slot_name: String,
    pub start_time: String,
    pub end_time: String,
    pub is_break: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotPayload {
    #[validate(length(max = 50, message = "Slot name must be at most 50 characters"))]
    pub slot_name: String,
    #[serde(serialize_with = "serialize_time")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "serialize_time")]
    pub end_time: NaiveTime,
    pub is_break: bool,
    #[validate(range(min = 1, message = "Duration must be at least 1 minute"))]
    pub duration_minutes: i32,
}

impl TimeSlotForm {
    pub fn into_payload(self) -> Result<TimeSlotPayload, ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "slotName", &self.slot_name, "Slot name is required");
        require(&mut errors, "startTime", &self.start_time, "Start time is required");
        require(&mut errors, "endTime", &self.end_time, "End time is required");

        let start = parse_time(&self.start_time);
        let end = parse_time(&self.end_time);
        if !is_blank(&self.start_time) && start.is_none() {
            errors.add("startTime", "Start time must be in HH:MM format");
        }
        if !is_blank(&self.end_time) && end.is_none() {
            errors.add("endTime", "End time must be in HH:MM format");
        }
        let duration = minutes_between(&self.start_time, &self.end_time);
        if start.is_some() && end.is_some() && duration.is_none_or(|d| d <= 0) {
            errors.add("endTime", "End time must be after start time");
        }

        finish(errors, || TimeSlotPayload {
            slot_name: self.slot_name.trim().to_string(),
            start_time: start.unwrap_or_default(),
            end_time: end.unwrap_or_default(),
            is_break: self.is_break,
            duration_minutes: duration.unwrap_or_default(),
        })
    }
}

impl From<&TimeSlot> for TimeSlotForm {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            slot_name: slot.slot_name.clone().unwrap_or_default(),
            start_time: slot.start_time.format("%H:%M").to_string(),
            end_time: slot.end_time.format("%H:%M").to_string(),
            is_break: slot.is_break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(err: ApiError) -> FieldErrors {
        match err {
            ApiError::Validation(fields) => fields,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_times_without_seconds() {
        let slot: TimeSlot = serde_json::from_value(json!({
            "id": 1,
            "slotName": "Slot 1",
            "startTime": "09:00",
            "endTime": "10:00:00",
            "durationMinutes": 60,
            "isBreak": false
        }))
        .unwrap();
        assert_eq!(slot.label(), "09:00 - 10:00");
        assert!(slot.is_active);
    }

    #[test]
    fn test_format_time_12h() {
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(format_time_12h(at(0, 5)), "12:05 AM");
        assert_eq!(format_time_12h(at(9, 0)), "9:00 AM");
        assert_eq!(format_time_12h(at(12, 30)), "12:30 PM");
        assert_eq!(format_time_12h(at(15, 45)), "3:45 PM");
    }

    #[test]
    fn test_required_fields() {
        let errors = fields(TimeSlotForm::default().into_payload().unwrap_err());
        assert_eq!(errors.get("slotName"), Some("Slot name is required"));
        assert_eq!(errors.get("startTime"), Some("Start time is required"));
        assert_eq!(errors.get("endTime"), Some("End time is required"));
    }

    #[test]
    fn test_end_time_must_follow_start_time() {
        let form = TimeSlotForm {
            slot_name: "Slot 1".into(),
            start_time: "10:00".into(),
            end_time: "09:00".into(),
            is_break: false,
        };
        let errors = fields(form.into_payload().unwrap_err());
        assert_eq!(errors.get("endTime"), Some("End time must be after start time"));
    }

    #[test]
    fn test_payload_carries_duration() {
        let payload = TimeSlotForm {
            slot_name: "Lunch".into(),
            start_time: "12:15".into(),
            end_time: "13:00".into(),
            is_break: true,
        }
        .into_payload()
        .unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "slotName": "Lunch",
                "startTime": "12:15:00",
                "endTime": "13:00:00",
                "isBreak": true,
                "durationMinutes": 45
            })
        );
    }
}
