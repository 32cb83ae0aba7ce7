//! Timetable entries and the weekly grid view.
//!
//! Entries are produced by the backend; the client only reads them, adds
//! manual entries, and lays them out as days by time slots.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use samaysetu_core::serde::deserialize_optional_string;
use samaysetu_core::{ApiError, FieldErrors};

use crate::academic_years::AcademicYear;
use crate::courses::{Course, default_true};
use crate::divisions::Division;
use crate::forms::{finish, non_blank, require_some};
use crate::ids::{
    AcademicYearId, CourseId, DivisionId, RoomId, TeacherId, TimeSlotId, TimetableEntryId,
};
use crate::rooms::Room;
use crate::teachers::Teacher;
use crate::time_slots::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Teaching days shown in the weekly grid.
    pub const TEACHING_DAYS: [DayOfWeek; 6] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }

    /// `Monday`, `Tuesday`, ...
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MONDAY" | "MON" => Ok(Self::Monday),
            "TUESDAY" | "TUE" => Ok(Self::Tuesday),
            "WEDNESDAY" | "WED" => Ok(Self::Wednesday),
            "THURSDAY" | "THU" => Ok(Self::Thursday),
            "FRIDAY" | "FRI" => Ok(Self::Friday),
            "SATURDAY" | "SAT" => Ok(Self::Saturday),
            "SUNDAY" | "SUN" => Ok(Self::Sunday),
            other => Err(format!("Unknown day: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub id: TimetableEntryId,
    pub division: Option<Division>,
    pub teacher: Option<Teacher>,
    pub course: Option<Course>,
    pub room: Option<Room>,
    pub time_slot: Option<TimeSlot>,
    pub academic_year: Option<AcademicYear>,
    pub day_of_week: DayOfWeek,
    #[serde(default = "first_week")]
    pub week_number: i32,
    #[serde(default = "default_true")]
    pub is_recurring: bool,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub notes: Option<String>,
}

fn first_week() -> i32 {
    1
}

/// Form for placing one class by hand.
#[derive(Debug, Clone)]
pub struct ManualEntryForm {
    pub division_id: Option<DivisionId>,
    pub course_id: Option<CourseId>,
    pub teacher_id: Option<TeacherId>,
    pub room_id: Option<RoomId>,
    pub time_slot_id: Option<TimeSlotId>,
    pub academic_year_id: Option<AcademicYearId>,
    pub day_of_week: Option<DayOfWeek>,
    pub week_number: i32,
    pub is_recurring: bool,
    pub notes: Option<String>,
}

impl Default for ManualEntryForm {
    fn default() -> Self {
        Self {
            division_id: None,
            course_id: None,
            teacher_id: None,
            room_id: None,
            time_slot_id: None,
            academic_year_id: None,
            day_of_week: None,
            week_number: first_week(),
            is_recurring: true,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ManualTimetableRequest {
    pub division_id: DivisionId,
    pub course_id: CourseId,
    pub teacher_id: TeacherId,
    pub room_id: RoomId,
    pub time_slot_id: TimeSlotId,
    pub academic_year_id: AcademicYearId,
    pub day_of_week: DayOfWeek,
    #[validate(range(min = 1, message = "Week number must be at least 1"))]
    pub week_number: i32,
    pub is_recurring: bool,
    pub notes: Option<String>,
}

impl ManualEntryForm {
    pub fn into_request(self) -> Result<ManualTimetableRequest, ApiError> {
        let mut errors = FieldErrors::new();
        require_some(&mut errors, "divisionId", &self.division_id, "Division is required");
        require_some(&mut errors, "courseId", &self.course_id, "Course is required");
        require_some(&mut errors, "teacherId", &self.teacher_id, "Teacher is required");
        require_some(&mut errors, "roomId", &self.room_id, "Room is required");
        require_some(&mut errors, "timeSlotId", &self.time_slot_id, "Time slot is required");
        require_some(
            &mut errors,
            "academicYearId",
            &self.academic_year_id,
            "Academic year is required",
        );
        require_some(&mut errors, "dayOfWeek", &self.day_of_week, "Day is required");

        finish(errors, || ManualTimetableRequest {
            division_id: self.division_id.unwrap_or_default(),
            course_id: self.course_id.unwrap_or_default(),
            teacher_id: self.teacher_id.unwrap_or_default(),
            room_id: self.room_id.unwrap_or_default(),
            time_slot_id: self.time_slot_id.unwrap_or_default(),
            academic_year_id: self.academic_year_id.unwrap_or_default(),
            day_of_week: self.day_of_week.unwrap_or(DayOfWeek::Monday),
            week_number: self.week_number,
            is_recurring: self.is_recurring,
            notes: non_blank(self.notes),
        })
    }
}

/// Entries laid out by teaching day and class slot.
///
/// Rows are the non-break slots ordered by start time. An entry lands in the
/// cell whose slot shows the same `HH:MM - HH:MM` range; entries on Sunday or
/// without a matching slot are not shown.
#[derive(Debug, Clone, Default)]
pub struct WeeklyGrid {
    slots: Vec<TimeSlot>,
    cells: HashMap<(DayOfWeek, String), Vec<TimetableEntry>>,
}

impl WeeklyGrid {
    pub fn build(entries: Vec<TimetableEntry>, slots: &[TimeSlot]) -> Self {
        let mut slots: Vec<TimeSlot> = slots.iter().filter(|s| !s.is_break).cloned().collect();
        slots.sort_by_key(|s| s.start_time);

        let mut cells: HashMap<(DayOfWeek, String), Vec<TimetableEntry>> = HashMap::new();
        for entry in entries {
            let Some(label) = entry.time_slot.as_ref().map(TimeSlot::label) else {
                continue;
            };
            if !DayOfWeek::TEACHING_DAYS.contains(&entry.day_of_week)
                || !slots.iter().any(|s| s.label() == label)
            {
                continue;
            }
            cells
                .entry((entry.day_of_week, label))
                .or_default()
                .push(entry);
        }

        Self { slots, cells }
    }

    pub fn days(&self) -> &'static [DayOfWeek] {
        &DayOfWeek::TEACHING_DAYS
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn cell(&self, day: DayOfWeek, slot: &TimeSlot) -> &[TimetableEntry] {
        self.cells
            .get(&(day, slot.label()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of entries placed in the grid.
    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
