//! Admin dashboard counters.

use serde::Serialize;

use crate::academic_years::AcademicYear;
use crate::courses::Course;
use crate::departments::Department;
use crate::divisions::Division;
use crate::rooms::Room;
use crate::teachers::{Teacher, TeacherRole};
use crate::time_slots::TimeSlot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub teachers: usize,
    pub courses: usize,
    pub departments: usize,
    pub rooms: usize,
    pub divisions: usize,
    pub academic_years: usize,
    pub time_slots: usize,
}

/// The full lists the dashboard counts.
#[derive(Debug, Clone, Default)]
pub struct DashboardLists {
    pub teachers: Vec<Teacher>,
    pub courses: Vec<Course>,
    pub departments: Vec<Department>,
    pub rooms: Vec<Room>,
    pub divisions: Vec<Division>,
    pub academic_years: Vec<AcademicYear>,
    pub time_slots: Vec<TimeSlot>,
}

impl From<&DashboardLists> for DashboardStats {
    /// Only teaching staff count as teachers.
    fn from(lists: &DashboardLists) -> Self {
        Self {
            teachers: lists
                .teachers
                .iter()
                .filter(|t| t.role == TeacherRole::Teacher)
                .count(),
            courses: lists.courses.len(),
            departments: lists.departments.len(),
            rooms: lists.rooms.len(),
            divisions: lists.divisions.len(),
            academic_years: lists.academic_years.len(),
            time_slots: lists.time_slots.len(),
        }
    }
}
