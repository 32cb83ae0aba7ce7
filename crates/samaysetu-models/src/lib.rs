//! # SamaySetu Models
//!
//! Domain models and request payloads for the SamaySetu client.
//!
//! Each resource module pairs the record the backend returns with a form
//! (what the user typed), the payload built from it after validation, and
//! where the screens need one, a list filter.
//!
//! # Modules
//!
//! - [`auth`]: Login, registration and password-reset forms
//! - [`departments`], [`courses`], [`rooms`], [`divisions`],
//!   [`academic_years`], [`time_slots`]: Admin-managed resources
//! - [`teachers`]: Staff records, approvals and the teacher's own profile
//! - [`timetable`]: Timetable entries and the weekly grid
//! - [`dashboard`]: Admin dashboard counters
//! - [`ids`], [`value_types`]: Typed ids and validated values
//!
//! # Example
//!
//! ```ignore
//! use samaysetu_models::rooms::RoomForm;
//!
//! let payload = RoomForm {
//!     name: "Seminar Hall".into(),
//!     room_number: "h202".into(),
//!     capacity: Some(60),
//!     department_id: Some(1.into()),
//!     ..Default::default()
//! }
//! .into_payload()?;
//! assert_eq!(payload.building_wing, "H");
//! ```

mod forms;

pub mod academic_years;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod departments;
pub mod divisions;
pub mod ids;
pub mod rooms;
pub mod teachers;
pub mod time_slots;
pub mod timetable;
pub mod value_types;

pub use academic_years::{AcademicYear, AcademicYearForm, AcademicYearPayload, default_academic_year};
pub use auth::{
    ForgotPasswordForm, ForgotPasswordRequest, LoginForm, LoginRequest, LoginResponse,
    RegisterForm, RegisterPayload, ResetPasswordForm, ResetPasswordRequest,
    display_name_from_email, email_local_part,
};
pub use courses::{Course, CourseFilter, CourseForm, CoursePayload, CourseType, Semester};
pub use dashboard::{DashboardLists, DashboardStats};
pub use departments::{Department, DepartmentForm, DepartmentPayload};
pub use divisions::{Division, DivisionFilter, DivisionForm, DivisionPayload, year_label};
pub use forms::minutes_between;
pub use ids::{
    AcademicYearId, CourseId, DepartmentId, DivisionId, RoomId, TeacherId, TimeSlotId,
    TimetableEntryId,
};
pub use rooms::{Room, RoomFilter, RoomForm, RoomPayload, RoomType, apply_wing, distinct_wings, infer_wing};
pub use teachers::{
    DEFAULT_REJECTION_REASON, PasswordChangeForm, ProfileForm, ProfilePayload, StaffFilter,
    Teacher, TeacherForm, TeacherPayload, TeacherRole, approved_teachers, parse_weekly_hours,
};
pub use time_slots::{TimeSlot, TimeSlotForm, TimeSlotPayload, format_time_12h};
pub use timetable::{DayOfWeek, ManualEntryForm, ManualTimetableRequest, TimetableEntry, WeeklyGrid};
pub use value_types::{IdRef, RoomNumber};
