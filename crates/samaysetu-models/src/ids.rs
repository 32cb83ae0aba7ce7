//! Strongly-typed ID newtypes for backend entities.
//!
//! The backend keys every table with a `Long`, so each id wraps an `i64` and
//! serializes as a bare JSON number. Distinct types keep a `CourseId` from
//! being passed where a `RoomId` is expected.
//!
//! # Example
//!
//! ```ignore
//! use samaysetu_models::ids::{CourseId, RoomId};
//!
//! fn delete_course(id: CourseId) { /* ... */ }
//!
//! let course = CourseId::new(7);
//! delete_course(course);      // OK
//! // delete_course(RoomId::new(7)); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for departments.
    DepartmentId
);

define_id!(
    /// Strongly-typed ID for courses.
    CourseId
);

define_id!(
    /// Strongly-typed ID for rooms.
    RoomId
);

define_id!(
    /// Strongly-typed ID for divisions.
    DivisionId
);

define_id!(
    /// Strongly-typed ID for academic years.
    AcademicYearId
);

define_id!(
    /// Strongly-typed ID for time slots.
    TimeSlotId
);

define_id!(
    /// Strongly-typed ID for teachers and admins.
    TeacherId
);

define_id!(
    /// Strongly-typed ID for timetable entries.
    TimetableEntryId
);
