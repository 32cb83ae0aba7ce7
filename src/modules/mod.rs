pub mod academic_years;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod departments;
pub mod divisions;
pub mod rooms;
pub mod teachers;
pub mod time_slots;
pub mod timetable;

pub use self::academic_years::AcademicYearService;
pub use self::auth::AuthService;
pub use self::courses::CourseService;
pub use self::dashboard::DashboardService;
pub use self::departments::DepartmentService;
pub use self::divisions::DivisionService;
pub use self::rooms::RoomService;
pub use self::teachers::TeacherService;
pub use self::time_slots::TimeSlotService;
pub use self::timetable::TimetableService;
