pub mod service;

pub use service::AcademicYearService;
