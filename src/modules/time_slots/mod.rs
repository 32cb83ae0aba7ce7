pub mod service;

pub use service::TimeSlotService;
