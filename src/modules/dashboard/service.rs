use tracing::instrument;

use samaysetu_core::ApiError;
use samaysetu_models::{DashboardLists, DashboardStats};

use crate::client::ApiClient;
use crate::modules::academic_years::AcademicYearService;
use crate::modules::courses::CourseService;
use crate::modules::departments::DepartmentService;
use crate::modules::divisions::DivisionService;
use crate::modules::rooms::RoomService;
use crate::modules::teachers::TeacherService;
use crate::modules::time_slots::TimeSlotService;

pub const STATS_FAILED: &str = "Failed to fetch statistics";

pub struct DashboardService;

impl DashboardService {
    /// Fetches the seven lists at once; any failure fails the whole fetch.
    #[instrument(skip(client))]
    pub async fn lists(client: &ApiClient) -> Result<DashboardLists, ApiError> {
        let (teachers, courses, departments, rooms, divisions, academic_years, time_slots) = tokio::try_join!(
            TeacherService::list(client),
            CourseService::list(client),
            DepartmentService::list(client),
            RoomService::list(client),
            DivisionService::list(client),
            AcademicYearService::list(client),
            TimeSlotService::list(client),
        )?;

        Ok(DashboardLists {
            teachers,
            courses,
            departments,
            rooms,
            divisions,
            academic_years,
            time_slots,
        })
    }

    #[instrument(skip(client))]
    pub async fn stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
        let lists = Self::lists(client).await?;
        Ok(DashboardStats::from(&lists))
    }
}
