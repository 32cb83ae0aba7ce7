use serde::Serialize;
use tracing::instrument;

use samaysetu_core::ApiError;
use samaysetu_models::{
    AcademicYearId, DivisionId, ManualEntryForm, TeacherId, TimetableEntry, WeeklyGrid,
};

use crate::client::ApiClient;
use crate::modules::time_slots::TimeSlotService;

const TIMETABLE_PATH: &str = "/api/timetable";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AcademicYearQuery {
    academic_year_id: AcademicYearId,
}

pub struct TimetableService;

impl TimetableService {
    #[instrument(skip(client))]
    pub async fn for_division(
        client: &ApiClient,
        division_id: DivisionId,
        academic_year_id: AcademicYearId,
    ) -> Result<Vec<TimetableEntry>, ApiError> {
        client
            .get_with_query(
                &format!("{}/division/{}", TIMETABLE_PATH, division_id),
                &AcademicYearQuery { academic_year_id },
            )
            .await
    }

    #[instrument(skip(client))]
    pub async fn for_teacher(
        client: &ApiClient,
        teacher_id: TeacherId,
        academic_year_id: AcademicYearId,
    ) -> Result<Vec<TimetableEntry>, ApiError> {
        client
            .get_with_query(
                &format!("{}/teacher/{}", TIMETABLE_PATH, teacher_id),
                &AcademicYearQuery { academic_year_id },
            )
            .await
    }

    #[instrument(skip(client))]
    pub async fn add_manual_entry(
        client: &ApiClient,
        form: ManualEntryForm,
    ) -> Result<TimetableEntry, ApiError> {
        let request = form.into_request()?;
        client
            .post(&format!("{}/manual", TIMETABLE_PATH), &request)
            .await
    }

    /// Lays `entries` out against the published time slots.
    #[instrument(skip(client, entries), fields(entries = entries.len()))]
    pub async fn weekly_grid(
        client: &ApiClient,
        entries: Vec<TimetableEntry>,
    ) -> Result<WeeklyGrid, ApiError> {
        let slots = TimeSlotService::list_public(client).await?;
        Ok(WeeklyGrid::build(entries, &slots))
    }
}
