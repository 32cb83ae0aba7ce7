use samaysetu_core::message_or;
use samaysetu_models::{
    AcademicYearId, DayOfWeek, DivisionId, ManualEntryForm, TeacherId, default_academic_year,
};

use crate::cli::catalogue::pick_academic_year;
use crate::cli::{TimetableCommand, output, prompt, report, report_with};
use crate::modules::dashboard::STATS_FAILED;
use crate::modules::{
    AcademicYearService, CourseService, DashboardService, DivisionService, RoomService,
    TeacherService, TimeSlotService, TimetableService,
};
use crate::state::AppState;

pub async fn dashboard(state: &AppState) -> anyhow::Result<()> {
    let stats = DashboardService::stats(&state.client)
        .await
        .map_err(|e| report_with(e, |e| message_or(e, STATS_FAILED)))?;
    output::dashboard(&stats);
    Ok(())
}

/// The given academic year, else the current one.
async fn academic_year_or_current(
    state: &AppState,
    id: Option<i64>,
) -> anyhow::Result<AcademicYearId> {
    if let Some(id) = id {
        return Ok(AcademicYearId::new(id));
    }
    let years = AcademicYearService::list(&state.client)
        .await
        .map_err(report)?;
    default_academic_year(&years)
        .map(|y| y.id)
        .ok_or_else(|| anyhow::anyhow!("No academic year found. Create one first."))
}

/// Picks one row of `items` by label; `None` when the list is empty.
fn pick<T, I>(
    prompt_text: &str,
    items: &[T],
    label: impl Fn(&T) -> String,
    id: impl Fn(&T) -> I,
) -> anyhow::Result<Option<I>> {
    if items.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = items.iter().map(label).collect();
    let index = prompt::choose(prompt_text, &labels, 0)?;
    Ok(Some(id(&items[index])))
}

async fn manual_entry_form(state: &AppState) -> anyhow::Result<ManualEntryForm> {
    let client = &state.client;
    let (divisions, courses, teachers, rooms, slots) = tokio::try_join!(
        DivisionService::list(client),
        CourseService::list(client),
        TeacherService::list_approved(client),
        RoomService::list(client),
        TimeSlotService::list_active(client),
    )
    .map_err(report)?;
    let slots: Vec<_> = slots.into_iter().filter(|s| !s.is_break).collect();

    let mut form = ManualEntryForm {
        division_id: pick("Division", &divisions, |d| d.name.clone(), |d| d.id)?,
        course_id: pick(
            "Course",
            &courses,
            |c| format!("{} - {}", c.code, c.name),
            |c| c.id,
        )?,
        teacher_id: pick("Teacher", &teachers, |t| t.name.clone(), |t| t.id)?,
        room_id: pick(
            "Room",
            &rooms,
            |r| format!("{} ({})", r.room_number, r.name),
            |r| r.id,
        )?,
        time_slot_id: pick("Time slot", &slots, |s| s.label(), |s| s.id)?,
        ..ManualEntryForm::default()
    };

    let days: Vec<String> = DayOfWeek::TEACHING_DAYS
        .iter()
        .map(|d| d.label().to_string())
        .collect();
    form.day_of_week = Some(DayOfWeek::TEACHING_DAYS[prompt::choose("Day", &days, 0)?]);
    form.academic_year_id = pick_academic_year(state, None).await?;
    form.is_recurring = prompt::flag("Repeat every week?", true)?;
    if !form.is_recurring {
        form.week_number = prompt::optional_number("Week number", Some(form.week_number))?
            .unwrap_or(0);
    }
    form.notes = prompt::optional_text("Notes", None)?;
    Ok(form)
}

pub async fn timetable(state: &AppState, command: TimetableCommand) -> anyhow::Result<()> {
    let client = &state.client;
    let entries = match command {
        TimetableCommand::Division { id, academic_year } => {
            let year = academic_year_or_current(state, academic_year).await?;
            TimetableService::for_division(client, DivisionId::new(id), year)
                .await
                .map_err(report)?
        }
        TimetableCommand::Teacher { id, academic_year } => {
            let year = academic_year_or_current(state, academic_year).await?;
            TimetableService::for_teacher(client, TeacherId::new(id), year)
                .await
                .map_err(report)?
        }
        TimetableCommand::Add => {
            let form = manual_entry_form(state).await?;
            let entry = TimetableService::add_manual_entry(client, form)
                .await
                .map_err(report)?;
            println!("✅ Timetable entry {} added", entry.id);
            return Ok(());
        }
    };

    let grid = TimetableService::weekly_grid(client, entries)
        .await
        .map_err(report)?;
    output::weekly_grid(&grid);
    Ok(())
}
