//! Admin catalogue: departments, courses, rooms, divisions, academic years
//! and time slots.

use samaysetu_models::{
    AcademicYearForm, AcademicYearId, CourseFilter, CourseForm, CourseId, CourseType,
    DepartmentForm, DepartmentId, DivisionFilter, DivisionForm, DivisionId, RoomFilter, RoomForm,
    RoomId, RoomType, Semester, TimeSlotForm, TimeSlotId, default_academic_year, infer_wing,
    year_label,
};

use crate::cli::{
    AcademicYearCommand, CourseCommand, DepartmentCommand, DivisionCommand, RoomCommand,
    TimeSlotCommand, output, prompt, report,
};
use crate::modules::{
    AcademicYearService, CourseService, DepartmentService, DivisionService, RoomService,
    TimeSlotService,
};
use crate::state::AppState;

/// Lets the user pick a department, pre-selecting `current`.
pub(crate) async fn pick_department(
    state: &AppState,
    current: Option<DepartmentId>,
) -> anyhow::Result<Option<DepartmentId>> {
    let departments = DepartmentService::list(&state.client)
        .await
        .map_err(report)?;
    let index = prompt::choose_optional(
        "Department",
        &departments,
        |d| format!("{} ({})", d.name, d.code),
        |d| Some(d.id) == current,
    )?;
    Ok(index.map(|i| departments[i].id))
}

/// Lets the user pick an academic year, pre-selecting `current` or else the
/// current year.
pub(crate) async fn pick_academic_year(
    state: &AppState,
    current: Option<AcademicYearId>,
) -> anyhow::Result<Option<AcademicYearId>> {
    let years = AcademicYearService::list(&state.client)
        .await
        .map_err(report)?;
    let preselected = current.or_else(|| default_academic_year(&years).map(|y| y.id));
    let index = prompt::choose_optional(
        "Academic year",
        &years,
        |y| y.year_name.clone(),
        |y| Some(y.id) == preselected,
    )?;
    Ok(index.map(|i| years[i].id))
}

fn deleted(what: &str) {
    println!("🗑️  {} deleted", what);
}

fn saved(what: &str) {
    println!("✅ {} saved", what);
}

// ============================================================================
// Departments
// ============================================================================

fn department_form(mut form: DepartmentForm) -> anyhow::Result<DepartmentForm> {
    form.name = prompt::text("Name", Some(&form.name))?;
    form.code = prompt::text("Code", Some(&form.code))?;
    form.head_of_department =
        prompt::optional_text("Head of department", form.head_of_department.as_deref())?;
    Ok(form)
}

pub async fn departments(state: &AppState, command: DepartmentCommand) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        DepartmentCommand::List => {
            let rows = DepartmentService::list(client).await.map_err(report)?;
            output::departments(&rows);
        }
        DepartmentCommand::Show { id } => {
            let row = DepartmentService::get(client, DepartmentId::new(id))
                .await
                .map_err(report)?;
            output::departments(&[row]);
        }
        DepartmentCommand::Create => {
            let form = department_form(DepartmentForm::default())?;
            DepartmentService::create(client, form).await.map_err(report)?;
            saved("Department");
        }
        DepartmentCommand::Update { id } => {
            let id = DepartmentId::new(id);
            let current = DepartmentService::get(client, id).await.map_err(report)?;
            let form = department_form(DepartmentForm::from(&current))?;
            DepartmentService::update(client, id, form)
                .await
                .map_err(report)?;
            saved("Department");
        }
        DepartmentCommand::Delete { id, yes } => {
            let id = DepartmentId::new(id);
            let current = DepartmentService::get(client, id).await.map_err(report)?;
            let question = format!("Are you sure you want to delete {}?", current.name);
            if prompt::confirm(&question, yes)? {
                DepartmentService::delete(client, id).await.map_err(report)?;
                deleted("Department");
            }
        }
    }
    Ok(())
}

// ============================================================================
// Courses
// ============================================================================

async fn course_form(state: &AppState, mut form: CourseForm) -> anyhow::Result<CourseForm> {
    form.name = prompt::text("Name", Some(&form.name))?;
    form.code = prompt::text("Code", Some(&form.code))?;

    let types = [CourseType::Theory, CourseType::Lab];
    let labels: Vec<String> = types.iter().map(ToString::to_string).collect();
    let current = types.iter().position(|t| *t == form.course_type).unwrap_or(0);
    form.course_type = types[prompt::choose("Course type", &labels, current)?];

    form.credits = prompt::optional_number("Credits", form.credits)?;
    form.hours_per_week = prompt::optional_number("Hours per week", form.hours_per_week)?;
    form.department_id = pick_department(state, form.department_id).await?;

    let semesters: Vec<Semester> = (1..=8).filter_map(Semester::new).collect();
    let labels: Vec<String> = semesters.iter().map(ToString::to_string).collect();
    let current = usize::from(form.semester.number().saturating_sub(1));
    form.semester = semesters[prompt::choose("Semester", &labels, current)?];

    form.description = prompt::optional_text("Description", form.description.as_deref())?;
    Ok(form)
}

pub async fn courses(state: &AppState, command: CourseCommand) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        CourseCommand::List {
            search,
            department,
            semester,
        } => {
            let semester = semester
                .map(|s| s.parse::<Semester>())
                .transpose()
                .map_err(anyhow::Error::msg)?;
            let filter = CourseFilter {
                search,
                department_id: department.map(DepartmentId::new),
                semester,
            };
            let rows = CourseService::search(client, &filter).await.map_err(report)?;
            output::courses(&rows);
        }
        CourseCommand::Show { id } => {
            let row = CourseService::get(client, CourseId::new(id))
                .await
                .map_err(report)?;
            output::courses([&row]);
        }
        CourseCommand::Create => {
            let form = course_form(state, CourseForm::default()).await?;
            CourseService::create(client, form).await.map_err(report)?;
            saved("Course");
        }
        CourseCommand::Update { id } => {
            let id = CourseId::new(id);
            let current = CourseService::get(client, id).await.map_err(report)?;
            let form = course_form(state, CourseForm::from(&current)).await?;
            CourseService::update(client, id, form).await.map_err(report)?;
            saved("Course");
        }
        CourseCommand::Delete { id, yes } => {
            let id = CourseId::new(id);
            let current = CourseService::get(client, id).await.map_err(report)?;
            let question = format!("Are you sure you want to delete {}?", current.name);
            if prompt::confirm(&question, yes)? {
                CourseService::delete(client, id).await.map_err(report)?;
                deleted("Course");
            }
        }
    }
    Ok(())
}

// ============================================================================
// Rooms
// ============================================================================

async fn room_form(state: &AppState, mut form: RoomForm) -> anyhow::Result<RoomForm> {
    form.name = prompt::text("Name", Some(&form.name))?;
    form.room_number = prompt::text("Room number (e.g. A-101)", Some(&form.room_number))?;
    let wing = infer_wing(&form.room_number, &form.building_wing);
    form.building_wing = prompt::text("Building wing", Some(&wing))?;
    form.capacity = prompt::optional_number("Capacity", form.capacity)?;

    let types = [RoomType::Classroom, RoomType::Lab, RoomType::Auditorium];
    let labels: Vec<String> = types.iter().map(ToString::to_string).collect();
    let current = types.iter().position(|t| *t == form.room_type).unwrap_or(0);
    form.room_type = types[prompt::choose("Room type", &labels, current)?];

    form.department_id = pick_department(state, form.department_id).await?;
    form.has_projector = prompt::flag("Has projector?", form.has_projector)?;
    form.has_ac = prompt::flag("Has AC?", form.has_ac)?;
    form.equipment = prompt::optional_text("Equipment", form.equipment.as_deref())?;
    Ok(form)
}

pub async fn rooms(state: &AppState, command: RoomCommand) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        RoomCommand::List {
            search,
            department,
            wing,
        } => {
            let filter = RoomFilter {
                search,
                department_id: department.map(DepartmentId::new),
                wing,
            };
            let rows = RoomService::search(client, &filter).await.map_err(report)?;
            output::rooms(&rows);
        }
        RoomCommand::Show { id } => {
            let row = RoomService::get(client, RoomId::new(id))
                .await
                .map_err(report)?;
            output::rooms([&row]);
        }
        RoomCommand::Create => {
            let form = room_form(state, RoomForm::default()).await?;
            RoomService::create(client, form).await.map_err(report)?;
            saved("Room");
        }
        RoomCommand::Update { id } => {
            let id = RoomId::new(id);
            let current = RoomService::get(client, id).await.map_err(report)?;
            let form = room_form(state, RoomForm::from(&current)).await?;
            RoomService::update(client, id, form).await.map_err(report)?;
            saved("Room");
        }
        RoomCommand::Delete { id, yes } => {
            let id = RoomId::new(id);
            let current = RoomService::get(client, id).await.map_err(report)?;
            let question = format!("Are you sure you want to delete {}?", current.name);
            if prompt::confirm(&question, yes)? {
                RoomService::delete(client, id).await.map_err(report)?;
                deleted("Room");
            }
        }
    }
    Ok(())
}

// ============================================================================
// Divisions
// ============================================================================

async fn division_form(state: &AppState, mut form: DivisionForm) -> anyhow::Result<DivisionForm> {
    form.name = prompt::text("Division name", Some(&form.name))?;

    let labels: Vec<String> = (1..=4).map(year_label).collect();
    let current = usize::try_from(form.year - 1).unwrap_or(0);
    form.year = prompt::choose("Year", &labels, current)? as i32 + 1;

    form.branch = prompt::text("Branch", Some(&form.branch))?;
    form.total_students = prompt::optional_number("Total students", form.total_students)?;
    form.department_id = pick_department(state, form.department_id).await?;
    form.academic_year_id = pick_academic_year(state, form.academic_year_id).await?;
    Ok(form)
}

pub async fn divisions(state: &AppState, command: DivisionCommand) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        DivisionCommand::List {
            year,
            department,
            academic_year,
        } => {
            let filter = DivisionFilter {
                year,
                department_id: department.map(DepartmentId::new),
                academic_year_id: academic_year.map(AcademicYearId::new),
            };
            let rows = DivisionService::search(client, &filter)
                .await
                .map_err(report)?;
            output::divisions(&rows);
        }
        DivisionCommand::Show { id } => {
            let row = DivisionService::get(client, DivisionId::new(id))
                .await
                .map_err(report)?;
            output::divisions([&row]);
        }
        DivisionCommand::Create => {
            let form = division_form(state, DivisionForm::default()).await?;
            DivisionService::create(client, form).await.map_err(report)?;
            saved("Division");
        }
        DivisionCommand::Update { id } => {
            let id = DivisionId::new(id);
            let current = DivisionService::get(client, id).await.map_err(report)?;
            let form = division_form(state, DivisionForm::from(&current)).await?;
            DivisionService::update(client, id, form)
                .await
                .map_err(report)?;
            saved("Division");
        }
        DivisionCommand::Delete { id, yes } => {
            let id = DivisionId::new(id);
            let current = DivisionService::get(client, id).await.map_err(report)?;
            let question = format!("Are you sure you want to delete {}?", current.name);
            if prompt::confirm(&question, yes)? {
                DivisionService::delete(client, id).await.map_err(report)?;
                deleted("Division");
            }
        }
    }
    Ok(())
}

// ============================================================================
// Academic years
// ============================================================================

fn academic_year_form(mut form: AcademicYearForm) -> anyhow::Result<AcademicYearForm> {
    form.year_name = prompt::text("Year name (e.g. 2024-25)", Some(&form.year_name))?;
    form.start_date = prompt::text("Start date (YYYY-MM-DD)", Some(&form.start_date))?;
    form.end_date = prompt::text("End date (YYYY-MM-DD)", Some(&form.end_date))?;
    form.is_current = prompt::flag("Current academic year?", form.is_current)?;
    Ok(form)
}

pub async fn academic_years(state: &AppState, command: AcademicYearCommand) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        AcademicYearCommand::List => {
            let rows = AcademicYearService::list(client).await.map_err(report)?;
            output::academic_years(&rows);
        }
        AcademicYearCommand::Current => {
            let row = AcademicYearService::current(client).await.map_err(report)?;
            output::academic_years(&[row]);
        }
        AcademicYearCommand::Show { id } => {
            let row = AcademicYearService::get(client, AcademicYearId::new(id))
                .await
                .map_err(report)?;
            output::academic_years(&[row]);
        }
        AcademicYearCommand::Create => {
            let form = academic_year_form(AcademicYearForm::default())?;
            AcademicYearService::create(client, form)
                .await
                .map_err(report)?;
            saved("Academic year");
        }
        AcademicYearCommand::Update { id } => {
            let id = AcademicYearId::new(id);
            let current = AcademicYearService::get(client, id).await.map_err(report)?;
            let form = academic_year_form(AcademicYearForm::from(&current))?;
            AcademicYearService::update(client, id, form)
                .await
                .map_err(report)?;
            saved("Academic year");
        }
        AcademicYearCommand::Delete { id, yes } => {
            let id = AcademicYearId::new(id);
            let current = AcademicYearService::get(client, id).await.map_err(report)?;
            let question = format!("Are you sure you want to delete {}?", current.year_name);
            if prompt::confirm(&question, yes)? {
                AcademicYearService::delete(client, id)
                    .await
                    .map_err(report)?;
                deleted("Academic year");
            }
        }
    }
    Ok(())
}

// ============================================================================
// Time slots
// ============================================================================

fn time_slot_form(mut form: TimeSlotForm) -> anyhow::Result<TimeSlotForm> {
    form.slot_name = prompt::text("Slot name", Some(&form.slot_name))?;
    form.start_time = prompt::text("Start time (HH:MM)", Some(&form.start_time))?;
    form.end_time = prompt::text("End time (HH:MM)", Some(&form.end_time))?;
    form.is_break = prompt::flag("Is this a break?", form.is_break)?;
    Ok(form)
}

pub async fn time_slots(state: &AppState, command: TimeSlotCommand) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        TimeSlotCommand::List { active } => {
            let rows = if active {
                TimeSlotService::list_active(client).await
            } else {
                TimeSlotService::list(client).await
            }
            .map_err(report)?;
            output::time_slots(&rows);
        }
        TimeSlotCommand::Show { id } => {
            let row = TimeSlotService::get(client, TimeSlotId::new(id))
                .await
                .map_err(report)?;
            output::time_slots(&[row]);
        }
        TimeSlotCommand::Create => {
            let form = time_slot_form(TimeSlotForm::default())?;
            TimeSlotService::create(client, form).await.map_err(report)?;
            saved("Time slot");
        }
        TimeSlotCommand::Update { id } => {
            let id = TimeSlotId::new(id);
            let current = TimeSlotService::get(client, id).await.map_err(report)?;
            let form = time_slot_form(TimeSlotForm::from(&current))?;
            TimeSlotService::update(client, id, form)
                .await
                .map_err(report)?;
            saved("Time slot");
        }
        TimeSlotCommand::Delete { id, yes } => {
            let id = TimeSlotId::new(id);
            let current = TimeSlotService::get(client, id).await.map_err(report)?;
            let question = format!("Are you sure you want to delete {}?", current.label());
            if prompt::confirm(&question, yes)? {
                TimeSlotService::delete(client, id).await.map_err(report)?;
                deleted("Time slot");
            }
        }
    }
    Ok(())
}
