//! Console rendering of records and errors.

use samaysetu_core::{ApiError, ErrorEnvelope};
use samaysetu_models::{
    AcademicYear, Course, DashboardStats, Department, Division, Room, Teacher, TimeSlot,
    TimetableEntry, WeeklyGrid, format_time_12h, year_label,
};

/// What the console prints for a failed call. Form errors list each field;
/// a backend envelope's own message wins over the derived one.
pub fn describe(error: &ApiError) -> String {
    match error {
        ApiError::Validation(fields) => fields
            .iter()
            .map(|(field, message)| format!("  - {}: {}", field, message))
            .collect::<Vec<_>>()
            .join("\n"),
        other => ErrorEnvelope::from_error(other).message,
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|s| !s.is_empty()).unwrap_or("-")
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn department_code(department: Option<&Department>) -> &str {
    department.map_or("-", |d| d.code.as_str())
}

pub fn departments(rows: &[Department]) {
    println!("{:<6} {:<10} {:<40} {}", "ID", "CODE", "NAME", "HEAD");
    for d in rows {
        println!(
            "{:<6} {:<10} {:<40} {}",
            d.id.to_string(),
            d.code,
            d.name,
            or_dash(d.head_of_department.as_deref())
        );
    }
    println!("\n{} department(s)", rows.len());
}

pub fn courses<'a>(rows: impl IntoIterator<Item = &'a Course>) {
    println!(
        "{:<6} {:<10} {:<36} {:<7} {:<4} {:<4} {:<4} {}",
        "ID", "CODE", "NAME", "TYPE", "CR", "HRS", "SEM", "DEPT"
    );
    let mut count = 0;
    for c in rows {
        count += 1;
        println!(
            "{:<6} {:<10} {:<36} {:<7} {:<4} {:<4} {:<4} {}",
            c.id.to_string(),
            c.code,
            c.name,
            c.course_type.to_string(),
            c.credits,
            c.hours_per_week,
            c.semester.to_string(),
            department_code(c.department.as_ref())
        );
    }
    println!("\n{} course(s)", count);
}

pub fn rooms<'a>(rows: impl IntoIterator<Item = &'a Room>) {
    println!(
        "{:<6} {:<8} {:<5} {:<28} {:<11} {:<5} {:<10} {:<4} {}",
        "ID", "NUMBER", "WING", "NAME", "TYPE", "CAP", "PROJECTOR", "AC", "DEPT"
    );
    let mut count = 0;
    for r in rows {
        count += 1;
        println!(
            "{:<6} {:<8} {:<5} {:<28} {:<11} {:<5} {:<10} {:<4} {}",
            r.id.to_string(),
            r.room_number.to_string(),
            r.building_wing,
            r.name,
            r.room_type.to_string(),
            r.capacity,
            yes_no(r.has_projector),
            yes_no(r.has_ac),
            department_code(r.department.as_ref())
        );
    }
    println!("\n{} room(s)", count);
}

pub fn divisions<'a>(rows: impl IntoIterator<Item = &'a Division>) {
    println!(
        "{:<6} {:<6} {:<20} {:<24} {:<9} {:<6} {}",
        "ID", "NAME", "YEAR", "BRANCH", "STUDENTS", "DEPT", "ACADEMIC YEAR"
    );
    let mut count = 0;
    for d in rows {
        count += 1;
        println!(
            "{:<6} {:<6} {:<20} {:<24} {:<9} {:<6} {}",
            d.id.to_string(),
            d.name,
            year_label(d.year),
            d.branch,
            d.total_students,
            department_code(d.department.as_ref()),
            d.academic_year.as_ref().map_or("-", |y| y.year_name.as_str())
        );
    }
    println!("\n{} division(s)", count);
}

pub fn academic_years(rows: &[AcademicYear]) {
    println!("{:<6} {:<12} {:<12} {:<12} {}", "ID", "YEAR", "START", "END", "CURRENT");
    for y in rows {
        println!(
            "{:<6} {:<12} {:<12} {:<12} {}",
            y.id.to_string(),
            y.year_name,
            y.start_date.map_or_else(|| "-".to_string(), |d| d.to_string()),
            y.end_date.map_or_else(|| "-".to_string(), |d| d.to_string()),
            if y.is_current { "✓" } else { "" }
        );
    }
    println!("\n{} academic year(s)", rows.len());
}

pub fn time_slots(rows: &[TimeSlot]) {
    println!(
        "{:<6} {:<16} {:<10} {:<10} {:<5} {:<6} {}",
        "ID", "NAME", "START", "END", "MIN", "BREAK", "ACTIVE"
    );
    for s in rows {
        println!(
            "{:<6} {:<16} {:<10} {:<10} {:<5} {:<6} {}",
            s.id.to_string(),
            or_dash(s.slot_name.as_deref()),
            format_time_12h(s.start_time),
            format_time_12h(s.end_time),
            s.duration_minutes,
            yes_no(s.is_break),
            yes_no(s.is_active)
        );
    }
    println!("\n{} time slot(s)", rows.len());
}

pub fn teachers<'a>(rows: impl IntoIterator<Item = &'a Teacher>) {
    println!(
        "{:<6} {:<28} {:<34} {:<10} {:<8} {:<4} {:<9} {}",
        "ID", "NAME", "EMAIL", "EMP ID", "ROLE", "HRS", "APPROVED", "DEPT"
    );
    let mut count = 0;
    for t in rows {
        count += 1;
        println!(
            "{:<6} {:<28} {:<34} {:<10} {:<8} {:<4} {:<9} {}",
            t.id.to_string(),
            t.name,
            t.email,
            t.employee_id,
            t.role.to_string(),
            t.weekly_hours_limit,
            yes_no(t.is_approved),
            department_code(t.department.as_ref())
        );
    }
    println!("\n{} staff member(s)", count);
}

pub fn teacher(t: &Teacher) {
    println!("Name:            {}", t.name);
    println!("Email:           {}", t.email);
    println!("Employee ID:     {}", or_dash(Some(&t.employee_id)));
    println!("Phone:           {}", or_dash(t.phone.as_deref()));
    println!("Specialization:  {}", or_dash(t.specialization.as_deref()));
    println!("Weekly hours:    {}", t.weekly_hours_limit);
    println!("Role:            {}", t.role);
    println!(
        "Department:      {}",
        t.department.as_ref().map_or("-", |d| d.name.as_str())
    );
    println!("Email verified:  {}", yes_no(t.is_email_verified));
    println!("Approved:        {}", yes_no(t.is_approved));
}

pub fn dashboard(stats: &DashboardStats) {
    println!("📊 Dashboard");
    println!("   Teachers:        {}", stats.teachers);
    println!("   Courses:         {}", stats.courses);
    println!("   Departments:     {}", stats.departments);
    println!("   Rooms:           {}", stats.rooms);
    println!("   Divisions:       {}", stats.divisions);
    println!("   Academic years:  {}", stats.academic_years);
    println!("   Time slots:      {}", stats.time_slots);
}

fn entry_summary(entry: &TimetableEntry) -> String {
    let course = entry.course.as_ref().map_or("-", |c| c.code.as_str());
    let teacher = entry.teacher.as_ref().map_or("-", |t| t.name.as_str());
    let room = entry
        .room
        .as_ref()
        .map_or_else(|| "-".to_string(), |r| r.room_number.to_string());
    format!("{} / {} / {}", course, teacher, room)
}

pub fn weekly_grid(grid: &WeeklyGrid) {
    if grid.is_empty() {
        println!("No timetable entries.");
        return;
    }
    for day in grid.days() {
        println!("\n{}", day.label());
        for slot in grid.slots() {
            let cell = grid.cell(*day, slot);
            let contents = if cell.is_empty() {
                "-".to_string()
            } else {
                cell.iter().map(entry_summary).collect::<Vec<_>>().join(", ")
            };
            println!("  {:<15} {}", slot.label(), contents);
        }
    }
    println!("\n{} entr(ies)", grid.len());
}
