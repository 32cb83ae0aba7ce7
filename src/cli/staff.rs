use samaysetu_models::{DepartmentId, StaffFilter, TeacherForm, TeacherId, approved_teachers};

use crate::cli::{TeacherCommand, output, prompt, report};
use crate::modules::TeacherService;
use crate::state::AppState;

fn teacher_form(mut form: TeacherForm, creating: bool) -> anyhow::Result<TeacherForm> {
    form.name = prompt::text("Name", Some(&form.name))?;
    form.employee_id = prompt::text("Employee ID", Some(&form.employee_id))?;
    form.email = prompt::text("Email", Some(&form.email))?;
    form.phone = prompt::optional_text("Phone", form.phone.as_deref())?;
    form.specialization = prompt::optional_text("Specialization", form.specialization.as_deref())?;
    form.weekly_hours_limit = prompt::text("Weekly hours limit", Some(&form.weekly_hours_limit))?;
    form.password = if creating {
        prompt::password("Password")?
    } else {
        prompt::optional_text("New password (blank keeps the current one)", None)?
            .unwrap_or_default()
    };
    Ok(form)
}

pub async fn teachers(state: &AppState, command: TeacherCommand) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        TeacherCommand::List {
            search,
            department,
            approved,
        } => {
            let filter = StaffFilter {
                search,
                department_id: department.map(DepartmentId::new),
            };
            let rows = TeacherService::search(client, &filter).await.map_err(report)?;
            if approved {
                output::teachers(approved_teachers(&rows));
            } else {
                output::teachers(&rows);
            }
        }
        TeacherCommand::Pending => {
            let rows = TeacherService::pending_approvals(client)
                .await
                .map_err(report)?;
            if rows.is_empty() {
                println!("No accounts are waiting for approval.");
            } else {
                output::teachers(&rows);
            }
        }
        TeacherCommand::Show { id } => {
            let row = TeacherService::get(client, TeacherId::new(id))
                .await
                .map_err(report)?;
            output::teacher(&row);
        }
        TeacherCommand::Create => {
            let form = teacher_form(TeacherForm::default(), true)?;
            TeacherService::create(client, form).await.map_err(report)?;
            println!("✅ Staff member saved");
        }
        TeacherCommand::Update { id } => {
            let id = TeacherId::new(id);
            let current = TeacherService::get(client, id).await.map_err(report)?;
            let form = teacher_form(TeacherForm::from(&current), false)?;
            TeacherService::update(client, id, form).await.map_err(report)?;
            println!("✅ Staff member saved");
        }
        TeacherCommand::Delete { id, yes } => {
            let id = TeacherId::new(id);
            let current = TeacherService::get(client, id).await.map_err(report)?;
            let question = format!("Are you sure you want to delete {}?", current.name);
            if prompt::confirm(&question, yes)? {
                TeacherService::delete(client, id).await.map_err(report)?;
                println!("🗑️  Staff member deleted");
            }
        }
        TeacherCommand::Approve { id, yes } => {
            let id = TeacherId::new(id);
            let current = TeacherService::get(client, id).await.map_err(report)?;
            let question = format!("Approve {}'s account?", current.name);
            if prompt::confirm(&question, yes)? {
                TeacherService::approve(client, id).await.map_err(report)?;
                println!("✅ {} approved", current.name);
            }
        }
        TeacherCommand::Reject { id, reason } => {
            let id = TeacherId::new(id);
            TeacherService::reject(client, id, reason)
                .await
                .map_err(report)?;
            println!("🚫 Application rejected");
        }
    }
    Ok(())
}
