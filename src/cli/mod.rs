//! `samaysetu-cli` commands.
//!
//! Arguments given on the command line are used as-is; anything missing is
//! prompted for. Failed calls surface as an error carrying the message the
//! user should see, and the binary exits non-zero.

pub mod account;
pub mod catalogue;
pub mod navigator;
pub mod output;
pub mod prompt;
pub mod schedule;
pub mod staff;

use clap::{Parser, Subcommand};

use samaysetu_core::ApiError;

use crate::state::AppState;

pub use navigator::ConsoleNavigator;

#[derive(Parser)]
#[command(name = "samaysetu-cli")]
#[command(about = "SamaySetu CLI - Timetable administration from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with a college email address
    Login {
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show who is signed in
    Whoami,
    /// Register a new staff account
    Register {
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Confirm an email address with the token from the verification mail
    VerifyEmail { token: String },
    /// Request a password reset link
    ForgotPassword {
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Set a new password with the token from the reset link
    ResetPassword {
        #[arg(short = 't', long)]
        token: Option<String>,
    },
    /// Show catalogue counts
    Dashboard,
    /// View or edit your own profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    #[command(subcommand)]
    Departments(DepartmentCommand),
    #[command(subcommand)]
    Courses(CourseCommand),
    #[command(subcommand)]
    Rooms(RoomCommand),
    #[command(subcommand)]
    Divisions(DivisionCommand),
    #[command(subcommand)]
    AcademicYears(AcademicYearCommand),
    #[command(subcommand)]
    TimeSlots(TimeSlotCommand),
    /// Manage staff accounts and approvals
    #[command(subcommand)]
    Teachers(TeacherCommand),
    /// Show or edit the weekly timetable
    #[command(subcommand)]
    Timetable(TimetableCommand),
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    Show,
    Update,
    /// Change your password
    Password,
}

#[derive(Subcommand)]
pub enum DepartmentCommand {
    List,
    Show { id: i64 },
    Create,
    Update { id: i64 },
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum CourseCommand {
    List {
        /// Match name or code
        #[arg(short = 's', long)]
        search: Option<String>,
        #[arg(short = 'd', long)]
        department: Option<i64>,
        /// Semester number (1-8) or SEM_n
        #[arg(long)]
        semester: Option<String>,
    },
    Show { id: i64 },
    Create,
    Update { id: i64 },
    Delete {
        id: i64,
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum RoomCommand {
    List {
        /// Match name, room number or capacity
        #[arg(short = 's', long)]
        search: Option<String>,
        #[arg(short = 'd', long)]
        department: Option<i64>,
        #[arg(short = 'w', long)]
        wing: Option<String>,
    },
    Show { id: i64 },
    Create,
    Update { id: i64 },
    Delete {
        id: i64,
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum DivisionCommand {
    List {
        #[arg(long)]
        year: Option<i32>,
        #[arg(short = 'd', long)]
        department: Option<i64>,
        #[arg(short = 'a', long)]
        academic_year: Option<i64>,
    },
    Show { id: i64 },
    Create,
    Update { id: i64 },
    Delete {
        id: i64,
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum AcademicYearCommand {
    List,
    /// Show the current academic year
    Current,
    Show { id: i64 },
    Create,
    Update { id: i64 },
    Delete {
        id: i64,
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum TimeSlotCommand {
    List {
        /// Only active slots
        #[arg(long)]
        active: bool,
    },
    Show { id: i64 },
    Create,
    Update { id: i64 },
    Delete {
        id: i64,
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum TeacherCommand {
    List {
        /// Match name, email or employee id
        #[arg(short = 's', long)]
        search: Option<String>,
        #[arg(short = 'd', long)]
        department: Option<i64>,
        /// Only approved teaching staff
        #[arg(long)]
        approved: bool,
    },
    /// Accounts waiting for approval
    Pending,
    Show { id: i64 },
    Create,
    Update { id: i64 },
    Delete {
        id: i64,
        #[arg(short = 'y', long)]
        yes: bool,
    },
    Approve {
        id: i64,
        #[arg(short = 'y', long)]
        yes: bool,
    },
    Reject {
        id: i64,
        /// Sent to the applicant; a default reason is used when omitted
        #[arg(short = 'r', long)]
        reason: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TimetableCommand {
    /// Weekly timetable of a division
    Division {
        id: i64,
        /// Defaults to the current academic year
        #[arg(short = 'a', long)]
        academic_year: Option<i64>,
    },
    /// Weekly timetable of a teacher
    Teacher {
        id: i64,
        #[arg(short = 'a', long)]
        academic_year: Option<i64>,
    },
    /// Add a single timetable entry
    Add,
}

/// Turns a failed call into the error the binary prints.
pub(crate) fn report(error: ApiError) -> anyhow::Error {
    anyhow::anyhow!(output::describe(&error))
}

/// Like [`report`], with screen-specific wording for backend failures.
pub(crate) fn report_with(error: ApiError, message: impl Fn(&ApiError) -> String) -> anyhow::Error {
    match error {
        ApiError::Validation(_) => report(error),
        other => anyhow::anyhow!(message(&other)),
    }
}

pub async fn run(command: Commands, state: &AppState) -> anyhow::Result<()> {
    match command {
        Commands::Login { email, password } => account::login(state, email, password).await,
        Commands::Logout => account::logout(state),
        Commands::Whoami => account::whoami(state),
        Commands::Register { email } => account::register(state, email).await,
        Commands::VerifyEmail { token } => account::verify_email(state, &token).await,
        Commands::ForgotPassword { email } => account::forgot_password(state, email).await,
        Commands::ResetPassword { token } => account::reset_password(state, token).await,
        Commands::Dashboard => schedule::dashboard(state).await,
        Commands::Profile(command) => account::profile(state, command).await,
        Commands::Departments(command) => catalogue::departments(state, command).await,
        Commands::Courses(command) => catalogue::courses(state, command).await,
        Commands::Rooms(command) => catalogue::rooms(state, command).await,
        Commands::Divisions(command) => catalogue::divisions(state, command).await,
        Commands::AcademicYears(command) => catalogue::academic_years(state, command).await,
        Commands::TimeSlots(command) => catalogue::time_slots(state, command).await,
        Commands::Teachers(command) => staff::teachers(state, command).await,
        Commands::Timetable(command) => schedule::timetable(state, command).await,
    }
}
