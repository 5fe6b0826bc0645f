//! The `studentdesk` console.
//!
//! Without a subcommand an interactive [`shell::Shell`] is started. The
//! one-shot subcommands print their result and exit, which makes them
//! usable from scripts.

pub mod commands;
pub mod prompts;
pub mod render;
pub mod shell;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use studentdesk_auth::Session;
use studentdesk_client::{ImageUpload, MemoryStudentStore, MemoryUserDirectory};
use studentdesk_core::{AppError, hash_password};
use studentdesk_models::{SortConfig, SortOrder, Student, StudentField, StudentId, UserId, UserRecord};

use crate::config::AppConfig;
use crate::modules::students::{StudentForm, StudentListController, StudentService, SubmitOutcome};
use crate::state::AppState;
use crate::utils::errors::service_error;
use prompts::{confirm, login, print_notifications};
use render::{render_errors, render_list, render_student};

/// Operator account available with `--memory`.
pub const DEMO_EMAIL: &str = "admin@studentdesk.local";
pub const DEMO_PASSWORD: &str = "admin123";

#[derive(Parser)]
#[command(name = "studentdesk")]
#[command(about = "studentdesk - Student records administration console", long_about = None)]
pub struct Cli {
    /// Use built-in sample data instead of the configured services
    /// (sign in as admin@studentdesk.local / admin123)
    #[arg(long, global = true)]
    pub memory: bool,

    /// Operator email
    #[arg(short = 'e', long, global = true)]
    pub email: Option<String>,

    /// Operator password (will be prompted securely if not provided)
    #[arg(short = 'p', long, global = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive shell (the default)
    Shell,
    /// Print one page of the student list
    List {
        /// Free-text filter
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Sort field: name, email, phone, enroll or date
        #[arg(long, default_value = "name")]
        sort: StudentField,

        /// asc or desc
        #[arg(long, default_value = "asc")]
        order: SortOrder,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long)]
        per_page: Option<usize>,
    },
    /// Show every field of a student
    Show { id: String },
    /// Add a student
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// Admission date, e.g. 2021-12-08 or "8-Dec, 2021"
        #[arg(long)]
        date: String,

        /// Image to upload as the avatar
        #[arg(long)]
        avatar: Option<PathBuf>,
    },
    /// Delete a student
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let state = if cli.memory {
        demo_state(config).map_err(|e| e.error)?
    } else {
        AppState::http(config).map_err(|e| e.error)?
    };

    let mut session = Session::default();
    login(&state, &mut session, cli.email, cli.password)
        .await
        .map_err(|e| e.error)?;

    let result = match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => shell::Shell::new(state.clone(), session).run().await,
        Command::List {
            search,
            sort,
            order,
            page,
            per_page,
        } => list(&state, search, SortConfig::new(sort, order), page, per_page).await,
        Command::Show { id } => show(&state, &StudentId::new(id)).await,
        Command::Add {
            name,
            email,
            phone,
            date,
            avatar,
        } => add(&state, [name, email, phone, date], avatar).await,
        Command::Delete { id, yes } => delete(&state, &StudentId::new(id), yes).await,
    };

    print_notifications(&state);
    result.map_err(|e| e.error)
}

async fn list(
    state: &AppState,
    search: Option<String>,
    sort: SortConfig,
    page: usize,
    per_page: Option<usize>,
) -> Result<(), AppError> {
    let mut controller = StudentListController::new(&state.config.list);
    if !StudentService::refresh(state, &mut controller).await {
        return Err(AppError::service(anyhow!("Could not load the student list")));
    }

    if let Some(search) = search {
        controller.on_search(search);
    }
    controller.on_sort_change(sort);
    let per_page = per_page.unwrap_or(state.config.list.default_per_page);
    controller.on_page_change(page, per_page);

    print!(
        "{}",
        render_list(&controller.view(), &state.config.list.per_page_options)
    );
    Ok(())
}

async fn show(state: &AppState, id: &StudentId) -> Result<(), AppError> {
    let student = StudentService::get(state, id).await?;
    print!("{}", render_student(&student));
    Ok(())
}

async fn add(
    state: &AppState,
    [name, email, phone, date]: [String; 4],
    avatar: Option<PathBuf>,
) -> Result<(), AppError> {
    let mut form = StudentForm::create();
    form.set_field(StudentField::Name, name, None);
    form.set_field(StudentField::Email, email, None);
    form.set_field(StudentField::PhoneNum, phone, None);
    form.set_field(StudentField::DateAdmission, date, None);

    if let Some(path) = avatar {
        let image = ImageUpload::from_path(&path).await.map_err(service_error)?;
        form.attach_avatar(state, &image).await?;
    }

    match form.submit(state).await? {
        SubmitOutcome::Saved(student) => {
            print!("{}", render_student(&student));
            Ok(())
        }
        SubmitOutcome::Invalid(result) => {
            print!("{}", render_errors(&result));
            Err(AppError::bad_request(anyhow!("Student was not saved")))
        }
    }
}

async fn delete(state: &AppState, id: &StudentId, yes: bool) -> Result<(), AppError> {
    let student = StudentService::get(state, id).await?;
    let prompt = format!("Delete {} ({})?", student.name, student.email);
    if !yes && !confirm(&prompt, false)? {
        return Ok(());
    }

    let mut controller = StudentListController::new(&state.config.list);
    StudentService::remove(state, &mut controller, id).await
}

/// In-memory state with a demo operator and a handful of records.
pub fn demo_state(config: AppConfig) -> Result<AppState, AppError> {
    let admin = UserRecord {
        id: UserId::new("1"),
        name: "Demo Admin".to_string(),
        email: DEMO_EMAIL.to_string(),
        password: hash_password(DEMO_PASSWORD)?,
    };

    Ok(AppState::in_memory(
        config,
        MemoryStudentStore::with_records(demo_students()),
        MemoryUserDirectory::new(vec![admin]),
    ))
}

fn demo_students() -> Vec<Student> {
    [
        ("Karthi Keyan", "karthi@gmail.com", "7305477760", "EN0000001", "8-Dec, 2021"),
        ("Ada Lovelace", "ada@analytical.org", "+447700900123", "EN0000002", "10-Dec, 2015"),
        ("Grace Hopper", "grace@navy.mil", "2025550143", "EN0000003", "9-Sep, 2019"),
        ("Alan Turing", "alan@bletchley.uk", "+447700900456", "EN0000004", "23-Jun, 2012"),
        ("Katherine Johnson", "katherine@nasa.gov", "7575550199", "EN0000005", "26-Aug, 2018"),
        ("Linus Torvalds", "linus@kernel.org", "+358401234567", "EN0000006", "28-Dec, 2020"),
        ("Margaret Hamilton", "margaret@mit.edu", "6175550111", "EN0000007", "17-Aug, 2016"),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (name, email, phone, enroll, date))| Student {
        id: StudentId::new((idx + 1).to_string()),
        name: name.to_string(),
        email: email.to_string(),
        phone_num: phone.to_string(),
        enroll_num: enroll.to_string(),
        date_admission: date.to_string(),
        avatar: None,
    })
    .collect()
}
