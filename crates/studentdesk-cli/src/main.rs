use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input, Password};
use dotenvy::dotenv;
use studentdesk_cli::seeder::{self, StudentSeedConfig};
use studentdesk_client::{HttpStudentStore, HttpUserDirectory};
use studentdesk_config::ApiConfig;

#[derive(Parser)]
#[command(name = "studentdesk-cli")]
#[command(about = "studentdesk CLI - Administrative tools for the student data service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an operator account that can sign in to the console
    CreateAdmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the data service with fake students
    SeedStudents {
        /// Number of students to create
        #[arg(short = 's', long, default_value = "50")]
        students: usize,
    },
    /// Delete every student record
    ClearStudents {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let api = ApiConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => handle_create_admin(&api, name, email, password).await,
        Commands::SeedStudents { students } => handle_seed_students(&api, students).await,
        Commands::ClearStudents { yes } => handle_clear_students(&api, yes).await,
    }
}

fn exit_with(context: &str, e: impl std::fmt::Display) -> ! {
    eprintln!("\n❌ {}: {}", context, e);
    std::process::exit(1);
}

fn prompt_text(prompt: &str) -> String {
    Input::new()
        .with_prompt(prompt)
        .interact_text()
        .unwrap_or_else(|e| exit_with("Failed to read input", e))
}

async fn handle_create_admin(
    api: &ApiConfig,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) {
    let name = name.unwrap_or_else(|| prompt_text("Name"));
    let email = email.unwrap_or_else(|| prompt_text("Email address"));
    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .unwrap_or_else(|e| exit_with("Failed to read password", e))
    });

    let directory =
        HttpUserDirectory::new(api).unwrap_or_else(|e| exit_with("Error creating client", e));

    match seeder::create_admin(&directory, &name, &email, &password).await {
        Ok(user) => {
            println!("\n✅ Operator account created successfully!");
            println!("   Email: {}", user.email);
            println!("   Name: {}", user.name);
        }
        Err(e) => exit_with("Error creating operator account", e),
    }
}

async fn handle_seed_students(api: &ApiConfig, students: usize) {
    let store = HttpStudentStore::new(api).unwrap_or_else(|e| exit_with("Error creating client", e));
    let config = StudentSeedConfig::new(students);

    match seeder::seed_students(&store, &config).await {
        Ok(created) => println!("✅ Created {} students", created.len()),
        Err(e) => exit_with("Error seeding students", e),
    }
}

async fn handle_clear_students(api: &ApiConfig, yes: bool) {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete every student record?")
            .default(false)
            .interact()
            .unwrap_or_else(|e| exit_with("Failed to read input", e));
        if !confirmed {
            println!("Aborted.");
            return;
        }
    }

    let store = HttpStudentStore::new(api).unwrap_or_else(|e| exit_with("Error creating client", e));
    match seeder::clear_students(&store).await {
        Ok(count) => println!("✅ Deleted {} students", count),
        Err(e) => exit_with("Error clearing students", e),
    }
}
