use clap::{Parser, Subcommand};
use dialoguer::Password;
use dotenvy::dotenv;

use marquee::cli::{describe_path, issue_session_token};
use marquee_auth::{Role, RoleMatrix};
use marquee_config::{AccessConfig, SessionConfig};
use marquee_core::hash_password;

#[derive(Parser)]
#[command(name = "marquee-cli")]
#[command(about = "Marquee CLI - Administrative tools for the admin API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a bcrypt hash for an entry in the admin accounts file
    HashPassword {
        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Sign a session token with the configured secret
    IssueSession {
        /// Admin account id
        #[arg(short = 's', long)]
        subject: i64,

        /// Role carried by the session (admin, editor, viewer)
        #[arg(short = 'r', long)]
        role: Role,
    },
    /// Show which roles may reach an admin path
    CheckPath {
        path: String,

        /// Also report whether this role would be let through
        #[arg(short = 'r', long)]
        role: Option<Role>,
    },
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::HashPassword { password } => handle_hash_password(password),
        Commands::IssueSession { subject, role } => handle_issue_session(subject, role),
        Commands::CheckPath { path, role } => handle_check_path(&path, role),
    };

    if let Err(e) = result {
        eprintln!("\n❌ {e:#}");
        std::process::exit(1);
    }
}

fn handle_hash_password(password: Option<String>) -> anyhow::Result<()> {
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let hash = hash_password(&password).map_err(|e| anyhow::anyhow!("{}", e.message()))?;
    println!("{hash}");
    Ok(())
}

fn handle_issue_session(subject: i64, role: Role) -> anyhow::Result<()> {
    let config = SessionConfig::from_env();
    let token = issue_session_token(&config, subject, role)
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;

    println!("{}={}", config.cookie_name, token.value);
    println!("   Subject: {}", token.payload.subject_id);
    println!("   Role: {}", token.payload.role);
    println!("   Expires: {}", token.payload.expires_at.to_rfc3339());
    Ok(())
}

fn handle_check_path(path: &str, role: Option<Role>) -> anyhow::Result<()> {
    let access = AccessConfig::from_env();
    let matrix = RoleMatrix::standard(&access)?;
    let report = describe_path(&matrix, &access, path);

    println!("{report}");
    if let Some(role) = role {
        let verdict = if report.permits(role) { "allowed" } else { "denied" };
        println!("{role}: {verdict}");
    }
    Ok(())
}
