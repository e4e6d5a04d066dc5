//! QuickBite CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! qb-cli migrate
//!
//! # Create an admin user
//! qb-cli admin create -e admin@example.com -n "Admin Name" -p "a strong password"
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `admin create` - Create admin users

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "qb-cli")]
#[command(author, version, about = "QuickBite CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin user
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Admin password (prefer QUICKBITE_ADMIN_PASSWORD over this flag)
        #[arg(short, long, env = "QUICKBITE_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                name,
                password,
            } => {
                commands::admin::create_user(&email, &name, &password).await?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_admin_create_parses_flags() {
        let cli = Cli::try_parse_from([
            "qb-cli", "admin", "create", "-e", "admin@example.com", "-n", "Admin", "-p",
            "a strong password",
        ])
        .expect("parse");

        let Commands::Admin {
            action: AdminAction::Create { email, name, .. },
        } = cli.command
        else {
            panic!("expected admin create");
        };
        assert_eq!(email, "admin@example.com");
        assert_eq!(name, "Admin");
    }

    #[test]
    fn test_admin_create_requires_password() {
        // Without the flag or QUICKBITE_ADMIN_PASSWORD, parsing must fail
        let result = Cli::try_parse_from([
            "qb-cli", "admin", "create", "-e", "admin@example.com", "-n", "Admin",
        ]);
        assert!(result.is_err());
    }
}
