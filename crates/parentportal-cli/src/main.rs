use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use parentportal_cli::seeder::{self, SeedConfig};

#[derive(Parser)]
#[command(name = "parentportal-cli")]
#[command(about = "Parent Portal CLI - development database tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the database with fake families, students and sessions
    Seed {
        /// Number of families (parent inquiries) to create
        #[arg(short = 'f', long, default_value = "10")]
        families: usize,

        /// Number of students per family
        #[arg(short = 's', long, default_value = "2")]
        students: usize,

        /// Number of scheduled sessions per student
        #[arg(long, default_value = "8")]
        sessions: usize,
    },
    /// Delete all seeded families and their data
    ClearSeed {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("❌ DATABASE_URL must be set");
        std::process::exit(1);
    };

    let pool = match sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Seed {
            families,
            students,
            sessions,
        } => handle_seed(&pool, families, students, sessions).await,
        Commands::ClearSeed { yes } => handle_clear_seed(&pool, yes).await,
    }
}

async fn handle_seed(pool: &sqlx::postgres::PgPool, families: usize, students: usize, sessions: usize) {
    let config = SeedConfig::new(families)
        .with_students(students)
        .with_sessions(sessions);

    if let Err(e) = seeder::seed_all(pool, config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear_seed(pool: &sqlx::postgres::PgPool, yes: bool) {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete all seeded families, students and sessions?")
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            println!("Aborted.");
            return;
        }
    }

    if let Err(e) = seeder::clear_all(pool).await {
        eprintln!("\n❌ Error clearing seeded data: {}", e);
        std::process::exit(1);
    }
}
