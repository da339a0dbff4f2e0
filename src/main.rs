use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use grievance_redressal::config::AppConfig;
use grievance_redressal::logging::init_logging;
use grievance_redressal::render::{self, OutputFormat};
use grievance_redressal::{
    Category, CsvStore, GrievanceService, LexiconScorer, Location, Status, SubmissionForm,
};

#[derive(Parser)]
#[command(name = "grievance", author, version, about, long_about = None)]
struct Cli {
    /// Grievance store CSV file (overrides storage.data_file)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Output format (txt or json)
    #[arg(short, long, global = true, default_value = "txt")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a grievance
    Submit {
        /// Your name (optional)
        #[arg(short, long)]
        name: Option<String>,

        /// City, e.g. Delhi or Mumbai
        #[arg(short, long)]
        city: String,

        /// Area: Urban, Semi-Urban or Rural
        #[arg(short, long, default_value = "Urban")]
        location: Location,

        /// Grievance category, see `categories`
        #[arg(short = 't', long, default_value = "Public Safety")]
        category: Category,

        /// Describe your issue
        #[arg(short, long)]
        description: String,
    },
    /// Show your recent grievances
    Mine {
        /// Name used when submitting
        #[arg(short, long)]
        name: String,

        /// How many to show (defaults to citizen.recent_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List grievance categories and the department each routes to
    Categories,
    /// Admin dashboard
    Admin {
        /// Admin password
        #[arg(short, long)]
        password: Option<String>,

        #[command(subcommand)]
        action: AdminCommand,
    },
}

#[derive(Subcommand)]
enum AdminCommand {
    /// Total, resolved and pending counts
    Summary,
    /// All grievances, one line each
    List,
    /// Every field of one grievance
    Show {
        /// Grievance id
        #[arg(long)]
        id: String,
    },
    /// Change the status of a grievance
    SetStatus {
        /// Grievance id
        #[arg(long)]
        id: String,

        /// Submitted, In Progress or Resolved
        #[arg(short, long)]
        status: Status,
    },
    /// Complaints per department
    Departments,
    /// Complaints per city, as map markers
    Cities,
}

fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize logging; the guard flushes the file log on exit
    let _guard = init_logging(
        Some(&config.get_log_level()),
        config.logging.file_path.as_deref().map(Path::new),
        config.logging.format == "json",
    )?;

    let cli = Cli::parse();

    let data_file = cli
        .data_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.storage.data_file));
    debug!(path = %data_file.display(), "Opening grievance store");
    let store = CsvStore::open(&data_file)
        .with_context(|| format!("Failed to open grievance store {}", data_file.display()))?;

    let scorer = LexiconScorer::new()?;
    let service = GrievanceService::new(store, Box::new(scorer), config.get_admin_password());

    let output = match cli.command {
        Commands::Submit {
            name,
            city,
            location,
            category,
            description,
        } => {
            let grievance = service.submit(SubmissionForm {
                name,
                city,
                location,
                category,
                description,
            })?;
            render::render(cli.format, &grievance, render::submission_result)?
        }
        Commands::Mine { name, limit } => {
            let limit = limit.unwrap_or(config.citizen.recent_limit as usize);
            let mine = service.recent_for(&name, limit)?;
            render::render(cli.format, mine.as_slice(), render::grievance_table)?
        }
        Commands::Categories => render::category_guide(),
        Commands::Admin { password, action } => {
            render::or_empty_notice(run_admin(
                &service,
                cli.format,
                password.as_deref().unwrap_or(""),
                action,
            ))?
        }
    };

    emit(&output)?;
    info!("Done");
    Ok(())
}

fn run_admin(
    service: &GrievanceService<CsvStore>,
    format: OutputFormat,
    password: &str,
    action: AdminCommand,
) -> grievance_redressal::Result<String> {
    let mut console = service.admin(password)?;

    match action {
        AdminCommand::Summary => render::render(format, &console.summary(), render::summary),
        AdminCommand::List => render::render(format, console.records(), render::grievance_table),
        AdminCommand::Show { id } => {
            render::render(format, console.find(&id)?, render::grievance_details)
        }
        AdminCommand::SetStatus { id, status } => {
            let updated = console.update_status(&id, status)?;
            render::render(format, &updated, |g| {
                format!("Status of {} updated to {}\n", g.id, g.status)
            })
        }
        AdminCommand::Departments => render::render(
            format,
            console.department_counts().as_slice(),
            render::department_chart,
        ),
        AdminCommand::Cities => {
            render::render(format, console.city_markers().as_slice(), render::city_map)
        }
    }
}

fn emit(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
