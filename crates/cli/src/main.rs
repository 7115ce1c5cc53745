use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use directory::{
    load_cases_from_file, Availability, AvailabilityFilter, CaseOutcome, CaseRecord, Directory,
    LawyerRecord, LawyerRegistration,
};
use matching::{CaseRollup, DirectorySession, FilterCriteria, DEFAULT_FEE_CEILING};
use std::path::{Path, PathBuf};
use tracing::info;

/// Nyaya - lawyer directory and case statistics
#[derive(Parser)]
#[command(name = "nyaya")]
#[command(about = "Search the lawyer directory and summarise case outcomes", long_about = None)]
struct Cli {
    /// Path to the lawyer dataset (JSON)
    #[arg(short, long, default_value = "data/lawyers.json")]
    dataset: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every lawyer matching the filters
    Search {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show one lawyer card from the filtered carousel
    Browse {
        #[command(flatten)]
        filters: FilterArgs,

        /// Position to jump to before stepping
        #[arg(long, default_value = "0")]
        start: usize,

        /// Steps to move: positive goes forward, negative goes back
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        steps: i64,
    },

    /// Summarise a case history file
    Cases {
        /// Path to the case dataset (JSON)
        #[arg(long, default_value = "data/cases.json")]
        file: PathBuf,
    },

    /// Register a new lawyer and save the dataset
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        location: String,
        /// Comma-separated list, e.g. "Family Law, Property Law"
        #[arg(long)]
        specialization: String,
        /// Years of practice
        #[arg(long)]
        experience: String,
        /// Fee per consultation
        #[arg(long)]
        fees: String,
        /// Comma-separated list
        #[arg(long, default_value = "")]
        qualifications: String,
        /// Comma-separated list
        #[arg(long, default_value = "")]
        languages: String,
        /// available, busy or unavailable (default available)
        #[arg(long, default_value = "")]
        availability: String,
        #[arg(long, default_value = "")]
        bio: String,
    },
}

/// Directory filter options shared by `search` and `browse`
#[derive(Args, Debug, Clone)]
struct FilterArgs {
    /// Highest acceptable fee
    #[arg(long, default_value_t = DEFAULT_FEE_CEILING)]
    max_fee: f64,

    /// Lowest acceptable rating (0-5)
    #[arg(long, default_value_t = 0.0)]
    min_rating: f64,

    /// Fewest acceptable years of practice
    #[arg(long, default_value_t = 0)]
    min_experience: u32,

    /// any, available or busy
    #[arg(long, default_value = "any")]
    availability: AvailabilityFilter,

    /// Case-insensitive part of the location
    #[arg(long, default_value = "")]
    location: String,

    /// Case-insensitive part of the name or a specialization
    #[arg(short, long, default_value = "")]
    query: String,

    /// Case-insensitive part of a specialization
    #[arg(long)]
    specialization: Option<String>,
}

impl FilterArgs {
    fn to_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::with_fee_ceiling(DEFAULT_FEE_CEILING)
            .max_fee(self.max_fee)
            .min_rating(self.min_rating)
            .min_experience(self.min_experience)
            .availability(self.availability)
            .location(self.location.clone())
            .search_term(self.query.clone());
        criteria.specialization = self.specialization.clone();
        criteria
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search { filters } => handle_search(&cli.dataset, &filters)?,
        Commands::Browse {
            filters,
            start,
            steps,
        } => handle_browse(&cli.dataset, &filters, start, steps)?,
        Commands::Cases { file } => handle_cases(&file)?,
        Commands::Register {
            name,
            email,
            phone,
            location,
            specialization,
            experience,
            fees,
            qualifications,
            languages,
            availability,
            bio,
        } => {
            let registration = LawyerRegistration {
                name,
                email,
                phone,
                location,
                specialization,
                experience,
                fees,
                qualifications,
                languages,
                availability,
                bio,
            };
            handle_register(&cli.dataset, registration)?
        }
    }

    Ok(())
}

fn load_directory(path: &Path) -> Result<Directory> {
    Directory::load_from_file(path)
        .with_context(|| format!("Failed to load lawyer dataset {}", path.display()))
}

/// Handle the 'search' command
fn handle_search(dataset: &Path, filters: &FilterArgs) -> Result<()> {
    let directory = load_directory(dataset)?;
    let mut session = DirectorySession::new(directory, DEFAULT_FEE_CEILING);
    let count = session.set_criteria(filters.to_criteria());

    if count == 0 {
        print_empty_state();
        return Ok(());
    }

    println!(
        "{}",
        format!("{} of {} lawyers match", count, session.directory().len())
            .bold()
            .blue()
    );
    for (rank, lawyer) in session.results().into_iter().enumerate() {
        println!(
            "{}. {} [{}] - {} - {} yrs - rating {:.1} - fee {:.0} - {}",
            (rank + 1).to_string().green(),
            lawyer.name,
            lawyer.specialization.join(", "),
            lawyer.location,
            lawyer.experience_years,
            lawyer.rating,
            lawyer.fee_per_unit,
            availability_label(lawyer.availability),
        );
    }
    Ok(())
}

/// Handle the 'browse' command
fn handle_browse(dataset: &Path, filters: &FilterArgs, start: usize, steps: i64) -> Result<()> {
    let directory = load_directory(dataset)?;
    let mut session = DirectorySession::new(directory, DEFAULT_FEE_CEILING);
    session.set_criteria(filters.to_criteria());

    if session.result_count() == 0 {
        print_empty_state();
        return Ok(());
    }

    session
        .jump_to(start)
        .context("Start position is outside the filtered results")?;
    for _ in 0..steps.unsigned_abs() {
        if steps > 0 {
            session.next();
        } else {
            session.prev();
        }
    }

    let position = session.cursor().current().unwrap_or_default();
    if let Some(lawyer) = session.current() {
        print_lawyer_card(lawyer, position, session.result_count());
    }
    Ok(())
}

/// Handle the 'cases' command
fn handle_cases(file: &Path) -> Result<()> {
    let cases = load_cases_from_file(file)
        .with_context(|| format!("Failed to load case dataset {}", file.display()))?;
    let rollup = CaseRollup::from_cases(&cases);

    println!("{}", format!("{} cases found", rollup.total).bold().blue());
    println!("{}Won: {}", "• ".green(), rollup.won);
    println!("{}Lost: {}", "• ".red(), rollup.lost);
    println!("{}Settled: {}", "• ".yellow(), rollup.settled);
    println!("{}Win rate: {}%", "• ".cyan(), rollup.win_rate);
    println!(
        "{}Precedents: {} - average relevance {}%",
        "• ".cyan(),
        rollup.precedents,
        rollup.average_relevance
    );

    for case in &cases {
        print_case(case);
    }
    Ok(())
}

/// Handle the 'register' command
fn handle_register(dataset: &Path, registration: LawyerRegistration) -> Result<()> {
    let mut directory = if dataset.exists() {
        load_directory(dataset)?
    } else {
        Directory::new()
    };

    let record = directory
        .register(registration)
        .context("Registration was not accepted")?;
    println!(
        "{} Registered {} with id {}",
        "✓".green(),
        record.name,
        record.id
    );

    directory
        .save_to_file(dataset)
        .with_context(|| format!("Failed to save lawyer dataset {}", dataset.display()))?;
    info!("Directory now holds {} lawyers", directory.len());
    Ok(())
}

fn availability_label(availability: Availability) -> colored::ColoredString {
    match availability {
        Availability::Available => availability.to_string().green(),
        Availability::Busy => availability.to_string().yellow(),
        Availability::Unavailable => availability.to_string().red(),
    }
}

fn print_empty_state() {
    println!("{}", "No lawyers found matching your criteria.".yellow());
    println!("Try clearing some filters.");
}

fn print_lawyer_card(lawyer: &LawyerRecord, position: usize, total: usize) {
    println!(
        "{} {}",
        format!("[{}]", lawyer.initials()).bold(),
        lawyer.name.bold().blue()
    );
    println!("{}{}", "• ".green(), lawyer.location);
    println!(
        "{}Rating {:.1} - {} years exp. - {} cases won",
        "• ".green(),
        lawyer.rating,
        lawyer.experience_years,
        lawyer.cases_won
    );
    println!("{}{}", "• ".green(), lawyer.specialization.join(", "));
    println!("{}Fee {:.0} per hour", "• ".green(), lawyer.fee_per_unit);
    println!("{}{}", "• ".green(), availability_label(lawyer.availability));
    if !lawyer.qualifications.is_empty() {
        println!("{}{}", "• ".cyan(), lawyer.qualifications.join(" | "));
    }
    if !lawyer.contact.phone.is_empty() || !lawyer.contact.email.is_empty() {
        println!(
            "{}{} {}",
            "• ".cyan(),
            lawyer.contact.phone,
            lawyer.contact.email
        );
    }
    if !lawyer.bio.is_empty() {
        println!("  {}", lawyer.bio);
    }
    println!("{}", format!("({} of {})", position + 1, total).dimmed());
}

fn print_case(case: &CaseRecord) {
    let outcome = match case.outcome {
        CaseOutcome::Won => case.outcome.to_string().green(),
        CaseOutcome::Lost => case.outcome.to_string().red(),
        CaseOutcome::Settled => case.outcome.to_string().yellow(),
    };
    let precedent = if case.precedent { " [Precedent]" } else { "" };
    println!(
        "\n{} ({} • {}) {}{}",
        case.title.bold(),
        case.year,
        case.court,
        outcome,
        precedent
    );
    if !case.description.is_empty() {
        println!("  {}", case.description);
    }
    if let Some(penalty) = &case.penalty {
        println!("  Outcome: {}", penalty);
    }
    println!("  Relevance: {}%", case.relevance_score);
}
