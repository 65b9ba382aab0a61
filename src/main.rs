//! `TravelEase` command line interface

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use travelease::api::AppState;
use travelease::catalog::{DestinationCatalog, NO_MATCH_ADVISORY};
use travelease::config::TravelEaseConfig;
use travelease::models::{
    BookingSelection, DestinationRecord, FilterCriteria, FlightClass, HotelTier, TravelCategory,
    TripPlan, TripSummary,
};
use travelease::narrative::{ItineraryRequest, NarrativeService, WeatherRequest};
use travelease::pricing::{PricingTable, TripCostEstimator};
use travelease::{TravelEaseError, web};

#[derive(Parser)]
#[command(
    name = "travelease",
    version,
    about = "Trip planning CLI with destination discovery, booking cost estimates and AI travel narratives"
)]
struct Cli {
    /// Path to a configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the JSON API server
    Serve {
        /// Port to listen on, overriding the configuration
        #[arg(long)]
        port: Option<u16>,
    },
    /// Browse the destination catalog, optionally filtered by preferences
    Destinations {
        /// Only show destinations with this travel type
        #[arg(long)]
        category: Option<TravelCategory>,
        /// Upper bound on the base package price in USD
        #[arg(long)]
        max_budget: Option<f64>,
        /// Upper bound on the recommended stay length in days
        #[arg(long)]
        max_duration: Option<u32>,
        /// Output format
        #[arg(long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },
    /// Estimate the cost of a booking
    Estimate {
        /// Catalog destination, by name
        #[arg(long)]
        destination: String,
        /// Flight cabin (economy, premium-economy, business, first-class)
        #[arg(long, default_value = "economy")]
        flight_class: FlightClass,
        /// Hotel tier (1-star through 5-star, luxury-resort, customized)
        #[arg(long, default_value = "3-star")]
        hotel_tier: HotelTier,
        /// Number of travelers
        #[arg(long)]
        travelers: Option<u32>,
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a full trip summary
    Summary(SummaryArgs),
    /// Curate a travel itinerary with the narrative backend
    Itinerary {
        /// Where the trip goes; any country, city or region
        #[arg(long)]
        destination: String,
        /// Trip length in days
        #[arg(long)]
        days: Option<u32>,
        /// Trip budget in USD
        #[arg(long)]
        budget: Option<f64>,
        /// Number of travelers
        #[arg(long)]
        travelers: Option<u32>,
        /// Travel mood the itinerary should lean into
        #[arg(long, default_value = "Thrill seeking")]
        profile: String,
        /// Travel style the itinerary is curated for
        #[arg(long, default_value = "adventure")]
        category: TravelCategory,
    },
    /// Generate a weather outlook with the narrative backend
    Weather {
        /// Place the outlook covers
        #[arg(long)]
        location: String,
        /// Number of days the outlook covers
        #[arg(long)]
        days: Option<u32>,
        /// First day of the outlook (YYYY-MM-DD); 30 days out when omitted
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },
}

#[derive(Args)]
struct SummaryArgs {
    /// Catalog destination, by name
    #[arg(long)]
    destination: String,
    /// Flight cabin
    #[arg(long, default_value = "economy")]
    flight_class: FlightClass,
    /// Hotel tier
    #[arg(long, default_value = "3-star")]
    hotel_tier: HotelTier,
    /// Number of travelers
    #[arg(long)]
    travelers: Option<u32>,
    /// Departure date (YYYY-MM-DD); 30 days out when omitted
    #[arg(long)]
    departure_date: Option<NaiveDate>,
    /// Planned stay length in days
    #[arg(long)]
    duration: Option<u32>,
    /// Travel style; the destination's own category when omitted
    #[arg(long)]
    category: Option<TravelCategory>,
    /// Output format
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    format: SummaryFormat,
    /// Write the summary to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListFormat {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TravelEaseConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    init_tracing(cli.verbose, &config);

    match cli.command {
        None => print_overview(&cli, &config),
        Some(Commands::Serve { port }) => {
            let mut config = config;
            if let Some(port) = port {
                config.server.port = port;
            }
            let state = AppState::new(&config)?;
            web::run(&config, state).await?;
        }
        Some(Commands::Destinations {
            category,
            max_budget,
            max_duration,
            format,
        }) => run_destinations(&config, category, max_budget, max_duration, format)?,
        Some(Commands::Estimate {
            destination,
            flight_class,
            hotel_tier,
            travelers,
            json,
        }) => run_estimate(
            &config,
            &destination,
            flight_class,
            hotel_tier,
            travelers,
            json,
        )?,
        Some(Commands::Summary(args)) => run_summary(&config, &args)?,
        Some(Commands::Itinerary {
            destination,
            days,
            budget,
            travelers,
            profile,
            category,
        }) => {
            let request = ItineraryRequest {
                destination,
                days: days.unwrap_or(config.defaults.duration_days),
                budget_usd: budget.unwrap_or(config.defaults.budget_usd),
                travelers: travelers.unwrap_or(config.defaults.travelers),
                profile,
                category,
            };
            check_travelers(&config, request.travelers)?;
            let narratives = NarrativeService::gemini(&config.narrative)?;
            println!("Generating your personalized itinerary...");
            let narrative = narratives.curate_itinerary(&request).await?;
            println!("\n{narrative}");
        }
        Some(Commands::Weather {
            location,
            days,
            start_date,
        }) => {
            let request = WeatherRequest {
                location,
                days: days.unwrap_or(config.defaults.duration_days),
                start_date: start_date.unwrap_or_else(default_departure),
            };
            let narratives = NarrativeService::gemini(&config.narrative)?;
            let narrative = narratives.weather_outlook(&request).await?;
            println!("{narrative}");
        }
    }

    Ok(())
}

/// Route logs to stderr so command output stays pipeable
fn init_tracing(verbose: bool, config: &TravelEaseConfig) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("travelease={level}")));

    if config.logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn print_overview(cli: &Cli, config: &TravelEaseConfig) {
    let stats = DestinationCatalog::built_in().stats();
    println!("TravelEase - AI-assisted trip planning");
    println!(
        "{} destinations on offer | average price ${:.0} | average rating {:.1}/5.0",
        stats.total_destinations, stats.average_price, stats.average_rating
    );
    if config.narrative.api_key.is_some() {
        println!("Narratives: enabled ({})", config.narrative.model);
    } else {
        println!(
            "Narratives: disabled. The catalog and cost estimates work offline, no setup \
             required; set GEMINI_API_KEY for itineraries and weather outlooks."
        );
    }
    println!("Run 'travelease --help' to see available commands.");

    if cli.verbose {
        match &cli.config {
            Some(path) => println!("Using config from: {}", path.display()),
            None => match TravelEaseConfig::get_config_path() {
                Some(path) => println!("Using config from: {}", path.display()),
                None => println!("Using config from: built-in defaults"),
            },
        }
        println!("Log level: {}", config.logging.level);
        println!("Narrative model: {}", config.narrative.model);
    }
}

fn run_destinations(
    config: &TravelEaseConfig,
    category: Option<TravelCategory>,
    max_budget: Option<f64>,
    max_duration: Option<u32>,
    format: ListFormat,
) -> Result<()> {
    let catalog = DestinationCatalog::built_in();

    let records: Vec<DestinationRecord> = match category {
        Some(category) => {
            let criteria = FilterCriteria::new(
                category,
                max_budget.unwrap_or(config.defaults.budget_usd),
                max_duration.unwrap_or(config.defaults.duration_days),
            );
            criteria.validate()?;
            let matches: Vec<DestinationRecord> =
                catalog.filter(&criteria).into_iter().cloned().collect();
            if matches.is_empty() {
                println!("{NO_MATCH_ADVISORY}");
                return Ok(());
            }
            matches
        }
        None => catalog.records().to_vec(),
    };

    match format {
        ListFormat::Table => {
            for record in &records {
                println!(
                    "{:<20} {:>6} {:>5} {:>8} {:<12} {}",
                    record.name,
                    format!("${:.0}", record.price),
                    format!("{:.1}", record.rating),
                    format!("{} days", record.days),
                    record.category.to_string(),
                    record.highlights,
                );
            }
        }
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        ListFormat::Csv => print!("{}", DestinationCatalog::from_records(records).export_csv()),
    }
    Ok(())
}

fn run_estimate(
    config: &TravelEaseConfig,
    destination: &str,
    flight_class: FlightClass,
    hotel_tier: HotelTier,
    travelers: Option<u32>,
    json: bool,
) -> Result<()> {
    let travelers = travelers.unwrap_or(config.defaults.travelers);
    check_travelers(config, travelers)?;

    let catalog = DestinationCatalog::built_in();
    let record = find_destination(&catalog, destination)?;
    let estimator = estimator_from(config)?;
    let costs = estimator.compute(record, flight_class, hotel_tier, travelers)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&costs)?);
    } else {
        println!("Trip cost for {}", record.name);
        println!("Flight class: {flight_class}");
        println!("Hotel rating: {hotel_tier}");
        println!("Travelers: {travelers}");
        println!("Total cost: {}", costs.format_total());
        println!("Cost per person: {}", costs.format_per_person());
    }
    Ok(())
}

fn run_summary(config: &TravelEaseConfig, args: &SummaryArgs) -> Result<()> {
    let travelers = args.travelers.unwrap_or(config.defaults.travelers);
    check_travelers(config, travelers)?;

    let catalog = DestinationCatalog::built_in();
    let record = find_destination(&catalog, &args.destination)?;
    let plan = TripPlan {
        booking: BookingSelection::new(&record.name, args.flight_class, args.hotel_tier, travelers),
        departure_date: args.departure_date.unwrap_or_else(default_departure),
        duration_days: args.duration.unwrap_or(config.defaults.duration_days),
        category: args.category.unwrap_or(record.category),
    };
    plan.validate()?;

    let estimator = estimator_from(config)?;
    let costs = estimator.compute(record, args.flight_class, args.hotel_tier, travelers)?;
    let summary = TripSummary::build(record, &plan, &costs);

    let rendered = match args.format {
        SummaryFormat::Text => summary.render_report(),
        SummaryFormat::Json => serde_json::to_string_pretty(&summary)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Saved trip summary to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn estimator_from(config: &TravelEaseConfig) -> Result<TripCostEstimator> {
    let table = PricingTable::with_overrides(
        &config.pricing.flight_multipliers,
        &config.pricing.hotel_multipliers,
    )?;
    Ok(TripCostEstimator::new(table))
}

fn find_destination<'a>(
    catalog: &'a DestinationCatalog,
    name: &str,
) -> Result<&'a DestinationRecord> {
    catalog.find(name).ok_or_else(|| {
        TravelEaseError::validation(format!(
            "'{name}' is not in the catalog. Run 'travelease destinations' to see the lineup."
        ))
        .into()
    })
}

fn check_travelers(config: &TravelEaseConfig, travelers: u32) -> Result<()> {
    if travelers == 0 || travelers > config.defaults.max_travelers {
        return Err(TravelEaseError::validation(format!(
            "traveler count must be between 1 and {}",
            config.defaults.max_travelers
        ))
        .into());
    }
    Ok(())
}

/// The booking form opens 30 days out
fn default_departure() -> NaiveDate {
    Utc::now().date_naive() + chrono::Duration::days(30)
}
