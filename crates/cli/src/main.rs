use anyhow::{Context, Result, anyhow};
use catalog::{Cafe, CafeCatalog, CafeId, DietaryTag, Seating, parse_distance};
use clap::{Parser, Subcommand};
use colored::Colorize;
use finder::{FilterConfig, SortKey, query};
use rayon::prelude::*;
use session::{AddOutcome, Profile, UserSession};
use std::path::PathBuf;
use std::time::Instant;

/// Cafe Finder - find a café that fits what you need
#[derive(Parser)]
#[command(name = "cafe-finder")]
#[command(about = "Filter and rank nearby cafés by amenities", long_about = None)]
struct Cli {
    /// JSON catalog to load instead of the built-in sample
    #[arg(short, long, env = "CAFE_FINDER_DATA", global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every café in the catalog
    List,

    /// Filter and sort cafés
    Search {
        /// Dietary option to look for (repeatable; any match qualifies)
        #[arg(long)]
        dietary: Vec<DietaryTag>,

        /// Acceptable seating style (repeatable)
        #[arg(long)]
        seating: Vec<Seating>,

        /// Only cafés with power outlets
        #[arg(long)]
        outlets_only: bool,

        /// Search radius, e.g. "5km" or "2 mi"
        #[arg(long, value_parser = parse_distance)]
        within: Option<f64>,

        /// Sort order: distance, rating, noise or study
        #[arg(long, default_value = "distance")]
        sort: SortKey,
    },

    /// Show details for one café
    Show {
        /// Café ID to display
        #[arg(long)]
        id: String,
    },

    /// Save and unsave cafés for a session, then list what is saved
    Favorites {
        /// Café ID to save (repeatable)
        #[arg(long)]
        add: Vec<String>,

        /// Café ID to unsave (repeatable, applied after all adds)
        #[arg(long)]
        remove: Vec<String>,

        /// Display name for the session
        #[arg(long, default_value = "Alex")]
        name: String,

        /// Location shown in the header
        #[arg(long, default_value = "New York, NY")]
        location: String,
    },

    /// Run many queries in parallel and report throughput
    Benchmark {
        /// Number of queries to run
        #[arg(long, default_value = "10000")]
        requests: usize,
    },
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

    let catalog = match &cli.data {
        Some(path) => CafeCatalog::load_from_file(path)
            .with_context(|| format!("Failed to load café catalog from {}", path.display()))?,
        None => CafeCatalog::sample(),
    };
    tracing::debug!(cafes = catalog.len(), "Catalog ready");

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List => handle_list(&catalog),
        Commands::Search {
            dietary,
            seating,
            outlets_only,
            within,
            sort,
        } => {
            let mut config = FilterConfig::new()
                .with_outlets_only(outlets_only)
                .with_sort(sort);
            config.dietary.extend(dietary);
            config.seating.extend(seating);
            if let Some(km) = within {
                config = config.within_km(km);
            }
            handle_search(&catalog, &config)
        }
        Commands::Show { id } => handle_show(&catalog, &CafeId::new(id))?,
        Commands::Favorites {
            add,
            remove,
            name,
            location,
        } => handle_favorites(&catalog, Profile::new(name, location), add, remove)?,
        Commands::Benchmark { requests } => handle_benchmark(&catalog, requests)?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(catalog: &CafeCatalog) {
    println!("{}", format!("{} cafés:", catalog.len()).bold().blue());
    for cafe in catalog.cafes() {
        print_cafe_line(None, cafe);
    }
}

/// Handle the 'search' command
fn handle_search(catalog: &CafeCatalog, config: &FilterConfig) {
    let results = query(catalog.cafes(), config);

    if results.is_empty() {
        println!("{}", "No cafés match your filters".yellow());
        if config.has_active_filters() {
            println!("Try removing a filter or widening the radius.");
        }
        return;
    }

    println!(
        "{}",
        format!("{} cafés, sorted by {}:", results.len(), config.sort_key)
            .bold()
            .blue()
    );
    for (rank, cafe) in results.iter().enumerate() {
        print_cafe_line(Some(rank + 1), cafe);
    }
}

/// Handle the 'show' command
fn handle_show(catalog: &CafeCatalog, id: &CafeId) -> Result<()> {
    let cafe = catalog
        .get(id)
        .ok_or_else(|| anyhow!("Café {} not found", id))?;

    println!("{}", cafe.name.bold().blue());
    println!("{}", cafe.tagline.italic());
    println!("{}Distance: {:.1} km", "• ".green(), cafe.distance_km);
    println!("{}Rating: {:.1} / 5", "• ".green(), cafe.rating);
    println!("{}Outlets: {}", "• ".green(), yes_no(cafe.outlets));
    println!("{}Food: {}", "• ".green(), yes_no(cafe.food));
    println!("{}Seating: {}", "• ".cyan(), cafe.seating);
    println!("{}Noise level: {}", "• ".cyan(), cafe.noise_level);
    println!("{}Study-friendly: {} / 5", "• ".cyan(), cafe.study_friendly);
    println!("{}Dietary options: {}", "• ".cyan(), dietary_list(cafe));
    Ok(())
}

/// Handle the 'favorites' command
fn handle_favorites(
    catalog: &CafeCatalog,
    profile: Profile,
    add: Vec<String>,
    remove: Vec<String>,
) -> Result<()> {
    let mut session = UserSession::new();
    session.sign_in(profile);

    for id in add.into_iter().map(CafeId::new) {
        if !catalog.contains(&id) {
            return Err(anyhow!("Cannot save café {}: not in catalog", id));
        }
        match session.favorites_mut().add(id.clone()) {
            AddOutcome::Added => println!("{} Added {} to favorites", "✓".green(), id),
            AddOutcome::AlreadyPresent => println!("{} {} already in favorites", "•".yellow(), id),
        }
    }

    for id in remove.into_iter().map(CafeId::new) {
        if session.favorites_mut().remove(&id) {
            println!("{} Removed {} from favorites", "✓".green(), id);
        } else {
            println!("{} {} not in favorites", "•".yellow(), id);
        }
    }

    if let Some(profile) = session.profile() {
        println!(
            "{}",
            format!("Favorite cafés for {} ({}):", profile.name, profile.location)
                .bold()
                .blue()
        );
    }
    let saved = session.favorites().resolve(catalog);
    if saved.is_empty() {
        println!("No favorites yet");
    }
    for cafe in saved {
        print_cafe_line(None, cafe);
    }
    Ok(())
}

/// Handle the 'benchmark' command
///
/// Queries run on the rayon pool against the same catalog with no locking.
/// Every query with the same config must produce the same ordering.
fn handle_benchmark(catalog: &CafeCatalog, requests: usize) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("--requests must be at least 1"));
    }

    let configs: Vec<FilterConfig> = SortKey::ALL
        .into_iter()
        .flat_map(|sort| {
            [
                FilterConfig::new().with_sort(sort),
                FilterConfig::new().with_outlets_only(true).with_sort(sort),
                FilterConfig::new()
                    .toggle_dietary(DietaryTag::Vegetarian)
                    .toggle_dietary(DietaryTag::GlutenFree)
                    .with_sort(sort),
            ]
        })
        .collect();

    let expected: Vec<Vec<&CafeId>> = configs
        .iter()
        .map(|config| query(catalog.cafes(), config).into_iter().map(|c| &c.id).collect())
        .collect();

    let start = Instant::now();
    let mismatches = (0..requests)
        .into_par_iter()
        .filter(|i| {
            let slot = i % configs.len();
            let ids: Vec<&CafeId> = query(catalog.cafes(), &configs[slot])
                .into_iter()
                .map(|c| &c.id)
                .collect();
            ids != expected[slot]
        })
        .count();
    let elapsed = start.elapsed();

    if mismatches > 0 {
        return Err(anyhow!("{} of {} queries returned a different ordering", mismatches, requests));
    }

    let throughput = requests as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    println!("Benchmark results:");
    println!("Queries: {} across {} threads", requests, rayon::current_num_threads());
    println!("Total time: {:?}", elapsed);
    println!("Average latency: {:?}", elapsed / requests as u32);
    println!("Throughput: {:.0} queries/second", throughput);
    Ok(())
}

/// Helper function to print one café as a single line
fn print_cafe_line(rank: Option<usize>, cafe: &Cafe) {
    let prefix = match rank {
        Some(rank) => format!("{}.", rank).green().to_string(),
        None => format!("[{}]", cafe.id).dimmed().to_string(),
    };
    println!(
        "{} {} - {:.1} km, ★ {:.1}, {}, {}, study {}/5{} [{}]",
        prefix,
        cafe.name.bold(),
        cafe.distance_km,
        cafe.rating,
        cafe.seating,
        cafe.noise_level,
        cafe.study_friendly,
        if cafe.outlets { ", outlets" } else { "" },
        dietary_list(cafe)
    );
}

fn dietary_list(cafe: &Cafe) -> String {
    if cafe.dietary_options.is_empty() {
        return "none".to_string();
    }
    cafe.dietary_options
        .iter()
        .map(|tag| tag.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
