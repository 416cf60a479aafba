// main.rs — terminal front-end for the catalog.
//
// This binary is the "rendering layer": it turns command-line flags into a
// Query, hands it to the engine, and prints whatever comes back. All of the
// actual logic lives in the library; nothing here filters or sorts on its
// own.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use moviedex::{Catalog, MediaRecord, MediaType, Query, SortKey};

#[derive(Parser)]
#[command(name = "moviedex", version)]
#[command(about = "Browse a directory of movies and TV series from your terminal")]
struct Cli {
    /// Load the catalog from a JSON dataset file instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search, filter, and sort the directory
    List {
        /// Case-insensitive title search
        #[arg(short, long)]
        search: Option<String>,

        /// Keep only entries carrying this exact genre label
        #[arg(short, long)]
        genre: Option<String>,

        /// Keep only movies, or only series
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        media_type: Option<MediaType>,

        /// Minimum IMDb rating (0 means no floor)
        #[arg(short = 'r', long, value_name = "RATING")]
        min_rating: Option<f64>,

        /// Result order: default, year-asc, year-desc, rating-asc, rating-desc
        #[arg(long, default_value = "default")]
        sort: SortKey,

        /// Emit the results as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the detail view for one entry, by slug
    Show {
        slug: String,

        #[arg(long)]
        json: bool,
    },

    /// List every entry of one type (movie or series)
    Type {
        /// Route-style type value; only `movie` and `series` are valid
        value: String,
    },

    /// Print catalog statistics
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// Print the genre filter options
    Genres,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    // One load per process; every command below only reads.
    let catalog = match &cli.data {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    match cli.command {
        Command::List {
            search,
            genre,
            media_type,
            min_rating,
            sort,
            json,
        } => {
            let query = Query {
                search,
                genre,
                media_type,
                min_rating,
                sort,
            };
            let results = catalog.search(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_listing(&results);
            }
        }

        Command::Show { slug, json } => match catalog.lookup_by_slug(&slug) {
            Some(record) if json => println!("{}", serde_json::to_string_pretty(record)?),
            Some(record) => print_detail(record),
            // An unknown slug is a not-found view, not a failure.
            None => println!("Movie not found."),
        },

        Command::Type { value } => match value.parse::<MediaType>() {
            Ok(media_type) => {
                let results = catalog.by_type(media_type);
                let noun = match media_type {
                    MediaType::Movie => "movies",
                    MediaType::Series => "series",
                };
                println!(
                    "{}",
                    match media_type {
                        MediaType::Movie => "Movies",
                        MediaType::Series => "TV Series",
                    }
                );
                println!("Showing {} {noun}.\n", results.len());
                for record in &results {
                    print_line(record);
                }
            }
            // Invalid route value: an informational view, same as the
            // original's /type/{type} page.
            Err(_) => {
                println!("Invalid type: must be either `movie` or `series`.");
            }
        },

        Command::Stats { json } => {
            let stats = catalog.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(stats)?);
            } else {
                println!("Total items: {}", stats.total);
                println!("Movies:      {}", stats.movie_count);
                println!("Series:      {}", stats.series_count);
                println!("Top genres:  {}", stats.top_genres.join(", "));
            }
        }

        Command::Genres => {
            for option in catalog.genre_options() {
                println!("{option}");
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

fn rating_badge(record: &MediaRecord) -> String {
    match record.imdb_rating {
        Some(rating) => format!("{rating:.1}"),
        None => "N/A".to_string(),
    }
}

fn print_line(record: &MediaRecord) {
    println!(
        "{:>4}  {} ({})  [{}]  {}",
        rating_badge(record),
        record.title,
        record.year,
        record.media_type(),
        record.genre.join(", "),
    );
}

fn print_listing(results: &[&MediaRecord]) {
    if results.is_empty() {
        println!("No results found. Try changing filters or your search phrase.");
        return;
    }
    println!("Showing {} results\n", results.len());
    for record in results {
        print_line(record);
    }
}

fn print_detail(record: &MediaRecord) {
    println!("{} ({})", record.title, record.year);
    println!("Type:   {}", record.media_type().as_str().to_uppercase());
    println!("IMDb:   {}", rating_badge(record));
    if let Some(seasons) = record.kind.total_seasons() {
        println!("Seasons: {seasons}");
    }
    println!("Genres: {}", record.genre.join(", "));
    println!("\nOverview\n{}", record.plot);
    println!("\nPoster: {}", record.poster);
    if !record.images.is_empty() {
        println!("\nGallery");
        for image in &record.images {
            println!("  {image}");
        }
    }
}
