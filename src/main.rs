//! Library catalog demo driver
//!
//! Builds a small catalog, runs a borrow/return cycle and prints the
//! resulting history.

use std::rc::Rc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_catalog::{
    clock::SystemClock,
    config::AppConfig,
    models::{AgeRating, Book, BorrowRecord, CatalogEntry, Disc, Genre, Periodical},
    Services,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_catalog={}", config.logging.level).into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting library catalog v{}", env!("CARGO_PKG_VERSION"));

    let mut services = Services::new(&config, Rc::new(SystemClock));
    services.catalog.add_item(Book::new(
        1,
        "The Great Gatsby",
        1925,
        "F. Scott Fitzgerald",
        180,
        Genre::Classic,
    ))?;
    services.catalog.add_item(Disc::new(
        2,
        "Spirited Away",
        2001,
        "Hayao Miyazaki",
        125,
        AgeRating::Pg,
    ))?;
    services.catalog.add_item(Periodical::new(
        3,
        "Scientific American",
        2024,
        5,
        "Springer Nature",
    ))?;

    services.catalog.display_all_items(&mut std::io::stdout().lock())?;

    let mut history: Vec<BorrowRecord> = Vec::new();

    services.borrow(1)?;
    if let Err(e) = services.borrow(1) {
        println!("Second borrow refused [{:?}]: {}", e.code(), e);
    }
    if let Some(record) = services.return_item(1, "Jay Gatsby")? {
        history.push(record);
    }

    let update = services.catalog.update_item_title(2, "Spirited Away (Special Edition)");
    if let Some(old) = update.old_title {
        println!("Renamed '{}'", old);
    }

    if let Some(item) = services.catalog.search_by_title("gatsby") {
        println!("Found: {}", item);
        println!("Fee for 4 days late: {}", item.calculate_late_return_fee(4));
    }

    println!("{}", serde_json::to_string_pretty(&history)?);
    Ok(())
}
