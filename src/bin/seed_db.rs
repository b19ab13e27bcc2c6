use std::error::Error;

use clap::Parser;
use mongodb::Client;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use expenses_seed::{DATABASE_NAME, seed_database};

/// A utility for seeding the expense-tracking demo's MongoDB database with
/// sample users, categories, and expenses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Connection string of the MongoDB deployment to seed.
    #[arg(long, default_value = "mongodb://localhost:27017")]
    uri: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let client = Client::with_uri_str(&args.uri).await?;
    let db = client.database(DATABASE_NAME);

    println!("Seeding database '{DATABASE_NAME}'");
    let summary = seed_database(&db).await?;

    println!("Database initialized with sample data");
    println!("Users: {}", summary.users);
    println!("Categories: {}", summary.categories);
    println!("Expenses: {}", summary.expenses);

    Ok(())
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(filter::LevelFilter::INFO),
        )
        .init();
}
