use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{error, info};
use rust_decimal::{Decimal, RoundingStrategy};

use rusty_receipts::stores::load_fixture;
use rusty_receipts::{MemoryStore, Repository, SledStore, Transaction, TABLE_NAME};

const DEFAULT_FIXTURE: &str = "data/transactions.csv";

#[derive(Parser)]
#[command(name = "rusty-receipts", version, about = "Look up a transaction by its composite key")]
struct Cli {
    /// Transaction ID (partition key)
    id: String,

    /// Customer ID (sort key)
    customer_id: String,

    /// CSV file with `ID,CustomerID,Amount` rows to seed the store with.
    /// Defaults to data/transactions.csv when --sled is not given.
    #[arg(long, value_name = "CSV")]
    fixture: Option<PathBuf>,

    /// Use a persistent sled database in this directory instead of memory
    #[arg(long, value_name = "DIR")]
    sled: Option<PathBuf>,

    /// Table to read from
    #[arg(long, default_value = TABLE_NAME)]
    table: String,

    /// Print the transaction as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let transaction = match &cli.sled {
        Some(dir) => {
            let store = open_sled(dir, cli.fixture.as_deref(), &cli.table)?;
            Repository::new(store)
                .with_table_name(&cli.table)
                .get_transaction(&cli.id, &cli.customer_id)?
        }
        None => {
            let fixture = cli.fixture.clone().unwrap_or_else(|| DEFAULT_FIXTURE.into());
            let store = seed_memory(&fixture, &cli.table)?;
            Repository::new(store)
                .with_table_name(&cli.table)
                .get_transaction(&cli.id, &cli.customer_id)?
        }
    };

    report(&transaction, cli.json)
}

fn seed_memory(fixture: &Path, table: &str) -> Result<MemoryStore, Box<dyn Error>> {
    let mut store = MemoryStore::new();
    store.create_table(table);
    for row in load_fixture(fixture)? {
        store.put_item(table, row.key(), row.to_item())?;
    }
    info!("Seeded {} items from {}", store.len(table).unwrap_or(0), fixture.display());
    Ok(store)
}

fn open_sled(dir: &Path, fixture: Option<&Path>, table: &str) -> Result<SledStore, Box<dyn Error>> {
    info!("Opening sled database at {}", dir.display());
    let store = SledStore::new(sled::open(dir)?);
    if let Some(fixture) = fixture {
        store.create_table(table)?;
        let rows = load_fixture(fixture)?;
        for row in &rows {
            store.put_item(table, &row.key(), &row.to_item())?;
        }
        info!("Imported {} items from {}", rows.len(), fixture.display());
    }
    Ok(store)
}

fn report(transaction: &Transaction, json: bool) -> Result<(), Box<dyn Error>> {
    info!(
        "ID: {}, Customer ID: {}, Amount {:.2}",
        transaction.id,
        transaction.customer_id,
        fixed_2dp(transaction.amount)
    );
    if json {
        println!("{}", serde_json::to_string(transaction)?);
    }
    Ok(())
}

/// Rounds half away from zero, so `10.125` reports as `10.13`.
fn fixed_2dp(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
