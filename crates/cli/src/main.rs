//! Demo Deck CLI - Drive the task list, shop and weather demos from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show active tasks mentioning "report"
//! deck tasks list --status active --search report
//!
//! # Cheapest electronics first
//! deck shop products --category Electronics --sort price-low
//!
//! # Put two of product 4 in the cart
//! deck cart add 4
//! deck cart set 4 2
//!
//! # Try the hand-entered basket (starts from the starter items each run)
//! deck basket add Webcam 59.50 2
//!
//! # Raw reducer action
//! deck shop dispatch '{"type": "CLEAR_CART"}'
//!
//! # Weather, refreshing every WEATHER_REFRESH_SECS; type a city to switch
//! deck weather London --watch
//! ```
//!
//! State lives in `DECK_DATA_DIR` (one JSON file per key), so separate
//! invocations share the task list and the cart.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use demo_deck_core::{BasketItemId, ProductId, SortBy, TaskId, TaskStatus};
use demo_deck_shop::{Basket, Shop, demo_basket, demo_catalog};
use demo_deck_storage::Store;
use demo_deck_tasks::{TaskList, demo_tasks};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::CommandError;
use commands::shop::ProductQuery;
use config::DeckConfig;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "deck")]
#[command(author, version, about = "Demo Deck: task list, shop and weather demos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the task list
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Browse the catalog or dispatch raw shop actions
    Shop {
        #[command(subcommand)]
        action: ShopCommand,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Try the hand-entered basket; changes are not saved
    Basket {
        #[command(subcommand)]
        action: BasketAction,
    },
    /// Show current weather for a city
    Weather {
        /// City name
        city: String,

        /// Keep refreshing until interrupted; type a city name to switch
        #[arg(short, long)]
        watch: bool,
    },
}

#[derive(Subcommand)]
enum TaskAction {
    /// List tasks
    List {
        /// Completion filter (`all`, `active`, `completed`)
        #[arg(short, long, default_value = "all")]
        status: TaskStatus,

        /// Case-insensitive description filter
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Add a task
    Add {
        /// Task description
        text: String,
    },
    /// Replace a task's description
    Edit {
        id: TaskId,
        /// New description
        text: String,
    },
    /// Flip a task between active and completed
    Toggle { id: TaskId },
    /// Delete a task
    Delete { id: TaskId },
    /// Show task counts
    Stats,
}

#[derive(Subcommand)]
enum ShopCommand {
    /// List products
    Products {
        /// Category to show (see `deck shop categories`)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,

        /// Ordering (`name`, `price-low`, `price-high`, `rating`)
        #[arg(long)]
        sort: Option<SortBy>,
    },
    /// List categories
    Categories,
    /// Apply a JSON action such as '{"type": "ADD_TO_CART", "payload": {...}}'
    Dispatch {
        /// Action in wire form
        json: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show,
    /// Add one unit of a product
    Add { id: ProductId },
    /// Remove a product's line
    Remove { id: ProductId },
    /// Set a line's quantity; zero or less removes it
    Set {
        id: ProductId,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum BasketAction {
    /// Show the starter items and total
    Show,
    /// Add an item after validating the fields
    Add {
        name: String,
        /// Unit price, e.g. 19.99
        #[arg(allow_hyphen_values = true)]
        price: String,
        /// Whole number of units, at least 1
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Remove an item by id
    Remove { id: BasketItemId },
    /// Remove every item
    Clear,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout is reserved for command output.
///
/// Defaults to info level for our crates if `RUST_LOG` is not set. Set
/// `DECK_LOG_FORMAT=json` for structured output.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "demo_deck=info".into());

    let is_json = std::env::var("DECK_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let config = DeckConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Tasks { action } => {
            let store = Store::file(config.data_dir.clone())?;
            let mut tasks = TaskList::open(store.open_view(), demo_tasks());
            match action {
                TaskAction::List { status, search } => {
                    commands::tasks::list(&tasks, status, &search, &mut out)?;
                }
                TaskAction::Add { text } => commands::tasks::add(&mut tasks, &text, &mut out)?,
                TaskAction::Edit { id, text } => {
                    commands::tasks::edit(&mut tasks, id, &text, &mut out)?;
                }
                TaskAction::Toggle { id } => commands::tasks::toggle(&mut tasks, id, &mut out)?,
                TaskAction::Delete { id } => commands::tasks::delete(&mut tasks, id, &mut out)?,
                TaskAction::Stats => commands::tasks::stats(&tasks, &mut out)?,
            }
        }
        Commands::Shop { action } => {
            let store = Store::file(config.data_dir.clone())?;
            let mut shop = Shop::open(store.open_view(), demo_catalog(), config.cart_restore);
            match action {
                ShopCommand::Products {
                    category,
                    search,
                    sort,
                } => {
                    let query = ProductQuery {
                        category,
                        search,
                        sort,
                    };
                    commands::shop::products(&mut shop, query, &mut out)?;
                }
                ShopCommand::Categories => commands::shop::categories(&shop, &mut out)?,
                ShopCommand::Dispatch { json } => {
                    commands::shop::dispatch(&mut shop, &json, &mut out)?;
                }
            }
        }
        Commands::Cart { action } => {
            let store = Store::file(config.data_dir.clone())?;
            let mut shop = Shop::open(store.open_view(), demo_catalog(), config.cart_restore);
            match action {
                CartAction::Show => commands::cart::show(&shop, &mut out)?,
                CartAction::Add { id } => commands::cart::add(&mut shop, id, &mut out)?,
                CartAction::Remove { id } => commands::cart::remove(&mut shop, id, &mut out)?,
                CartAction::Set { id, quantity } => {
                    commands::cart::set(&mut shop, id, quantity, &mut out)?;
                }
                CartAction::Clear => commands::cart::clear(&mut shop, &mut out)?,
            }
        }
        Commands::Basket { action } => {
            let mut basket = Basket::new(demo_basket());
            match action {
                BasketAction::Show => commands::basket::show(&basket, &mut out)?,
                BasketAction::Add {
                    name,
                    price,
                    quantity,
                } => commands::basket::add(&mut basket, &name, &price, &quantity, &mut out)?,
                BasketAction::Remove { id } => commands::basket::remove(&mut basket, id, &mut out)?,
                BasketAction::Clear => commands::basket::clear(&mut basket, &mut out)?,
            }
        }
        Commands::Weather { city, watch } => {
            config.require_weather_key()?;
            if watch {
                commands::weather::watch(&config.weather, &city, &mut out).await?;
            } else {
                commands::weather::once(&config.weather, &city, &mut out).await?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_negative_quantity() {
        let cli = Cli::try_parse_from(["deck", "cart", "set", "4", "-1"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Cart {
                action: CartAction::Set { quantity: -1, .. }
            })
        ));
    }

    #[test]
    fn test_basket_fields_stay_raw_text() {
        let cli = Cli::try_parse_from(["deck", "basket", "add", "Webcam", "-5", "x"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Basket {
                action: BasketAction::Add { ref price, .. }
            }) if price == "-5"
        ));
    }

    #[test]
    fn test_parses_status_and_sort() {
        assert!(Cli::try_parse_from(["deck", "tasks", "list", "--status", "Completed"]).is_ok());
        assert!(Cli::try_parse_from(["deck", "tasks", "list", "--status", "done"]).is_err());
        assert!(
            Cli::try_parse_from(["deck", "shop", "products", "--sort", "price-low"]).is_ok()
        );
    }
}
