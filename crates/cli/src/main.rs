//! Driftwood CLI - drive and inspect the local storefront store.
//!
//! # Usage
//!
//! ```bash
//! # Add an item to a shopper's cart, then look at it
//! driftwood cart add --owner u1 --item oak-table --name "Oak Table" --price 125.00
//! driftwood cart show --owner u1
//!
//! # Submit and list reviews
//! driftwood review add --product oak-table --author u1 --name Ada \
//!     --email ada@example.com --rating 5 --comment "Solid."
//! driftwood review list --product oak-table --sort highest
//!
//! # Aggregate metrics across every shopper
//! driftwood report
//! ```
//!
//! # Commands
//!
//! - `cart` - add/set-quantity/remove/show a shopper's cart
//! - `review` - add/delete/list product reviews
//! - `favorite` - add/remove/list favorites
//! - `order` - record sales and show purchase history
//! - `report` - per-item and store-wide analytics
//! - `seed` - populate the store with sample data

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use driftwood_store::{CollectionRepository, FileStore, ReviewOrder};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "driftwood")]
#[command(author, version, about = "Driftwood storefront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and mutate a shopper's cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Submit, delete, and list product reviews
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
    /// Toggle and list favorites
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },
    /// Record sales and show purchase history
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Per-item and store-wide analytics
    Report {
        /// Restrict the report to a single item id
        #[arg(short, long)]
        item: Option<String>,
    },
    /// Populate the store with sample shoppers, carts, reviews, and sales
    Seed,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add an item (or bump its quantity if already in the cart)
    Add {
        /// Owner (shopper) id
        #[arg(short, long)]
        owner: String,
        /// Item id
        #[arg(short, long)]
        item: String,
        /// Item display name
        #[arg(short, long)]
        name: String,
        /// Unit price, e.g. 125.00
        #[arg(short, long)]
        price: Decimal,
        /// Units in stock
        #[arg(long, default_value_t = 0)]
        stock: u32,
        /// Image URL
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Overwrite the quantity of a line
    SetQuantity {
        /// Owner (shopper) id
        #[arg(short, long)]
        owner: String,
        /// Item id
        #[arg(short, long)]
        item: String,
        /// New quantity (at least 1; use `remove` to delete)
        #[arg(short, long)]
        quantity: u32,
    },
    /// Remove a line
    Remove {
        /// Owner (shopper) id
        #[arg(short, long)]
        owner: String,
        /// Item id
        #[arg(short, long)]
        item: String,
    },
    /// Show the cart and its subtotal
    Show {
        /// Owner (shopper) id
        #[arg(short, long)]
        owner: String,
    },
}

#[derive(Subcommand)]
enum ReviewAction {
    /// Submit a review
    Add {
        /// Product (item) id
        #[arg(short, long)]
        product: String,
        /// Author (shopper) id
        #[arg(short, long)]
        author: String,
        /// Author display name
        #[arg(short, long)]
        name: String,
        /// Author email
        #[arg(short, long)]
        email: String,
        /// Star rating, 1-5
        #[arg(short, long)]
        rating: u8,
        /// Review text
        #[arg(short, long)]
        comment: String,
    },
    /// Delete a review by its position in the list
    Delete {
        /// Product (item) id
        #[arg(short, long)]
        product: String,
        /// Caller (shopper) id; must be the review's author
        #[arg(long)]
        caller: String,
        /// Zero-based index of the review to delete
        #[arg(short, long)]
        index: usize,
    },
    /// List a product's reviews
    List {
        /// Product (item) id
        #[arg(short, long)]
        product: String,
        /// Presentation order
        #[arg(short, long, value_enum, default_value = "newest")]
        sort: SortArg,
    },
}

#[derive(Subcommand)]
enum FavoriteAction {
    /// Favorite an item
    Add {
        /// Owner (shopper) id
        #[arg(short, long)]
        owner: String,
        /// Item id
        #[arg(short, long)]
        item: String,
        /// Item display name
        #[arg(short, long)]
        name: String,
        /// Unit price
        #[arg(short, long)]
        price: Decimal,
        /// Units in stock
        #[arg(long, default_value_t = 0)]
        stock: u32,
    },
    /// Unfavorite an item
    Remove {
        /// Owner (shopper) id
        #[arg(short, long)]
        owner: String,
        /// Item id
        #[arg(short, long)]
        item: String,
    },
    /// List an owner's favorites
    List {
        /// Owner (shopper) id
        #[arg(short, long)]
        owner: String,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Record a sale
    Record {
        /// Owner (purchasing shopper) id
        #[arg(short, long)]
        owner: String,
        /// Item id
        #[arg(short, long)]
        item: String,
        /// Item display name
        #[arg(short, long)]
        name: String,
        /// Unit price at purchase time
        #[arg(short, long)]
        price: Decimal,
        /// Units purchased
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Show an owner's purchase history
    History {
        /// Owner (shopper) id
        #[arg(short, long)]
        owner: String,
    },
}

/// Review orderings exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    /// Most recent first
    Newest,
    /// Best rating first
    Highest,
    /// Worst rating first
    Lowest,
}

impl From<SortArg> for ReviewOrder {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Newest => Self::Newest,
            SortArg::Highest => Self::HighestRated,
            SortArg::Lowest => Self::LowestRated,
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::CliConfig::from_env()?;
    let store = FileStore::open(&config.data_file)?;
    let mut repo = CollectionRepository::new(store);

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add {
                owner,
                item,
                name,
                price,
                stock,
                image,
            } => commands::cart::add(&mut repo, &owner, &item, &name, price, stock, &image)?,
            CartAction::SetQuantity {
                owner,
                item,
                quantity,
            } => commands::cart::set_quantity(&mut repo, &owner, &item, quantity)?,
            CartAction::Remove { owner, item } => {
                commands::cart::remove(&mut repo, &owner, &item)?;
            }
            CartAction::Show { owner } => commands::cart::show(&mut repo, &owner),
        },
        Commands::Review { action } => match action {
            ReviewAction::Add {
                product,
                author,
                name,
                email,
                rating,
                comment,
            } => commands::review::add(
                &mut repo, &product, &author, &name, &email, rating, &comment,
            )?,
            ReviewAction::Delete {
                product,
                caller,
                index,
            } => commands::review::delete(&mut repo, &product, &caller, index)?,
            ReviewAction::List { product, sort } => {
                commands::review::list(&mut repo, &product, sort.into());
            }
        },
        Commands::Favorite { action } => match action {
            FavoriteAction::Add {
                owner,
                item,
                name,
                price,
                stock,
            } => commands::favorite::add(&mut repo, &owner, &item, &name, price, stock)?,
            FavoriteAction::Remove { owner, item } => {
                commands::favorite::remove(&mut repo, &owner, &item)?;
            }
            FavoriteAction::List { owner } => commands::favorite::list(&mut repo, &owner),
        },
        Commands::Order { action } => match action {
            OrderAction::Record {
                owner,
                item,
                name,
                price,
                quantity,
            } => commands::order::record(&mut repo, &owner, &item, &name, price, quantity)?,
            OrderAction::History { owner } => commands::order::history(&mut repo, &owner),
        },
        Commands::Report { item } => commands::report::run(&repo, item.as_deref()),
        Commands::Seed => commands::seed::run(&mut repo)?,
    }
    Ok(())
}
