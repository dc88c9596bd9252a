//! Marigold CLI - Browse the shop, manage the cart, edit content.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! marigold catalog list --view two
//! marigold catalog show prod_002
//!
//! # Shop
//! marigold cart add prod_002 -q 2 -a Color=Sage -a Size=M
//! marigold cart list
//! marigold cart checkout
//!
//! # Edit marketing content (seller identity required)
//! marigold hero add-slide --image hero-4.jpg --tagline "Festive drop"
//! marigold stories toggle
//!
//! # Back to the shipped defaults
//! marigold reset
//! ```
//!
//! # Environment Variables
//!
//! - `MARIGOLD_DATA_DIR` - Where persisted state lives (default `.marigold`)
//! - `MARIGOLD_FIXTURES_DIR` - Optional fixture override directory
//! - `MARIGOLD_ROTATION_SECS` - Hero rotation period for `hero preview`

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use marigold_storefront::config::StorefrontConfig;
use marigold_storefront::models::TextColor;
use marigold_storefront::state::AppState;
use marigold_storefront::views::GridView;

mod commands;

#[derive(Parser)]
#[command(name = "marigold")]
#[command(author, version, about = "Marigold storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Send a single-product enquiry without touching the cart
    Enquire {
        /// Product id
        product_id: String,

        /// Quantity to ask about
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Attribute choice as Name=Value (repeatable)
        #[arg(short, long = "attr", value_name = "NAME=VALUE")]
        attributes: Vec<String>,
    },
    /// View and edit the hero slideshow
    Hero {
        #[command(subcommand)]
        action: HeroAction,
    },
    /// View and edit the stories section
    Stories {
        #[command(subcommand)]
        action: StoriesAction,
    },
    /// Clear all persisted state (cart, content edits, identity)
    Reset,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all products
    List {
        /// Grid density (two, three, list)
        #[arg(short, long, default_value = "three")]
        view: GridView,

        /// Display width in px, for the narrow-display collapse
        #[arg(short, long)]
        width: Option<u16>,
    },
    /// Show one product in detail
    Show {
        /// Product id
        product_id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        product_id: String,

        /// Quantity (floored at 1)
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Attribute choice as Name=Value (repeatable)
        #[arg(short, long = "attr", value_name = "NAME=VALUE")]
        attributes: Vec<String>,
    },
    /// List cart lines and the total
    List,
    /// Replace the quantity of a cart line
    SetQty {
        /// Product id of the line
        product_id: String,
        /// New quantity (floored at 1)
        quantity: u32,
    },
    /// Remove a cart line
    Remove {
        /// Product id of the line
        product_id: String,
    },
    /// Empty the cart
    Clear,
    /// Hand the cart off to WhatsApp (prints the deep link)
    Checkout,
}

#[derive(Subcommand)]
enum HeroAction {
    /// Show the slideshow content
    Show,
    /// Run the rotating slideshow for a few periods
    Preview {
        /// Number of rotation periods to run
        #[arg(short, long, default_value_t = 6)]
        periods: u32,
    },
    /// Add a slide (requires the seller identity)
    AddSlide {
        /// Image reference
        #[arg(long)]
        image: String,
        /// Tagline text
        #[arg(long)]
        tagline: String,
        /// Tagline color (white, purple)
        #[arg(long, default_value = "white")]
        color: String,
    },
    /// Replace a slide's tagline
    Retag {
        /// Slide index (0-based)
        index: usize,
        /// New tagline
        tagline: String,
    },
    /// Change a slide's tagline color
    Recolor {
        /// Slide index (0-based)
        index: usize,
        /// New color (white, purple)
        color: String,
    },
}

#[derive(Subcommand)]
enum StoriesAction {
    /// Show the stories content
    Show,
    /// Add a story card (requires the seller identity)
    Add {
        /// Image reference
        #[arg(long)]
        image: String,
        /// Card title
        #[arg(long)]
        title: String,
        /// Card body text
        #[arg(long)]
        description: String,
    },
    /// Replace the section heading
    SetTitle {
        /// New heading
        title: String,
    },
    /// Toggle whether shoppers see the section
    Toggle,
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "marigold=info,marigold_storefront=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::new(config);

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { view, width } => commands::catalog::list(&state, view, width),
            CatalogAction::Show { product_id } => commands::catalog::show(&state, &product_id)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Add {
                product_id,
                quantity,
                attributes,
            } => commands::cart::add(&state, &product_id, quantity, &attributes)?,
            CartAction::List => commands::cart::list(&state),
            CartAction::SetQty {
                product_id,
                quantity,
            } => commands::cart::set_quantity(&state, &product_id, quantity)?,
            CartAction::Remove { product_id } => commands::cart::remove(&state, &product_id)?,
            CartAction::Clear => commands::cart::clear(&state)?,
            CartAction::Checkout => commands::cart::checkout(&state),
        },
        Commands::Enquire {
            product_id,
            quantity,
            attributes,
        } => commands::cart::enquire(&state, &product_id, quantity, &attributes)?,
        Commands::Hero { action } => match action {
            HeroAction::Show => commands::content::hero_show(&state),
            HeroAction::Preview { periods } => {
                commands::content::hero_preview(&state, periods).await;
            }
            HeroAction::AddSlide {
                image,
                tagline,
                color,
            } => {
                let color = parse_color(&color)?;
                commands::content::hero_add_slide(&state, &image, &tagline, color)?;
            }
            HeroAction::Retag { index, tagline } => {
                commands::content::hero_retag(&state, index, &tagline)?;
            }
            HeroAction::Recolor { index, color } => {
                let color = parse_color(&color)?;
                commands::content::hero_recolor(&state, index, color)?;
            }
        },
        Commands::Stories { action } => match action {
            StoriesAction::Show => commands::content::stories_show(&state),
            StoriesAction::Add {
                image,
                title,
                description,
            } => commands::content::stories_add(&state, &image, &title, &description)?,
            StoriesAction::SetTitle { title } => {
                commands::content::stories_set_title(&state, &title)?;
            }
            StoriesAction::Toggle => commands::content::stories_toggle(&state)?,
        },
        Commands::Reset => commands::content::reset(&state)?,
    }
    Ok(())
}

fn parse_color(raw: &str) -> Result<TextColor, String> {
    match raw {
        "white" => Ok(TextColor::White),
        "purple" => Ok(TextColor::Purple),
        _ => Err(format!("invalid color: {raw} (white, purple)")),
    }
}
