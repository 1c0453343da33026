//! `vitrine` — demo CLI for the storefront core.
//!
//! One invocation runs one operation against the local store: log in, browse
//! the catalog, record interactions, inspect the profile. Session and
//! journal state live in a SQLite file between invocations, so
//!
//! ```
//! vitrine login alice --email alice@example.com
//! vitrine like 3
//! vitrine profile
//! ```
//!
//! behaves like one continuous session.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use vitrine_catalog::{Catalog, Product, slugify};
use vitrine_core::{
  Storefront,
  event::{EventType, NewEvent},
  user::{PreferencesUpdate, Theme},
};
use vitrine_store_sqlite::SqliteSlots;
use vitrine_sync::{MemoryObjectStore, ObjectStoreSink, SyncConfig};

type Front = Storefront<SqliteSlots, ObjectStoreSink<MemoryObjectStore>>;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "vitrine", version, about = "Vitrine storefront demo CLI")]
struct Cli {
  /// Path to the local SQLite session store.
  #[arg(long, env = "VITRINE_STORE", default_value = "vitrine.db")]
  store: PathBuf,

  /// Optional configuration file for the remote sync client.
  #[arg(short, long)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Log in, replacing any existing session.
  Login {
    username: String,
    #[arg(long)]
    email:    Option<String>,
  },
  /// Log out and clear the activity history.
  Logout,
  /// List catalog categories.
  Categories,
  /// Show one category and its products, addressed by slug.
  Category { slug: String },
  /// Show one product.
  Product { id: u32 },
  /// Like a product.
  Like { id: u32 },
  /// Take back a like.
  Unlike { id: u32 },
  /// Share a product.
  Share {
    id:     u32,
    /// How the product was shared (link, email, ...).
    #[arg(long, default_value = "link")]
    method: String,
  },
  /// Record a product view.
  View { id: u32 },
  /// Update preferences for the current session.
  Prefs {
    #[arg(long)]
    theme:         Option<ThemeArg>,
    #[arg(long)]
    notifications: Option<bool>,
  },
  /// Show the current user and an activity summary.
  Profile,
  /// Clear the activity history without logging out.
  ClearHistory,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
  Light,
  Dark,
}

impl From<ThemeArg> for Theme {
  fn from(theme: ThemeArg) -> Self {
    match theme {
      ThemeArg::Light => Theme::Light,
      ThemeArg::Dark => Theme::Dark,
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing. The CLI talks on stdout; tracing stays quiet unless
  // RUST_LOG asks for more.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Sync client configuration: optional file, environment overrides.
  let mut settings = config::Config::builder();
  if let Some(path) = &cli.config {
    settings = settings.add_source(config::File::from(path.clone()));
  }
  let settings = settings
    .add_source(config::Environment::with_prefix("VITRINE"))
    .build()
    .context("failed to read configuration")?;
  let sync_config: SyncConfig = settings
    .try_deserialize()
    .context("failed to deserialise sync configuration")?;

  let slots = SqliteSlots::open(&cli.store)
    .await
    .with_context(|| format!("failed to open store at {:?}", cli.store))?;
  let sink = ObjectStoreSink::with_config(MemoryObjectStore::new(), sync_config);

  let front = Storefront::new(Arc::new(slots), Arc::new(sink));
  front.restore().await.context("failed to restore session")?;

  let catalog = Catalog::sample();
  run(cli.command, &front, &catalog).await
}

async fn run(command: Command, front: &Front, catalog: &Catalog) -> anyhow::Result<()> {
  match command {
    Command::Login { username, email } => {
      let user = front.login(&username, email.as_deref()).await?;
      println!("logged in as {} ({})", user.username, user.id);
    }
    Command::Logout => {
      front.logout().await?;
      println!("logged out");
    }
    Command::Categories => {
      for category in catalog.categories() {
        println!(
          "{:<16} {} ({} products)",
          slugify(&category.name),
          category.name,
          category.product_count,
        );
      }
    }
    Command::Category { slug } => {
      let category = catalog
        .category_by_slug(&slug)
        .with_context(|| format!("no category with slug {slug:?}"))?;
      println!("{} — {}", category.name, category.description);
      if !category.subcategories.is_empty() {
        println!("subcategories: {}", category.subcategories.join(", "));
      }
      for product in catalog.products_by_category(&category.name) {
        println!("  #{:<4} {:<40} {}", product.id, product.name, price_tag(product));
      }
    }
    Command::Product { id } => {
      let product = lookup(catalog, id)?;
      println!("#{} {}", product.id, product.name);
      println!("{}", product.description);
      println!("brand: {} | category: {}", product.brand, product.category);
      println!("price: {}", price_tag(product));
      if let (Some(rating), Some(reviews)) = (product.rating, product.review_count) {
        println!("rating: {rating} ({reviews} reviews)");
      }
      if !product.tags.is_empty() {
        println!("tags: {}", product.tags.join(", "));
      }
      if front.is_liked(product.id) {
        println!("liked ♥");
      }
    }
    Command::Like { id } => {
      let product = lookup(catalog, id)?;
      front
        .record(NewEvent::new(EventType::Like, product.id, &product.name, &product.category))
        .await?;
      println!("liked {}", product.name);
    }
    Command::Unlike { id } => {
      let product = lookup(catalog, id)?;
      front
        .record(NewEvent::new(EventType::Unlike, product.id, &product.name, &product.category))
        .await?;
      println!("unliked {}", product.name);
    }
    Command::Share { id, method } => {
      let product = lookup(catalog, id)?;
      front
        .record(
          NewEvent::new(EventType::Share, product.id, &product.name, &product.category)
            .with_metadata("method", method.clone()),
        )
        .await?;
      println!("shared {} via {method}", product.name);
    }
    Command::View { id } => {
      let product = lookup(catalog, id)?;
      front
        .record(NewEvent::new(EventType::View, product.id, &product.name, &product.category))
        .await?;
      println!("viewed {}", product.name);
    }
    Command::Prefs { theme, notifications } => {
      let user = front
        .update_preferences(PreferencesUpdate {
          theme: theme.map(Theme::from),
          notifications,
        })
        .await?;
      println!(
        "theme: {:?}, notifications: {}",
        user.preferences.theme, user.preferences.notifications,
      );
    }
    Command::Profile => {
      let user = front.current_user().context("not logged in")?;
      println!("{} ({})", user.username, user.id);
      if let Some(email) = &user.email {
        println!("email: {email}");
      }
      println!("member since: {}", user.created_at.format("%Y-%m-%d"));
      println!("last login:   {}", user.last_login_at.format("%Y-%m-%d %H:%M"));
      println!(
        "preferences:  theme {:?}, notifications {}",
        user.preferences.theme, user.preferences.notifications,
      );

      let summary = front.summary();
      println!();
      println!(
        "{} events — {} likes, {} unlikes, {} shares, {} views over {} products",
        summary.total_events,
        summary.likes,
        summary.unlikes,
        summary.shares,
        summary.views,
        summary.unique_products,
      );
      if !summary.top_categories.is_empty() {
        let top: Vec<String> = summary
          .top_categories
          .iter()
          .map(|(name, count)| format!("{name} ({count})"))
          .collect();
        println!("top categories: {}", top.join(", "));
      }
      let liked = front.liked_products();
      if !liked.is_empty() {
        let names: Vec<String> = liked
          .iter()
          .map(|id| match catalog.product_by_id(*id) {
            Some(product) => product.name.clone(),
            None => format!("#{id}"),
          })
          .collect();
        println!("liked: {}", names.join(", "));
      }
      for event in front.recent_events(5) {
        println!(
          "  {} {:<6} {}",
          event.recorded_at.format("%Y-%m-%d %H:%M"),
          event.event_type.as_str(),
          event.product_name,
        );
      }
    }
    Command::ClearHistory => {
      front.clear_history().await?;
      println!("history cleared");
    }
  }
  Ok(())
}

fn lookup(catalog: &Catalog, id: u32) -> anyhow::Result<&Product> {
  catalog
    .product_by_id(id)
    .with_context(|| format!("no product with id {id}"))
}

fn price_tag(product: &Product) -> String {
  match product.original_price {
    Some(original) => format!("${:.2} (was ${original:.2})", product.price),
    None => format!("${:.2}", product.price),
  }
}
