use anyhow::{anyhow, bail, Context, Result};
use catalog::{
    is_known_manufacturer, manufacturer_info, manufacturer_info_for, CatalogIndex, Part,
    PartCategory,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{
    card_properties, format_price, format_property_key, format_property_value, FilterState,
    Page, PriceRange, SortMode, ViewPipeline, ViewState,
};
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use storefront::{BrowseSession, CatalogSource, DirectorySource, InMemorySource, StorefrontConfig};
use tracing::{info, warn};

/// rigshop - PC parts catalog browser
#[derive(Parser)]
#[command(name = "rigshop")]
#[command(about = "Browse, filter and sort a PC parts catalog", long_about = None)]
struct Cli {
    /// Catalog directory with one <category>.json listing per category
    /// [env: STOREFRONT_DATA_DIR]
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Parts per page [env: STOREFRONT_PAGE_SIZE]
    #[arg(long)]
    page_size: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the categories the catalog serves
    Categories,

    /// Show one page of a category listing
    Browse {
        /// Category token, e.g. videocard or cpu (defaults to the configured category)
        #[arg(long)]
        category: Option<PartCategory>,

        /// Case-insensitive text matched against name, category and manufacturer
        #[arg(long, default_value = "")]
        search: String,

        /// Lowest price to include
        #[arg(long)]
        min_price: Option<f64>,

        /// Highest price to include
        #[arg(long)]
        max_price: Option<f64>,

        /// Manufacturer key to include; repeat for several
        #[arg(long = "manufacturer")]
        manufacturers: Vec<String>,

        /// Sort order: name, price-low or price-high
        #[arg(long, default_value = "name")]
        sort: String,

        /// 1-indexed page number
        #[arg(long, default_value = "1")]
        page: usize,

        /// Print the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show every property of a single part
    Show {
        #[arg(long)]
        category: PartCategory,

        #[arg(long)]
        id: String,
    },

    /// List the manufacturers present in a category
    Manufacturers {
        #[arg(long)]
        category: Option<PartCategory>,
    },

    /// Time the view pipeline over random filter and sort combinations
    Benchmark {
        /// Number of views to compute
        #[arg(long, default_value = "1000")]
        iterations: usize,

        /// Number of views computed at once
        #[arg(long, default_value = "8")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = StorefrontConfig::from_env().context("Failed to read configuration")?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    if let Some(page_size) = cli.page_size {
        config = config.with_page_size(page_size);
    }
    config.validate()?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Categories => handle_categories(&config).await?,
        Commands::Browse {
            category,
            search,
            min_price,
            max_price,
            manufacturers,
            sort,
            page,
            json,
        } => {
            let manufacturers: Vec<String> =
                manufacturers.iter().map(|m| m.to_lowercase()).collect();
            for key in manufacturers.iter().filter(|key| !is_known_manufacturer(key)) {
                warn!("Manufacturer {:?} is not in the registry and matches nothing", key);
            }
            let filters = FilterState::new()
                .with_search(search)
                .with_price(PriceRange::new(min_price.unwrap_or(0.0), max_price)?)
                .with_manufacturers(manufacturers);
            let category = category.unwrap_or(config.default_category);
            handle_browse(&config, category, filters, SortMode::parse(&sort), page, json).await?
        }
        Commands::Show { category, id } => handle_show(&config, category, &id).await?,
        Commands::Manufacturers { category } => {
            let category = category.unwrap_or(config.default_category);
            handle_manufacturers(&config, category).await?
        }
        Commands::Benchmark {
            iterations,
            concurrent,
        } => handle_benchmark(&config, iterations, concurrent).await?,
    }

    Ok(())
}

/// Open a session on the directory source and switch to `category`
async fn open_session(config: &StorefrontConfig, category: PartCategory) -> Result<BrowseSession> {
    let source = Arc::new(DirectorySource::new(&config.data_dir));
    let mut session = BrowseSession::open(source, config).await?;
    if session.selected_category() != category {
        session.select_category(category).await;
    }
    if let Some(message) = session.error() {
        bail!("{}", message);
    }
    Ok(session)
}

/// Handle the 'categories' command
async fn handle_categories(config: &StorefrontConfig) -> Result<()> {
    let source = Arc::new(DirectorySource::new(&config.data_dir));
    let listed = source.clone();
    let categories = tokio::task::spawn_blocking(move || listed.categories())
        .await
        .context("Category listing task panicked")??;

    println!("{}", "Categories:".bold().blue());
    for category in categories {
        let fetcher = source.clone();
        let count = tokio::task::spawn_blocking(move || fetcher.fetch_category(category))
            .await
            .context("Category fetch task panicked")?
            .map(|listing| listing.count);

        let marker = if category == config.default_category { "*" } else { " " };
        match count {
            Ok(count) => println!(
                "{} {:<22} {:<20} {} parts",
                marker.green(),
                category.as_str(),
                category.display_name(),
                count
            ),
            Err(e) => println!(
                "{} {:<22} {:<20} {}",
                marker.green(),
                category.as_str(),
                category.display_name(),
                format!("unavailable ({e})").red()
            ),
        }
    }
    Ok(())
}

/// Handle the 'browse' command
async fn handle_browse(
    config: &StorefrontConfig,
    category: PartCategory,
    filters: FilterState,
    sort: SortMode,
    page: usize,
    json: bool,
) -> Result<()> {
    let mut session = open_session(config, category).await?;
    session.set_filters(filters);
    session.set_sort(sort);
    session.set_page(page)?;

    let view = session.current_page()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print_page(category, sort, &view);
    Ok(())
}

/// Handle the 'show' command
async fn handle_show(config: &StorefrontConfig, category: PartCategory, id: &str) -> Result<()> {
    let session = open_session(config, category).await?;
    let part = session
        .part(id)
        .ok_or_else(|| anyhow!("Part {} not found in {}", id, category.display_name()))?;

    let maker = manufacturer_info_for(&part.name);
    println!("{}", part.name.bold().blue());
    println!("{}Price: {}", "• ".green(), format_price(part.price));
    println!("{}Category: {}", "• ".green(), category.display_name());
    println!("{}Manufacturer: {} ({})", "• ".green(), maker.name, maker.color);
    println!("{}Image: {}", "• ".green(), category.image_path());

    if !part.properties.is_empty() {
        println!("Specifications:");
        for (key, value) in &part.properties {
            println!(
                "  - {}: {}",
                format_property_key(key),
                format_property_value(key, value)
            );
        }
    }
    Ok(())
}

/// Handle the 'manufacturers' command
async fn handle_manufacturers(config: &StorefrontConfig, category: PartCategory) -> Result<()> {
    let session = open_session(config, category).await?;

    println!(
        "{}",
        format!("Manufacturers in {}:", category.display_name()).bold().blue()
    );
    for key in session.available_manufacturers() {
        let count = session
            .parts()
            .iter()
            .filter(|part| catalog::resolve_manufacturer(&part.name) == key)
            .count();
        println!(
            "  {:<16} {:<18} {} parts",
            key,
            manufacturer_info(key).name,
            count
        );
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    config: &StorefrontConfig,
    iterations: usize,
    concurrent: usize,
) -> Result<()> {
    if iterations == 0 || concurrent == 0 {
        bail!("iterations and concurrent must both be at least 1");
    }

    println!("Loading catalog from {}...", config.data_dir.display());
    let start = Instant::now();
    let source = InMemorySource::load(&config.data_dir)?;
    let index: Arc<CatalogIndex> = source.index().clone();
    let categories = index.categories();
    if categories.is_empty() {
        bail!("Catalog at {} has no categories", config.data_dir.display());
    }
    println!("{} Loaded catalog in {:?}", "✓".green(), start.elapsed());

    let states = random_view_states(&index, &categories, config.page_size, iterations)?;
    let pipeline = Arc::new(ViewPipeline::standard());

    let bench_start = Instant::now();
    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    for batch in states.chunks(concurrent) {
        let mut handles = Vec::with_capacity(batch.len());
        for state in batch.iter().cloned() {
            let index = index.clone();
            let pipeline = pipeline.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                let page = pipeline.run(index.parts(state.category), &state)?;
                Ok::<_, anyhow::Error>((start.elapsed(), page.total_items))
            }));
        }
        for handle in handles {
            let (elapsed, _) = handle.await.context("Benchmark task panicked")??;
            timings.push(elapsed);
        }
    }
    let wall_time = bench_start.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = iterations as f64 / wall_time.as_secs_f64();

    info!("Benchmark finished: {} views in {:?}", iterations, wall_time);
    println!("Benchmark results:");
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} views/second", throughput);

    Ok(())
}

/// Random but valid view states spread across the loaded categories
fn random_view_states(
    index: &CatalogIndex,
    categories: &[PartCategory],
    page_size: usize,
    count: usize,
) -> Result<Vec<ViewState>> {
    const SEARCHES: [&str; 6] = ["", "", "pro", "rgb", "1", "black"];
    const SORTS: [SortMode; 3] = [SortMode::Name, SortMode::PriceLow, SortMode::PriceHigh];

    let mut rng = rand::rng();
    let mut states = Vec::with_capacity(count);
    for _ in 0..count {
        let category = categories[rng.random_range(0..categories.len())];
        let mut state = ViewState::new(category, page_size)?
            .with_search(SEARCHES[rng.random_range(0..SEARCHES.len())])
            .with_sort(SORTS[rng.random_range(0..SORTS.len())]);

        if rng.random_bool(0.5) {
            let bucket = pipeline::PRICE_BUCKETS[rng.random_range(0..pipeline::PRICE_BUCKETS.len())];
            state = state.with_price(bucket.range);
        }
        if rng.random_bool(0.3) {
            let makers = pipeline::unique_manufacturers(index.parts(category));
            if !makers.is_empty() {
                state = state.with_manufacturer_toggled(makers[rng.random_range(0..makers.len())]);
            }
        }
        states.push(state.with_page(rng.random_range(1..=3)));
    }
    Ok(states)
}

/// Helper function to format and print one page of parts
fn print_page(category: PartCategory, sort: SortMode, view: &Page<&Part>) {
    println!(
        "{}",
        format!(
            "{}: {} parts, page {} of {} (sorted by {})",
            category.display_name(),
            view.total_items,
            view.page,
            view.total_pages.max(1),
            sort.display_name()
        )
        .bold()
        .blue()
    );

    if view.is_empty() {
        println!("{}", "No products match the current filters.".yellow());
        return;
    }

    let offset = (view.page - 1) * view.page_size;
    for (i, part) in view.items.iter().enumerate() {
        let maker = manufacturer_info_for(&part.name);
        println!(
            "{}. {} {} [{}]",
            (offset + i + 1).to_string().green(),
            part.name,
            format_price(part.price).bold(),
            maker.name
        );
        let summary = card_properties(part)
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        if !summary.is_empty() {
            println!("   {}", summary);
        }
    }

    let mut hints = Vec::new();
    if view.has_previous() {
        hints.push(format!("previous: --page {}", view.page - 1));
    }
    if view.has_next() {
        hints.push(format!("next: --page {}", view.page + 1));
    }
    if !hints.is_empty() {
        println!("{}", hints.join(" | ").dimmed());
    }
}
