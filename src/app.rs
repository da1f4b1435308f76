use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    allocation::{
        Allocator, CachedCostResolver, CostResolverPort, Item, PlannedUnlock, TableCostResolver,
    },
    catalog::{Catalog, load_catalog_file},
    cli::CliOptions,
    config::{CatalogSourceConfig, Config},
    platform::{PlatformClient, PlatformCostResolver},
    unlock::{DryRunUnlocker, UnlockExecutor},
};

#[derive(Debug, Serialize)]
struct PlanOutput<'a> {
    book_id: &'a str,
    strategy: &'static str,
    coins_cost: u64,
    fastpass_cost: usize,
    locked_remaining: usize,
    unlocks: Vec<PlannedUnlock>,
}

/// Loads the catalog, allocates the budget, prints the plan, and runs the unlock pass.
pub async fn run(config: Config, options: &CliOptions) -> Result<()> {
    let (catalog, resolver) = build_sources(&config).await?;
    let locked = catalog.locked_items();
    let budget = config.budget.budget();

    tracing::info!(
        target: "app",
        book_id = %catalog.book_id,
        chapters = catalog.items.len(),
        locked = locked.len(),
        "catalog_loaded"
    );

    let allocator = Allocator::new(resolver).with_observer(Arc::new(|item: &Item| {
        tracing::info!(
            target: "app",
            item_id = %item.id,
            number = ?item.number,
            title = item.title.as_deref().unwrap_or(""),
            cost = ?item.cost,
            "chapter_priced"
        );
    }));

    let result = allocator
        .allocate(&config.strategy, &locked, budget)
        .await
        .context("allocation failed")?;

    let output = PlanOutput {
        book_id: &catalog.book_id,
        strategy: config.strategy.name(),
        coins_cost: result.coins_cost(),
        fastpass_cost: result.fastpass_cost(),
        locked_remaining: locked.len() - result.unlocked_count(),
        unlocks: result.unlock_plan(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("failed to render plan")?
    );

    if options.plan_only {
        return Ok(());
    }

    let executor = UnlockExecutor::new(Arc::new(DryRunUnlocker));
    executor
        .execute(&result)
        .await
        .context("unlock pass failed")?;

    Ok(())
}

async fn build_sources(config: &Config) -> Result<(Catalog, Arc<dyn CostResolverPort>)> {
    match &config.catalog {
        CatalogSourceConfig::File { path } => {
            let catalog = load_catalog_file(path)?;
            let resolver = catalog.known_costs().collect::<TableCostResolver>();
            Ok((catalog, Arc::new(resolver)))
        }
        CatalogSourceConfig::Platform { book_id } => {
            let client = PlatformClient::new(&config.platform)
                .context("failed to build platform client")?;
            let catalog = client
                .catalog(book_id)
                .await
                .with_context(|| format!("failed to fetch chapter list for book {book_id}"))?;
            let resolver = PlatformCostResolver::new(client, book_id.clone());
            Ok((catalog, Arc::new(CachedCostResolver::new(Arc::new(resolver)))))
        }
    }
}
