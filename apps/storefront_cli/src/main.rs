use anyhow::Result;
use brand_store::{config, BrandStore};
use clap::Parser;
use shared::domain::BrandId;

/// Loads a brand (and optionally its product listing) through the brand
/// store and prints the resulting view state.
#[derive(Parser, Debug)]
struct Args {
    /// Brand id to load.
    #[arg(long)]
    brand_id: i64,
    /// Also fetch the product listing for this brand name.
    #[arg(long)]
    hits: Option<String>,
    /// Overrides the configured API base url.
    #[arg(long)]
    api_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(base_url) = args.api_base_url {
        settings.api_base_url = base_url;
    }

    let store = BrandStore::from_settings(&settings)?;

    let issued = store.request_brand(BrandId(args.brand_id)).await;
    if !issued {
        println!("brand {} is already the current group", args.brand_id);
    }

    if let Some(brand_name) = args.hits {
        store.request_brand_hits(&brand_name).await;
    }

    println!("{}", serde_json::to_string_pretty(&store.snapshot().await)?);
    Ok(())
}
