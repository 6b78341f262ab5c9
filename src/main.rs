use anyhow::Result;
use pubmed_fetcher::{LiteratureFetcher, SearchParams};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Contact address sent to NCBI with every request
const CONTACT_EMAIL: &str = "youremail@youremail.com";
const SEARCH_TERM: &str = "SUFU";
const OUTPUT_PATH: &str = "SUFU_literature.txt";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::new("info"))
        .init();

    let fetcher = LiteratureFetcher::new(CONTACT_EMAIL).with_output_path(OUTPUT_PATH);
    fetcher
        .fetch_and_save_with(&SearchParams::new(SEARCH_TERM))
        .await?;

    Ok(())
}
