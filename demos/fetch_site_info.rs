use opengraph_io::prelude::*;

// Configuration - update these before running
const APP_ID: &str = "your-app-id";
const TARGET_URL: &str = "https://example.com";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let client = OpenGraphClientBuilder::new(APP_ID)
        .with_full_render(false)
        .build()?;

    println!("Fetching site info for {TARGET_URL}...");

    match client.fetch_site_info(TARGET_URL).await {
        Ok(body) => {
            println!("Response body:\n{body}");
        }
        Err(OpenGraphError::Request { status, message, .. }) => {
            eprintln!("API rejected the request (HTTP {status}): {message}");
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    // The same client can issue further calls with per-call overrides
    let overrides = RequestOverrides::new().with_max_cache_age(300);
    match client.fetch_site_info_with(TARGET_URL, &overrides).await {
        Ok(body) => println!("Fresh-cache response ({} bytes)", body.len()),
        Err(e) => eprintln!("Override request failed: {e}"),
    }

    Ok(())
}
