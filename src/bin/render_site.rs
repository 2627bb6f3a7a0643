// Render the portfolio page to disk.
//
// Usage: cargo run --bin render_site
//
// Environment:
//   SITE_CONFIG    JSON config file (optional, defaults to the live layout)
//   OUTPUT_PATH    destination file (default: dist/index.html)
//   OUTPUT_FORMAT  html | json (default: html)

use std::path::PathBuf;

use anyhow::{bail, Context};
use producer_site::{SiteConfig, SiteGenerator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "producer_site=info,render_site=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let output_path = PathBuf::from(
        std::env::var("OUTPUT_PATH").unwrap_or_else(|_| "dist/index.html".to_string()),
    );
    let format = std::env::var("OUTPUT_FORMAT").unwrap_or_else(|_| "html".to_string());

    tracing::info!("Configuration:");
    tracing::info!("  OUTPUT_PATH: {}", output_path.display());
    tracing::info!("  OUTPUT_FORMAT: {}", format);

    let config = SiteConfig::from_env().context("loading site config")?;
    tracing::info!(
        "Layout: hero={:?} experience={:?} company={:?} contact={}",
        config.hero,
        config.experience,
        config.company,
        config.contact.name()
    );

    let generator = SiteGenerator::new(config);
    let rendered = match format.as_str() {
        "html" => generator.generate().context("rendering page")?,
        "json" => serde_json::to_string_pretty(&generator.generate_json())
            .context("serializing page view")?,
        other => bail!("unknown OUTPUT_FORMAT '{}' (expected html or json)", other),
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(&output_path, &rendered)
        .with_context(|| format!("writing {}", output_path.display()))?;

    tracing::info!("Wrote {} bytes to {}", rendered.len(), output_path.display());
    Ok(())
}
