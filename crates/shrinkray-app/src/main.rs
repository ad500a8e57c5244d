mod cli;
mod startup;

use shrinkray_config::{ConfigWatcher, ReloadOverrides, SharedConfig};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("shrinkray=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "shrinkray=info".parse().unwrap()),
            ),
        )
        .init();

    if let Err(e) = run(args).await {
        tracing::error!("shrinkray exited with error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: cli::Args) -> shrinkray_common::Result<()> {
    tracing::info!("Shrinkray v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = startup::resolve_config_path(&args)?;
    let overrides = ReloadOverrides::new(args.media.clone(), args.queue_file.clone());
    let config = startup::load_initial_config(&config_path, &overrides);

    if args.print_config {
        println!("{}", shrinkray_config::config_to_json(&config));
        return Ok(());
    }

    tracing::info!(
        media = %config.media_path.display(),
        workers = config.workers,
        pushover = config.notifications.pushover.is_configured(),
        ntfy = config.notifications.ntfy.is_configured(),
        "Config loaded from {}",
        config_path.display()
    );
    if let Err(e) = shrinkray_config::reload::check_media_path(&config.media_path) {
        tracing::warn!("{e}");
    }

    let shared = Arc::new(SharedConfig::new(config.clone()));
    let cancel = CancellationToken::new();

    // Stand-in for the request handler: report every swapped-in config.
    let mut updates = shared.subscribe();
    let reporter = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let config = updates.borrow_and_update().clone();
            tracing::info!(
                media = %config.media_path.display(),
                workers = config.workers,
                "Active config replaced"
            );
        }
    });

    let watcher = ConfigWatcher::spawn(
        cancel.clone(),
        &config_path,
        shared.clone(),
        &config,
        overrides,
    );
    if watcher.is_none() {
        tracing::warn!("Live config reload unavailable, continuing without it");
    }

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");

    cancel.cancel();
    if let Some(watcher) = watcher {
        if let Err(e) = watcher.await {
            tracing::warn!("config watcher task failed: {e}");
        }
    }
    drop(shared);
    let _ = reporter.await;

    tracing::info!("Shutdown complete");
    Ok(())
}
