use super::context::AppContext;
use anyhow::{Context, Result};
use collart_core::upload::TransferProgress;
use std::path::{Path, PathBuf};

pub async fn download(ctx: &AppContext, url: &str, output: Option<&Path>) -> Result<()> {
    let target = match output {
        Some(path) => path.to_path_buf(),
        None => default_target(ctx, url)?,
    };

    let (progress, mut receiver) = TransferProgress::channel();
    let watcher = tokio::spawn(async move {
        while receiver.changed().await.is_ok() {
            let percent = (*receiver.borrow() * 100.0).round();
            eprint!("\r{percent:>3}%");
        }
        eprintln!();
    });

    let result = ctx.client.download(url, &progress).await;
    drop(progress);
    // The watcher ends once the sender is gone
    let _ = watcher.await;
    let bytes = result?;

    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&target, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!("Saved {} bytes to {}", bytes.len(), target.display());
    Ok(())
}

fn default_target(ctx: &AppContext, url: &str) -> Result<PathBuf> {
    let name = url
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("download");
    let dir = ctx
        .paths
        .downloads_dir()
        .map_err(|e| anyhow::anyhow!("Failed to resolve downloads directory: {e}"))?;
    Ok(dir.join(name))
}

pub fn show_config(ctx: &AppContext) -> Result<()> {
    let config_file = ctx
        .paths
        .config_file()
        .map_err(|e| anyhow::anyhow!("Failed to resolve config path: {e}"))?;
    println!("config file:  {}", config_file.display());
    println!("base_url:     {}", ctx.config.base_url);
    println!("language:     {}", ctx.config.language);
    println!("log_level:    {}", ctx.config.log_level);
    match ctx.config.request_timeout_secs {
        Some(secs) => println!("timeout:      {secs}s"),
        None => println!("timeout:      default"),
    }
    Ok(())
}
