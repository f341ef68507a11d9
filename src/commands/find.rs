use anyhow::{Context, Result, bail};
use findroot::{DiskOracle, FindRootError, FsOracle, ResolverConfig, RootResolver};
use std::path::{Path, PathBuf};

pub async fn run_find(start: &Path, config: ResolverConfig) -> Result<()> {
    let resolver = RootResolver::new(DiskOracle, config);
    let root = resolve(&resolver, start).await?;
    println!("{}", root.display());
    Ok(())
}

async fn resolve<O: FsOracle>(resolver: &RootResolver<O>, start: &Path) -> Result<PathBuf> {
    match resolver.find_root(start).await {
        Ok(root) => Ok(root),
        Err(FindRootError::RootNotFound { start, marker }) => bail!(
            "🛑 Couldn't find a {marker} entry in {} or any parent folder.\n\
             → Are you inside a working tree?\n\
             → Use --marker to look for something other than {marker}.",
            start.display()
        ),
        Err(err) => Err(err)
            .with_context(|| format!("Failed to search upward from {}", start.display())),
    }
}
