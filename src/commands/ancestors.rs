use anyhow::{Context, Result};
use findroot::{DiskOracle, FsOracle, ResolverConfig, RootResolver};
use std::io::{self, Write};
use std::path::Path;

pub async fn run_ancestors(start: &Path, config: ResolverConfig) -> Result<()> {
    let resolver = RootResolver::new(DiskOracle, config);

    // collected first so stdout is never locked across a probe
    let mut buffer = Vec::new();
    let listed = list_ancestors(&resolver, start, &mut buffer).await;
    io::stdout().lock().write_all(&buffer)?;
    listed
}

async fn list_ancestors<O: FsOracle>(
    resolver: &RootResolver<O>,
    start: &Path,
    out: &mut impl Write,
) -> Result<()> {
    for candidate in resolver.candidates(start) {
        let hit = resolver
            .contains_marker(&candidate)
            .await
            .with_context(|| format!("Failed to probe {}", candidate.display()))?;

        if hit {
            writeln!(out, "✅ {}", candidate.display())?;
            return Ok(());
        }
        writeln!(out, "   {}", candidate.display())?;
    }

    writeln!(out, "🛑 No {} found up to the filesystem root.", resolver.marker())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use findroot::MemoryOracle;

    #[tokio::test]
    async fn test_lists_until_first_hit() {
        let oracle = MemoryOracle::with_entries(["/a/.git", "/a/b/c"]);
        let resolver = RootResolver::with_default_marker(oracle);
        let mut out = Vec::new();

        list_ancestors(&resolver, Path::new("/a/b/c"), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "   /a/b/c\n   /a/b\n✅ /a\n");
    }

    #[tokio::test]
    async fn test_reports_miss_at_filesystem_root() {
        let resolver = RootResolver::with_default_marker(MemoryOracle::with_entries(["/x/y"]));
        let mut out = Vec::new();

        list_ancestors(&resolver, Path::new("/x/y"), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("   /x/y\n   /x\n   /\n"));
        assert!(text.ends_with("🛑 No .git found up to the filesystem root.\n"));
    }

    #[tokio::test]
    async fn test_keeps_listed_lines_when_a_check_fails() {
        let oracle = MemoryOracle::with_entries(["/m/n"]);
        oracle.fail_at("/m/.git", "permission denied");
        let resolver = RootResolver::with_default_marker(oracle);
        let mut out = Vec::new();

        let err = list_ancestors(&resolver, Path::new("/m/n"), &mut out)
            .await
            .unwrap_err();

        assert!(format!("{err:#}").contains("Failed to probe /m"));
        assert_eq!(String::from_utf8(out).unwrap(), "   /m/n\n");
    }
}
