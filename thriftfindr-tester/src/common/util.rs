use anyhow::{Context, Result};
use chrono::Utc;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str, seed: u64) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/seed-{seed}/{ts}")
}

pub async fn capture_artifacts(driver: &WebDriver, dir: &str, err: &anyhow::Error) -> Result<()> {
    let screenshot = driver.screenshot_as_png().await.ok();
    let source = driver.source().await.ok();
    let url = driver.current_url().await.ok().map(|url| url.to_string());
    let chain = format!("{err:#}");

    write_artifact_files(
        Path::new(dir),
        screenshot.as_deref(),
        source.as_deref(),
        url.as_deref(),
        &chain,
    )
}

fn write_artifact_files(
    dir: &Path,
    screenshot: Option<&[u8]>,
    source: Option<&str>,
    url: Option<&str>,
    error_chain: &str,
) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    if let Some(png) = screenshot {
        let _ = fs::write(dir.join("screenshot.png"), png);
    }

    if let Some(src) = source {
        let _ = fs::write(dir.join("dom.html"), src);
    }

    if let Some(url) = url {
        let _ = fs::write(dir.join("url.txt"), url);
    }

    let _ = fs::write(dir.join("error.txt"), error_chain);

    Ok(())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse `--seeds` tokens as unsigned integers.
pub fn parse_seeds(tokens: &[String]) -> Result<Vec<u64>> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed '{token}'"))
        })
        .collect()
}
