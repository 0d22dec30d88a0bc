use std::time::Duration;
use thirtyfour::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BrowserKind {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

impl BrowserKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "chrome" => Some(Self::Chrome),
            "edge" => Some(Self::Edge),
            "firefox" => Some(Self::Firefox),
            "safari" => Some(Self::Safari),
            _ => None,
        }
    }

    pub fn label(self) -> String {
        format!("{self:?}").to_lowercase()
    }

    /// Local driver endpoint used when no hub is configured.
    const fn default_endpoint(self) -> &'static str {
        match self {
            Self::Chrome => "http://localhost:9515",
            Self::Edge => "http://localhost:17556",
            Self::Firefox => "http://localhost:4444",
            Self::Safari => "http://localhost:4445",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    pub implicit_wait_secs: u64,
    pub remote_hub: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            implicit_wait_secs: 3,
            remote_hub: None,
        }
    }
}

impl BrowserConfig {
    fn endpoint(&self, kind: BrowserKind) -> &str {
        self.remote_hub
            .as_deref()
            .unwrap_or_else(|| kind.default_endpoint())
    }
}

pub async fn new_session(kind: BrowserKind, cfg: &BrowserConfig) -> WebDriverResult<WebDriver> {
    let url = cfg.endpoint(kind);
    let driver = match kind {
        BrowserKind::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if cfg.headless {
                caps.set_headless()?;
            }
            WebDriver::new(url, caps).await?
        }
        BrowserKind::Edge => {
            let mut caps = DesiredCapabilities::edge();
            if cfg.headless {
                caps.set_headless()?;
            }
            WebDriver::new(url, caps).await?
        }
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if cfg.headless {
                caps.set_headless()?;
            }
            WebDriver::new(url, caps).await?
        }
        BrowserKind::Safari => WebDriver::new(url, DesiredCapabilities::safari()).await?,
    };

    driver
        .set_implicit_wait_timeout(Duration::from_secs(cfg.implicit_wait_secs))
        .await?;
    Ok(driver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_names_parse_case_insensitively() {
        assert_eq!(BrowserKind::parse("Chrome"), Some(BrowserKind::Chrome));
        assert_eq!(BrowserKind::parse("safari"), Some(BrowserKind::Safari));
        assert_eq!(BrowserKind::parse("netscape"), None);
        assert_eq!(BrowserKind::Firefox.label(), "firefox");
    }

    #[test]
    fn hub_overrides_local_endpoint() {
        let local = BrowserConfig::default();
        assert_eq!(local.endpoint(BrowserKind::Edge), "http://localhost:17556");
        let hub = BrowserConfig {
            remote_hub: Some("http://grid:4444/wd/hub".to_string()),
            ..BrowserConfig::default()
        };
        assert_eq!(hub.endpoint(BrowserKind::Chrome), "http://grid:4444/wd/hub");
    }
}
