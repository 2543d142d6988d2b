use std::time::Duration as StdDuration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::page::ScreenshotParams;
use futures_util::StreamExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::RenderError;

pub const VIEWPORT_WIDTH: u32 = 600;
pub const VIEWPORT_HEIGHT: u32 = 1335;

const PAGE_TIMEOUT: StdDuration = StdDuration::from_secs(60);

/// Owns the headless Chromium instance used for digest screenshots.
///
/// The browser is launched lazily on the first capture. A failed capture
/// tears the instance down; the next capture launches a fresh one.
pub struct ScreenshotEngine {
    slot: Mutex<Option<BrowserHandle>>,
}

impl ScreenshotEngine {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Render `html` in a fresh page and return a full-page PNG.
    pub async fn capture(&self, html: &str) -> Result<Vec<u8>, RenderError> {
        let mut slot = self.slot.lock().await;

        let handle = match slot.take() {
            Some(handle) => handle,
            None => BrowserHandle::launch().await?,
        };

        match handle.capture(html).await {
            Ok(bytes) => {
                *slot = Some(handle);
                Ok(bytes)
            }
            Err(err) => {
                warn!("screenshot failed, browser will be relaunched on next use: {err}");
                handle.teardown().await;
                Err(err)
            }
        }
    }

    /// Close the browser, if running. Idempotent.
    pub async fn shutdown(&self) {
        if let Some(handle) = self.slot.lock().await.take() {
            handle.teardown().await;
            info!("headless browser shut down");
        }
    }
}

impl Default for ScreenshotEngine {
    fn default() -> Self {
        Self::new()
    }
}

struct BrowserHandle {
    browser: Browser,
    event_loop: JoinHandle<()>,
}

impl BrowserHandle {
    async fn launch() -> Result<Self, RenderError> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-setuid-sandbox")
            .viewport(Viewport {
                width: VIEWPORT_WIDTH,
                height: VIEWPORT_HEIGHT,
                ..Viewport::default()
            })
            .request_timeout(PAGE_TIMEOUT)
            .build()
            .map_err(RenderError::BrowserConfig)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(RenderError::Launch)?;

        // Drive the CDP message loop until the browser goes away.
        let event_loop = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        info!("headless browser launched");
        Ok(Self {
            browser,
            event_loop,
        })
    }

    async fn capture(&self, html: &str) -> Result<Vec<u8>, RenderError> {
        let page = self.browser.new_page("about:blank").await?;

        let shot = async {
            page.set_content(html).await?;
            page.screenshot(
                ScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .full_page(true)
                    .build(),
            )
            .await
        }
        .await;

        if let Err(err) = page.close().await {
            warn!("failed to close page: {err}");
        }

        Ok(shot?)
    }

    async fn teardown(mut self) {
        if let Err(err) = self.browser.close().await {
            warn!("failed to close browser: {err}");
        }
        if let Err(err) = self.browser.wait().await {
            warn!("failed to reap browser process: {err}");
        }
        self.event_loop.abort();
    }
}
