use std::sync::Arc;
use std::thread;

use egui::{ColorImage, TextureHandle, TextureOptions};
use parking_lot::Mutex;
use thiserror::Error;

/// The remote glyph drawn at the candidate point.
pub const MARKER_URL: &str = "https://images.vexels.com/media/users/3/299170/isolated/preview/e6b778086e5fa0a622852975737b29c7-green-earth-globe-icon.png";

/// Errors that can occur while fetching and decoding the marker asset.
///
/// These are never surfaced to the user: a failed marker just means the
/// dot fallback stays for the rest of the session.
#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("marker download failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("marker decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

#[derive(Debug)]
enum LoadState {
    Pending,
    Ready(ColorImage),
    Failed,
}

/// Fetches the marker image once, in the background, and hands out its
/// texture to the overlay renderer.
///
/// The fetch thread publishes the decoded image through a shared slot and
/// requests a repaint; the next frame reads the *live* session state, so
/// whatever problem is current at completion time gets redrawn with the
/// real marker instead of the fallback dot.
pub struct MarkerLoader {
    state: Arc<Mutex<LoadState>>,
    texture: Option<TextureHandle>,
}

impl MarkerLoader {
    /// Kicks off the background fetch. Call once at startup.
    pub fn fetch(ctx: egui::Context) -> Self {
        let state = Arc::new(Mutex::new(LoadState::Pending));
        let shared = Arc::clone(&state);
        thread::spawn(move || {
            match download_and_decode(MARKER_URL) {
                Ok(img) => {
                    log::info!("point marker loaded ({}x{})", img.width(), img.height());
                    *shared.lock() = LoadState::Ready(img);
                }
                Err(err) => {
                    log::warn!("point marker unavailable, keeping dot fallback: {err}");
                    *shared.lock() = LoadState::Failed;
                }
            }
            ctx.request_repaint();
        });
        Self {
            state,
            texture: None,
        }
    }

    /// A loader that never produces a texture. Useful in tests.
    pub fn disabled() -> Self {
        Self {
            state: Arc::new(Mutex::new(LoadState::Failed)),
            texture: None,
        }
    }

    /// Returns the marker texture once the download has completed,
    /// uploading it on first use. `None` selects the dot fallback.
    pub fn texture(&mut self, ctx: &egui::Context) -> Option<&TextureHandle> {
        if self.texture.is_none() {
            if let LoadState::Ready(image) = &*self.state.lock() {
                self.texture =
                    Some(ctx.load_texture("point_marker", image.clone(), TextureOptions::LINEAR));
            }
        }
        self.texture.as_ref()
    }
}

fn download_and_decode(url: &str) -> Result<ColorImage, MarkerError> {
    let bytes = reqwest::blocking::get(url)?.error_for_status()?.bytes()?;
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
