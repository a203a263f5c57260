//! ui/assets.rs — optional tree icons loaded from disk.
//!
//! Icons are looked up as `<dir>/1.png`, `<dir>/2.png`, ... A missing or
//! unreadable file is not an error: the grid draws a solid placeholder for
//! that slot instead. Each file is tried at most once per run.

use std::path::{Path, PathBuf};

use egui::{ColorImage, TextureHandle, TextureOptions};
use tracing::{debug, warn};

enum IconSlot {
    Untried,
    Missing,
    Loaded(TextureHandle),
}

/// Lazily loaded icon textures, one per 1-based tree index.
pub struct TreeIcons {
    dir: PathBuf,
    slots: Vec<IconSlot>,
}

impl TreeIcons {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            slots: Vec::new(),
        }
    }

    /// Texture for icon `index` (1-based), loading it on first use.
    /// None means the caller should draw the placeholder.
    pub fn texture(&mut self, ctx: &egui::Context, index: usize) -> Option<&TextureHandle> {
        debug_assert!(index >= 1);
        if self.slots.len() < index {
            self.slots.resize_with(index, || IconSlot::Untried);
        }
        let slot = &mut self.slots[index - 1];
        if matches!(slot, IconSlot::Untried) {
            let path = self.dir.join(format!("{index}.png"));
            *slot = match decode_icon(&path) {
                Some(img) => {
                    debug!(path = %path.display(), "tree icon loaded");
                    let tex =
                        ctx.load_texture(format!("tree_icon_{index}"), img, TextureOptions::LINEAR);
                    IconSlot::Loaded(tex)
                }
                None => IconSlot::Missing,
            };
        }
        match &self.slots[index - 1] {
            IconSlot::Loaded(tex) => Some(tex),
            _ => None,
        }
    }
}

/// Decode a PNG into an egui image; None on any read or decode failure.
fn decode_icon(path: &Path) -> Option<ColorImage> {
    if !path.exists() {
        return None;
    }
    match image::open(path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            Some(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to decode tree icon");
            None
        }
    }
}
