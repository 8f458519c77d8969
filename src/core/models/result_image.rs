use anyhow::{Context, Result};
use iced::widget::image;

use crate::global_constants;

#[derive(Clone)]
pub struct ResultImage {
    pub image_handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Debug for ResultImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl ResultImage {
    /// Decodes encoded image bytes, shrinking anything larger than a card
    /// thumbnail before it reaches the renderer.
    pub fn decode(encoded_bytes: &[u8]) -> Result<Self> {
        let decoded = ::image::load_from_memory(encoded_bytes)
            .context("Unable to decode image data")?;

        let max_edge = global_constants::RESULT_THUMBNAIL_MAX_EDGE;
        let decoded = if decoded.width() > max_edge || decoded.height() > max_edge {
            decoded.thumbnail(max_edge, max_edge)
        } else {
            decoded
        };

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!("[RESULT_IMAGE] decoded image: {}x{}", width, height);

        Ok(Self {
            image_handle: image::Handle::from_rgba(width, height, rgba.into_raw()),
            width,
            height,
        })
    }
}

#[derive(Debug, Clone)]
pub enum CardImage {
    Loading,
    Loaded(ResultImage),
    Failed,
}
