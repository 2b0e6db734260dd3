//! Word-cloud image rendering.
//!
//! Takes the extracted frequency map and draws each word onto a canvas,
//! sized by frequency and colored from a fixed palette. Placement walks a
//! spiral out from the center, so the most frequent words claim the
//! middle of the image.

mod font;
mod layout;

pub use self::font::load_font;

use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use thiserror::Error;
use tracing::{info, warn};

use crate::analyze::{top_words, FrequencyMap};

use self::layout::SpiralLayout;

#[derive(Error, Debug)]
pub enum CloudError {
    #[error("no words to draw; every token was filtered out")]
    EmptyVocabulary,

    #[error("failed to load font {path}: {reason}")]
    FontLoad { path: PathBuf, reason: String },

    #[error("failed to write image {path}: {source}")]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Word colors, cycled in rank order.
pub const DEFAULT_COLORS: [Rgba<u8>; 5] = [
    Rgba([0x1b, 0x1b, 0x1b, 0xff]),
    Rgba([0x48, 0x48, 0x4b, 0xff]),
    Rgba([0x59, 0x3a, 0xee, 0xff]),
    Rgba([0x65, 0xcd, 0xfa, 0xff]),
    Rgba([0x70, 0xd6, 0xbf, 0xff]),
];

/// Rendering parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudConfig {
    pub width: u32,
    pub height: u32,
    /// Scale given to words appearing once.
    pub font_min_size: f32,
    /// Scale given to the most frequent word.
    pub font_max_size: f32,
    pub colors: Vec<Rgba<u8>>,
    pub background: Rgba<u8>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 3072,
            height: 3072,
            font_min_size: 64.0,
            font_max_size: 640.0,
            colors: DEFAULT_COLORS.to_vec(),
            background: Rgba([0xff, 0xff, 0xff, 0xff]),
        }
    }
}

impl CloudConfig {
    /// Sizing policy: larger vocabularies get a larger canvas and a lower
    /// font floor so late-placed words still find room.
    pub fn for_vocabulary(word_count: usize) -> Self {
        let (side, font_min_size) = match word_count {
            0..=50 => (2048, 96.0),
            51..=200 => (3072, 64.0),
            201..=500 => (4096, 48.0),
            _ => (4096, 32.0),
        };

        Self {
            width: side,
            height: side,
            font_min_size,
            ..Self::default()
        }
    }
}

fn ensure_nonempty(frequencies: &FrequencyMap) -> Result<(), CloudError> {
    if frequencies.is_empty() {
        return Err(CloudError::EmptyVocabulary);
    }
    Ok(())
}

/// Font scale for a word, linear in its count relative to the most
/// frequent word and clamped to the configured range.
pub fn scale_for_frequency(config: &CloudConfig, count: u32, max_count: u32) -> PxScale {
    let span = config.font_max_size - config.font_min_size;
    let ratio = count as f32 / max_count.max(1) as f32;
    PxScale::from(config.font_min_size + span * ratio.clamp(0.0, 1.0))
}

/// Draws the frequency map as a word cloud.
///
/// An empty map is refused rather than rendered: downstream callers get a
/// reportable error instead of a blank image. Words that no longer fit on
/// the canvas are skipped with a warning, not treated as failures.
pub fn render(
    frequencies: &FrequencyMap,
    config: &CloudConfig,
    font: &FontVec,
) -> Result<RgbaImage, CloudError> {
    ensure_nonempty(frequencies)?;

    let ranked = top_words(frequencies, usize::MAX);
    let max_count = ranked[0].1;

    let mut image = RgbaImage::from_pixel(config.width, config.height, config.background);
    let mut spiral = SpiralLayout::new(config.width, config.height);
    let mut placed = 0usize;

    for (rank, (word, count)) in ranked.iter().enumerate() {
        let scale = scale_for_frequency(config, *count, max_count);
        let (word_width, word_height) = text_size(scale, font, word);

        match spiral.place(word_width, word_height) {
            Some(placement) => {
                let color = config.colors[rank % config.colors.len()];
                draw_text_mut(&mut image, color, placement.x, placement.y, scale, font, word);
                placed += 1;
            }
            None => warn!(word = %word, "no room left on canvas, skipping word"),
        }
    }

    info!(placed, total = ranked.len(), "rendered word cloud");
    Ok(image)
}

/// Writes the rendered image as a PNG.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), CloudError> {
    image.save(path).map_err(|source| CloudError::ImageWrite {
        path: path.to_path_buf(),
        source,
    })
}
