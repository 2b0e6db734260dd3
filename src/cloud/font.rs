use std::path::Path;

use ab_glyph::FontVec;

use super::CloudError;

/// Loads a TTF/OTF font from disk.
///
/// The font must cover the glyphs of the words being drawn; Japanese text
/// needs a CJK font, or words render as blanks.
pub fn load_font(path: &Path) -> Result<FontVec, CloudError> {
    let bytes = std::fs::read(path).map_err(|err| CloudError::FontLoad {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    FontVec::try_from_vec(bytes).map_err(|err| CloudError::FontLoad {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}
