//! CJK font fallback for plant names and solar terms

use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::{FontData, FontDefinitions, FontFamily};

const FONT_NAME: &str = "cjk";

/// System fonts known to cover Traditional Chinese, tried in order
const SYSTEM_FONTS: [&str; 6] = [
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "C:\\Windows\\Fonts\\msjh.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

/// Register a CJK-capable font as fallback for both egui families.
///
/// The default egui fonts have no Han glyphs. Returns the path that was
/// installed, or `None` when nothing could be read.
pub fn install_cjk_font(ctx: &egui::Context, preferred: Option<&Path>) -> Option<PathBuf> {
    let candidates = preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from));

    for path in candidates {
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "font not available");
                continue;
            }
        };

        let mut fonts = FontDefinitions::default();
        fonts
            .font_data
            .insert(FONT_NAME.to_owned(), Arc::new(FontData::from_owned(bytes)));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push(FONT_NAME.to_owned());
        }
        ctx.set_fonts(fonts);

        tracing::info!(path = %path.display(), "installed CJK font");
        return Some(path);
    }

    tracing::warn!("no CJK font found, plant names may not render");
    None
}
