// File: crates/chart-render-skia/src/text.rs
// Summary: Axis label shaping/drawing using Skia textlayout with system font fallback.

use chart_core::{Font, FontFamily, Point};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const SANS_FAMILIES: &[&str] = &["Arial", "Helvetica", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"];
// tabular digits keep price labels aligned
const MONO_FAMILIES: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &Font, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        match font.family {
            FontFamily::Monospace => ts.set_font_families(MONO_FAMILIES),
            FontFamily::SansSerif => ts.set_font_families(SANS_FAMILIES),
        };
        ts
    }

    pub fn layout(&self, text: &str, font: &Font, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, font: &Font) -> f32 {
        self.layout(text, font, skia::Color::TRANSPARENT).longest_line()
    }

    /// Draw `text` with its baseline starting at `at`.
    pub fn draw_baseline(&self, canvas: &skia::Canvas, text: &str, at: Point, font: &Font, color: skia::Color) {
        let mut p = self.layout(text, font, color);
        // Paragraph paints from its top-left corner
        let top = at.y - p.alphabetic_baseline();
        p.paint(canvas, (at.x, top));
    }
}
