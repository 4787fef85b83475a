//! Text blocks for element descriptions and connection labels.
//!
//! A [`TextBlock`] is a list of lines, a [`FontConfiguration`] and a
//! [`HorizontalAlignment`], measured once at construction time. Blocks are
//! immutable afterwards, so a block built from a string keeps describing that
//! string even when the source is later changed.
//!
//! # Quick Start
//!
//! ```
//! # use nwdiag_core::draw::{FontConfiguration, HorizontalAlignment, TextBlock};
//! let font = FontConfiguration::serif(11);
//! let block = TextBlock::from_display("web01\\n192.168.0.1", &font, HorizontalAlignment::Left);
//! assert_eq!(block.lines(), ["web01", "192.168.0.1"]);
//!
//! let placeholder = TextBlock::empty(0.0, 0.0);
//! assert!(placeholder.is_empty());
//! ```

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Escape sequence that starts a new line in display text.
const LINE_BREAK_ESCAPE: &str = "\\n";

static DEFAULT_FONT: OnceLock<FontConfiguration> = OnceLock::new();

/// Generic or named font family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontFamily {
    Serif,
    SansSerif,
    Monospace,
    Named(String),
}

impl FontFamily {
    /// The CSS `font-family` value for this family.
    pub fn css_name(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name.as_str(),
        }
    }

    fn to_cosmic(&self) -> Family<'_> {
        match self {
            Self::Serif => Family::Serif,
            Self::SansSerif => Family::SansSerif,
            Self::Monospace => Family::Monospace,
            Self::Named(name) => Family::Name(name.as_str()),
        }
    }
}

/// Font face, size and colors used to lay out and draw a [`TextBlock`].
///
/// `extended_color` is the color of decorated runs; when `decorated` is off
/// nothing is underlined or boxed.
#[derive(Debug, Clone, PartialEq)]
pub struct FontConfiguration {
    family: FontFamily,
    size: u16,
    color: Color,
    extended_color: Color,
    decorated: bool,
}

impl FontConfiguration {
    pub fn new(
        family: FontFamily,
        size: u16,
        color: Color,
        extended_color: Color,
        decorated: bool,
    ) -> Self {
        Self {
            family,
            size,
            color,
            extended_color,
            decorated,
        }
    }

    /// Undecorated black serif text at the given size.
    pub fn serif(size: u16) -> Self {
        Self::new(FontFamily::Serif, size, Color::black(), Color::black(), false)
    }

    /// Returns a reference to the default configuration: black serif, size 11.
    pub fn default_borrowed() -> &'static Self {
        DEFAULT_FONT.get_or_init(Self::default)
    }

    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Font size in points.
    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn extended_color(&self) -> Color {
        self.extended_color
    }

    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    /// Font size in pixels, using the usual 1.33 points-to-pixels ratio.
    fn size_px(&self) -> f32 {
        f32::from(self.size) * 1.33
    }

    /// Height of one line of text in pixels.
    pub fn line_height(&self) -> f32 {
        self.size_px() * 1.15
    }
}

impl Default for FontConfiguration {
    fn default() -> Self {
        Self::serif(11)
    }
}

/// Horizontal placement of lines inside a text block or of content inside a box.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    fn text_anchor(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// Measured multi-line text.
#[derive(Debug, Clone)]
pub struct TextBlock {
    lines: Vec<String>,
    font: FontConfiguration,
    alignment: HorizontalAlignment,
    size: Size,
}

impl TextBlock {
    /// Creates a block that draws nothing but still occupies `width` x `height`.
    pub fn empty(width: f32, height: f32) -> Self {
        Self {
            lines: Vec::new(),
            font: FontConfiguration::default_borrowed().clone(),
            alignment: HorizontalAlignment::default(),
            size: Size::new(width, height),
        }
    }

    /// Creates a block from display text.
    ///
    /// Lines are separated by the two-character escape `\n` or by a real
    /// newline character.
    pub fn from_display(
        text: &str,
        font: &FontConfiguration,
        alignment: HorizontalAlignment,
    ) -> Self {
        let lines = text
            .split(LINE_BREAK_ESCAPE)
            .flat_map(|segment| segment.split('\n'))
            .map(str::to_string)
            .collect();
        Self::from_lines(lines, font, alignment)
    }

    /// Creates a block from already separated lines.
    pub fn from_lines(
        lines: Vec<String>,
        font: &FontConfiguration,
        alignment: HorizontalAlignment,
    ) -> Self {
        let size = TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_lines_size(&lines, font);
        Self {
            lines,
            font: font.clone(),
            alignment,
            size,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns `true` when the block has no lines to draw.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn font(&self) -> &FontConfiguration {
        &self.font
    }

    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }
}

impl Drawable for TextBlock {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.lines.is_empty() {
            return output;
        }

        let bounds = position.to_bounds(self.size);
        let x = match self.alignment {
            HorizontalAlignment::Left => bounds.min_x(),
            HorizontalAlignment::Center => position.x(),
            HorizontalAlignment::Right => bounds.max_x(),
        };
        let line_height = self.font.line_height();
        let color = self.font.color();

        let mut rendered_text = svg_element::Text::new("")
            .set("text-anchor", self.alignment.text_anchor())
            .set("dominant-baseline", "central")
            .set("font-family", self.font.family().css_name())
            .set("font-size", self.font.size())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());

        if self.font.is_decorated() {
            rendered_text = rendered_text
                .set("text-decoration", "underline")
                .set("text-decoration-color", self.font.extended_color().to_string());
        }

        for (idx, line) in self.lines.iter().enumerate() {
            let y = bounds.min_y() + line_height * (idx as f32 + 0.5);
            let tspan = svg_element::TSpan::new("")
                .set("x", x)
                .set("y", y)
                .add(SvgText::new(line.as_str()));
            rendered_text = rendered_text.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

/// TextManager handles text measurement and font operations.
/// It keeps one FontSystem for the whole process since creating it is expensive.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Measures `lines` laid out one below the other.
    ///
    /// When the font system yields no layout runs (no usable fonts installed)
    /// the size is estimated from character counts.
    fn calculate_lines_size(&self, lines: &[String], font: &FontConfiguration) -> Size {
        if lines.is_empty() {
            return Size::default();
        }

        let font_size_px = font.size_px();
        let metrics = Metrics::new(font_size_px, font.line_height());
        let text = lines.join("\n");

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(font.family().to_cosmic());
        buffer.set_size(None, None);
        buffer.set_text(&text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut runs = 0usize;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            runs += 1;
        }

        if runs == 0 || max_width == 0.0 {
            max_width = lines
                .iter()
                .map(|line| line.chars().count() as f32 * (font_size_px * 0.55))
                .fold(0.0, f32::max);
        }

        let line_count = runs.max(lines.len());
        Size::new(max_width, line_count as f32 * metrics.line_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
