//! Drawable components for element blocks.
//!
//! Everything that ends up on the page implements [`Drawable`]: it knows its
//! own [`Size`] and can render itself, centered on a position, into a
//! [`LayeredOutput`].
//!
//! - [`TextBlock`] - measured multi-line label text
//! - [`SymbolKind`] - the closed set of element symbols, with name resolution
//! - [`SymbolContext`] - fill, border and shadow used to draw a symbol
//! - [`SymbolBox`] - a symbol outline wrapped around up to three text slots

mod layer;
mod stroke;
mod symbol;
mod symbol_box;
mod symbol_context;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::StrokeDefinition;
pub use symbol::{ActorStyle, ComponentStyle, PackageStyle, SymbolKind, SymbolStyles};
pub use symbol_box::SymbolBox;
pub use symbol_context::SymbolContext;
pub use text::{FontConfiguration, FontFamily, HorizontalAlignment, TextBlock};

use crate::geometry::{Point, Size};

/// A renderable item with an intrinsic size.
pub trait Drawable: std::fmt::Debug {
    /// Renders the item centered on `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// The full size the item occupies when rendered.
    fn size(&self) -> Size;
}
