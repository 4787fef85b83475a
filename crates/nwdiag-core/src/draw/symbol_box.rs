//! A symbol outline wrapped around text slots.

use log::trace;

use super::symbol::Placement;
use crate::{
    draw::{Drawable, HorizontalAlignment, LayeredOutput, SymbolContext, SymbolKind, TextBlock},
    geometry::{Bounds, Point, Size},
};

/// Vertical gap between an icon symbol and the text below it.
const ICON_GAP: f32 = 4.0;

/// Compact box of a symbol holding a top, body and bottom text slot.
///
/// Container symbols (rectangle, node, database, ...) draw the slots inside
/// their outline; icon symbols (actor, boundary, interface, ...) draw their
/// icon and put the slots underneath it.
///
/// Created with [`SymbolKind::as_small`].
#[derive(Debug, Clone)]
pub struct SymbolBox {
    kind: SymbolKind,
    top: TextBlock,
    body: Option<TextBlock>,
    bottom: TextBlock,
    context: SymbolContext,
    alignment: HorizontalAlignment,
}

impl SymbolBox {
    pub(crate) fn new(
        kind: SymbolKind,
        top: TextBlock,
        body: Option<TextBlock>,
        bottom: TextBlock,
        context: SymbolContext,
        alignment: HorizontalAlignment,
    ) -> Self {
        Self {
            kind,
            top,
            body,
            bottom,
            context,
            alignment,
        }
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn top(&self) -> &TextBlock {
        &self.top
    }

    /// The main label, if any.
    pub fn body(&self) -> Option<&TextBlock> {
        self.body.as_ref()
    }

    pub fn bottom(&self) -> &TextBlock {
        &self.bottom
    }

    pub fn context(&self) -> &SymbolContext {
        &self.context
    }

    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    fn slots(&self) -> impl Iterator<Item = &TextBlock> {
        std::iter::once(&self.top)
            .chain(self.body.as_ref())
            .chain(std::iter::once(&self.bottom))
    }

    /// Size of the stacked text slots, without the symbol around them.
    fn content_size(&self) -> Size {
        self.slots()
            .fold(Size::default(), |acc, slot| acc.merge_vertical(slot.size()))
    }

    fn render_slots(&self, area: Bounds, output: &mut LayeredOutput) {
        let mut cursor = area.min_y();
        for slot in self.slots() {
            let size = slot.size();
            if size.is_zero() {
                continue;
            }
            let x = match self.alignment {
                HorizontalAlignment::Left => area.min_x() + size.width() / 2.0,
                HorizontalAlignment::Center => area.center().x(),
                HorizontalAlignment::Right => area.max_x() - size.width() / 2.0,
            };
            output.merge(slot.render_to_layers(Point::new(x, cursor + size.height() / 2.0)));
            cursor += size.height();
        }
    }
}

impl Drawable for SymbolBox {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let bounds = position.to_bounds(self.size());
        trace!(kind:% = self.kind, x = bounds.min_x(), y = bounds.min_y(); "Rendering symbol box");

        let outline = self.kind.outline();
        match self.kind.placement() {
            Placement::Container(margin) => {
                let mut output = outline.render(bounds, &self.context);
                self.render_slots(bounds.shrink(margin), &mut output);
                output
            }
            Placement::Icon(icon) => {
                let icon_bounds = Bounds::new_from_top_left(
                    Point::new(bounds.center().x() - icon.width() / 2.0, bounds.min_y()),
                    icon,
                );
                let mut output = outline.render(icon_bounds, &self.context);
                let area = Bounds::new_from_top_left(
                    Point::new(bounds.min_x(), icon_bounds.max_y() + ICON_GAP),
                    Size::new(bounds.width(), self.content_size().height()),
                );
                self.render_slots(area, &mut output);
                output
            }
        }
    }

    fn size(&self) -> Size {
        let content = self.content_size();
        match self.kind.placement() {
            Placement::Container(margin) => content.add_padding(margin),
            Placement::Icon(icon) => Size::new(
                icon.width().max(content.width()),
                icon.height() + ICON_GAP + content.height(),
            ),
        }
    }
}
