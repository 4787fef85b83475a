//! Renderable blocks built from elements.

use indexmap::IndexMap;

use nwdiag_core::{
    draw::{Drawable, LayeredOutput, SymbolBox, TextBlock},
    geometry::{Point, Size},
};

use crate::{element::Element, network::NetworkId};

/// Horizontal gap between a connection line and its label.
const LABEL_GAP: f32 = 2.0;

/// An element converted into a block, ready for layout.
///
/// The block is a snapshot: it owns a copy of the element taken at
/// conversion time, so later changes to the element are not reflected here.
/// Connection labels are kept in the order the connections were given.
#[derive(Debug, Clone)]
pub struct LinkedElement {
    element: Element,
    symbol: SymbolBox,
    network: NetworkId,
    next: Option<NetworkId>,
    connections: IndexMap<NetworkId, Option<TextBlock>>,
}

impl LinkedElement {
    pub(crate) fn new(
        element: Element,
        symbol: SymbolBox,
        network: NetworkId,
        next: Option<NetworkId>,
        connections: IndexMap<NetworkId, Option<TextBlock>>,
    ) -> Self {
        Self {
            element,
            symbol,
            network,
            next,
            connections,
        }
    }

    /// The element as it was when the block was built.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// The shape box with the formatted description.
    pub fn symbol(&self) -> &SymbolBox {
        &self.symbol
    }

    /// The network the element belongs to.
    pub fn network(&self) -> NetworkId {
        self.network
    }

    /// The network column following the element's own network.
    pub fn next(&self) -> Option<NetworkId> {
        self.next
    }

    /// Formatted connection labels by network, in connection order.
    ///
    /// A `None` value is a connection without label.
    pub fn connections(&self) -> &IndexMap<NetworkId, Option<TextBlock>> {
        &self.connections
    }

    /// The label of the connection to `network`, if the connection exists and is labeled.
    pub fn label(&self, network: NetworkId) -> Option<&TextBlock> {
        self.connections.get(&network).and_then(Option::as_ref)
    }

    /// Size of the label of the connection to `network`.
    pub fn label_size(&self, network: NetworkId) -> Option<Size> {
        self.label(network).map(TextBlock::size)
    }

    /// Width of the widest connection label, 0 without labels.
    pub fn max_label_width(&self) -> f32 {
        self.connections
            .values()
            .flatten()
            .map(|label| label.size().width())
            .fold(0.0, f32::max)
    }

    /// Minimal width of the column holding this block.
    ///
    /// Connection lines run through the middle of the box and their labels
    /// sit next to them, so the column is at least wide enough for a label on
    /// both sides of the center line.
    pub fn min_width(&self) -> f32 {
        let labels = self.max_label_width();
        let label_span = if labels > 0.0 {
            2.0 * (labels + LABEL_GAP)
        } else {
            0.0
        };
        self.symbol.size().width().max(label_span)
    }
}

impl Drawable for LinkedElement {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        self.symbol.render_to_layers(position)
    }

    fn size(&self) -> Size {
        self.symbol.size()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use nwdiag_core::draw::RenderLayer;

    use super::*;

    fn linked(connections: &[(&str, Option<&str>)]) -> LinkedElement {
        let element = Element::new("srv1", NetworkId::new("dmz"));
        let connections: IndexMap<_, _> = connections
            .iter()
            .map(|(network, label)| (NetworkId::new(network), label.map(str::to_string)))
            .collect();
        element.to_linked_element(&connections, Some(NetworkId::new("internal")))
    }

    #[test]
    fn test_accessors() {
        let block = linked(&[("dmz", Some("eth0"))]);
        assert_eq!(block.element().name(), "srv1");
        assert_eq!(block.network(), "dmz");
        assert_eq!(block.next(), Some(NetworkId::new("internal")));
        assert_eq!(block.connections().len(), 1);
    }

    #[test]
    fn test_labels() {
        let block = linked(&[("dmz", Some("eth0")), ("internal", None)]);
        assert!(block.label(NetworkId::new("dmz")).is_some());
        assert!(block.label(NetworkId::new("internal")).is_none());
        assert!(block.label(NetworkId::new("missing")).is_none());
        assert!(block.label_size(NetworkId::new("dmz")).is_some());
    }

    #[test]
    fn test_max_label_width() {
        let block = linked(&[("dmz", Some("eth0")), ("internal", Some("eth1, bond0"))]);
        let widest = block
            .connections()
            .values()
            .flatten()
            .map(|label| label.size().width())
            .fold(0.0, f32::max);
        assert!(widest > 0.0);
        assert_approx_eq!(f32, block.max_label_width(), widest);

        let unlabeled = linked(&[("dmz", None), ("internal", Some(""))]);
        assert_approx_eq!(f32, unlabeled.max_label_width(), 0.0);
    }

    #[test]
    fn test_min_width_covers_box_and_labels() {
        let block = linked(&[]);
        assert_approx_eq!(f32, block.min_width(), block.size().width());

        let block = linked(&[("dmz", Some("a-rather-long-interface-label"))]);
        assert!(block.min_width() >= block.size().width());
        assert!(block.min_width() >= 2.0 * block.max_label_width());
    }

    #[test]
    fn test_drawable_delegates_to_symbol() {
        let block = linked(&[]);
        assert_eq!(block.size(), block.symbol().size());

        let output = block.render_to_layers(Point::new(50.0, 50.0));
        assert_eq!(output.count_in_layer(RenderLayer::Shadow), 1);
        assert_eq!(output.count_in_layer(RenderLayer::Content), 1);
        assert_eq!(output.count_in_layer(RenderLayer::Text), 1);
    }
}
