//! Diagram elements and their conversion into renderable blocks.
//!
//! An [`Element`] is a node attached to one network column. It is filled in
//! while a diagram is read (description, shape, column flag) and then turned
//! into a [`LinkedElement`] once per rendering pass with
//! [`Element::to_linked_element`].
//!
//! # Example
//!
//! ```
//! # use indexmap::IndexMap;
//! # use nwdiag::{element::Element, network::NetworkId};
//! # use nwdiag_core::draw::SymbolKind;
//! let dmz = NetworkId::new("dmz");
//! let mut web = Element::new("web01", dmz);
//! web.set_description("web01, 210.x.x.1");
//! web.set_shape(Some("database"));
//!
//! let mut connections = IndexMap::new();
//! connections.insert(dmz, Some("eth0".to_string()));
//!
//! let linked = web.to_linked_element(&connections, None);
//! assert_eq!(linked.symbol().kind(), SymbolKind::Database);
//! assert_eq!(linked.symbol().body().unwrap().lines(), ["web01", "210.x.x.1"]);
//! ```

use std::{fmt, rc::Rc};

use indexmap::IndexMap;
use log::debug;

use nwdiag_core::draw::{HorizontalAlignment, SymbolKind, TextBlock};

use crate::{
    error::NwdiagError, label::to_text_block, linked::LinkedElement, network::NetworkId,
    theme::Theme,
};

/// A node of a network diagram.
///
/// The name is fixed at construction and doubles as the initial description.
/// Every element belongs to exactly one network, referenced by id.
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    description: String,
    shape: SymbolKind,
    network: NetworkId,
    has_own_column: bool,
    theme: Option<Rc<Theme>>,
}

impl Element {
    /// Creates an element drawn with the default theme.
    pub fn new(name: impl Into<String>, network: NetworkId) -> Self {
        let name = name.into();
        Self {
            description: name.clone(),
            name,
            shape: SymbolKind::default(),
            network,
            has_own_column: true,
            theme: None,
        }
    }

    /// Creates an element drawn with `theme`.
    pub fn with_theme(name: impl Into<String>, network: NetworkId, theme: Rc<Theme>) -> Self {
        Self {
            theme: Some(theme),
            ..Self::new(name, network)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The label drawn inside the element box.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn shape(&self) -> SymbolKind {
        self.shape
    }

    /// The network this element is attached to.
    pub fn network(&self) -> NetworkId {
        self.network
    }

    pub fn has_its_own_column(&self) -> bool {
        self.has_own_column
    }

    /// The theme of this element, or the shared default theme.
    pub fn theme(&self) -> &Theme {
        self.theme.as_deref().unwrap_or_else(|| Theme::default_borrowed())
    }

    /// Replaces the description. An empty description is allowed and draws
    /// an empty box.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sets the shape from a shape name.
    ///
    /// Names are resolved with the theme's symbol styles. A missing or
    /// unknown name leaves the current shape untouched.
    pub fn set_shape(&mut self, name: Option<&str>) {
        let Some(name) = name else {
            return;
        };
        match self.theme().symbols().resolve(name) {
            Some(shape) => self.shape = shape,
            None => {
                debug!(element = self.name.as_str(), shape = name; "Ignoring unknown shape");
            }
        }
    }

    /// Sets the shape from a shape name, reporting unknown names.
    ///
    /// # Errors
    ///
    /// Returns [`NwdiagError::UnknownShape`] if `name` does not resolve; the
    /// current shape is left untouched.
    pub fn try_set_shape(&mut self, name: &str) -> Result<(), NwdiagError> {
        let shape = self
            .theme()
            .symbols()
            .resolve(name)
            .ok_or_else(|| NwdiagError::UnknownShape(name.to_string()))?;
        self.shape = shape;
        Ok(())
    }

    /// Marks the element as sharing a column with another element.
    ///
    /// There is no way back: once cleared the flag stays cleared.
    pub fn do_not_have_its_own_column(&mut self) {
        self.has_own_column = false;
    }

    /// Converts the element into a renderable block using its own theme.
    ///
    /// `connections` maps every network the element is attached to onto the
    /// raw label of that connection (`None` for an unlabeled one). The block
    /// keeps the map's order. `next` is the network column that follows the
    /// element's own network, if any.
    pub fn to_linked_element(
        &self,
        connections: &IndexMap<NetworkId, Option<String>>,
        next: Option<NetworkId>,
    ) -> LinkedElement {
        self.to_linked_element_with(self.theme(), connections, next)
    }

    /// Like [`Element::to_linked_element`], with an explicit theme.
    pub fn to_linked_element_with(
        &self,
        theme: &Theme,
        connections: &IndexMap<NetworkId, Option<String>>,
        next: Option<NetworkId>,
    ) -> LinkedElement {
        debug!(
            element = self.name.as_str(),
            shape:% = self.shape,
            connections = connections.len();
            "Converting element to block"
        );

        let labels: IndexMap<NetworkId, Option<TextBlock>> = connections
            .iter()
            .map(|(network, raw)| (*network, to_text_block(raw.as_deref())))
            .collect();

        let body = to_text_block(Some(&self.description));
        let symbol = self.shape.as_small(
            TextBlock::empty(0.0, 0.0),
            body,
            TextBlock::empty(0.0, 0.0),
            theme.symbol_context(),
            HorizontalAlignment::Center,
        );

        LinkedElement::new(self.clone(), symbol, self.network, next, labels)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use nwdiag_core::draw::{ActorStyle, PackageStyle, SymbolStyles};

    use super::*;

    fn element() -> Element {
        Element::new("srv1", NetworkId::new("dmz"))
    }

    #[test]
    fn test_new_element_defaults() {
        let element = element();
        assert_eq!(element.name(), "srv1");
        assert_eq!(element.description(), "srv1");
        assert_eq!(element.shape(), SymbolKind::Rectangle);
        assert_eq!(element.network(), "dmz");
        assert!(element.has_its_own_column());
        assert_eq!(element.to_string(), "srv1");
    }

    #[test]
    fn test_set_description() {
        let mut element = element();
        element.set_description("Server, Primary");
        assert_eq!(element.description(), "Server, Primary");
        element.set_description("");
        assert_eq!(element.description(), "");
        assert_eq!(element.name(), "srv1");
    }

    #[test]
    fn test_set_shape() {
        let mut element = element();
        element.set_shape(Some("cloud"));
        assert_eq!(element.shape(), SymbolKind::Cloud);

        element.set_shape(Some("bogus"));
        assert_eq!(element.shape(), SymbolKind::Cloud);

        element.set_shape(None);
        assert_eq!(element.shape(), SymbolKind::Cloud);
    }

    #[test]
    fn test_set_shape_uses_default_styles() {
        let mut element = element();
        element.set_shape(Some("actor"));
        assert_eq!(element.shape(), SymbolKind::Actor(ActorStyle::Stickman));

        element.set_shape(Some("component"));
        assert_eq!(element.shape(), SymbolKind::Rectangle);

        element.set_shape(Some("package"));
        assert_eq!(element.shape(), SymbolKind::Rectangle);
    }

    #[test]
    fn test_set_shape_uses_theme_styles() {
        let styles = SymbolStyles {
            actor: ActorStyle::Awesome,
            package: PackageStyle::Folder,
            ..SymbolStyles::default()
        };
        let theme = Rc::new(Theme::new().with_symbols(styles));
        let mut element = Element::with_theme("user", NetworkId::new("dmz"), theme);

        element.set_shape(Some("actor"));
        assert_eq!(element.shape(), SymbolKind::Actor(ActorStyle::Awesome));
        element.set_shape(Some("package"));
        assert_eq!(element.shape(), SymbolKind::Package);
    }

    #[test]
    fn test_try_set_shape() {
        let mut element = element();
        assert!(element.try_set_shape("Database").is_ok());
        assert_eq!(element.shape(), SymbolKind::Database);

        let result = element.try_set_shape("bogus");
        assert!(matches!(result, Err(NwdiagError::UnknownShape(ref name)) if name == "bogus"));
        assert_eq!(element.shape(), SymbolKind::Database);
    }

    #[test]
    fn test_column_flag_is_one_way() {
        let mut element = element();
        element.do_not_have_its_own_column();
        assert!(!element.has_its_own_column());
        element.do_not_have_its_own_column();
        assert!(!element.has_its_own_column());
    }

    #[test]
    fn test_default_theme_is_shared() {
        let element = element();
        assert!(std::ptr::eq(element.theme(), Theme::default_borrowed()));
    }
}
