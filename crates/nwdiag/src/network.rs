//! Networks and the registry elements refer into.
//!
//! An element never owns its network; it stores a [`NetworkId`] which callers
//! resolve through a [`Networks`] registry. The registry keeps networks in
//! declaration order, which is also the left-to-right order of the diagram
//! columns, so [`Networks::next_after`] gives the column that follows a network.

use indexmap::IndexMap;
use log::debug;

use nwdiag_core::identifier::Id;

use crate::error::NwdiagError;

/// Identifier of a network column.
pub type NetworkId = Id;

/// A network column of the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    id: NetworkId,
    name: String,
    address: Option<String>,
    description: Option<String>,
    visible: bool,
}

impl Network {
    /// Creates a visible network named `name`, identified by the same string.
    pub fn new(name: &str) -> Self {
        Self {
            id: NetworkId::new(name),
            name: name.to_string(),
            address: None,
            description: None,
            visible: true,
        }
    }

    /// Sets the address range shown under the network name (e.g. `210.x.x.x/24`).
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the network as invisible: it groups elements but draws no bus.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn id(&self) -> NetworkId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// The description, falling back to the name.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Insertion-ordered registry of networks.
#[derive(Debug, Default, Clone)]
pub struct Networks {
    networks: IndexMap<NetworkId, Network>,
}

impl Networks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a network and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`NwdiagError::DuplicateNetwork`] if a network with the same id
    /// is already registered; the registry is left unchanged.
    pub fn add(&mut self, network: Network) -> Result<NetworkId, NwdiagError> {
        let id = network.id();
        if self.networks.contains_key(&id) {
            return Err(NwdiagError::DuplicateNetwork(id));
        }
        debug!(network:% = id, index = self.networks.len(); "Registering network");
        self.networks.insert(id, network);
        Ok(id)
    }

    pub fn get(&self, id: NetworkId) -> Option<&Network> {
        self.networks.get(&id)
    }

    /// Like [`Networks::get`], but reports unknown ids as an error.
    pub fn try_get(&self, id: NetworkId) -> Result<&Network, NwdiagError> {
        self.get(id).ok_or(NwdiagError::UnknownNetwork(id))
    }

    /// Iterates over the networks in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Network> {
        self.networks.values()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Returns the network declared right after `id`, if any.
    pub fn next_after(&self, id: NetworkId) -> Option<NetworkId> {
        let index = self.networks.get_index_of(&id)?;
        self.networks.get_index(index + 1).map(|(next, _)| *next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Networks {
        let mut networks = Networks::new();
        networks
            .add(Network::new("dmz").with_address("210.x.x.x/24"))
            .unwrap();
        networks.add(Network::new("internal")).unwrap();
        networks.add(Network::new("backup").hidden()).unwrap();
        networks
    }

    #[test]
    fn test_network_defaults() {
        let network = Network::new("dmz");
        assert_eq!(network.id(), "dmz");
        assert_eq!(network.name(), "dmz");
        assert_eq!(network.description(), "dmz");
        assert_eq!(network.address(), None);
        assert!(network.is_visible());
    }

    #[test]
    fn test_network_builders() {
        let network = Network::new("dmz")
            .with_address("210.x.x.x/24")
            .with_description("Demilitarized zone")
            .hidden();
        assert_eq!(network.address(), Some("210.x.x.x/24"));
        assert_eq!(network.description(), "Demilitarized zone");
        assert!(!network.is_visible());
    }

    #[test]
    fn test_registry_preserves_order() {
        let networks = registry();
        let names: Vec<_> = networks.iter().map(Network::name).collect();
        assert_eq!(names, ["dmz", "internal", "backup"]);
        assert_eq!(networks.len(), 3);
        assert!(!networks.is_empty());
    }

    #[test]
    fn test_duplicate_network_is_rejected() {
        let mut networks = registry();
        let result = networks.add(Network::new("dmz"));
        assert!(matches!(result, Err(NwdiagError::DuplicateNetwork(id)) if id == "dmz"));
        assert_eq!(networks.len(), 3);
        assert_eq!(
            networks.get(NetworkId::new("dmz")).and_then(Network::address),
            Some("210.x.x.x/24")
        );
    }

    #[test]
    fn test_lookup() {
        let networks = registry();
        assert!(networks.get(NetworkId::new("internal")).is_some());
        assert!(networks.get(NetworkId::new("missing")).is_none());
        assert!(matches!(
            networks.try_get(NetworkId::new("missing")),
            Err(NwdiagError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_next_after() {
        let networks = registry();
        assert_eq!(
            networks.next_after(NetworkId::new("dmz")),
            Some(NetworkId::new("internal"))
        );
        assert_eq!(networks.next_after(NetworkId::new("backup")), None);
        assert_eq!(networks.next_after(NetworkId::new("missing")), None);
    }
}
