//! nwdiag - Network diagram elements and their renderable blocks.
//!
//! A network diagram places nodes ("elements") on network columns. This crate
//! holds the per-element model and turns each element into a block that a
//! layout stage can size and place:
//!
//! - [`network`] - networks and the ordered registry elements point into
//! - [`element`] - the element model and its conversion into a block
//! - [`label`] - formatting of descriptions and connection labels
//! - [`linked`] - the converted block, [`LinkedElement`]
//! - [`theme`] and [`config`] - colors, shadow and symbol styles
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use nwdiag::{Element, Network, Networks, draw::Drawable};
//!
//! let mut networks = Networks::new();
//! let dmz = networks.add(Network::new("dmz")).unwrap();
//! let internal = networks.add(Network::new("internal")).unwrap();
//!
//! let mut web = Element::new("web01", dmz);
//! web.set_shape(Some("node"));
//!
//! let mut connections = IndexMap::new();
//! connections.insert(dmz, Some("210.x.x.1".to_string()));
//! connections.insert(internal, Some("172.x.x.1".to_string()));
//!
//! let block = web.to_linked_element(&connections, networks.next_after(dmz));
//! assert_eq!(block.next(), Some(internal));
//! assert!(block.size().width() > 0.0);
//! ```

pub mod config;
pub mod element;
pub mod label;
pub mod linked;
pub mod network;
pub mod theme;

mod error;

pub use nwdiag_core::{color, draw, geometry, identifier};

pub use element::Element;
pub use error::NwdiagError;
pub use linked::LinkedElement;
pub use network::{Network, NetworkId, Networks};
pub use theme::{ColorRole, Theme};
