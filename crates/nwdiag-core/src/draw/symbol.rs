//! Symbol kinds and shape-name resolution.
//!
//! [`SymbolKind`] is the closed set of symbols an element box can be drawn
//! with. Names coming from a diagram source are resolved with
//! [`SymbolKind::from_name`], which consults a static registry plus three
//! style defaults for the names whose look is configurable (`actor`,
//! `component` and `package`).
//!
//! ```
//! use nwdiag_core::draw::{ActorStyle, ComponentStyle, PackageStyle, SymbolKind};
//!
//! let styles = (ActorStyle::Stickman, ComponentStyle::Rectangle, PackageStyle::Rectangle);
//! let resolve = |name| SymbolKind::from_name(name, styles.0, styles.1, styles.2);
//!
//! assert_eq!(resolve("database"), Some(SymbolKind::Database));
//! assert_eq!(resolve("Component"), Some(SymbolKind::Rectangle));
//! assert_eq!(resolve("bogus"), None);
//! ```

mod outline;

use std::{fmt, str::FromStr};

use serde::Deserialize;

pub(crate) use outline::Outline;

use crate::{
    draw::{HorizontalAlignment, SymbolBox, SymbolContext, TextBlock},
    geometry::{Insets, Size},
};

/// How the `actor` symbol is drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorStyle {
    #[default]
    Stickman,
    Awesome,
}

/// How the `component` symbol is drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStyle {
    Uml1,
    Uml2,
    #[default]
    Rectangle,
}

/// How the `package` symbol is drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageStyle {
    Folder,
    #[default]
    Rectangle,
    Node,
    Frame,
    Cloud,
    Database,
}

impl ActorStyle {
    pub fn to_symbol(self) -> SymbolKind {
        SymbolKind::Actor(self)
    }
}

impl ComponentStyle {
    pub fn to_symbol(self) -> SymbolKind {
        match self {
            Self::Uml1 => SymbolKind::Component1,
            Self::Uml2 => SymbolKind::Component2,
            Self::Rectangle => SymbolKind::Rectangle,
        }
    }
}

impl PackageStyle {
    pub fn to_symbol(self) -> SymbolKind {
        match self {
            Self::Folder => SymbolKind::Package,
            Self::Rectangle => SymbolKind::Rectangle,
            Self::Node => SymbolKind::Node,
            Self::Frame => SymbolKind::Frame,
            Self::Cloud => SymbolKind::Cloud,
            Self::Database => SymbolKind::Database,
        }
    }
}

/// The three style defaults consulted while resolving symbol names.
///
/// The default set draws actors as stick figures and both components and
/// packages as plain rectangles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SymbolStyles {
    pub actor: ActorStyle,
    pub component: ComponentStyle,
    pub package: PackageStyle,
}

impl SymbolStyles {
    /// Resolves `name` with these styles. See [`SymbolKind::from_name`].
    pub fn resolve(&self, name: &str) -> Option<SymbolKind> {
        SymbolKind::from_name(name, self.actor, self.component, self.package)
    }
}

/// A visual symbol used to draw an element box.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Action,
    Actor(ActorStyle),
    Agent,
    Artifact,
    Boundary,
    Card,
    Cloud,
    Collections,
    /// UML 1 component: two small tabs on the left edge
    Component1,
    /// UML 2 component: a component icon in the top-right corner
    Component2,
    Control,
    Database,
    Entity,
    File,
    Folder,
    Frame,
    Hexagon,
    Interface,
    /// Text only, no outline
    Label,
    Node,
    Package,
    Person,
    Process,
    Queue,
    #[default]
    Rectangle,
    Stack,
    Storage,
    Usecase,
}

/// Names resolved without consulting any style default.
static REGISTRY: &[(&str, SymbolKind)] = &[
    ("actor_awesome", SymbolKind::Actor(ActorStyle::Awesome)),
    ("actor_stickman", SymbolKind::Actor(ActorStyle::Stickman)),
    ("agent", SymbolKind::Agent),
    ("artifact", SymbolKind::Artifact),
    ("boundary", SymbolKind::Boundary),
    ("card", SymbolKind::Card),
    ("cloud", SymbolKind::Cloud),
    ("collections", SymbolKind::Collections),
    ("component1", SymbolKind::Component1),
    ("component2", SymbolKind::Component2),
    ("control", SymbolKind::Control),
    ("database", SymbolKind::Database),
    ("entity", SymbolKind::Entity),
    ("file", SymbolKind::File),
    ("folder", SymbolKind::Folder),
    ("frame", SymbolKind::Frame),
    ("hexagon", SymbolKind::Hexagon),
    ("interface", SymbolKind::Interface),
    ("label", SymbolKind::Label),
    ("node", SymbolKind::Node),
    ("person", SymbolKind::Person),
    ("queue", SymbolKind::Queue),
    ("rect", SymbolKind::Rectangle),
    ("rectangle", SymbolKind::Rectangle),
    ("stack", SymbolKind::Stack),
    ("storage", SymbolKind::Storage),
    ("usecase", SymbolKind::Usecase),
];

/// How a symbol relates to the text it carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Placement {
    /// Text sits inside the outline, separated from it by the given margin.
    Container(Insets),
    /// A fixed-size icon with the text underneath it.
    Icon(Size),
}

impl SymbolKind {
    /// Resolves a free-form symbol name.
    ///
    /// Matching ignores ASCII case. `actor`, `component`, `package`, `action`
    /// and `process` must be spelled out exactly; `actor`, `component` and
    /// `package` resolve through the given style defaults. Other names are
    /// looked up with every character that is not an ASCII alphanumeric or
    /// `_` removed. Unknown names yield `None`.
    pub fn from_name(
        name: &str,
        actor_style: ActorStyle,
        component_style: ComponentStyle,
        package_style: PackageStyle,
    ) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "actor" => return Some(actor_style.to_symbol()),
            "component" => return Some(component_style.to_symbol()),
            "package" => return Some(package_style.to_symbol()),
            "action" => return Some(Self::Action),
            "process" => return Some(Self::Process),
            _ => {}
        }

        let normalized: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if normalized.is_empty() {
            return None;
        }

        REGISTRY
            .iter()
            .find(|(key, _)| *key == normalized)
            .map(|(_, kind)| *kind)
    }

    /// Canonical lowercase name of the symbol.
    pub fn name(self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Actor(ActorStyle::Stickman) => "actor",
            Self::Actor(ActorStyle::Awesome) => "actor_awesome",
            Self::Agent => "agent",
            Self::Artifact => "artifact",
            Self::Boundary => "boundary",
            Self::Card => "card",
            Self::Cloud => "cloud",
            Self::Collections => "collections",
            Self::Component1 => "component1",
            Self::Component2 => "component2",
            Self::Control => "control",
            Self::Database => "database",
            Self::Entity => "entity",
            Self::File => "file",
            Self::Folder => "folder",
            Self::Frame => "frame",
            Self::Hexagon => "hexagon",
            Self::Interface => "interface",
            Self::Label => "label",
            Self::Node => "node",
            Self::Package => "package",
            Self::Person => "person",
            Self::Process => "process",
            Self::Queue => "queue",
            Self::Rectangle => "rectangle",
            Self::Stack => "stack",
            Self::Storage => "storage",
            Self::Usecase => "usecase",
        }
    }

    pub(crate) fn placement(self) -> Placement {
        match self {
            Self::Actor(ActorStyle::Stickman) => Placement::Icon(Size::new(30.0, 50.0)),
            Self::Actor(ActorStyle::Awesome) => Placement::Icon(Size::new(32.0, 40.0)),
            Self::Boundary => Placement::Icon(Size::new(40.0, 30.0)),
            Self::Control | Self::Entity => Placement::Icon(Size::new(30.0, 30.0)),
            Self::Interface => Placement::Icon(Size::new(16.0, 16.0)),
            Self::Node | Self::Frame | Self::Component1 => {
                Placement::Container(Insets::new(20.0, 25.0, 10.0, 15.0))
            }
            Self::Component2 => Placement::Container(Insets::new(10.0, 30.0, 10.0, 10.0)),
            Self::Database => Placement::Container(Insets::new(24.0, 10.0, 5.0, 10.0)),
            Self::Cloud => Placement::Container(Insets::uniform(15.0)),
            Self::Folder | Self::Package => {
                Placement::Container(Insets::new(20.0, 20.0, 10.0, 10.0))
            }
            Self::Artifact => Placement::Container(Insets::new(13.0, 20.0, 10.0, 10.0)),
            Self::Queue => Placement::Container(Insets::new(5.0, 15.0, 5.0, 5.0)),
            Self::Stack => Placement::Container(Insets::new(10.0, 25.0, 10.0, 25.0)),
            Self::Hexagon => Placement::Container(Insets::new(10.0, 15.0, 10.0, 15.0)),
            Self::Collections => Placement::Container(Insets::new(14.0, 14.0, 10.0, 10.0)),
            Self::Process | Self::Action => {
                Placement::Container(Insets::new(10.0, 20.0, 10.0, 10.0))
            }
            Self::Person => Placement::Container(Insets::new(30.0, 10.0, 10.0, 10.0)),
            Self::Usecase => Placement::Container(Insets::new(10.0, 20.0, 10.0, 20.0)),
            Self::Label => Placement::Container(Insets::uniform(2.0)),
            Self::Agent | Self::Card | Self::File | Self::Rectangle | Self::Storage => {
                Placement::Container(Insets::uniform(10.0))
            }
        }
    }

    /// Builds the compact box of this symbol around three text slots.
    ///
    /// `top` and `bottom` frame the `body`; an absent body is laid out as
    /// if it were empty. `alignment` places each slot horizontally inside the
    /// symbol.
    pub fn as_small(
        self,
        top: TextBlock,
        body: Option<TextBlock>,
        bottom: TextBlock,
        context: SymbolContext,
        alignment: HorizontalAlignment,
    ) -> SymbolBox {
        SymbolBox::new(self, top, body, bottom, context, alignment)
    }

    pub(crate) fn outline(self) -> Outline {
        Outline::new(self)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolKind {
    type Err = String;

    /// Resolves with the default [`SymbolStyles`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymbolStyles::default()
            .resolve(s)
            .ok_or_else(|| format!("unknown symbol `{s}`"))
    }
}
