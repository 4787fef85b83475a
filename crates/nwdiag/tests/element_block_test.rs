//! Integration tests for converting elements into blocks.

use std::rc::Rc;

use float_cmp::assert_approx_eq;
use indexmap::IndexMap;

use nwdiag::{
    ColorRole, Element, Network, NetworkId, Networks, Theme,
    color::Color,
    draw::{Drawable, RenderLayer, SymbolKind},
};

fn connections(entries: &[(&str, Option<&str>)]) -> IndexMap<NetworkId, Option<String>> {
    entries
        .iter()
        .map(|(network, label)| (NetworkId::new(network), label.map(str::to_string)))
        .collect()
}

#[test]
fn test_end_to_end_conversion() {
    let net_a = NetworkId::new("netA");
    let net_b = NetworkId::new("netB");

    let mut element = Element::new("srv1", net_a);
    element.set_shape(Some("bogus"));
    assert_eq!(element.shape(), SymbolKind::Rectangle);

    let block = element.to_linked_element(
        &connections(&[("netA", Some("eth0")), ("netB", Some(""))]),
        Some(net_b),
    );

    assert_eq!(block.element().name(), "srv1");
    assert_eq!(block.network(), net_a);
    assert_eq!(block.next(), Some(net_b));

    let keys: Vec<_> = block.connections().keys().copied().collect();
    assert_eq!(keys, [net_a, net_b]);

    let eth0 = block.label(net_a).expect("netA is labeled");
    assert_eq!(eth0.lines(), ["eth0"]);

    let empty = block.label(net_b).expect("an empty label is still a label");
    assert!(empty.is_empty());
    assert_approx_eq!(f32, empty.size().width(), 0.0);
    assert_approx_eq!(f32, empty.size().height(), 0.0);

    let symbol = block.symbol();
    assert_eq!(symbol.kind(), SymbolKind::Rectangle);
    assert_eq!(symbol.body().expect("description").lines(), ["srv1"]);
    assert!(symbol.top().is_empty());
    assert!(symbol.bottom().is_empty());
    assert_eq!(
        symbol.context().background(),
        Color::new("#FEFECE").unwrap()
    );
    assert_eq!(symbol.context().border(), Color::new("#A80036").unwrap());
    assert_approx_eq!(f32, symbol.context().shadow(), 3.0);
}

#[test]
fn test_connection_order_is_preserved() {
    let element = Element::new("srv1", NetworkId::new("n2"));
    let block = element.to_linked_element(
        &connections(&[("n3", Some("c")), ("n1", Some("a")), ("n2", None)]),
        None,
    );

    let keys: Vec<String> = block
        .connections()
        .keys()
        .map(|id| id.to_string())
        .collect();
    assert_eq!(keys, ["n3", "n1", "n2"]);
    assert!(block.label(NetworkId::new("n2")).is_none());
    assert!(block.connections().contains_key(&NetworkId::new("n2")));
}

#[test]
fn test_block_is_a_snapshot() {
    let mut element = Element::new("srv1", NetworkId::new("dmz"));
    element.set_description("before");
    let block = element.to_linked_element(&IndexMap::new(), None);

    element.set_description("after");
    element.set_shape(Some("cloud"));
    element.do_not_have_its_own_column();

    assert_eq!(block.element().description(), "before");
    assert!(block.element().has_its_own_column());
    assert_eq!(block.symbol().kind(), SymbolKind::Rectangle);
    assert_eq!(block.symbol().body().unwrap().lines(), ["before"]);
}

#[test]
fn test_description_list_is_split() {
    let mut element = Element::new("srv1", NetworkId::new("dmz"));
    element.set_description("A, B, C");
    let block = element.to_linked_element(&IndexMap::new(), None);
    assert_eq!(block.symbol().body().unwrap().lines(), ["A", "B", "C"]);
}

#[test]
fn test_empty_description_draws_empty_body() {
    let mut element = Element::new("srv1", NetworkId::new("dmz"));
    element.set_description("");
    let block = element.to_linked_element(&IndexMap::new(), None);

    let body = block.symbol().body().expect("empty body is present");
    assert!(body.is_empty());
    let output = block.render_to_layers(Default::default());
    assert_eq!(output.count_in_layer(RenderLayer::Text), 0);
    assert_eq!(output.count_in_layer(RenderLayer::Content), 1);
}

#[test]
fn test_theme_drives_colors_and_styles() {
    let theme = Rc::new(
        Theme::new()
            .with_color(ColorRole::ActivityBackground, Color::white())
            .with_shadow(0.0),
    );
    let mut element = Element::with_theme("user", NetworkId::new("dmz"), theme);
    element.set_shape(Some("actor"));

    let block = element.to_linked_element(&IndexMap::new(), None);
    let context = block.symbol().context();
    assert_eq!(context.background(), Color::white());
    assert_eq!(context.border(), ColorRole::ActivityBorder.default_color());
    assert!(!context.has_shadow());

    let output = block.render_to_layers(Default::default());
    assert_eq!(output.count_in_layer(RenderLayer::Shadow), 0);
}

#[test]
fn test_explicit_theme_overrides_element_theme() {
    let element = Element::new("srv1", NetworkId::new("dmz"));
    let theme = Theme::new().with_color(ColorRole::ActivityBorder, Color::black());
    let block = element.to_linked_element_with(&theme, &IndexMap::new(), None);
    assert_eq!(block.symbol().context().border(), Color::black());
}

#[test]
fn test_registry_supplies_next_network() {
    let mut networks = Networks::new();
    let dmz = networks.add(Network::new("dmz")).unwrap();
    let internal = networks.add(Network::new("internal")).unwrap();

    let element = Element::new("web01", dmz);
    let block = element.to_linked_element(
        &connections(&[("dmz", Some("210.x.x.1")), ("internal", Some("172.x.x.1"))]),
        networks.next_after(element.network()),
    );

    assert_eq!(block.next(), Some(internal));
    assert!(networks.try_get(block.network()).is_ok());
    assert!(block.min_width() >= block.size().width());
}

#[test]
fn test_every_shape_renders() {
    for name in [
        "action",
        "actor",
        "agent",
        "artifact",
        "boundary",
        "card",
        "cloud",
        "collections",
        "component",
        "component1",
        "component2",
        "control",
        "database",
        "entity",
        "file",
        "folder",
        "frame",
        "hexagon",
        "interface",
        "node",
        "package",
        "person",
        "process",
        "queue",
        "rect",
        "stack",
        "storage",
        "usecase",
    ] {
        let mut element = Element::new("srv1", NetworkId::new("dmz"));
        element.try_set_shape(name).unwrap();
        let block = element.to_linked_element(&IndexMap::new(), None);
        let output = block.render_to_layers(Default::default());
        assert!(
            output.count_in_layer(RenderLayer::Content) > 0,
            "shape `{name}` should draw an outline"
        );
        assert!(block.size().width() > 0.0);
    }
}
