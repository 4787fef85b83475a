//! SVG outlines of every [`SymbolKind`].
//!
//! An outline is made of filled silhouette paths (which also cast the drop
//! shadow) and unfilled decoration strokes drawn on top of them.

use svg::node::element::{self as svg_element, path::Data};

use crate::{
    apply_stroke,
    draw::{ActorStyle, LayeredOutput, RenderLayer, SymbolContext, SymbolKind},
    geometry::{Bounds, Insets, Point, Size},
};

/// Depth of the receding faces of a node.
const NODE_DEPTH: f32 = 10.0;
/// Size of the folded corner of a file.
const FILE_FOLD: f32 = 10.0;
/// Vertical radius of database caps.
const DATABASE_CAP: f32 = 8.0;
/// Horizontal radius of queue caps.
const QUEUE_CAP: f32 = 8.0;

#[derive(Debug)]
enum Part {
    Silhouette(Data),
    Decoration(Data),
}

/// Outline renderer of one symbol kind.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Outline {
    kind: SymbolKind,
}

impl Outline {
    pub(crate) fn new(kind: SymbolKind) -> Self {
        Self { kind }
    }

    /// Renders the outline so that it fills `bounds`.
    ///
    /// For icon symbols `bounds` is the icon area only.
    pub(crate) fn render(&self, bounds: Bounds, context: &SymbolContext) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        if context.has_shadow() {
            let offset = Point::new(context.shadow(), context.shadow());
            let shadow_color = context.shadow_color();
            for part in self.parts(bounds.translate(offset)) {
                if let Part::Silhouette(data) = part {
                    let path = svg_element::Path::new()
                        .set("d", data)
                        .set("fill", shadow_color.to_string())
                        .set("fill-opacity", shadow_color.alpha())
                        .set("stroke", "none");
                    output.add_to_layer(RenderLayer::Shadow, Box::new(path));
                }
            }
        }

        let background = context.background();
        for part in self.parts(bounds) {
            let (layer, data, fill) = match part {
                Part::Silhouette(data) => (RenderLayer::Content, data, Some(background)),
                Part::Decoration(data) => (RenderLayer::Decoration, data, None),
            };
            let mut path = svg_element::Path::new().set("d", data);
            path = match fill {
                Some(color) => path
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
                None => path.set("fill", "none"),
            };
            let path = apply_stroke!(path, context.stroke());
            output.add_to_layer(layer, Box::new(path));
        }

        output
    }

    fn parts(&self, b: Bounds) -> Vec<Part> {
        let (x0, y0, x1, y1) = (b.min_x(), b.min_y(), b.max_x(), b.max_y());
        let (w, h) = (b.width(), b.height());
        let center = b.center();
        let (cx, cy) = (center.x(), center.y());

        match self.kind {
            SymbolKind::Rectangle | SymbolKind::Agent => vec![Part::Silhouette(rect(b, 0.0))],
            SymbolKind::Card => vec![Part::Silhouette(rect(b, 5.0))],
            SymbolKind::Storage => vec![Part::Silhouette(rect(b, (h / 2.0).min(25.0)))],
            SymbolKind::Label => Vec::new(),
            SymbolKind::Usecase => vec![Part::Silhouette(ellipse(center, w / 2.0, h / 2.0))],
            SymbolKind::Person => {
                let head = 10.0;
                let body = Bounds::new_from_top_left(
                    Point::new(x0, y0 + 2.0 * head + 2.0),
                    Size::new(w, (h - 2.0 * head - 2.0).max(0.0)),
                );
                vec![
                    Part::Silhouette(ellipse(Point::new(cx, y0 + head), head, head)),
                    Part::Silhouette(rect(body, 12.0)),
                ]
            }
            SymbolKind::Hexagon => vec![Part::Silhouette(polygon(&[
                (x0, cy),
                (x0 + 10.0, y0),
                (x1 - 10.0, y0),
                (x1, cy),
                (x1 - 10.0, y1),
                (x0 + 10.0, y1),
            ]))],
            SymbolKind::Process => vec![Part::Silhouette(polygon(&[
                (x0, y0),
                (x1 - 10.0, y0),
                (x1, cy),
                (x1 - 10.0, y1),
                (x0, y1),
            ]))],
            SymbolKind::Action => vec![Part::Silhouette(polygon(&[
                (x0, y0),
                (x1 - 10.0, y0),
                (x1, cy),
                (x1 - 10.0, y1),
                (x0, y1),
                (x0 + 10.0, cy),
            ]))],
            SymbolKind::Node => {
                let d = NODE_DEPTH;
                vec![
                    Part::Silhouette(polygon(&[
                        (x0, y0 + d),
                        (x0 + d, y0),
                        (x1, y0),
                        (x1, y1 - d),
                        (x1 - d, y1),
                        (x0, y1),
                    ])),
                    Part::Decoration(polyline(&[(x0, y0 + d), (x1 - d, y0 + d), (x1, y0)])),
                    Part::Decoration(polyline(&[(x1 - d, y0 + d), (x1 - d, y1)])),
                ]
            }
            SymbolKind::Frame => {
                let tab = (w * 0.4).min(60.0);
                vec![
                    Part::Silhouette(rect(b, 0.0)),
                    Part::Decoration(polyline(&[
                        (x0, y0 + 15.0),
                        (x0 + tab, y0 + 15.0),
                        (x0 + tab + 10.0, y0 + 5.0),
                        (x0 + tab + 10.0, y0),
                    ])),
                ]
            }
            SymbolKind::Folder | SymbolKind::Package => {
                let tab = (w * 0.4).min(50.0);
                vec![
                    Part::Silhouette(polygon(&[
                        (x0, y0),
                        (x0 + tab, y0),
                        (x0 + tab + 5.0, y0 + 10.0),
                        (x1, y0 + 10.0),
                        (x1, y1),
                        (x0, y1),
                    ])),
                    Part::Decoration(polyline(&[(x0, y0 + 10.0), (x0 + tab + 5.0, y0 + 10.0)])),
                ]
            }
            SymbolKind::File => {
                let f = FILE_FOLD;
                vec![
                    Part::Silhouette(polygon(&[
                        (x0, y0),
                        (x1 - f, y0),
                        (x1, y0 + f),
                        (x1, y1),
                        (x0, y1),
                    ])),
                    Part::Decoration(polyline(&[(x1 - f, y0), (x1 - f, y0 + f), (x1, y0 + f)])),
                ]
            }
            SymbolKind::Artifact => {
                let (ix, iy) = (x1 - 15.0, y0 + 4.0);
                vec![
                    Part::Silhouette(rect(b, 0.0)),
                    Part::Decoration(polygon(&[
                        (ix, iy),
                        (ix + 6.0, iy),
                        (ix + 10.0, iy + 4.0),
                        (ix + 10.0, iy + 13.0),
                        (ix, iy + 13.0),
                    ])),
                    Part::Decoration(polyline(&[
                        (ix + 6.0, iy),
                        (ix + 6.0, iy + 4.0),
                        (ix + 10.0, iy + 4.0),
                    ])),
                ]
            }
            SymbolKind::Database => {
                let ry = DATABASE_CAP;
                let rx = w / 2.0;
                let body = Data::new()
                    .move_to((x0, y0 + ry))
                    .elliptical_arc_to((rx, ry, 0.0, 0.0, 1.0, x1, y0 + ry))
                    .line_to((x1, y1 - ry))
                    .elliptical_arc_to((rx, ry, 0.0, 0.0, 1.0, x0, y1 - ry))
                    .close();
                let rim = Data::new()
                    .move_to((x0, y0 + ry))
                    .elliptical_arc_to((rx, ry, 0.0, 0.0, 0.0, x1, y0 + ry));
                vec![Part::Silhouette(body), Part::Decoration(rim)]
            }
            SymbolKind::Queue => {
                let rx = QUEUE_CAP;
                let ry = h / 2.0;
                let body = Data::new()
                    .move_to((x0 + rx, y0))
                    .line_to((x1 - rx, y0))
                    .elliptical_arc_to((rx, ry, 0.0, 0.0, 1.0, x1 - rx, y1))
                    .line_to((x0 + rx, y1))
                    .elliptical_arc_to((rx, ry, 0.0, 0.0, 1.0, x0 + rx, y0))
                    .close();
                let rim = Data::new()
                    .move_to((x1 - rx, y0))
                    .elliptical_arc_to((rx, ry, 0.0, 0.0, 0.0, x1 - rx, y1));
                vec![Part::Silhouette(body), Part::Decoration(rim)]
            }
            SymbolKind::Cloud => vec![Part::Silhouette(cloud(b))],
            SymbolKind::Stack => vec![
                Part::Silhouette(rect(b.shrink(Insets::new(0.0, 10.0, 0.0, 10.0)), 0.0)),
                Part::Decoration(polyline(&[(x0, y0), (x0, y1), (x1, y1), (x1, y0)])),
            ],
            SymbolKind::Collections => vec![
                Part::Silhouette(rect(b.shrink(Insets::new(0.0, 0.0, 4.0, 4.0)), 0.0)),
                Part::Silhouette(rect(b.shrink(Insets::new(4.0, 4.0, 0.0, 0.0)), 0.0)),
            ],
            SymbolKind::Component1 => vec![
                Part::Silhouette(rect(b.shrink(Insets::new(0.0, 0.0, 0.0, 6.0)), 0.0)),
                Part::Silhouette(rect_at(x0, y0 + 8.0, 12.0, 6.0)),
                Part::Silhouette(rect_at(x0, y0 + 20.0, 12.0, 6.0)),
            ],
            SymbolKind::Component2 => vec![
                Part::Silhouette(rect(b, 0.0)),
                Part::Decoration(rect_at(x1 - 20.0, y0 + 5.0, 15.0, 10.0)),
                Part::Decoration(rect_at(x1 - 23.0, y0 + 7.0, 6.0, 2.0)),
                Part::Decoration(rect_at(x1 - 23.0, y0 + 11.0, 6.0, 2.0)),
            ],
            SymbolKind::Actor(ActorStyle::Stickman) => {
                let head = w * 0.25;
                let neck = y0 + 2.0 * head;
                let hip = y0 + h * 0.65;
                let arms = neck + (hip - neck) * 0.3;
                vec![
                    Part::Silhouette(ellipse(Point::new(cx, y0 + head), head, head)),
                    Part::Decoration(polyline(&[(cx, neck), (cx, hip)])),
                    Part::Decoration(polyline(&[(x0, arms), (x1, arms)])),
                    Part::Decoration(polyline(&[(x0, y1), (cx, hip), (x1, y1)])),
                ]
            }
            SymbolKind::Actor(ActorStyle::Awesome) => {
                let head = w * 0.3;
                let shoulders = Bounds::new_from_top_left(
                    Point::new(x0, y0 + h * 0.55),
                    Size::new(w, h * 0.45),
                );
                vec![
                    Part::Silhouette(ellipse(Point::new(cx, y0 + head), head, head)),
                    Part::Silhouette(rect(shoulders, 10.0)),
                ]
            }
            SymbolKind::Boundary => {
                let r = h / 2.0;
                let circle_x = x1 - r;
                vec![
                    Part::Silhouette(ellipse(Point::new(circle_x, cy), r, r)),
                    Part::Decoration(polyline(&[(x0, y0), (x0, y1)])),
                    Part::Decoration(polyline(&[(x0, cy), (circle_x - r, cy)])),
                ]
            }
            SymbolKind::Control => {
                let r = w.min(h) / 2.0;
                let top = cy - r;
                vec![
                    Part::Silhouette(ellipse(center, r, r)),
                    Part::Decoration(polyline(&[
                        (cx + 4.0, top - 4.0),
                        (cx - 2.0, top),
                        (cx + 4.0, top + 4.0),
                    ])),
                ]
            }
            SymbolKind::Entity => {
                let r = w.min(h) / 2.0 - 2.0;
                vec![
                    Part::Silhouette(ellipse(Point::new(cx, y0 + r), r, r)),
                    Part::Decoration(polyline(&[(x0, y1), (x1, y1)])),
                ]
            }
            SymbolKind::Interface => {
                let r = w.min(h) / 2.0;
                vec![Part::Silhouette(ellipse(center, r, r))]
            }
        }
    }
}

fn rect(b: Bounds, radius: f32) -> Data {
    let (x0, y0, x1, y1) = (b.min_x(), b.min_y(), b.max_x(), b.max_y());
    let r = radius.min(b.width() / 2.0).min(b.height() / 2.0).max(0.0);
    if r == 0.0 {
        return polygon(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)]);
    }

    Data::new()
        .move_to((x0 + r, y0))
        .line_to((x1 - r, y0))
        .elliptical_arc_to((r, r, 0.0, 0.0, 1.0, x1, y0 + r))
        .line_to((x1, y1 - r))
        .elliptical_arc_to((r, r, 0.0, 0.0, 1.0, x1 - r, y1))
        .line_to((x0 + r, y1))
        .elliptical_arc_to((r, r, 0.0, 0.0, 1.0, x0, y1 - r))
        .line_to((x0, y0 + r))
        .elliptical_arc_to((r, r, 0.0, 0.0, 1.0, x0 + r, y0))
        .close()
}

/// Square-cornered rectangle with its top-left corner at (`x`, `y`).
fn rect_at(x: f32, y: f32, width: f32, height: f32) -> Data {
    rect(
        Bounds::new_from_top_left(Point::new(x, y), Size::new(width, height)),
        0.0,
    )
}

fn ellipse(center: Point, rx: f32, ry: f32) -> Data {
    let (cx, cy) = (center.x(), center.y());
    Data::new()
        .move_to((cx - rx, cy))
        .elliptical_arc_to((rx, ry, 0.0, 1.0, 0.0, cx + rx, cy))
        .elliptical_arc_to((rx, ry, 0.0, 1.0, 0.0, cx - rx, cy))
        .close()
}

fn polyline(points: &[(f32, f32)]) -> Data {
    let mut data = Data::new();
    for (idx, point) in points.iter().enumerate() {
        data = if idx == 0 {
            data.move_to(*point)
        } else {
            data.line_to(*point)
        };
    }
    data
}

fn polygon(points: &[(f32, f32)]) -> Data {
    polyline(points).close()
}

/// A bumpy closed path hugging `b`, one bulge per ~30px of edge.
fn cloud(b: Bounds) -> Data {
    let inner = b.shrink(Insets::uniform(8.0));
    let (x0, y0, x1, y1) = (inner.min_x(), inner.min_y(), inner.max_x(), inner.max_y());
    let segments = |length: f32| ((length / 30.0).round() as usize).max(2);

    let mut data = Data::new().move_to((x0, y0));

    let n = segments(inner.width());
    let step = inner.width() / n as f32;
    for i in 1..=n {
        let x = x0 + step * i as f32;
        data = data.elliptical_arc_to((step / 2.0, 8.0, 0.0, 0.0, 1.0, x, y0));
    }

    let n = segments(inner.height());
    let step = inner.height() / n as f32;
    for i in 1..=n {
        let y = y0 + step * i as f32;
        data = data.elliptical_arc_to((8.0, step / 2.0, 0.0, 0.0, 1.0, x1, y));
    }

    let n = segments(inner.width());
    let step = inner.width() / n as f32;
    for i in 1..=n {
        let x = x1 - step * i as f32;
        data = data.elliptical_arc_to((step / 2.0, 8.0, 0.0, 0.0, 1.0, x, y1));
    }

    let n = segments(inner.height());
    let step = inner.height() / n as f32;
    for i in 1..=n {
        let y = y1 - step * i as f32;
        data = data.elliptical_arc_to((8.0, step / 2.0, 0.0, 0.0, 1.0, x0, y));
    }

    data.close()
}
