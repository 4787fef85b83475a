//! Colors, border and shadow used when drawing a symbol.

use crate::{
    color::Color,
    draw::StrokeDefinition,
};

/// Drawing context of a symbol outline.
///
/// Built from a fill color and a border color; the shadow depth is the
/// offset, in pixels, of the drop shadow cast by the outline (0 disables it).
///
/// ```
/// use nwdiag_core::{color::Color, draw::SymbolContext};
///
/// let context = SymbolContext::new(Color::new("#FEFECE").unwrap(), Color::new("#A80036").unwrap())
///     .with_shadow(3.0);
/// assert!(context.has_shadow());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolContext {
    background: Color,
    stroke: StrokeDefinition,
    shadow: f32,
}

impl SymbolContext {
    /// Creates a context with a 1.5px solid border and no shadow.
    pub fn new(background: Color, border: Color) -> Self {
        Self {
            background,
            stroke: StrokeDefinition::new(border, 1.5),
            shadow: 0.0,
        }
    }

    /// Returns a copy with the given shadow depth.
    ///
    /// Negative and non-finite depths disable the shadow.
    pub fn with_shadow(mut self, depth: f32) -> Self {
        self.shadow = if depth.is_finite() {
            depth.max(0.0)
        } else {
            0.0
        };
        self
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn border(&self) -> Color {
        self.stroke.color()
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn shadow(&self) -> f32 {
        self.shadow
    }

    pub fn has_shadow(&self) -> bool {
        self.shadow > 0.0
    }

    /// Fill color of drop shadows.
    pub fn shadow_color(&self) -> Color {
        Color::black().with_alpha(0.25)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_new_context_has_no_shadow() {
        let context = SymbolContext::new(Color::white(), Color::black());
        assert!(!context.has_shadow());
        assert_eq!(context.background(), Color::white());
        assert_eq!(context.border(), Color::black());
        assert_approx_eq!(f32, context.stroke().width(), 1.5);
    }

    #[test]
    fn test_with_shadow() {
        let context = SymbolContext::new(Color::white(), Color::black()).with_shadow(3.0);
        assert!(context.has_shadow());
        assert_approx_eq!(f32, context.shadow(), 3.0);
    }

    #[test]
    fn test_negative_shadow_is_clamped() {
        let context = SymbolContext::new(Color::white(), Color::black()).with_shadow(-2.0);
        assert!(!context.has_shadow());
    }

    #[test]
    fn test_non_finite_shadow_is_disabled() {
        for depth in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let context = SymbolContext::new(Color::white(), Color::black()).with_shadow(depth);
            assert!(!context.has_shadow());
            assert_approx_eq!(f32, context.shadow(), 0.0);
        }
    }
}
