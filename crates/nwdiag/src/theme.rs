//! Theme colors and symbol styles for element boxes.
//!
//! A [`Theme`] answers two questions for the block converter: which color
//! fills and outlines a box ([`ColorRole`]), and how the configurable shape
//! names `actor`, `component` and `package` are drawn ([`SymbolStyles`]).
//!
//! ```
//! # use nwdiag::theme::{ColorRole, Theme};
//! let theme = Theme::default_borrowed();
//! assert_eq!(theme.color(ColorRole::ActivityBorder), ColorRole::ActivityBorder.default_color());
//! ```

use std::{collections::HashMap, fmt, sync::OnceLock};

use log::debug;

use nwdiag_core::{
    color::Color,
    draw::{SymbolContext, SymbolStyles},
};

use crate::{config::AppConfig, error::NwdiagError};

/// Default drop shadow depth of element boxes, in pixels.
pub const DEFAULT_SHADOW: f32 = 3.0;

static DEFAULT_THEME: OnceLock<Theme> = OnceLock::new();

/// Named color slots of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Fill of element boxes
    ActivityBackground,
    /// Outline of element boxes
    ActivityBorder,
    /// Diagram background
    Background,
    /// Generic line color
    Border,
}

impl ColorRole {
    /// The built-in color of this role.
    pub fn default_color(self) -> Color {
        let value = match self {
            Self::ActivityBackground => "#FEFECE",
            Self::ActivityBorder => "#A80036",
            Self::Background => "white",
            Self::Border => "black",
        };
        Color::new(value).expect("built-in theme colors are valid")
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ActivityBackground => "activity background",
            Self::ActivityBorder => "activity border",
            Self::Background => "background",
            Self::Border => "border",
        };
        f.write_str(name)
    }
}

/// Colors, shadow and symbol styles used to draw element boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    colors: HashMap<ColorRole, Color>,
    shadow: f32,
    symbols: SymbolStyles,
}

impl Theme {
    /// Creates a theme with only built-in values.
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
            shadow: DEFAULT_SHADOW,
            symbols: SymbolStyles::default(),
        }
    }

    /// Returns a reference to a shared, lazily-initialized default theme.
    pub fn default_borrowed() -> &'static Self {
        DEFAULT_THEME.get_or_init(Self::new)
    }

    /// Builds a theme from the `[style]` and `[symbols]` configuration sections.
    ///
    /// # Errors
    ///
    /// Returns [`NwdiagError::InvalidColor`] if a configured color cannot be parsed.
    pub fn from_config(config: &AppConfig) -> Result<Self, NwdiagError> {
        let style = config.style();
        let mut theme = Self::new().with_symbols(*config.symbols());

        let overrides = [
            (ColorRole::ActivityBackground, style.background_color()),
            (ColorRole::ActivityBorder, style.border_color()),
        ];
        for (role, color) in overrides {
            let color = color.map_err(|message| NwdiagError::InvalidColor {
                role: role.to_string(),
                message,
            })?;
            if let Some(color) = color {
                debug!(role:% = role, color:% = color; "Overriding theme color");
                theme = theme.with_color(role, color);
            }
        }

        if let Some(shadow) = style.shadow() {
            if !shadow.is_finite() {
                return Err(NwdiagError::Config(format!(
                    "shadow depth must be a finite number, got {shadow}"
                )));
            }
            theme = theme.with_shadow(shadow);
        }

        Ok(theme)
    }

    /// Returns a copy with `role` set to `color`.
    pub fn with_color(mut self, role: ColorRole, color: Color) -> Self {
        self.colors.insert(role, color);
        self
    }

    /// Returns a copy with a different shadow depth.
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

    pub fn with_symbols(mut self, symbols: SymbolStyles) -> Self {
        self.symbols = symbols;
        self
    }

    /// The color of `role`: the override if one is set, the built-in default otherwise.
    pub fn color(&self, role: ColorRole) -> Color {
        self.colors
            .get(&role)
            .copied()
            .unwrap_or_else(|| role.default_color())
    }

    pub fn shadow(&self) -> f32 {
        self.shadow
    }

    pub fn symbols(&self) -> &SymbolStyles {
        &self.symbols
    }

    /// Drawing context of element boxes: activity colors plus the shadow.
    pub fn symbol_context(&self) -> SymbolContext {
        SymbolContext::new(
            self.color(ColorRole::ActivityBackground),
            self.color(ColorRole::ActivityBorder),
        )
        .with_shadow(self.shadow)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use nwdiag_core::draw::{ActorStyle, PackageStyle};

    use super::*;
    use crate::config::StyleConfig;

    #[test]
    fn test_builtin_colors() {
        let theme = Theme::new();
        assert_eq!(
            theme.color(ColorRole::ActivityBackground),
            Color::new("#FEFECE").unwrap()
        );
        assert_eq!(
            theme.color(ColorRole::ActivityBorder),
            Color::new("#A80036").unwrap()
        );
        assert_eq!(theme.color(ColorRole::Background), Color::white());
        assert_eq!(theme.color(ColorRole::Border), Color::black());
    }

    #[test]
    fn test_override_only_touches_its_role() {
        let theme = Theme::new().with_color(ColorRole::ActivityBorder, Color::black());
        assert_eq!(theme.color(ColorRole::ActivityBorder), Color::black());
        assert_eq!(
            theme.color(ColorRole::ActivityBackground),
            ColorRole::ActivityBackground.default_color()
        );
    }

    #[test]
    fn test_symbol_context() {
        let context = Theme::new().symbol_context();
        assert_eq!(
            context.background(),
            ColorRole::ActivityBackground.default_color()
        );
        assert_eq!(context.border(), ColorRole::ActivityBorder.default_color());
        assert_approx_eq!(f32, context.shadow(), DEFAULT_SHADOW);
    }

    #[test]
    fn test_negative_shadow_is_clamped() {
        let theme = Theme::new().with_shadow(-1.0);
        assert_approx_eq!(f32, theme.shadow(), 0.0);
        assert!(!theme.symbol_context().has_shadow());
    }

    #[test]
    fn test_non_finite_shadow_is_disabled() {
        let theme = Theme::new().with_shadow(f32::INFINITY);
        assert_approx_eq!(f32, theme.shadow(), 0.0);
        assert!(!theme.symbol_context().has_shadow());
    }

    #[test]
    fn test_from_config_rejects_infinite_shadow() {
        let config = AppConfig::from_toml_str("[style]\nshadow = inf").unwrap();
        let result = Theme::from_config(&config);
        assert!(matches!(result, Err(NwdiagError::Config(_))));
    }

    #[test]
    fn test_default_borrowed_is_shared() {
        let first = Theme::default_borrowed();
        let second = Theme::default_borrowed();
        assert!(std::ptr::eq(first, second));
        assert_eq!(*first, Theme::default());
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig::from_toml_str(
            r##"
            [style]
            background_color = "#ffffff"
            shadow = 0.0

            [symbols]
            actor = "awesome"
            package = "node"
            "##,
        )
        .unwrap();

        let theme = Theme::from_config(&config).unwrap();
        assert_eq!(
            theme.color(ColorRole::ActivityBackground),
            Color::new("#ffffff").unwrap()
        );
        assert_eq!(
            theme.color(ColorRole::ActivityBorder),
            ColorRole::ActivityBorder.default_color()
        );
        assert_approx_eq!(f32, theme.shadow(), 0.0);
        assert_eq!(theme.symbols().actor, ActorStyle::Awesome);
        assert_eq!(theme.symbols().package, PackageStyle::Node);
    }

    #[test]
    fn test_from_config_with_invalid_color() {
        let config = AppConfig::new(
            StyleConfig::new(None, Some("not-a-color".to_string()), None),
            SymbolStyles::default(),
        );
        let result = Theme::from_config(&config);
        assert!(matches!(
            result,
            Err(NwdiagError::InvalidColor { ref role, .. }) if role == "activity border"
        ));
    }
}
