use scene::components::{Color, ColorPair};

/// Base solid colors: translucent blues, front over back.
pub const SOLID_BASE: ColorPair = ColorPair::new(
    // #02A1E2, alpha 0.6
    [0.008, 0.631, 0.886, 0.6],
    // #3480C4, alpha 0.5
    [0.204, 0.502, 0.769, 0.5],
);

/// Hover highlight: both slots red.
pub const SOLID_HIGHLIGHT: ColorPair = ColorPair::uniform([1.0, 0.0, 0.0, 1.0]);

pub const OUTLINE_COLOR: Color = [1.0, 1.0, 1.0, 1.0];

/// Colors a renderer should use for region primitives.
///
/// The scene tracks appearance *state*; mapping state to color happens here,
/// keeping selection logic decoupled from presentation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub solid: ColorPair,
    pub highlight: ColorPair,
    pub outline: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            solid: SOLID_BASE,
            highlight: SOLID_HIGHLIGHT,
            outline: OUTLINE_COLOR,
        }
    }
}

impl Palette {
    /// Resolved color pair for a solid in the given state. Only hover
    /// recolors; expansion stretches the transform and keeps the base
    /// colors.
    pub fn solid_colors(&self, state: scene::components::AppearanceState) -> ColorPair {
        match state {
            scene::components::AppearanceState::Base => self.solid,
            scene::components::AppearanceState::Hovered => self.highlight,
            scene::components::AppearanceState::Expanded => self.solid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Palette;
    use scene::components::AppearanceState;

    #[test]
    fn hover_maps_to_highlight() {
        let p = Palette::default();
        assert_eq!(p.solid_colors(AppearanceState::Hovered), p.highlight);
        assert_eq!(p.solid_colors(AppearanceState::Base), p.solid);
    }
}
