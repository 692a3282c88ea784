/// RGBA color, linear [0, 1] channels.
pub type Color = [f32; 4];

/// Two-slot material: solids carry a front/back color pair.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorPair {
    pub front: Color,
    pub back: Color,
}

impl ColorPair {
    pub const fn new(front: Color, back: Color) -> Self {
        Self { front, back }
    }

    pub const fn uniform(color: Color) -> Self {
        Self {
            front: color,
            back: color,
        }
    }
}

/// Presentation state of a primitive.
///
/// The renderer maps states to colors/transforms; the scene never mutates
/// colors directly, so reverting is always exact.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum AppearanceState {
    #[default]
    Base,
    Hovered,
    Expanded,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Appearance {
    pub state: AppearanceState,
    pub base: ColorPair,
}

impl Appearance {
    pub fn new(base: ColorPair) -> Self {
        Self {
            state: AppearanceState::Base,
            base,
        }
    }
}
