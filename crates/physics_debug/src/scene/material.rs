//! Materials for debug meshes

/// How a material shades its mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Solid faces colored by their surface normal
    Normal,
    /// Flat unlit color
    Basic,
}

/// Material properties for debug rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Shading model
    pub kind: MaterialKind,

    /// Base color (RGB), ignored by normal shading
    pub base_color: [f32; 3],

    /// Draw triangle edges only
    pub wireframe: bool,
}

impl Material {
    /// Solid normal-shaded material
    pub const fn normal() -> Self {
        Self {
            kind: MaterialKind::Normal,
            base_color: [1.0, 1.0, 1.0],
            wireframe: false,
        }
    }

    /// Unlit wireframe material in the given color
    pub const fn wireframe_basic(base_color: [f32; 3]) -> Self {
        Self {
            kind: MaterialKind::Basic,
            base_color,
            wireframe: true,
        }
    }

    /// Green unlit wireframe
    pub const fn debug_wireframe() -> Self {
        Self::wireframe_basic([0.0, 1.0, 0.0])
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::normal()
    }
}
