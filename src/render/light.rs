use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct RectAreaLight {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    /// 0 means unlimited range.
    pub distance: f32,
    pub decay: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub distance: f32,
    pub angle: f32,
    pub penumbra: f32,
    pub decay: f32,
}

/// The kinds of light the editor can place.
///
/// Serialized with the names used by drop payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightType {
    Ambient,
    Directional,
    RectArea,
    Spot,
    Point,
}

impl LightType {
    pub const ALL: [LightType; 5] = [
        LightType::Ambient,
        LightType::Directional,
        LightType::RectArea,
        LightType::Spot,
        LightType::Point,
    ];

    /// Default outliner label for a freshly placed light of this type.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            LightType::Ambient => "Sky Light",
            LightType::Directional => "Directional Light",
            LightType::RectArea => "RectArea Light",
            LightType::Spot => "Spot Light",
            LightType::Point => "Point Light",
        }
    }
}

// Render-side light component
#[derive(Debug, Clone, PartialEq)]
pub enum LightKind {
    Ambient,
    Directional,
    RectArea(RectAreaLight),
    Spot(SpotLight),
    Point(PointLight),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Ambient,
        }
    }

    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Directional,
        }
    }

    #[must_use]
    pub fn new_rect_area(color: Vec3, intensity: f32, width: f32, height: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::RectArea(RectAreaLight { width, height }),
        }
    }

    #[must_use]
    pub fn new_spot(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Spot(SpotLight {
                distance: 0.0,
                angle: std::f32::consts::FRAC_PI_3,
                penumbra: 0.0,
                decay: 2.0,
            }),
        }
    }

    #[must_use]
    pub fn new_point(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Point(PointLight {
                distance: 0.0,
                decay: 2.0,
            }),
        }
    }

    /// Builds a light of `light_type` with the given colour and intensity.
    /// `rect_size` is only used by rect-area lights.
    #[must_use]
    pub fn from_type(light_type: LightType, color: Vec3, intensity: f32, rect_size: [f32; 2]) -> Self {
        match light_type {
            LightType::Ambient => Self::new_ambient(color, intensity),
            LightType::Directional => Self::new_directional(color, intensity),
            LightType::RectArea => Self::new_rect_area(color, intensity, rect_size[0], rect_size[1]),
            LightType::Spot => Self::new_spot(color, intensity),
            LightType::Point => Self::new_point(color, intensity),
        }
    }

    #[must_use]
    pub fn light_type(&self) -> LightType {
        match self.kind {
            LightKind::Ambient => LightType::Ambient,
            LightKind::Directional => LightType::Directional,
            LightKind::RectArea(_) => LightType::RectArea,
            LightKind::Spot(_) => LightType::Spot,
            LightKind::Point(_) => LightType::Point,
        }
    }
}
