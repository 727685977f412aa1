use crate::assets::TextureId;
use crate::utils::Color;
use bon::Builder;

/// Opaque PBR material of the regular connectors.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct StandardMaterial {
    #[builder(default = Color::WHITE)]
    pub color: Color,
    #[builder(default = 0.0)]
    pub roughness: f32,
    #[builder(default = 0.2)]
    pub metalness: f32,
    pub base_texture: Option<TextureId>,
}

/// Refractive glass-like material.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct TransmissionMaterial {
    #[builder(default = 1.0)]
    pub clearcoat: f32,
    #[builder(default = 0.1)]
    pub thickness: f32,
    #[builder(default = 0.1)]
    pub anisotropic_blur: f32,
    #[builder(default = 0.1)]
    pub chromatic_aberration: f32,
    #[builder(default = 8)]
    pub samples: u32,
    /// Refraction buffer size; the renderer picks one when unset
    pub resolution: Option<u32>,
}

impl TransmissionMaterial {
    /// Material of the glass connector.
    pub fn hero() -> Self {
        TransmissionMaterial::builder().resolution(512).build()
    }

    /// Thicker, blurrier glass of the extruded body.
    pub fn decorative() -> Self {
        TransmissionMaterial::builder()
            .thickness(5.1)
            .anisotropic_blur(8.1)
            .build()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Standard(StandardMaterial),
    Transmission(TransmissionMaterial),
}

impl From<StandardMaterial> for Material {
    fn from(material: StandardMaterial) -> Self {
        Material::Standard(material)
    }
}

impl From<TransmissionMaterial> for Material {
    fn from(material: TransmissionMaterial) -> Self {
        Material::Transmission(material)
    }
}
