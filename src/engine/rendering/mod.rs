//! The boundary to the renderer.
//!
//! The scene never rasterizes anything itself. It describes meshes and
//! lights once, then pushes per-instance transforms and colors every frame
//! through [`RenderService`].

pub mod recording;

pub use recording::*;

use crate::assets::{ExtrudeSettings, GeometryId, Material, PathShape};
use crate::components::Camera;
use crate::utils::Color;
use nalgebra::{Isometry3, Similarity3, Vector3};
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum RenderError {
    #[snafu(display("Mesh {mesh:?} doesn't exist"))]
    UnknownMesh { mesh: MeshHandle },

    #[snafu(display("Light {light:?} doesn't exist"))]
    UnknownLight { light: LightHandle },

    #[snafu(display("The render backend failed: {message}"))]
    Backend { message: String },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(pub u32);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightHandle(pub u32);

/// Scale the connector model is authored at.
pub const CONNECTOR_MESH_SCALE: f32 = 10.0;
/// Scale of the extruded group, path units are large.
pub const EXTRUDED_MESH_SCALE: f32 = 0.1;

pub const ACCENT_LIGHT_INTENSITY: f32 = 4.0;
pub const ACCENT_LIGHT_DISTANCE: f32 = 2.5;

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Connector(GeometryId),
    Extruded {
        shape: PathShape,
        settings: ExtrudeSettings,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeshDesc {
    pub geometry: Geometry,
    pub material: Material,
    /// Transform of the mesh relative to its body
    pub local: Similarity3<f32>,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl MeshDesc {
    pub fn connector(geometry: GeometryId, material: impl Into<Material>) -> Self {
        MeshDesc {
            geometry: Geometry::Connector(geometry),
            material: material.into(),
            local: Similarity3::from_scaling(CONNECTOR_MESH_SCALE),
            cast_shadow: true,
            receive_shadow: true,
        }
    }

    /// Extruded paths are flipped upside down since path space has +y pointing down.
    pub fn extruded(shape: PathShape, settings: ExtrudeSettings, material: impl Into<Material>) -> Self {
        MeshDesc {
            geometry: Geometry::Extruded { shape, settings },
            material: material.into(),
            local: Similarity3::new(
                Vector3::zeros(),
                Vector3::x() * std::f32::consts::PI,
                EXTRUDED_MESH_SCALE,
            ),
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    /// Distance at which the light has faded out
    pub distance: f32,
}

impl PointLight {
    pub fn accent(color: Color) -> Self {
        PointLight {
            color,
            intensity: ACCENT_LIGHT_INTENSITY,
            distance: ACCENT_LIGHT_DISTANCE,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewSettings {
    pub camera: Camera,
    pub background: Color,
}

pub trait RenderService {
    fn configure_view(&mut self, _view: &ViewSettings) {}

    fn resize(&mut self, _width: u32, _height: u32) {}

    fn create_mesh(&mut self, desc: MeshDesc) -> Result<MeshHandle, RenderError>;

    /// Moves an instance and optionally recolors its material.
    fn update_mesh(
        &mut self,
        mesh: MeshHandle,
        transform: &Isometry3<f32>,
        color: Option<Color>,
    ) -> Result<(), RenderError>;

    /// Attaches a light that follows the mesh.
    fn attach_point_light(&mut self, mesh: MeshHandle, light: PointLight) -> Result<LightHandle, RenderError>;

    fn set_light_color(&mut self, light: LightHandle, color: Color) -> Result<(), RenderError>;

    /// Drops a mesh and its lights. Unknown handles are ignored.
    fn remove_mesh(&mut self, mesh: MeshHandle);

    fn draw(&mut self) -> Result<(), RenderError>;
}
