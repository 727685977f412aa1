//! Geometry handed to the core by the asset pipeline.
//!
//! Model files and vector paths are parsed elsewhere. The core only sees
//! opaque geometry/texture ids and already-built path shapes through the
//! [`AssetService`] trait.

pub mod material;

pub use material::*;

use log::trace;
use nalgebra::Vector2;
use snafu::{OptionExt, Snafu};
use std::collections::HashMap;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum AssetError {
    #[snafu(display("The connector model isn't available"))]
    MissingModel,

    #[snafu(display("No path data named \"{name}\" is known"))]
    UnknownPath { name: String },

    #[snafu(display("Path data \"{name}\" is malformed: {reason}"))]
    MalformedPath { name: String, reason: String },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GeometryId(pub u32);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Mesh and base color texture of the standard connector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConnectorModel {
    pub geometry: GeometryId,
    pub base_texture: Option<TextureId>,
}

/// One closed 2D shape of a vector path, with optional holes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathShape {
    pub outline: Vec<Vector2<f32>>,
    pub holes: Vec<Vec<Vector2<f32>>>,
}

impl PathShape {
    pub fn new(outline: Vec<Vector2<f32>>) -> Self {
        PathShape {
            outline,
            holes: Vec::new(),
        }
    }

    /// A shape needs at least a triangle to be extruded.
    pub fn is_degenerate(&self) -> bool {
        self.outline.len() < 3
    }
}

/// How path shapes are turned into solid meshes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExtrudeSettings {
    pub depth: f32,
    pub bevel: bool,
    pub steps: u32,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        ExtrudeSettings {
            depth: 4.0,
            bevel: true,
            steps: 10,
        }
    }
}

pub trait AssetService {
    fn connector_model(&self) -> Result<ConnectorModel, AssetError>;

    /// Shapes of the named vector path.
    fn path_shapes(&self, name: &str) -> Result<Vec<PathShape>, AssetError>;
}

/// Assets that are already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    model: Option<ConnectorModel>,
    paths: HashMap<String, Vec<PathShape>>,
}

impl StaticAssets {
    pub fn new(model: ConnectorModel) -> Self {
        StaticAssets {
            model: Some(model),
            paths: HashMap::new(),
        }
    }

    pub fn with_path(mut self, name: impl Into<String>, shapes: Vec<PathShape>) -> Self {
        self.paths.insert(name.into(), shapes);
        self
    }
}

impl AssetService for StaticAssets {
    fn connector_model(&self) -> Result<ConnectorModel, AssetError> {
        self.model.context(MissingModelErr)
    }

    fn path_shapes(&self, name: &str) -> Result<Vec<PathShape>, AssetError> {
        let shapes = self.paths.get(name).context(UnknownPathErr { name })?;

        if let Some(index) = shapes.iter().position(PathShape::is_degenerate) {
            return MalformedPathErr {
                name,
                reason: format!("shape {index} has fewer than three points"),
            }
            .fail();
        }

        trace!("Serving {} shapes for path \"{name}\"", shapes.len());
        Ok(shapes.clone())
    }
}
