//! Opens a window with the connector swarm.
//!
//! Frames are recorded instead of rasterized; run with `RUST_LOG=debug` to
//! watch the frame statistics. Click to cycle the accent color.

use connectors::assets::{ConnectorModel, GeometryId, PathShape, StaticAssets, TextureId};
use connectors::rendering::RecordingRenderer;
use connectors::scene::SceneConfig;
use connectors::{AppError, AppRuntime};
use log::LevelFilter;
use nalgebra::Vector2;

fn star(points: usize, outer: f32, inner: f32) -> PathShape {
    let outline = (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = i as f32 * std::f32::consts::PI / points as f32;
            Vector2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect();
    PathShape::new(outline)
}

fn main() -> Result<(), AppError> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let assets = StaticAssets::new(ConnectorModel {
        geometry: GeometryId(0),
        base_texture: Some(TextureId(0)),
    })
    .with_path("star", vec![star(5, 10.0, 4.0)]);

    let config = SceneConfig::builder().decorative("star").build();

    config
        .configure("Connectors", 1280, 720)
        .run(RecordingRenderer::new(), Box::new(assets))
}
