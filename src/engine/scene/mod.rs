//! The [`Scene`] owns every simulated entity and composes them into frames.
//!
//! It builds the connector specs from the palette, spawns one connector per
//! spec plus the glass hero and an optional extruded body, and cycles the
//! accent color on clicks. Connectors are never respawned: a new accent only
//! swaps their target colors, which the eased material state then fades to.

pub mod config;
pub mod palette;

pub use config::*;
pub use palette::*;

use crate::assets::{
    AssetError, AssetService, ConnectorModel, ExtrudeSettings, StandardMaterial, TransmissionMaterial,
};
use crate::components::{ConnectorBody, DecorativeBody, PhysicsComponent, PointerProbe, TickContext};
use crate::physics::PhysicsManager;
use crate::rendering::{MeshDesc, PointLight, RenderError, RenderService, ViewSettings};
use log::{info, warn};
use nalgebra::Vector3;
use rand::SeedableRng;
use rand::rngs::StdRng;
use snafu::{ResultExt, Snafu, ensure};

/// Where the glass connector spawns.
pub const HERO_POSITION: Vector3<f32> = Vector3::new(10.0, 10.0, 5.0);

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum SceneError {
    #[snafu(display("The scene was already initialized"))]
    AlreadyActive,

    #[snafu(display("The scene hasn't been initialized yet"))]
    NotActive,

    #[snafu(display("Couldn't load the scene assets: {source}"))]
    Asset { source: AssetError },

    #[snafu(display("The renderer rejected the scene: {source}"))]
    Render { source: RenderError },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SceneState {
    Uninitialized,
    Active,
}

pub struct Scene {
    config: SceneConfig,
    state: SceneState,
    rng: StdRng,
    accent: AccentCycle,
    palette: Palette,
    specs: Vec<ConnectorSpec>,
    pointer: PointerProbe,
    connectors: Vec<ConnectorBody>,
    hero: Option<ConnectorBody>,
    decorative: Option<DecorativeBody>,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let palette = if config.shuffle {
            Palette::permuted(config.layout, &mut rng)
        } else {
            Palette::new(config.layout)
        };
        let accent = AccentCycle::new(config.accent_index);
        let specs = palette.derive(accent.index());

        Scene {
            config,
            state: SceneState::Uninitialized,
            rng,
            accent,
            palette,
            specs,
            pointer: PointerProbe::new(),
            connectors: Vec::new(),
            hero: None,
            decorative: None,
        }
    }

    /// Spawns every entity into the physics world and the renderer.
    ///
    /// Either everything is spawned or nothing is: on failure every body and
    /// mesh created so far is removed again and the scene stays uninitialized.
    pub fn init(
        &mut self,
        physics: &mut PhysicsManager,
        renderer: &mut dyn RenderService,
        assets: &dyn AssetService,
    ) -> Result<(), SceneError> {
        ensure!(self.state == SceneState::Uninitialized, AlreadyActiveErr);

        let model = assets.connector_model().context(AssetErr)?;

        renderer.configure_view(&ViewSettings {
            camera: self.config.camera,
            background: self.config.background,
        });

        let rng = self.rng.clone();
        if let Err(e) = self.spawn(physics, renderer, assets, model) {
            warn!("Scene init failed, removing what was spawned: {e}");
            self.despawn(physics, renderer);
            self.rng = rng;
            return Err(e);
        }

        self.state = SceneState::Active;
        info!(
            "Scene active with {} connectors, accent {}",
            self.connectors.len() + self.hero.is_some() as usize,
            self.accent.index()
        );

        Ok(())
    }

    // Entities are stored before their render handles are created, `despawn`
    // has to find everything that exists.
    fn spawn(
        &mut self,
        physics: &mut PhysicsManager,
        renderer: &mut dyn RenderService,
        assets: &dyn AssetService,
        model: ConnectorModel,
    ) -> Result<(), SceneError> {
        self.pointer.init(physics);

        for (i, spec) in self.specs.iter().enumerate() {
            let mut connector = ConnectorBody::new(*spec, None, &mut self.rng).with_user_data(i as u128);
            connector.init(physics);
            self.connectors.push(connector);

            // starts untinted, the eased color takes over on the first render tick
            let material = StandardMaterial::builder()
                .roughness(spec.roughness)
                .maybe_base_texture(model.base_texture)
                .build();
            let mesh = renderer
                .create_mesh(MeshDesc::connector(model.geometry, material))
                .context(RenderErr)?;
            self.connectors[i].render.mesh = Some(mesh);

            if spec.accent {
                let light = renderer
                    .attach_point_light(mesh, PointLight::accent(spec.color))
                    .context(RenderErr)?;
                self.connectors[i].render.light = Some(light);
            }
        }

        if self.config.hero {
            let material = TransmissionMaterial::hero();
            let hero = self.hero.insert(
                ConnectorBody::hero(HERO_POSITION, material.clone()).with_user_data(self.specs.len() as u128),
            );
            hero.init(physics);

            let mesh = renderer
                .create_mesh(MeshDesc::connector(model.geometry, material))
                .context(RenderErr)?;
            hero.render.mesh = Some(mesh);
        }

        if let Some(name) = &self.config.decorative {
            let shapes = assets.path_shapes(name).unwrap_or_else(|e| {
                warn!("Decorative body \"{name}\" will be invisible: {e}");
                Vec::new()
            });

            let material = TransmissionMaterial::decorative();
            let body = DecorativeBody::new(shapes, material.clone(), &mut self.rng);
            let decorative = self.decorative.insert(body);
            decorative.init(physics);

            for shape in decorative.shapes().to_vec() {
                let desc = MeshDesc::extruded(shape, ExtrudeSettings::default(), material.clone());
                let mesh = renderer.create_mesh(desc).context(RenderErr)?;
                decorative.meshes.push(mesh);
            }
        }

        Ok(())
    }

    fn despawn(&mut self, physics: &mut PhysicsManager, renderer: &mut dyn RenderService) {
        let meshes: Vec<_> = self
            .connectors
            .iter()
            .chain(self.hero.as_ref())
            .filter_map(|c| c.render.mesh)
            .chain(self.decorative.iter().flat_map(|d| d.meshes.iter().copied()))
            .collect();
        for mesh in meshes {
            renderer.remove_mesh(mesh);
        }

        for component in self.components_mut() {
            component.delete(physics);
        }

        self.connectors.clear();
        self.hero = None;
        self.decorative = None;
    }

    /// Advances the accent and retargets the connectors. Returns the new accent index.
    pub fn click(&mut self, renderer: &mut dyn RenderService) -> Result<usize, SceneError> {
        let index = self.accent.advance();
        self.specs = self.palette.derive(index);

        for (connector, spec) in self.connectors.iter_mut().zip(&self.specs) {
            if let Some(visual) = connector.visual_mut() {
                visual.retarget(*spec);
            }
            if let Some(light) = connector.render.light {
                renderer.set_light_color(light, spec.color).context(RenderErr)?;
            }
        }

        info!("Accent changed to {index}");
        Ok(index)
    }

    /// Force and pointer hooks, run right before the physics step.
    pub fn physics_tick(&mut self, physics: &mut PhysicsManager, ctx: &TickContext) {
        if self.state != SceneState::Active {
            return;
        }

        for component in self.components_mut() {
            component.late_update(physics, ctx);
        }
    }

    /// Mirrors the resolved transforms out of the physics world.
    pub fn post_physics(&mut self, physics: &PhysicsManager) {
        for component in self.components_mut() {
            component.post_update(physics);
        }
    }

    /// Eases the materials by the raw frame time and pushes the frame to the renderer.
    pub fn render_tick(&mut self, delta_time: f32, renderer: &mut dyn RenderService) -> Result<(), SceneError> {
        ensure!(self.state == SceneState::Active, NotActiveErr);

        for connector in self.connectors.iter_mut().chain(self.hero.as_mut()) {
            let color = connector.visual_mut().map(|visual| {
                visual.render_tick(delta_time);
                visual.current_color()
            });

            if let Some(mesh) = connector.render.mesh {
                renderer
                    .update_mesh(mesh, connector.isometry(), color)
                    .context(RenderErr)?;
            }
        }

        if let Some(decorative) = &self.decorative {
            for mesh in &decorative.meshes {
                renderer
                    .update_mesh(*mesh, decorative.isometry(), None)
                    .context(RenderErr)?;
            }
        }

        Ok(())
    }

    /// Removes every body and mesh. The scene is gone afterwards.
    pub fn teardown(mut self, physics: &mut PhysicsManager, renderer: &mut dyn RenderService) {
        self.despawn(physics, renderer);
        info!("Scene torn down");
    }

    fn components_mut(&mut self) -> impl Iterator<Item = &mut dyn PhysicsComponent> {
        std::iter::once(&mut self.pointer as &mut dyn PhysicsComponent)
            .chain(self.connectors.iter_mut().map(|c| c as &mut dyn PhysicsComponent))
            .chain(self.hero.iter_mut().map(|c| c as &mut dyn PhysicsComponent))
            .chain(self.decorative.iter_mut().map(|d| d as &mut dyn PhysicsComponent))
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn accent_index(&self) -> usize {
        self.accent.index()
    }

    pub fn specs(&self) -> &[ConnectorSpec] {
        &self.specs
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn connectors(&self) -> &[ConnectorBody] {
        &self.connectors
    }

    pub fn hero(&self) -> Option<&ConnectorBody> {
        self.hero.as_ref()
    }

    pub fn decorative(&self) -> Option<&DecorativeBody> {
        self.decorative.as_ref()
    }

    pub fn pointer(&self) -> &PointerProbe {
        &self.pointer
    }
}
