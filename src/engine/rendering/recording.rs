use crate::rendering::{
    BackendErr, LightHandle, MeshDesc, MeshHandle, PointLight, RenderError, RenderService,
    UnknownLightErr, UnknownMeshErr, ViewSettings,
};
use crate::utils::Color;
use log::trace;
use nalgebra::Isometry3;
use snafu::OptionExt;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedMesh {
    pub desc: MeshDesc,
    pub transform: Isometry3<f32>,
    pub color: Option<Color>,
    pub lights: Vec<LightHandle>,
    pub updates: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLight {
    pub mesh: MeshHandle,
    pub light: PointLight,
}

/// Renderer that keeps the latest state of every instance instead of drawing it.
///
/// Useful headless and to inspect what a frame would have shown.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    meshes: BTreeMap<MeshHandle, RecordedMesh>,
    lights: BTreeMap<LightHandle, RecordedLight>,
    view: Option<ViewSettings>,
    size: (u32, u32),
    next_id: u32,
    draws: u64,
    failing: Option<String>,
    mesh_budget: Option<usize>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh(&self, mesh: MeshHandle) -> Option<&RecordedMesh> {
        self.meshes.get(&mesh)
    }

    pub fn meshes(&self) -> impl Iterator<Item = (&MeshHandle, &RecordedMesh)> {
        self.meshes.iter()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn light(&self, light: LightHandle) -> Option<&RecordedLight> {
        self.lights.get(&light)
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn view(&self) -> Option<&ViewSettings> {
        self.view.as_ref()
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Makes every following draw fail with `message`.
    pub fn fail_draws(&mut self, message: impl Into<String>) {
        self.failing = Some(message.into());
    }

    /// Lets only `count` more meshes be created, the next ones fail. `None` lifts the limit.
    pub fn limit_meshes(&mut self, count: Option<usize>) {
        self.mesh_budget = count;
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl RenderService for RecordingRenderer {
    fn configure_view(&mut self, view: &ViewSettings) {
        self.view = Some(*view);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn create_mesh(&mut self, desc: MeshDesc) -> Result<MeshHandle, RenderError> {
        if let Some(budget) = &mut self.mesh_budget {
            if *budget == 0 {
                return BackendErr { message: "out of mesh memory" }.fail();
            }
            *budget -= 1;
        }

        let handle = MeshHandle(self.next_id());
        self.meshes.insert(
            handle,
            RecordedMesh {
                desc,
                transform: Isometry3::identity(),
                color: None,
                lights: Vec::new(),
                updates: 0,
            },
        );
        Ok(handle)
    }

    fn update_mesh(
        &mut self,
        mesh: MeshHandle,
        transform: &Isometry3<f32>,
        color: Option<Color>,
    ) -> Result<(), RenderError> {
        let recorded = self.meshes.get_mut(&mesh).context(UnknownMeshErr { mesh })?;
        recorded.transform = *transform;
        if color.is_some() {
            recorded.color = color;
        }
        recorded.updates += 1;
        Ok(())
    }

    fn attach_point_light(&mut self, mesh: MeshHandle, light: PointLight) -> Result<LightHandle, RenderError> {
        let handle = LightHandle(self.next_id());
        let recorded = self.meshes.get_mut(&mesh).context(UnknownMeshErr { mesh })?;
        recorded.lights.push(handle);
        self.lights.insert(handle, RecordedLight { mesh, light });
        Ok(handle)
    }

    fn set_light_color(&mut self, light: LightHandle, color: Color) -> Result<(), RenderError> {
        let recorded = self.lights.get_mut(&light).context(UnknownLightErr { light })?;
        recorded.light.color = color;
        Ok(())
    }

    fn remove_mesh(&mut self, mesh: MeshHandle) {
        if let Some(recorded) = self.meshes.remove(&mesh) {
            for light in recorded.lights {
                self.lights.remove(&light);
            }
        }
    }

    fn draw(&mut self) -> Result<(), RenderError> {
        if let Some(message) = &self.failing {
            return BackendErr { message: message.clone() }.fail();
        }

        self.draws += 1;
        trace!("Frame {} with {} meshes and {} lights", self.draws, self.meshes.len(), self.lights.len());
        Ok(())
    }
}
