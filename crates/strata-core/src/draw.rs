//! Per-frame instance stream produced by scenes and consumed by the
//! geometry pass.

use smallvec::SmallVec;

/// One billboard instance. Layout matches the geometry-pass vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub glow: f32,
}

impl InstanceData {
    pub fn new(pos: glam::Vec3, scale: f32, color: glam::Vec4, glow: f32) -> Self {
        Self {
            pos: pos.to_array(),
            scale,
            color: color.to_array(),
            glow,
        }
    }
}

/// Ordered instance list with batch boundaries (one batch per `render` call).
#[derive(Default)]
pub struct DrawList {
    instances: Vec<InstanceData>,
    // end offsets into `instances`, one per closed batch
    batch_ends: SmallVec<[u32; 8]>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.instances.clear();
        self.batch_ends.clear();
    }

    #[inline]
    pub fn push(&mut self, instance: InstanceData) {
        self.instances.push(instance);
    }

    pub fn extend_from(&mut self, instances: &[InstanceData]) {
        self.instances.extend_from_slice(instances);
    }

    /// Close the current batch at the present instance count.
    pub fn end_batch(&mut self) {
        self.batch_ends.push(self.instances.len() as u32);
    }

    pub fn instances(&self) -> &[InstanceData] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn batch_count(&self) -> usize {
        self.batch_ends.len()
    }
}
