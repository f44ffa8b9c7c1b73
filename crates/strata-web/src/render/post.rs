use super::helpers;
use wgpu;

/// CPU mirror of the `PostUniforms` block in the post shader.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub pulse: f32,
    pub blur_dir: [f32; 2],
    pub bloom_strength: f32,
    pub threshold: f32,
    pub exposure: f32,
    pub dof_aperture: f32,
    pub trail_damp: f32,
    pub pointer_speed: f32,
    pub gyro_tilt: f32,
    pub focus_distance: f32,
}

/// CPU mirror of the `TransitionUniforms` block in the transition shader.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct TransitionUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub cut_fade: f32,
    pub style: f32,
    pub pulse: f32,
    pub _pad: [f32; 2],
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    pub(crate) trans_bgl: wgpu::BindGroupLayout,
    /// Shared block for the single-direction passes.
    pub(crate) uniform_buffer: wgpu::Buffer,
    /// Separate blocks for the two blur directions so one encoder can carry
    /// both passes.
    pub(crate) blur_h_uniforms: wgpu::Buffer,
    pub(crate) blur_v_uniforms: wgpu::Buffer,
    pub(crate) trans_uniforms: wgpu::Buffer,
    pub(crate) dof_pipeline: wgpu::RenderPipeline,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) trail_pipeline: wgpu::RenderPipeline,
    pub(crate) transition_pipeline: wgpu::RenderPipeline,
    pub(crate) tonemap_pipeline: wgpu::RenderPipeline,
    pub(crate) fxaa_pipeline: wgpu::RenderPipeline,
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    trans_shader: &wgpu::ShaderModule,
    hdr_format: wgpu::TextureFormat,
    ldr_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[texture_entry(0), sampler_entry(1), uniform_entry(2)],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[texture_entry(0), sampler_entry(1)],
    });
    let trans_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("trans_bgl"),
        entries: &[texture_entry(0), sampler_entry(1), uniform_entry(2)],
    });

    let size = std::mem::size_of::<PostUniforms>() as u64;
    let uniform_buffer = helpers::uniform_buffer(device, "post_uniforms", size);
    let blur_h_uniforms = helpers::uniform_buffer(device, "post_uniforms_blur_h", size);
    let blur_v_uniforms = helpers::uniform_buffer(device, "post_uniforms_blur_v", size);
    let trans_uniforms = helpers::uniform_buffer(
        device,
        "transition_uniforms",
        std::mem::size_of::<TransitionUniforms>() as u64,
    );

    let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_single"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_paired = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_paired"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let pl_transition = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_transition"),
        bind_group_layouts: &[&trans_bgl],
        push_constant_ranges: &[],
    });

    let dof_pipeline =
        helpers::make_post_pipeline(device, &pl_single, post_shader, "fs_dof", hdr_format, None);
    let bright_pipeline = helpers::make_post_pipeline(
        device,
        &pl_single,
        post_shader,
        "fs_bright",
        hdr_format,
        None,
    );
    let blur_pipeline =
        helpers::make_post_pipeline(device, &pl_single, post_shader, "fs_blur", hdr_format, None);
    let trail_pipeline = helpers::make_post_pipeline(
        device,
        &pl_paired,
        post_shader,
        "fs_trail",
        hdr_format,
        None,
    );
    let transition_pipeline = helpers::make_post_pipeline(
        device,
        &pl_transition,
        trans_shader,
        "fs_transition",
        hdr_format,
        None,
    );
    let tonemap_pipeline = helpers::make_post_pipeline(
        device,
        &pl_paired,
        post_shader,
        "fs_tonemap",
        ldr_format,
        None,
    );
    let fxaa_pipeline = helpers::make_post_pipeline(
        device,
        &pl_single,
        post_shader,
        "fs_fxaa",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl0,
        bgl1,
        trans_bgl,
        uniform_buffer,
        blur_h_uniforms,
        blur_v_uniforms,
        trans_uniforms,
        dof_pipeline,
        bright_pipeline,
        blur_pipeline,
        trail_pipeline,
        transition_pipeline,
        tonemap_pipeline,
        fxaa_pipeline,
    }
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
    drop(r);
}
