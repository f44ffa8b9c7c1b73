//! WebGPU state and the seven-stage frame pipeline: geometry, depth of
//! field, bloom, trail feedback, transition composite, tonemap, FXAA.

use glam::Vec3;
use strata_core::director::PostParams;
use strata_core::draw::{DrawList, InstanceData};
use strata_core::particles::ParticleField;
use strata_core::Camera;
use web_sys as web;
use wgpu;

pub(crate) mod helpers;
pub(crate) mod post;
pub(crate) mod targets;

use post::{PostResources, PostUniforms, TransitionUniforms};
use targets::{RenderTargets, HDR_FORMAT, LDR_FORMAT};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    misc: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ParticleUniforms {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    color_size: [f32; 4],
    misc: [f32; 4],
}

const PARTICLE_BASE_SIZE: f32 = 0.055;
const INSTANCE_STRIDE: u64 = std::mem::size_of::<InstanceData>() as u64;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,
    scene_uniforms: wgpu::Buffer,
    particle_uniforms: wgpu::Buffer,
    scene_bg: wgpu::BindGroup,
    particle_bg: wgpu::BindGroup,

    instance_vb: wgpu::Buffer,
    instance_capacity: usize,
    particle_pos_vb: wgpu::Buffer,
    particle_vel_vb: wgpu::Buffer,
    particle_capacity: usize,

    post: PostResources,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,

    // frame-graph bind groups, rebuilt whenever the targets are recreated
    bg_hdr_a: wgpu::BindGroup,
    bg_hdr_b: wgpu::BindGroup,
    bg_blur_h: wgpu::BindGroup,
    bg_blur_v: wgpu::BindGroup,
    bg_ldr: wgpu::BindGroup,
    bg1_bloom_a: wgpu::BindGroup,
    bg1_trail_a: wgpu::BindGroup,
    bg1_trail_b: wgpu::BindGroup,
    tbg_trail_a: wgpu::BindGroup,
    tbg_trail_b: wgpu::BindGroup,
    trail_flip: bool,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, max_particles: usize) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(strata_core::SCENE_WGSL.into()),
        });
        let particle_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle_shader"),
            source: wgpu::ShaderSource::Wgsl(strata_core::PARTICLES_WGSL.into()),
        });
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(strata_core::POST_WGSL.into()),
        });
        let trans_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("transition_shader"),
            source: wgpu::ShaderSource::Wgsl(strata_core::TRANSITION_WGSL.into()),
        });

        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let scene_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });

        let scene_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&scene_pl),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_scene"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: INSTANCE_STRIDE,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x4,
                            offset: 0,
                            shader_location: 0,
                        },
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x4,
                            offset: 16,
                            shader_location: 1,
                        },
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32,
                            offset: 32,
                            shader_location: 2,
                        },
                    ],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_scene"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: HDR_FORMAT,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle_pipeline"),
            layout: Some(&scene_pl),
            vertex: wgpu::VertexState {
                module: &particle_shader,
                entry_point: Some("vs_particles"),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: 12,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &[wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 0,
                        }],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: 12,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &[wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 1,
                        }],
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &particle_shader,
                entry_point: Some("fs_particles"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: HDR_FORMAT,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let scene_uniforms = helpers::uniform_buffer(
            &device,
            "scene_uniforms",
            std::mem::size_of::<SceneUniforms>() as u64,
        );
        let particle_uniforms = helpers::uniform_buffer(
            &device,
            "particle_uniforms",
            std::mem::size_of::<ParticleUniforms>() as u64,
        );
        let scene_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniforms.as_entire_binding(),
            }],
        });
        let particle_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("particle_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: particle_uniforms.as_entire_binding(),
            }],
        });

        let instance_capacity = 4096;
        let instance_vb = helpers::vertex_buffer(
            &device,
            "instance_vb",
            instance_capacity as u64 * INSTANCE_STRIDE,
        );
        let particle_capacity = max_particles.max(1);
        let particle_pos_vb =
            helpers::vertex_buffer(&device, "particle_pos_vb", particle_capacity as u64 * 12);
        let particle_vel_vb =
            helpers::vertex_buffer(&device, "particle_vel_vb", particle_capacity as u64 * 12);

        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let post = post::create_post_resources(
            &device,
            &post_shader,
            &trans_shader,
            HDR_FORMAT,
            LDR_FORMAT,
            format,
        );
        let targets = RenderTargets::create(&device, width, height);
        let groups = build_frame_bind_groups(&device, &post, &targets, &linear_sampler);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene_pipeline,
            particle_pipeline,
            scene_uniforms,
            particle_uniforms,
            scene_bg,
            particle_bg,
            instance_vb,
            instance_capacity,
            particle_pos_vb,
            particle_vel_vb,
            particle_capacity,
            post,
            targets,
            linear_sampler,
            bg_hdr_a: groups.bg_hdr_a,
            bg_hdr_b: groups.bg_hdr_b,
            bg_blur_h: groups.bg_blur_h,
            bg_blur_v: groups.bg_blur_v,
            bg_ldr: groups.bg_ldr,
            bg1_bloom_a: groups.bg1_bloom_a,
            bg1_trail_a: groups.bg1_trail_a,
            bg1_trail_b: groups.bg1_trail_b,
            tbg_trail_a: groups.tbg_trail_a,
            tbg_trail_b: groups.tbg_trail_b,
            trail_flip: false,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.015,
                g: 0.02,
                b: 0.05,
                a: 1.0,
            },
        })
    }

    /// Reconfigure the surface and rebuild every offscreen target; no-op when
    /// the dimensions are unchanged.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, width, height);
        let groups =
            build_frame_bind_groups(&self.device, &self.post, &self.targets, &self.linear_sampler);
        self.bg_hdr_a = groups.bg_hdr_a;
        self.bg_hdr_b = groups.bg_hdr_b;
        self.bg_blur_h = groups.bg_blur_h;
        self.bg_blur_v = groups.bg_blur_v;
        self.bg_ldr = groups.bg_ldr;
        self.bg1_bloom_a = groups.bg1_bloom_a;
        self.bg1_trail_a = groups.bg1_trail_a;
        self.bg1_trail_b = groups.bg1_trail_b;
        self.tbg_trail_a = groups.tbg_trail_a;
        self.tbg_trail_b = groups.tbg_trail_b;
        self.trail_flip = false;
    }

    /// Re-apply the current surface configuration after a lost or outdated
    /// surface.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn camera_basis(camera: &Camera) -> (Vec3, Vec3) {
        let forward = (camera.target - camera.eye).normalize_or(Vec3::NEG_Z);
        let right = forward.cross(camera.up).normalize_or(Vec3::X);
        let up = right.cross(forward);
        (right, up)
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        list: &DrawList,
        particles: Option<&ParticleField>,
        params: &PostParams,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let view_proj = camera.view_proj().to_cols_array_2d();
        let (right, up) = Self::camera_basis(camera);
        let s = SceneUniforms {
            view_proj,
            cam_right: [right.x, right.y, right.z, 0.0],
            cam_up: [up.x, up.y, up.z, 0.0],
            misc: [params.time, params.pulse * 0.25, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.scene_uniforms, 0, bytemuck::bytes_of(&s));

        let instance_count = self.upload_instances(list);
        let particle_count = particles
            .map(|field| self.upload_particles(field, &s))
            .unwrap_or(0);

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("geometry_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_a_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if particle_count > 0 {
                rpass.set_pipeline(&self.particle_pipeline);
                rpass.set_bind_group(0, &self.particle_bg, &[]);
                rpass.set_vertex_buffer(0, self.particle_pos_vb.slice(..));
                rpass.set_vertex_buffer(1, self.particle_vel_vb.slice(..));
                rpass.draw(0..6, 0..particle_count);
            }
            if instance_count > 0 {
                rpass.set_pipeline(&self.scene_pipeline);
                rpass.set_bind_group(0, &self.scene_bg, &[]);
                rpass.set_vertex_buffer(0, self.instance_vb.slice(..));
                rpass.draw(0..6, 0..instance_count);
            }
        }

        let full = [self.width as f32, self.height as f32];
        let half = [full[0] * 0.5, full[1] * 0.5];
        let base = PostUniforms {
            resolution: full,
            time: params.time,
            pulse: params.pulse,
            blur_dir: [0.0, 0.0],
            bloom_strength: params.bloom_strength,
            threshold: 0.6,
            exposure: params.exposure,
            dof_aperture: params.dof_aperture,
            trail_damp: params.trail_damp,
            pointer_speed: params.pointer_speed,
            gyro_tilt: params.gyro_tilt,
            focus_distance: params.focus_distance,
        };
        self.queue
            .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(&base));
        let blur_h = PostUniforms {
            resolution: half,
            blur_dir: [1.0, 0.0],
            ..base
        };
        let blur_v = PostUniforms {
            resolution: half,
            blur_dir: [0.0, 1.0],
            ..base
        };
        self.queue
            .write_buffer(&self.post.blur_h_uniforms, 0, bytemuck::bytes_of(&blur_h));
        self.queue
            .write_buffer(&self.post.blur_v_uniforms, 0, bytemuck::bytes_of(&blur_v));
        let trans = TransitionUniforms {
            resolution: full,
            time: params.time,
            cut_fade: params.cut_fade,
            style: params.transition_style as f32,
            pulse: params.pulse,
            _pad: [0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.post.trans_uniforms, 0, bytemuck::bytes_of(&trans));

        // depth of field: hdr_a -> hdr_b
        post::blit(
            &mut encoder,
            "dof_pass",
            &self.targets.hdr_b_view,
            &self.post.dof_pipeline,
            &self.bg_hdr_a,
            None,
        );
        // bright extraction at half res: hdr_b -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            &self.post.bright_pipeline,
            &self.bg_hdr_b,
            None,
        );
        // separable blur: bloom_a -> bloom_b -> bloom_a
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            &self.post.blur_pipeline,
            &self.bg_blur_h,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            &self.post.blur_pipeline,
            &self.bg_blur_v,
            None,
        );
        // trail feedback: fresh hdr_b + previous trail -> next trail
        let (trail_prev_bg1, trail_next_view, trail_next_tbg) = if self.trail_flip {
            (
                &self.bg1_trail_b,
                &self.targets.trail_a_view,
                &self.tbg_trail_a,
            )
        } else {
            (
                &self.bg1_trail_a,
                &self.targets.trail_b_view,
                &self.tbg_trail_b,
            )
        };
        post::blit(
            &mut encoder,
            "trail_pass",
            trail_next_view,
            &self.post.trail_pipeline,
            &self.bg_hdr_b,
            Some(trail_prev_bg1),
        );
        // transition composite: trail -> hdr_a
        post::blit(
            &mut encoder,
            "transition_pass",
            &self.targets.hdr_a_view,
            &self.post.transition_pipeline,
            trail_next_tbg,
            None,
        );
        // tonemap + bloom: hdr_a (+ bloom_a) -> ldr
        post::blit(
            &mut encoder,
            "tonemap_pass",
            &self.targets.ldr_view,
            &self.post.tonemap_pipeline,
            &self.bg_hdr_a,
            Some(&self.bg1_bloom_a),
        );
        // antialias to the swapchain
        post::blit(
            &mut encoder,
            "fxaa_pass",
            &view,
            &self.post.fxaa_pipeline,
            &self.bg_ldr,
            None,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        self.trail_flip = !self.trail_flip;
        Ok(())
    }

    fn upload_instances(&mut self, list: &DrawList) -> u32 {
        let instances = list.instances();
        if instances.is_empty() {
            return 0;
        }
        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len().next_power_of_two();
            self.instance_vb = helpers::vertex_buffer(
                &self.device,
                "instance_vb",
                self.instance_capacity as u64 * INSTANCE_STRIDE,
            );
        }
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(instances));
        instances.len() as u32
    }

    fn upload_particles(&mut self, field: &ParticleField, scene: &SceneUniforms) -> u32 {
        if field.is_empty() {
            return 0;
        }
        let count = field.len().min(self.particle_capacity);
        self.queue.write_buffer(
            &self.particle_pos_vb,
            0,
            bytemuck::cast_slice(&field.positions()[..count]),
        );
        self.queue.write_buffer(
            &self.particle_vel_vb,
            0,
            bytemuck::cast_slice(&field.velocities()[..count]),
        );
        let cfg = field.config();
        let p = ParticleUniforms {
            view_proj: scene.view_proj,
            cam_right: scene.cam_right,
            cam_up: scene.cam_up,
            color_size: [cfg.color.x, cfg.color.y, cfg.color.z, PARTICLE_BASE_SIZE],
            misc: [scene.misc[0], field.pulse(), 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.particle_uniforms, 0, bytemuck::bytes_of(&p));
        count as u32
    }
}

struct FrameBindGroups {
    bg_hdr_a: wgpu::BindGroup,
    bg_hdr_b: wgpu::BindGroup,
    bg_blur_h: wgpu::BindGroup,
    bg_blur_v: wgpu::BindGroup,
    bg_ldr: wgpu::BindGroup,
    bg1_bloom_a: wgpu::BindGroup,
    bg1_trail_a: wgpu::BindGroup,
    bg1_trail_b: wgpu::BindGroup,
    tbg_trail_a: wgpu::BindGroup,
    tbg_trail_b: wgpu::BindGroup,
}

fn build_frame_bind_groups(
    device: &wgpu::Device,
    post: &PostResources,
    targets: &RenderTargets,
    sampler: &wgpu::Sampler,
) -> FrameBindGroups {
    FrameBindGroups {
        bg_hdr_a: helpers::make_bg0(
            device,
            "bg_hdr_a",
            &post.bgl0,
            &targets.hdr_a_view,
            sampler,
            &post.uniform_buffer,
        ),
        bg_hdr_b: helpers::make_bg0(
            device,
            "bg_hdr_b",
            &post.bgl0,
            &targets.hdr_b_view,
            sampler,
            &post.uniform_buffer,
        ),
        bg_blur_h: helpers::make_bg0(
            device,
            "bg_blur_h",
            &post.bgl0,
            &targets.bloom_a_view,
            sampler,
            &post.blur_h_uniforms,
        ),
        bg_blur_v: helpers::make_bg0(
            device,
            "bg_blur_v",
            &post.bgl0,
            &targets.bloom_b_view,
            sampler,
            &post.blur_v_uniforms,
        ),
        bg_ldr: helpers::make_bg0(
            device,
            "bg_ldr",
            &post.bgl0,
            &targets.ldr_view,
            sampler,
            &post.uniform_buffer,
        ),
        bg1_bloom_a: helpers::make_bg1(device, "bg1_bloom_a", &post.bgl1, &targets.bloom_a_view, sampler),
        bg1_trail_a: helpers::make_bg1(device, "bg1_trail_a", &post.bgl1, &targets.trail_a_view, sampler),
        bg1_trail_b: helpers::make_bg1(device, "bg1_trail_b", &post.bgl1, &targets.trail_b_view, sampler),
        tbg_trail_a: helpers::make_bg0(
            device,
            "tbg_trail_a",
            &post.trans_bgl,
            &targets.trail_a_view,
            sampler,
            &post.trans_uniforms,
        ),
        tbg_trail_b: helpers::make_bg0(
            device,
            "tbg_trail_b",
            &post.trans_bgl,
            &targets.trail_b_view,
            sampler,
            &post.trans_uniforms,
        ),
    }
}
