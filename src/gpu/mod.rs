//! GPU state and the per-frame render path.
//!
//! One pipeline per scene material: the baked lightmap, the flat pole
//! lights, the animated portal surface, and the additive firefly points.
//! All four share the camera; the portal and fireflies additionally consume
//! the shared animation time uploaded in [`GpuState::render`].

pub mod camera;
pub mod mesh;
pub mod panel;

use std::sync::Arc;

use glam::Vec3;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::config::Settings;
use crate::error::GpuError;
use crate::fireflies::{FireflyField, FireflyInstance};
use crate::scene::{BakedTexture, SceneManifest};
use crate::uniforms::{
    CameraUniforms, EffectUniforms, FlatUniforms, POLE_LIGHT_COLOR,
};

pub use camera::OrbitCamera;
pub use mesh::GpuMesh;
pub use panel::{DebugPanel, PanelFrame};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const BAKED_SHADER: &str = include_str!("../shaders/baked.wgsl");
const POLE_LIGHT_SHADER: &str = include_str!("../shaders/pole_light.wgsl");
const PORTAL_SHADER: &str = include_str!("../shaders/portal.wgsl");
const FIREFLIES_SHADER: &str = include_str!("../shaders/fireflies.wgsl");

/// Fireflies blend additively and never write depth, so they glow through
/// each other while still being occluded by the scene.
const ADDITIVE_BLEND: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    depth_texture: wgpu::TextureView,
    pub camera: OrbitCamera,
    clear_color: wgpu::Color,

    baked_pipeline: wgpu::RenderPipeline,
    baked_bind_group: wgpu::BindGroup,
    camera_buffer: wgpu::Buffer,
    baked_mesh: GpuMesh,

    flat_pipeline: wgpu::RenderPipeline,
    flat_bind_group: wgpu::BindGroup,
    flat_buffer: wgpu::Buffer,
    pole_light_a: GpuMesh,
    pole_light_b: GpuMesh,

    portal_pipeline: wgpu::RenderPipeline,
    portal_bind_group: wgpu::BindGroup,
    portal_buffer: wgpu::Buffer,
    portal_mesh: GpuMesh,

    firefly_pipeline: wgpu::RenderPipeline,
    firefly_bind_group: wgpu::BindGroup,
    firefly_uniform_buffer: wgpu::Buffer,
    firefly_buffer: wgpu::Buffer,
    firefly_count: u32,
}

impl GpuState {
    pub async fn new(
        window: Arc<Window>,
        manifest: &SceneManifest,
        lightmap: &BakedTexture,
        fireflies: &FireflyField,
        settings: &Settings,
    ) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture = create_depth_texture(&device, &config);
        let camera = OrbitCamera::new(config.width as f32 / config.height as f32);

        // Uniform-only layout shared by the pole-light, portal and firefly
        // pipelines.
        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Uniform Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        // Baked material: camera uniforms plus the lightmap.
        let baked_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Baked Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let camera_uniforms = CameraUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
        };
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Uniform Buffer"),
            contents: bytemuck::bytes_of(&camera_uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let flat_uniforms = FlatUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            color: POLE_LIGHT_COLOR.to_array(),
            _pad: 0.0,
        };
        let flat_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Pole Light Uniform Buffer"),
            contents: bytemuck::bytes_of(&flat_uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let effects = EffectUniforms::new(settings, 1.0);
        let portal_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Portal Uniform Buffer"),
            contents: bytemuck::bytes_of(&effects.portal),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let firefly_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Firefly Uniform Buffer"),
            contents: bytemuck::bytes_of(&effects.fireflies),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let lightmap_view = upload_lightmap(&device, &queue, lightmap);
        let lightmap_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Baked Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let baked_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Baked Bind Group"),
            layout: &baked_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&lightmap_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&lightmap_sampler),
                },
            ],
        });

        let flat_bind_group = uniform_bind_group(&device, &uniform_layout, &flat_buffer, "Pole Light");
        let portal_bind_group = uniform_bind_group(&device, &uniform_layout, &portal_buffer, "Portal");
        let firefly_bind_group =
            uniform_bind_group(&device, &uniform_layout, &firefly_uniform_buffer, "Firefly");

        // Mesh pipelines.
        let baked_pipeline = mesh_pipeline(
            &device,
            "Baked",
            BAKED_SHADER,
            &baked_layout,
            config.format,
            None,
            true,
        );
        let flat_pipeline = mesh_pipeline(
            &device,
            "Pole Light",
            POLE_LIGHT_SHADER,
            &uniform_layout,
            config.format,
            None,
            true,
        );
        // The portal is double-sided (cull_mode None below) and opaque.
        let portal_pipeline = mesh_pipeline(
            &device,
            "Portal",
            PORTAL_SHADER,
            &uniform_layout,
            config.format,
            None,
            true,
        );

        let firefly_pipeline = firefly_pipeline(&device, &uniform_layout, config.format);

        let instances = fireflies.instances();
        let firefly_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Firefly Instance Buffer"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let baked_mesh = GpuMesh::upload(&device, &manifest.baked, "Baked");
        let pole_light_a = GpuMesh::upload(&device, &manifest.pole_light_a, "Pole Light A");
        let pole_light_b = GpuMesh::upload(&device, &manifest.pole_light_b, "Pole Light B");
        let portal_mesh = GpuMesh::upload(&device, &manifest.portal, "Portal");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_texture,
            camera,
            clear_color: color_from(settings.clear_color),
            baked_pipeline,
            baked_bind_group,
            camera_buffer,
            baked_mesh,
            flat_pipeline,
            flat_bind_group,
            flat_buffer,
            pole_light_a,
            pole_light_b,
            portal_pipeline,
            portal_bind_group,
            portal_buffer,
            portal_mesh,
            firefly_pipeline,
            firefly_bind_group,
            firefly_uniform_buffer,
            firefly_buffer,
            firefly_count: fireflies.len(),
        })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.depth_texture = create_depth_texture(&self.device, &self.config);
            self.camera.set_aspect(new_size.width, new_size.height);
        }
    }

    /// Swap in a freshly regenerated firefly field.
    ///
    /// The old buffer handle is replaced wholesale; in-flight frames keep
    /// their snapshot until the driver retires it.
    pub fn set_fireflies(&mut self, field: &FireflyField) {
        let instances: Vec<FireflyInstance> = field.instances();
        self.firefly_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Firefly Instance Buffer"),
                contents: bytemuck::cast_slice(&instances),
                usage: wgpu::BufferUsages::VERTEX,
            });
        self.firefly_count = field.len();
    }

    pub fn set_clear_color(&mut self, color: Vec3) {
        self.clear_color = color_from(color);
    }

    /// Draw one frame: scene meshes, fireflies, then the debug panel.
    pub fn render(
        &mut self,
        effects: &EffectUniforms,
        panel: &mut DebugPanel,
        frame: PanelFrame,
    ) -> Result<(), wgpu::SurfaceError> {
        let view_proj = self.camera.view_proj().to_cols_array_2d();
        let camera_uniforms = CameraUniforms { view_proj };
        let flat_uniforms = FlatUniforms {
            view_proj,
            color: POLE_LIGHT_COLOR.to_array(),
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera_uniforms));
        self.queue
            .write_buffer(&self.flat_buffer, 0, bytemuck::bytes_of(&flat_uniforms));
        self.queue
            .write_buffer(&self.portal_buffer, 0, bytemuck::bytes_of(&effects.portal));
        self.queue.write_buffer(
            &self.firefly_uniform_buffer,
            0,
            bytemuck::bytes_of(&effects.fireflies),
        );

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: frame.pixels_per_point,
        };
        panel.prepare(&self.device, &self.queue, &mut encoder, &frame, &screen_descriptor);

        // Scene pass
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.baked_pipeline);
            render_pass.set_bind_group(0, &self.baked_bind_group, &[]);
            self.baked_mesh.draw(&mut render_pass);

            render_pass.set_pipeline(&self.flat_pipeline);
            render_pass.set_bind_group(0, &self.flat_bind_group, &[]);
            self.pole_light_a.draw(&mut render_pass);
            self.pole_light_b.draw(&mut render_pass);

            render_pass.set_pipeline(&self.portal_pipeline);
            render_pass.set_bind_group(0, &self.portal_bind_group, &[]);
            self.portal_mesh.draw(&mut render_pass);

            render_pass.set_pipeline(&self.firefly_pipeline);
            render_pass.set_bind_group(0, &self.firefly_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.firefly_buffer.slice(..));
            render_pass.draw(0..6, 0..self.firefly_count);
        }

        // Panel pass: loads the scene output, no depth (the panel renderer
        // was created without a depth format).
        {
            let mut egui_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Panel Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();

            panel.render(&mut egui_pass, &frame, &screen_descriptor);
        }

        panel.cleanup(&frame);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn color_from(c: Vec3) -> wgpu::Color {
    wgpu::Color {
        r: c.x as f64,
        g: c.y as f64,
        b: c.z as f64,
        a: 1.0,
    }
}

fn uniform_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("{} Bind Group", label)),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    })
}

fn upload_lightmap(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    lightmap: &BakedTexture,
) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width: lightmap.width,
        height: lightmap.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Baked Lightmap"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &lightmap.data,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * lightmap.width),
            rows_per_image: Some(lightmap.height),
        },
        size,
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn mesh_pipeline(
    device: &wgpu::Device,
    label: &str,
    shader_src: &str,
    bind_group_layout: &wgpu::BindGroupLayout,
    format: wgpu::TextureFormat,
    blend: Option<wgpu::BlendState>,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&format!("{} Shader", label)),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(&format!("{} Pipeline Layout", label)),
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{} Pipeline", label)),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[GpuMesh::vertex_layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // No culling: the portal surface must render double-sided.
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn firefly_pipeline(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Firefly Shader"),
        source: wgpu::ShaderSource::Wgsl(FIREFLIES_SHADER.into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Firefly Pipeline Layout"),
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Firefly Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<FireflyInstance>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 0,
                        format: wgpu::VertexFormat::Float32x3,
                    },
                    wgpu::VertexAttribute {
                        offset: 12,
                        shader_location: 1,
                        format: wgpu::VertexFormat::Float32,
                    },
                ],
            }],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(ADDITIVE_BLEND),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        // Depth-tested against the scene but never written, so overlapping
        // glows accumulate.
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_depth_texture(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
