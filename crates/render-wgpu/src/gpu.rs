use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use orbitcube_common::Color;
use orbitcube_scene::{GeometryData, Mesh, NodeId, PerspectiveCamera, Scene};
use std::collections::BTreeMap;
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    fn from_camera(camera: &PerspectiveCamera) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct MeshUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

impl MeshUniform {
    fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            model: mesh.transform.matrix().to_cols_array_2d(),
            color: mesh.material.color.to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
}

fn vertices(data: &GeometryData) -> Vec<Vertex> {
    data.positions
        .iter()
        .map(|&position| Vertex { position })
        .collect()
}

/// GPU-resident copy of one scene mesh.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// wgpu-based scene renderer.
pub struct WgpuRenderer {
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    meshes: BTreeMap<NodeId, GpuMesh>,
    depth_texture: wgpu::TextureView,
    clear_color: Color,
    surface_format: wgpu::TextureFormat,
}

impl WgpuRenderer {
    /// Build the pipeline and upload every mesh currently in `scene`.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        scene: &Scene,
    ) -> Self {
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("camera_buffer"),
            contents: bytemuck::bytes_of(&CameraUniform {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_layout = uniform_layout(
            device,
            "camera_bind_group_layout",
            wgpu::ShaderStages::VERTEX,
        );
        let mesh_layout = uniform_layout(
            device,
            "mesh_bind_group_layout",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera_bind_group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&camera_layout, &mesh_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("unlit_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::UNLIT_SHADER.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("unlit_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let meshes = scene
            .meshes()
            .map(|(id, mesh)| (id, upload_mesh(device, &mesh_layout, id, mesh)))
            .collect();

        let depth_texture = Self::create_depth_texture(device, width, height);

        Self {
            pipeline,
            camera_buffer,
            camera_bind_group,
            meshes,
            depth_texture,
            clear_color: Color::BLACK,
            surface_format,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    pub fn uploaded_meshes(&self) -> usize {
        self.meshes.len()
    }

    /// Render one frame: every uploaded scene mesh seen through `camera`.
    pub fn draw(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        scene: &Scene,
        camera: &PerspectiveCamera,
    ) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&CameraUniform::from_camera(camera)),
        );

        let mut visible = Vec::new();
        for (id, mesh) in scene.meshes() {
            let Some(gpu_mesh) = self.meshes.get(&id) else {
                tracing::trace!("mesh {id} was added after upload, skipping");
                continue;
            };
            queue.write_buffer(
                &gpu_mesh.uniform_buffer,
                0,
                bytemuck::bytes_of(&MeshUniform::from_mesh(mesh)),
            );
            visible.push(gpu_mesh);
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let c = self.clear_color;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: c.r as f64,
                            g: c.g as f64,
                            b: c.b as f64,
                            a: 1.0,
                        }),
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
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            for gpu_mesh in visible {
                pass.set_bind_group(1, &gpu_mesh.bind_group, &[]);
                pass.set_vertex_buffer(0, gpu_mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(gpu_mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..gpu_mesh.index_count, 0, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

fn uniform_layout(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

fn upload_mesh(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    id: NodeId,
    mesh: &Mesh,
) -> GpuMesh {
    let data = mesh.geometry.build();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("mesh_vertex_buffer"),
        contents: bytemuck::cast_slice(&vertices(&data)),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("mesh_index_buffer"),
        contents: bytemuck::cast_slice(&data.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("mesh_uniform_buffer"),
        contents: bytemuck::bytes_of(&MeshUniform::from_mesh(mesh)),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("mesh_bind_group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    tracing::debug!(
        "uploaded mesh {id}: {} vertices, {} triangles",
        data.vertex_count(),
        data.triangle_count()
    );

    GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: data.indices.len() as u32,
        uniform_buffer,
        bind_group,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitcube_common::Viewport;
    use orbitcube_scene::DemoScene;

    #[test]
    fn uniform_layouts_match_shader() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
        assert_eq!(std::mem::size_of::<MeshUniform>(), 80);
        assert_eq!(std::mem::size_of::<Vertex>(), 12);
    }

    #[test]
    fn demo_cube_vertices() {
        let demo = DemoScene::assemble(Viewport::DEMO);
        let data = demo.mesh().unwrap().geometry.build();
        let verts = vertices(&data);
        assert_eq!(verts.len(), 216);
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&verts).len(), 216 * 12);
    }

    #[test]
    fn mesh_uniform_carries_color_and_identity_model() {
        let demo = DemoScene::assemble(Viewport::DEMO);
        let mesh = demo.mesh().unwrap();
        let uniform = MeshUniform::from_mesh(mesh);
        assert_eq!(uniform.model, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(uniform.color, mesh.material.color.to_array());
    }

    #[test]
    fn camera_uniform_is_view_projection() {
        let demo = DemoScene::assemble(Viewport::DEMO);
        let camera = demo.camera().unwrap();
        let uniform = CameraUniform::from_camera(camera);
        assert_eq!(
            uniform.view_proj,
            camera.view_projection().to_cols_array_2d()
        );
    }
}
