/// WGSL shader for flat-colored, unlit meshes.
pub const UNLIT_SHADER: &str = r#"
struct Camera {
    view_proj: mat4x4<f32>,
};

struct MeshUniform {
    model: mat4x4<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

@group(1) @binding(0)
var<uniform> mesh: MeshUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> @builtin(position) vec4<f32> {
    return camera.view_proj * mesh.model * vec4<f32>(vertex.position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return mesh.color;
}
"#;
