use serde::{Deserialize, Serialize};

/// Axis-aligned cuboid centred on the origin, optionally subdivided per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub depth_segments: u32,
}

/// Triangle-list buffers produced by [`BoxGeometry::build`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// One face of the box: which axes the grid spans and which way it faces.
struct Plane {
    u: usize,
    v: usize,
    w: usize,
    u_dir: f32,
    v_dir: f32,
    width: f32,
    height: f32,
    depth: f32,
    grid_x: u32,
    grid_y: u32,
}

impl BoxGeometry {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
            width_segments: 1,
            height_segments: 1,
            depth_segments: 1,
        }
    }

    /// Subdivide each axis. Zero segment counts are raised to one.
    pub fn with_segments(mut self, width: u32, height: u32, depth: u32) -> Self {
        self.width_segments = width.max(1);
        self.height_segments = height.max(1);
        self.depth_segments = depth.max(1);
        self
    }

    /// Generate positions, outward normals and counter-clockwise indices for
    /// all six faces (+X, -X, +Y, -Y, +Z, -Z).
    pub fn build(&self) -> GeometryData {
        let (w, h, d) = (self.width, self.height, self.depth);
        let (ws, hs, ds) = (
            self.width_segments.max(1),
            self.height_segments.max(1),
            self.depth_segments.max(1),
        );

        #[rustfmt::skip]
        let planes = [
            Plane { u: 2, v: 1, w: 0, u_dir: -1.0, v_dir: -1.0, width: d, height: h, depth:  w, grid_x: ds, grid_y: hs },
            Plane { u: 2, v: 1, w: 0, u_dir:  1.0, v_dir: -1.0, width: d, height: h, depth: -w, grid_x: ds, grid_y: hs },
            Plane { u: 0, v: 2, w: 1, u_dir:  1.0, v_dir:  1.0, width: w, height: d, depth:  h, grid_x: ws, grid_y: ds },
            Plane { u: 0, v: 2, w: 1, u_dir:  1.0, v_dir: -1.0, width: w, height: d, depth: -h, grid_x: ws, grid_y: ds },
            Plane { u: 0, v: 1, w: 2, u_dir:  1.0, v_dir: -1.0, width: w, height: h, depth:  d, grid_x: ws, grid_y: hs },
            Plane { u: 0, v: 1, w: 2, u_dir: -1.0, v_dir: -1.0, width: w, height: h, depth: -d, grid_x: ws, grid_y: hs },
        ];

        let mut data = GeometryData::default();
        for plane in &planes {
            push_plane(&mut data, plane);
        }
        data
    }
}

fn push_plane(data: &mut GeometryData, p: &Plane) {
    let base = data.positions.len() as u32;
    let seg_w = p.width / p.grid_x as f32;
    let seg_h = p.height / p.grid_y as f32;
    let half_w = p.width / 2.0;
    let half_h = p.height / 2.0;
    let half_d = p.depth / 2.0;
    let facing = if p.depth > 0.0 { 1.0 } else { -1.0 };

    for iy in 0..=p.grid_y {
        let y = iy as f32 * seg_h - half_h;
        for ix in 0..=p.grid_x {
            let x = ix as f32 * seg_w - half_w;

            let mut position = [0.0; 3];
            position[p.u] = x * p.u_dir;
            position[p.v] = y * p.v_dir;
            position[p.w] = half_d;
            data.positions.push(position);

            let mut normal = [0.0; 3];
            normal[p.w] = facing;
            data.normals.push(normal);
        }
    }

    let row = p.grid_x + 1;
    for iy in 0..p.grid_y {
        for ix in 0..p.grid_x {
            let a = base + ix + row * iy;
            let b = base + ix + row * (iy + 1);
            let c = base + (ix + 1) + row * (iy + 1);
            let d = base + (ix + 1) + row * iy;
            data.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
}
