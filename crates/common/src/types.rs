use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Fixed-size drawing surface dimensions, in physical pixels.
///
/// Drives both the camera aspect ratio and the size of the render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// The 800×600 surface the demo renders into.
    pub const DEMO: Viewport = Viewport {
        width: 800,
        height: 600,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height. A zero height is treated as one pixel.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Map a screen-space pointer position to `[-0.5, 0.5]` on both axes.
    ///
    /// The vertical axis is flipped so that positive values point up, matching
    /// the scene's coordinate convention rather than the screen's.
    pub fn normalize(&self, client_x: f32, client_y: f32) -> Vec2 {
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        Vec2::new(client_x / w - 0.5, -(client_y / h - 0.5))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEMO
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Decode a `0xRRGGBB` sRGB literal into linear channels.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_viewport_aspect() {
        let vp = Viewport::DEMO;
        assert_eq!((vp.width, vp.height), (800, 600));
        assert!((vp.aspect() - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn zero_height_viewport_does_not_divide_by_zero() {
        let vp = Viewport::new(10, 0);
        assert_eq!(vp.aspect(), 10.0);
    }

    #[test]
    fn normalize_center_and_corners() {
        let vp = Viewport::DEMO;
        assert_eq!(vp.normalize(400.0, 300.0), Vec2::ZERO);
        assert_eq!(vp.normalize(800.0, 0.0), Vec2::new(0.5, 0.5));
        assert_eq!(vp.normalize(0.0, 600.0), Vec2::new(-0.5, -0.5));
    }

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.matrix(), glam::Mat4::IDENTITY);
    }

    #[test]
    fn color_from_hex_extremes() {
        assert_eq!(Color::from_hex(0x000000), Color::BLACK);
        let white = Color::from_hex(0xffffff);
        assert!((white.r - 1.0).abs() < 1e-6);
        assert!((white.g - 1.0).abs() < 1e-6);
        assert!((white.b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn color_from_hex_is_linear() {
        // sRGB mid-grey decodes well below 0.5 in linear space.
        let grey = Color::from_hex(0x808080);
        assert!(grey.r > 0.2 && grey.r < 0.23);
        let green = Color::from_hex(0x18b533);
        assert!(green.g > green.b && green.b > green.r);
        assert_eq!(green.to_array()[3], 1.0);
    }
}
