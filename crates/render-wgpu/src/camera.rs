use glam::{Mat4, Vec3};

/// Fixed isometric orthographic camera.
///
/// The scene was tuned for this vantage: eye on the (1,1,1) diagonal
/// looking at the origin, ten world units of half-height. Resizing the
/// window only changes the aspect ratio; the vertical extent is constant.
pub struct IsoCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub half_height: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for IsoCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(20.0, 20.0, 20.0),
            target: Vec3::ZERO,
            half_height: 10.0,
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 1000.0,
        }
    }
}

impl IsoCamera {
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let half_width = self.half_height * self.aspect;
        Mat4::orthographic_rh(
            -half_width,
            half_width,
            -self.half_height,
            self.half_height,
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
