use glam::Vec2;

/// Side-view orthographic camera. Follows the character and maps world
/// coordinates (centimeters, y up) to screen pixels (y down).
pub struct Camera {
    /// World point at the center of the view.
    pub center: Vec2,
    /// Horizontal extent of the view in world units. The vertical extent
    /// follows from the window's aspect ratio.
    pub view_width: f32,
    /// Vertical offset kept between the followed target and the view center,
    /// so the ground line sits below mid-frame.
    pub follow_offset: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            center: Vec2::ZERO,
            view_width: 2048.0,
            follow_offset: 75.0,
        }
    }

    /// Track the character. Locked follow: side scrollers read best when
    /// the character stays put on screen.
    pub fn follow(&mut self, target: Vec2) {
        self.center = Vec2::new(target.x, target.y + self.follow_offset);
    }

    /// World units per screen pixel for a window `screen_w` pixels wide.
    pub fn units_per_pixel(&self, screen_w: u32) -> f32 {
        self.view_width / screen_w as f32
    }

    /// Map a world point to pixel coordinates, flipping y.
    pub fn world_to_screen(&self, p: Vec2, screen_w: u32, screen_h: u32) -> (i32, i32) {
        let upp = self.units_per_pixel(screen_w);
        let x = (p.x - self.center.x) / upp + screen_w as f32 / 2.0;
        let y = screen_h as f32 / 2.0 - (p.y - self.center.y) / upp;
        (x as i32, y as i32)
    }
}
