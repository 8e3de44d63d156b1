use glam::Vec2;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::components::CraftState;
use crate::utils::SimError;

/// Renders a frame of the simulation into a pixmap, without a window.
///
/// Draws the same body polygon and flame segment as the windowed renderer,
/// directly in surface coordinates (the pixmap's y axis already points
/// down). Useful for snapshots and pixel-level tests.
pub struct CraftRenderer {
    width: u32,
    height: u32,
}

impl CraftRenderer {
    pub fn new(width: u32, height: u32) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::RenderError(format!(
                "canvas dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn render(&self, craft: &CraftState) -> Result<Pixmap, SimError> {
        let mut canvas = self.create_canvas()?;
        self.draw_body(&mut canvas, craft)?;
        if craft.thrusting {
            self.draw_flame(&mut canvas, craft)?;
        }
        Ok(canvas)
    }

    fn create_canvas(&self) -> Result<Pixmap, SimError> {
        Pixmap::new(self.width, self.height)
            .ok_or_else(|| SimError::RenderError("Failed to create canvas".into()))
    }

    fn draw_body(&self, canvas: &mut Pixmap, craft: &CraftState) -> Result<(), SimError> {
        let size = craft.size as f32;
        let points = [
            Vec2::new(size, 0.0),
            Vec2::new(-0.6 * size, 0.7 * size),
            Vec2::new(-0.2 * size, 0.0),
            Vec2::new(-0.6 * size, -0.7 * size),
        ]
        .map(|p| self.surface_point(craft, p));

        let path = {
            let mut pb = PathBuilder::new();
            pb.move_to(points[0].x, points[0].y);
            for point in &points[1..] {
                pb.line_to(point.x, point.y);
            }
            pb.close();
            pb.finish()
                .ok_or_else(|| SimError::RenderError("degenerate body path".into()))?
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(0x16, 0xc1, 0xff, 0xff);
        paint.anti_alias = true;

        canvas.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }

    fn draw_flame(&self, canvas: &mut Pixmap, craft: &CraftState) -> Result<(), SimError> {
        let size = craft.size as f32;
        let from = self.surface_point(craft, Vec2::new(-0.6 * size, 0.0));
        let to = self.surface_point(craft, Vec2::new(-1.0 * size, 0.0));

        let path = {
            let mut pb = PathBuilder::new();
            pb.move_to(from.x, from.y);
            pb.line_to(to.x, to.y);
            pb.finish()
                .ok_or_else(|| SimError::RenderError("degenerate flame path".into()))?
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(0xff, 0xcc, 0x66, 0xff);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: 3.0,
            ..Stroke::default()
        };

        canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }

    /// Rotate a body-local point by the heading and move it to the craft's
    /// position.
    fn surface_point(&self, craft: &CraftState, local: Vec2) -> Vec2 {
        let rotated = Vec2::from_angle(craft.angle as f32).rotate(local);
        rotated + Vec2::new(craft.position.x as f32, craft.position.y as f32)
    }
}
