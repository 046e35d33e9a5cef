use glam::Vec2;
use crate::gl::{self, BlendFactor, Capability, ClearFlags, DrawMode, MatrixMode, TextureTarget};
use crate::{Bitmap, Color};

/// A 2D drawing surface over the fixed-function pipeline.
///
/// Coordinates are in pixels with the origin at the top-left corner and the
/// y axis pointing down. Requires a current GL context on the calling thread.
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {

    pub fn new(width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas { width, height };
        canvas.resize(width, height);
        gl::enable(Capability::Blend);
        gl::blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        canvas
    }

    /// Rebuilds the viewport and projection for a new pixel size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        gl::viewport(0, 0, width, height);
        gl::matrix_mode(MatrixMode::Projection);
        gl::load_identity();
        gl::ortho(0.0, width as f64, height as f64, 0.0, -1.0, 1.0);
        gl::matrix_mode(MatrixMode::ModelView);
        gl::load_identity();
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Clears the whole canvas to a color.
    pub fn clear(&self, color: Color) {
        gl::clear_color(color);
        gl::clear(ClearFlags::COLOR | ClearFlags::DEPTH);
    }

    /// Draws an axis-aligned filled rectangle.
    pub fn fill_rect(&self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        gl::color4(color);
        gl::begin(DrawMode::Quads);
        gl::vertex2(x, y);
        gl::vertex2(x + width, y);
        gl::vertex2(x + width, y + height);
        gl::vertex2(x, y + height);
        gl::end();
    }

    /// Strokes a line segment between two points.
    pub fn stroke_line(&self, color: Color, width: f32, from: Vec2, to: Vec2) {
        gl::line_width(width);
        gl::color4(color);
        gl::begin(DrawMode::Lines);
        gl::vertex2(from.x, from.y);
        gl::vertex2(to.x, to.y);
        gl::end();
    }

    /// Blits a bitmap with its top-left corner at (x, y), stretched to the
    /// bitmap's current `width`/`height` fields.
    pub fn draw_image(&self, x: f32, y: f32, bitmap: &Bitmap) {
        let (w, h) = (bitmap.width as f32, bitmap.height as f32);
        gl::enable(Capability::Texture2d);
        bitmap.texture().bind(TextureTarget::Texture2d);
        // Texturing modulates the current color; anything but white tints.
        gl::color4(Color::WHITE);
        gl::begin(DrawMode::Quads);
        gl::tex_coord2(0.0, 0.0);
        gl::vertex2(x, y);
        gl::tex_coord2(1.0, 0.0);
        gl::vertex2(x + w, y);
        gl::tex_coord2(1.0, 1.0);
        gl::vertex2(x + w, y + h);
        gl::tex_coord2(0.0, 1.0);
        gl::vertex2(x, y + h);
        gl::end();
        gl::disable(Capability::Texture2d);
    }
}
