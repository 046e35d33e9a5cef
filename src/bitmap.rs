use std::path::Path;

use anyhow::{anyhow, Context as _};

use crate::gl::{self, FilterMode, TexParam, Texture, TextureFormat, TextureTarget};

/// A drawable image backed by a GL texture.
///
/// `width` and `height` control how large
/// [`Canvas::draw_image`](crate::Canvas::draw_image) renders the bitmap and
/// may be reassigned after loading; the texture keeps its natural size.
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    texture: Texture,
}

impl Bitmap {

    /// Decodes a PNG file and uploads it as an RGBA texture.
    /// Requires a current GL context on the calling thread.
    pub fn load_png(path: impl AsRef<Path>) -> anyhow::Result<Bitmap> {
        let path = path.as_ref();
        let image = image::open(path)
            .with_context(|| format!("failed to load image {}", path.display()))?
            .to_rgba8();
        let (width, height) = image.dimensions();

        let texture = gl::gen_textures(1)[0];
        texture.bind(TextureTarget::Texture2d);
        gl::tex_parameter(TextureTarget::Texture2d, TexParam::MinFilter, FilterMode::Linear);
        gl::tex_parameter(TextureTarget::Texture2d, TexParam::MagFilter, FilterMode::Linear);
        gl::tex_image_2d(
            TextureTarget::Texture2d,
            0,
            TextureFormat::Rgba,
            width,
            height,
            0,
            TextureFormat::Rgba,
            image.as_raw(),
        );
        if let Some(err) = gl::get_error() {
            texture.delete();
            return Err(anyhow!("texture upload for {} failed: {err}", path.display()));
        }

        Ok(Bitmap {
            width,
            height,
            texture,
        })
    }

    pub(crate) fn texture(&self) -> Texture {
        self.texture
    }
}

impl Drop for Bitmap {
    fn drop(&mut self) {
        self.texture.delete();
    }
}
