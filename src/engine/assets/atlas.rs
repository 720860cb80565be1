// Sprite atlas handle and atlas sub-rectangles

use super::AssetError;
use glam::Vec2;
use log::info;
use std::path::Path;

/// A rectangle within a sprite atlas, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtlasRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl AtlasRegion {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Size of the region as a float vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Right edge (exclusive), `None` past `u32::MAX`
    pub fn right(&self) -> Option<u32> {
        self.x.checked_add(self.width)
    }

    /// Bottom edge (exclusive), `None` past `u32::MAX`
    pub fn bottom(&self) -> Option<u32> {
        self.y.checked_add(self.height)
    }
}

/// Handle to a decoded sprite atlas.
///
/// The engine only needs a stable name and the atlas dimensions; pixel data
/// stays with whoever executes the draw commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteAtlas {
    name: String,
    width: u32,
    height: u32,
}

impl SpriteAtlas {
    /// Create a handle for an atlas of known size
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// Read the atlas dimensions from an image file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        let (width, height) = image::image_dimensions(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        info!("Loaded sprite atlas '{}' ({}x{})", name, width, height);
        Ok(Self::new(name, width, height))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if a region lies entirely inside the atlas
    pub fn contains(&self, region: &AtlasRegion) -> bool {
        let fits_x = region.right().is_some_and(|right| right <= self.width);
        let fits_y = region.bottom().is_some_and(|bottom| bottom <= self.height);
        fits_x && fits_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_edges() {
        let region = AtlasRegion::new(41, 0, 38, 52);
        assert_eq!(region.right(), Some(79));
        assert_eq!(region.bottom(), Some(52));
        assert_eq!(region.size(), Vec2::new(38.0, 52.0));
    }

    #[test]
    fn test_atlas_contains() {
        let atlas = SpriteAtlas::new("sheet", 100, 100);
        assert!(atlas.contains(&AtlasRegion::new(0, 0, 100, 100)));
        assert!(atlas.contains(&AtlasRegion::new(60, 60, 40, 40)));
        assert!(!atlas.contains(&AtlasRegion::new(61, 60, 40, 40)));
        assert!(!atlas.contains(&AtlasRegion::new(0, 90, 10, 11)));
    }

    #[test]
    fn test_region_edges_past_u32_range() {
        let region = AtlasRegion::new(u32::MAX - 1, 0, 10, 10);
        assert_eq!(region.right(), None);
        assert_eq!(region.bottom(), Some(10));
    }

    #[test]
    fn test_atlas_rejects_overflowing_region() {
        let atlas = SpriteAtlas::new("sheet", 100, 100);
        assert!(!atlas.contains(&AtlasRegion::new(u32::MAX - 1, 0, 10, 10)));
        assert!(!atlas.contains(&AtlasRegion::new(0, 5, 10, u32::MAX)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SpriteAtlas::load("definitely/not/here.png").unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn test_load_reads_dimensions() {
        let path = std::env::temp_dir().join("sprite_kinematics_atlas_test.png");
        image::RgbaImage::new(12, 7).save(&path).unwrap();

        let atlas = SpriteAtlas::load(&path).unwrap();
        assert_eq!(atlas.width(), 12);
        assert_eq!(atlas.height(), 7);
        assert_eq!(atlas.name(), "sprite_kinematics_atlas_test.png");

        let _ = std::fs::remove_file(&path);
    }
}
