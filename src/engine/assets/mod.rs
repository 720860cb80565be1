// Asset handles
//
// The engine never touches pixels; it needs the atlas handle to validate frame
// rectangles and to pass along with every draw command.

mod atlas;

pub use atlas::{AtlasRegion, SpriteAtlas};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound("sprites.png".to_string());
        assert_eq!(err.to_string(), "Asset not found: sprites.png");
    }
}
