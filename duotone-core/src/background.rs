//! Cached background scaling
//!
//! The interactive background is scaled to the viewport once and reused
//! until the viewport size changes.

use crate::traits::Bitmap;

/// Source background plus its most recent scaled copy
pub struct BackgroundCache<B: Bitmap> {
    source: B,
    scaled: Option<B>,
    rescale_count: u32,
}

impl<B: Bitmap> BackgroundCache<B> {
    pub fn new(source: B) -> Self {
        Self {
            source,
            scaled: None,
            rescale_count: 0,
        }
    }

    /// Background scaled to `width` x `height`
    ///
    /// Rescales only when no copy exists or the cached copy has different
    /// dimensions.
    pub fn scaled_for(&mut self, width: u32, height: u32) -> &B {
        if !self.is_cached_for(width, height) {
            log::debug!("Rescaling background to {}x{}", width, height);
            self.scaled = Some(self.source.scaled(width, height));
            self.rescale_count = self.rescale_count.wrapping_add(1);
        }
        // Populated just above when missing
        match self.scaled {
            Some(ref scaled) => scaled,
            None => &self.source,
        }
    }

    /// Check if a scaled copy of exactly this size is cached
    pub fn is_cached_for(&self, width: u32, height: u32) -> bool {
        self.scaled
            .as_ref()
            .is_some_and(|s| s.width() == width && s.height() == height)
    }

    /// Number of times the source has been rescaled
    pub fn rescale_count(&self) -> u32 {
        self.rescale_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBitmap;

    #[test]
    fn test_first_use_scales() {
        let mut cache = BackgroundCache::new(MockBitmap::new(400, 400));
        assert!(!cache.is_cached_for(320, 320));

        let scaled = cache.scaled_for(320, 320);
        assert_eq!((scaled.width(), scaled.height()), (320, 320));
        assert_eq!(cache.rescale_count(), 1);
    }

    #[test]
    fn test_same_size_reuses_copy() {
        let mut cache = BackgroundCache::new(MockBitmap::new(400, 400));
        for _ in 0..5 {
            cache.scaled_for(320, 290);
        }
        assert_eq!(cache.rescale_count(), 1);
        assert!(cache.is_cached_for(320, 290));
    }

    #[test]
    fn test_size_change_rescales() {
        let mut cache = BackgroundCache::new(MockBitmap::new(400, 400));
        cache.scaled_for(320, 320);
        cache.scaled_for(280, 280);
        assert_eq!(cache.rescale_count(), 2);
        assert!(!cache.is_cached_for(320, 320));
        assert!(cache.is_cached_for(280, 280));

        // Only one dimension differs
        cache.scaled_for(280, 300);
        assert_eq!(cache.rescale_count(), 3);
    }
}
