//! Snapshot display backend
//!
//! Stands in for a panel: each presented frame is summarised in the log and,
//! when a path is configured, written out as a binary PPM so the last frame
//! can be inspected after a run.

use std::path::PathBuf;

use duotone_display::color::luma;
use duotone_display::{DisplayBackend, DisplayError, FrameBuffer};
use embedded_graphics::pixelcolor::RgbColor;
use log::{debug, error};

/// Encode a frame as binary PPM (P6)
pub fn encode_ppm(frame: &FrameBuffer) -> Vec<u8> {
    let header = format!("P6\n{} {}\n255\n", frame.width(), frame.height());
    let mut out = Vec::with_capacity(header.len() + frame.pixels().len() * 3);
    out.extend_from_slice(header.as_bytes());
    for pixel in frame.pixels() {
        out.extend_from_slice(&[pixel.r(), pixel.g(), pixel.b()]);
    }
    out
}

/// Backend that logs frames and optionally writes the latest to disk
pub struct SnapshotBackend {
    width: u32,
    height: u32,
    path: Option<PathBuf>,
    frames: u32,
}

impl SnapshotBackend {
    pub fn new(width: u32, height: u32, path: Option<PathBuf>) -> Self {
        Self {
            width,
            height,
            path,
            frames: 0,
        }
    }

    /// Frames presented so far
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl DisplayBackend for SnapshotBackend {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        self.check_frame(frame)?;
        self.frames += 1;

        let pixels = frame.pixels();
        let mean_luma = if pixels.is_empty() {
            0
        } else {
            pixels.iter().map(|p| u64::from(luma(*p))).sum::<u64>() / pixels.len() as u64
        };
        debug!(
            "Frame {}: {}x{}, mean luma {}",
            self.frames,
            frame.width(),
            frame.height(),
            mean_luma
        );

        if let Some(path) = &self.path {
            if let Err(e) = std::fs::write(path, encode_ppm(frame)) {
                error!("Failed to write {}: {}", path.display(), e);
                return Err(DisplayError::Communication);
            }
        }
        Ok(())
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::Rgb888;

    #[test]
    fn test_ppm_layout() {
        let mut frame = FrameBuffer::new(2, 1);
        frame.set_pixel(1, 0, Rgb888::new(1, 2, 3));
        let ppm = encode_ppm(&frame);
        let header = b"P6\n2 1\n255\n";
        assert_eq!(&ppm[..header.len()], header);
        assert_eq!(&ppm[header.len()..], &[0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_present_counts_frames() {
        let mut backend = SnapshotBackend::new(4, 4, None);
        assert_eq!(backend.present(&FrameBuffer::new(4, 4)), Ok(()));
        assert_eq!(
            backend.present(&FrameBuffer::new(5, 4)),
            Err(DisplayError::InvalidDimensions)
        );
        assert_eq!(backend.frames(), 1);
    }

    #[test]
    fn test_snapshot_written() {
        let path = std::env::temp_dir().join(format!("duotone-{}.ppm", std::process::id()));
        let mut backend = SnapshotBackend::new(3, 2, Some(path.clone()));
        backend.present(&FrameBuffer::new(3, 2)).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 18);
        std::fs::remove_file(&path).ok();
    }
}
