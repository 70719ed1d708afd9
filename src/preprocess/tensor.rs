/// A channel-planar `3 × H × W` buffer of standardized `f32` values.
///
/// Layout: all R values, then all G values, then all B values; each plane is
/// row-major. The length is always exactly `3 * width * height`. The buffer is
/// immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTensor {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl NormalizedTensor {
    pub const CHANNELS: usize = 3;

    /// Only the normalizer builds tensors, so the length invariant holds by
    /// construction.
    pub(crate) fn from_planes(width: u32, height: u32, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), Self::CHANNELS * width as usize * height as usize);
        NormalizedTensor { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in one plane (`W * H`).
    pub fn plane_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// NCHW shape with a batch of one.
    pub fn shape(&self) -> [usize; 4] {
        [1, Self::CHANNELS, self.height as usize, self.width as usize]
    }

    /// The full flat buffer, exactly as handed to the classifier.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// One channel plane (0 = R, 1 = G, 2 = B).
    ///
    /// # Panics
    /// Panics if `channel >= 3`.
    pub fn plane(&self, channel: usize) -> &[f32] {
        assert!(channel < Self::CHANNELS, "channel index {} out of range", channel);
        let n = self.plane_len();
        &self.data[channel * n..(channel + 1) * n]
    }

    /// Value at `(channel, y, x)`.
    pub fn get(&self, channel: usize, y: u32, x: u32) -> Option<f32> {
        if channel >= Self::CHANNELS || y >= self.height || x >= self.width {
            return None;
        }
        let idx = channel * self.plane_len() + y as usize * self.width as usize + x as usize;
        self.data.get(idx).copied()
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

impl AsRef<[f32]> for NormalizedTensor {
    fn as_ref(&self) -> &[f32] {
        &self.data
    }
}
