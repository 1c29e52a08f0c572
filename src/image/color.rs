//! Packed RGBA color values.

/// Alpha value of a fully opaque pixel.
pub const OPAQUE_ALPHA: u8 = 255;

/// Four RGBA bytes packed into a single `u32` for one-instruction equality.
///
/// The packing is a plain reinterpretation of the bytes in native order, so two
/// packed colors compare equal exactly when all four bytes are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PackedColor(u32);

impl PackedColor {
    /// Packs the bytes `[r, g, b, a]`.
    #[inline]
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self(u32::from_ne_bytes(rgba))
    }

    /// Returns the `[r, g, b, a]` bytes.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        self.0.to_ne_bytes()
    }

    /// Returns the raw packed value.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Returns the alpha byte.
    #[inline]
    pub const fn alpha(self) -> u8 {
        self.to_rgba()[3]
    }

    /// Returns true when alpha is exactly 255.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == OPAQUE_ALPHA
    }
}

/// Loads the packed color of pixel `index` from an interleaved RGBA buffer.
///
/// Panics if the pixel lies outside `data`; callers bounds-check windows first.
#[inline(always)]
pub(crate) fn load_packed(data: &[u8], index: usize) -> u32 {
    let base = index * 4;
    let px = &data[base..base + 4];
    u32::from_ne_bytes([px[0], px[1], px[2], px[3]])
}

#[cfg(test)]
mod tests {
    use super::{load_packed, PackedColor};

    #[test]
    fn packing_preserves_byte_order() {
        let color = PackedColor::from_rgba([1, 2, 3, 255]);
        assert_eq!(color.to_rgba(), [1, 2, 3, 255]);
        assert_eq!(color.alpha(), 255);
        assert!(color.is_opaque());
        assert!(!PackedColor::from_rgba([1, 2, 3, 254]).is_opaque());
    }

    #[test]
    fn load_packed_matches_from_rgba() {
        let data = [9u8, 8, 7, 6, 10, 20, 30, 255];
        assert_eq!(load_packed(&data, 0), PackedColor::from_rgba([9, 8, 7, 6]).to_bits());
        assert_eq!(
            load_packed(&data, 1),
            PackedColor::from_rgba([10, 20, 30, 255]).to_bits()
        );
    }
}
