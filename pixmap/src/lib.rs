use bytemuck as bm;

/// One four-channel pixel, laid out exactly as it sits in a byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bm::Pod, bm::Zeroable)]
#[repr(transparent)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Exchanges channels 0 and 2; channels 1 and 3 stay put.
    pub fn swap_red_blue(&mut self) {
        self.0.swap(0, 2);
    }
}

mod meta {
    #[derive(Debug, Clone, Copy)]
    pub struct Meta {
        wide: usize,
        high: usize,
    }

    impl Meta {
        pub fn try_new(wide: u32, high: u32) -> Option<Meta> {
            if wide == 0 || high == 0 {return None}
            let wide = usize::try_from(wide).ok()?;
            let high = usize::try_from(high).ok()?;
            wide.checked_mul(high)?;
            Some(Meta{wide, high})
        }

        pub fn len(&self) -> usize { self.wide * self.high }
        pub fn wide(&self) -> usize { self.wide }
    }
}

use meta::Meta;

/// A tightly packed, row-major grid of pixels borrowed from a byte buffer.
pub struct Pixmap<'a> {
    pixels: &'a mut [Rgba],
    meta: Meta,
}

impl<'a> Pixmap<'a> {
    /// Views `bytes` as `wide * high` four-byte pixels. The byte count must
    /// match exactly.
    pub fn new_from_bytes_mut(bytes: &'a mut [u8], wide: u32, high: u32) -> Option<Self> {
        let meta = Meta::try_new(wide, high)?;
        if meta.len().checked_mul(4)? != bytes.len() {return None}
        let pixels = bm::try_cast_slice_mut(bytes).ok()?;
        Some(Self{pixels, meta})
    }

    /// Swaps the red and blue channel of every pixel.
    pub fn swap_red_blue(&mut self) {
        self.pixels.iter_mut().for_each(Rgba::swap_red_blue);
    }

    /// Reverses the order of whole rows, leaving each row's pixels in place.
    pub fn flip_rows(&mut self) {
        let wide = self.meta.wide();
        let mut rest = &mut self.pixels[..];
        while rest.len() >= 2 * wide {
            let (first, tail) = std::mem::take(&mut rest).split_at_mut(wide);
            let split = tail.len() - wide;
            let (middle, last) = tail.split_at_mut(split);
            first.swap_with_slice(last);
            rest = middle;
        }
    }
}
