use {
    crate::{Error, Header},
    image::RgbaImage,
    pixmap::Pixmap,
};

/// Turns a raw payload into a top-down RGBA image.
///
/// Each source pixel has its red and blue bytes exchanged, then the row
/// order is reversed, since WXL stores the bottom row first. Bytes past the
/// declared pixel count are dropped.
pub fn transcode(header: Header, mut payload: Vec<u8>) -> Result<RgbaImage, Error> {
    let Header{wide, high} = header;
    if wide == 0 || high == 0 {return Err(Error::InvalidDimensions{wide, high})}
    let expected = header.payload_len().ok_or(Error::InvalidDimensions{wide, high})?;

    let actual = payload.len();
    if actual < expected {
        return Err(Error::InsufficientPayload{wide, high, expected, actual});
    }
    if actual > expected {
        log::warn!("ignoring {} trailing payload bytes", actual - expected);
        payload.truncate(expected);
    }

    let mut pixels = Pixmap::new_from_bytes_mut(&mut payload, wide, high)
        .ok_or(Error::InvalidDimensions{wide, high})?;
    pixels.swap_red_blue();
    pixels.flip_rows();

    RgbaImage::from_raw(wide, high, payload)
        .ok_or(Error::InvalidDimensions{wide, high})
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        proptest::prelude::*,
    };

    const RED:   [u8; 4] = [255, 0, 0, 255];
    const GREEN: [u8; 4] = [0, 255, 0, 255];
    const BLUE:  [u8; 4] = [0, 0, 255, 255];
    const ODD:   [u8; 4] = [1, 2, 3, 4];

    #[test]
    fn two_by_two() {
        let payload = [RED, GREEN, BLUE, ODD].concat();
        let image = transcode(Header{wide: 2, high: 2}, payload).unwrap();

        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [3, 2, 1, 4]);
        assert_eq!(image.get_pixel(0, 1).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(1, 1).0, [0, 255, 0, 255]);
    }

    #[test]
    fn short_payload_is_refused() {
        let err = transcode(Header{wide: 10, high: 10}, vec![0; 100]).unwrap_err();
        match err {
            Error::InsufficientPayload{expected, actual, ..} => {
                assert_eq!(expected, 400);
                assert_eq!(actual, 100);
            }
            err => panic!("unexpected {err:?}"),
        }
    }

    #[test]
    fn long_payload_is_trimmed() {
        let mut payload = [ODD, ODD].concat();
        payload.extend_from_slice(&[9; 7]);
        let image = transcode(Header{wide: 2, high: 1}, payload).unwrap();
        assert_eq!(image.into_raw(), [3, 2, 1, 4, 3, 2, 1, 4]);
    }

    #[test]
    fn zero_dimensions_are_invalid() {
        for (wide, high) in [(0, 3), (3, 0), (0, 0)] {
            let err = transcode(Header{wide, high}, vec![0; 64]).unwrap_err();
            assert!(matches!(err, Error::InvalidDimensions{..}), "{err:?}");
        }
    }

    proptest! {
        #[test]
        fn length_is_preserved(
            (wide, high, payload) in (1u32..12, 1u32..12).prop_flat_map(|(w, h)| {
                let len = (w * h * 4) as usize;
                (Just(w), Just(h), proptest::collection::vec(any::<u8>(), len))
            })
        ) {
            let len = payload.len();
            let image = transcode(Header{wide, high}, payload.clone()).unwrap();
            let out = image.into_raw();
            prop_assert_eq!(out.len(), len);

            // first output row is the last input row, swizzled
            let row = (wide * 4) as usize;
            let last = &payload[len - row ..];
            for (o, i) in out[..row].chunks_exact(4).zip(last.chunks_exact(4)) {
                prop_assert_eq!(o, &[i[2], i[1], i[0], i[3]][..]);
            }
        }
    }
}
