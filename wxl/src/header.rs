use {
    crate::Error,
    std::io::{self, Read, Seek, SeekFrom},
};

/// Size of the fixed header block. Pixel data starts at this offset.
pub const HEADER_LEN: u64 = 256;

/// Most bytes a single decimal field may occupy.
pub const FIELD_CAP: usize = 4;

const DELIMITER: u8 = b' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub wide: u32,
    pub high: u32,
}

impl Header {
    /// Tokenizes width and height from the start of `stream` and leaves it
    /// positioned at [`HEADER_LEN`], however many bytes the fields took.
    pub fn read_from<R>(stream: &mut R) -> Result<Self, Error> where
        R: Read + Seek,
    {
        let stream_len = stream.seek(SeekFrom::End(0))?;
        stream.rewind()?;

        let (wide, high) = {
            let mut bytes = stream.by_ref().bytes();
            let wide = read_field(&mut bytes, "width")?;
            let high = read_field(&mut bytes, "height")?;
            (wide, high)
        };
        log::debug!("header fields: width {wide}, height {high}");

        if wide == 0 || high == 0 {
            let msg = format!("zero dimension in {wide}x{high}, is this really a wxl file?");
            return Err(Error::MalformedHeader(msg));
        }
        if stream_len < HEADER_LEN {return Err(Error::TruncatedHeader)}

        stream.seek(SeekFrom::Start(HEADER_LEN))?;
        Ok(Header{wide, high})
    }

    /// Byte count of the pixel payload this header declares, if it fits in
    /// memory at all.
    pub fn payload_len(&self) -> Option<usize> {
        let wide = usize::try_from(self.wide).ok()?;
        let high = usize::try_from(self.high).ok()?;
        wide.checked_mul(high)?.checked_mul(4)
    }
}

fn read_field<I>(bytes: &mut I, name: &str) -> Result<u32, Error> where
    I: Iterator<Item = io::Result<u8>>,
{
    let mut field = Vec::with_capacity(FIELD_CAP);
    loop {
        let byte = bytes.next().ok_or(Error::TruncatedHeader)??;
        if byte == DELIMITER {break}
        if field.len() == FIELD_CAP {
            field.push(byte);
            let field = String::from_utf8_lossy(&field).into_owned();
            return Err(Error::NumericOverflow{field});
        }
        field.push(byte);
    }

    if field.is_empty() {
        return Err(Error::MalformedHeader(format!("empty {name} field")));
    }
    field.iter().try_fold(0u32, |n, &b| {
        if !b.is_ascii_digit() {return None}
        Some(n * 10 + (b - b'0') as u32)
    })
    .ok_or_else(|| {
        let text = String::from_utf8_lossy(&field);
        Error::MalformedHeader(format!("{name} field {text:?} is not a decimal number"))
    })
}
