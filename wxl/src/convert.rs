use {
    crate::{Error, Header, save_png, transcode},
    camino::{Utf8Path, Utf8PathBuf},
    image::RgbaImage,
    std::io::{BufReader, Read, Seek, SeekFrom},
};

/// Paths for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: Utf8PathBuf,
    pub output: Utf8PathBuf,
}

impl Config {
    /// Targets `<stem>.png` next to `input`.
    pub fn for_input(input: impl Into<Utf8PathBuf>) -> Result<Self, Error> {
        let input = input.into();
        let output = png_path_for(&input).ok_or_else(|| Error::FileNotFound(input.clone()))?;
        Ok(Config{input, output})
    }
}

/// `dir/name.wxl` becomes `dir/name.png`. `None` if `input` names no file.
pub fn png_path_for(input: &Utf8Path) -> Option<Utf8PathBuf> {
    input.file_name()?;
    Some(input.with_extension("png"))
}

/// Decodes a whole WXL stream: header, then everything after it as payload.
pub fn decode<R>(stream: &mut R) -> Result<(Header, RgbaImage), Error> where
    R: Read + Seek,
{
    let header = Header::read_from(stream)?;
    let payload = read_payload(stream, header)?;
    let image = transcode(header, payload)?;
    Ok((header, image))
}

/// Reads everything after the header. The reservation is bounded by what
/// the stream actually holds, not by the declared dimensions.
fn read_payload<R>(stream: &mut R, header: Header) -> Result<Vec<u8>, Error> where
    R: Read + Seek,
{
    let start = stream.stream_position()?;
    let end = stream.seek(SeekFrom::End(0))?;
    stream.seek(SeekFrom::Start(start))?;

    let remaining = usize::try_from(end.saturating_sub(start)).unwrap_or(usize::MAX);
    let declared = header.payload_len().unwrap_or(usize::MAX);
    let mut payload = Vec::with_capacity(remaining.min(declared));
    stream.read_to_end(&mut payload)?;
    log::debug!("read {} payload bytes, {declared} declared", payload.len());
    Ok(payload)
}

pub fn decode_file(path: &Utf8Path) -> Result<(Header, RgbaImage), Error> {
    if !path.is_file() {return Err(Error::FileNotFound(path.to_owned()))}
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_owned()),
        _ => Error::Io(e),
    })?;
    decode(&mut BufReader::new(file))
}

/// Decodes `config.input` and writes it to `config.output` as PNG.
pub fn convert(config: &Config) -> Result<Header, Error> {
    let start = std::time::Instant::now();
    log::info!("converting {} to {}", config.input, config.output);

    let (header, image) = decode_file(&config.input)?;
    log::info!("decoded {}x{} image", header.wide, header.high);

    save_png(&image, &config.output)?;
    log::info!("saved {} in {:.3}s", config.output, start.elapsed().as_secs_f32());
    Ok(header)
}
