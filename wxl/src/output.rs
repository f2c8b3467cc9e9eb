use {
    crate::Error,
    camino::{Utf8Path, Utf8PathBuf},
    image::{ImageError, ImageFormat, RgbaImage},
};

/// Writes `image` as a PNG at `path`.
///
/// The encoder writes to a `.part` sibling first, which is renamed into
/// place only once encoding has succeeded. Nothing is left behind on failure.
pub fn save_png(image: &RgbaImage, path: &Utf8Path) -> Result<(), Error> {
    let part = part_path(path);
    log::debug!("encoding {}x{} png into {part}", image.width(), image.height());

    let saved = image.save_with_format(&part, ImageFormat::Png)
        .and_then(|()| std::fs::rename(&part, path).map_err(ImageError::IoError));

    if let Err(err) = saved {
        match std::fs::remove_file(&part) {
            Ok(()) => log::debug!("removed {part}"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("could not remove {part}: {e}"),
        }
        return Err(Error::Encoding(err));
    }
    Ok(())
}

fn part_path(path: &Utf8Path) -> Utf8PathBuf {
    let mut part = path.as_str().to_owned();
    part.push_str(".part");
    part.into()
}
