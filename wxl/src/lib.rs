//! Decoder for WXL raster files.
//!
//! A WXL file is a 256-byte header holding the width and height as
//! space-terminated ASCII decimals, followed by raw 4-byte pixels stored
//! bottom row first. Decoding swaps bytes 0 and 2 of every pixel and hands
//! the result to the PNG encoder as RGBA.

mod convert;
mod error;
mod header;
mod output;
mod transcode;

pub use {
    convert::{Config, convert, decode, decode_file, png_path_for},
    error::Error,
    header::{FIELD_CAP, HEADER_LEN, Header},
    output::save_png,
    transcode::transcode,
};
