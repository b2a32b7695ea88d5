//! Container and image codec classification.
//!
//! Syntactic classification from a location's trailing extension, plus a
//! byte-prefix sniff for streams that are already open. This layer only
//! classifies; the actual decoders live with the loader.

use crate::path::split_query;

/// GLB container magic, little-endian `glTF`, the first word of every
/// binary glTF file.
pub const GLB_MAGIC: u32 = 0x46546C67;

/// Serialization form of a referenced glTF document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Binary glTF (`.glb`).
    Binary,
    /// JSON text glTF (`.gltf`).
    Text,
    /// Could not be determined from the input alone.
    Unknown,
}

/// Image codec of a referenced texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCodec {
    Jpeg,
    Png,
    /// KTX or KTX2 texture container.
    Ktx,
    /// Could not be determined from the input alone.
    Unknown,
}

/// Classify a document location by its trailing extension.
///
/// Case-insensitive; any query string is ignored. No bytes are inspected
/// here; use [`sniff_container`] once a stream is open.
pub fn classify_container(location: &str) -> ContainerKind {
    match trailing_extension(location) {
        Some(ext) if ext.eq_ignore_ascii_case("glb") => ContainerKind::Binary,
        Some(ext) if ext.eq_ignore_ascii_case("gltf") => ContainerKind::Text,
        _ => ContainerKind::Unknown,
    }
}

/// Classify a container from the first bytes of an opened stream.
///
/// A GLB header starts with [`GLB_MAGIC`]; JSON text starts with `{` after
/// optional whitespace and an optional UTF-8 BOM. Anything else, including
/// buffers shorter than the magic, is unknown.
pub fn sniff_container(bytes: &[u8]) -> ContainerKind {
    if bytes.len() >= 4 && bytes[..4] == GLB_MAGIC.to_le_bytes() {
        return ContainerKind::Binary;
    }
    let body = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        &bytes[3..]
    } else {
        bytes
    };
    match body.iter().find(|byte| !byte.is_ascii_whitespace()) {
        Some(b'{') => ContainerKind::Text,
        _ => ContainerKind::Unknown,
    }
}

/// Classify an image location by its trailing extension.
///
/// Inputs shorter than the shortest classifiable name (`x.jpg`) are unknown
/// immediately. Case-insensitive; dots in directory segments or query
/// values never take part in the match.
pub fn classify_image(location: &str) -> ImageCodec {
    if location.len() < 5 {
        return ImageCodec::Unknown;
    }
    match trailing_extension(location) {
        Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
            ImageCodec::Jpeg
        }
        Some(ext) if ext.eq_ignore_ascii_case("png") => ImageCodec::Png,
        Some(ext) if ext.eq_ignore_ascii_case("ktx") || ext.eq_ignore_ascii_case("ktx2") => {
            ImageCodec::Ktx
        }
        _ => ImageCodec::Unknown,
    }
}

/// Map a glTF `mimeType` property to an image codec.
pub fn image_codec_from_mime(mime: &str) -> ImageCodec {
    if mime.eq_ignore_ascii_case("image/jpeg") {
        ImageCodec::Jpeg
    } else if mime.eq_ignore_ascii_case("image/png") {
        ImageCodec::Png
    } else if mime.eq_ignore_ascii_case("image/ktx") || mime.eq_ignore_ascii_case("image/ktx2") {
        ImageCodec::Ktx
    } else {
        ImageCodec::Unknown
    }
}

/// Extension of the last path segment, with any query stripped first.
fn trailing_extension(location: &str) -> Option<&str> {
    let (path, _) = split_query(location);
    let name = path
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(path);
    let dot = name.rfind('.')?;
    let ext = &name[dot + 1..];
    (!ext.is_empty()).then_some(ext)
}
