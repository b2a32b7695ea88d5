//! Resource location handling for glTF asset loading.
//!
//! A glTF scene description references its external resources (binary
//! buffers, textures) by URI, usually relative to the document itself.
//! This crate finds and classifies those resources without opening them:
//!
//! - [`Location`] tags a raw location string as network URL, file location,
//!   or relative asset path; [`Location::base`] derives the container a
//!   document lives in.
//! - [`resolve`] resolves a reference from document content against such a
//!   [`Base`], with RFC 3986-style dot-segment handling that reports and
//!   clamps climbs above the document root.
//! - [`classify_container`] and [`classify_image`] pick the parse path and
//!   image decoder from a location alone; [`sniff_container`] does the same
//!   from the first bytes of an opened stream.
//! - [`is_data_uri`] / [`decode_data_uri`] handle documents that embed
//!   their payloads instead of referencing sibling files.
//!
//! All operations are pure functions over immutable inputs, with no I/O
//! and no shared state, so they are safe to call from any thread.
//! Malformed references are clamped to a best-effort location rather than
//! rejected, since content in the wild is frequently non-conformant and
//! the loader must make progress.

mod classify;
mod data_uri;
mod location;
pub mod path;

pub use classify::{
    classify_container, classify_image, image_codec_from_mime, sniff_container, ContainerKind,
    ImageCodec, GLB_MAGIC,
};
pub use data_uri::{decode_data_uri, is_data_uri};
pub use location::{resolve, Base, Location};
