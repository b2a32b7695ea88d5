//! Location values, base derivation, and reference resolution.
//!
//! A [`Location`] tags a raw string as one of the three styles a glTF
//! document or its resources can be addressed by. A [`Base`] is the
//! container derived from a document's location; resource references from
//! document content are resolved against it with [`resolve`].

use std::fmt;

use crate::data_uri::is_data_uri;
use crate::path::{remove_dot_segments, split_query};

/// A resource location, tagged by how it must be interpreted.
///
/// The tag is fixed at construction; resolution never changes the kind of
/// a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Absolute `http`/`https` URL.
    Network(String),
    /// `file://` URI or absolute platform file path (drive-letter or POSIX).
    File(String),
    /// Scheme-less relative path, e.g. an in-package virtual asset path.
    Relative(String),
}

impl Location {
    /// Classify a raw location string.
    ///
    /// Total: every input maps to exactly one variant. Scheme matching is
    /// ASCII case-insensitive. Anything without a recognized scheme, a
    /// drive letter, or a leading `/` is a relative path.
    pub fn parse(location: &str) -> Self {
        if starts_with_ignore_case(location, "http://")
            || starts_with_ignore_case(location, "https://")
        {
            Location::Network(location.to_string())
        } else if starts_with_ignore_case(location, "file://")
            || has_drive_letter(location)
            || location.starts_with('/')
        {
            Location::File(location.to_string())
        } else {
            Location::Relative(location.to_string())
        }
    }

    /// The raw string form.
    pub fn as_str(&self) -> &str {
        match self {
            Location::Network(s) | Location::File(s) | Location::Relative(s) => s,
        }
    }

    /// Whether this location stands on its own, independent of any base.
    pub fn is_absolute(&self) -> bool {
        !matches!(self, Location::Relative(_))
    }

    /// Derive the container that holds this location.
    ///
    /// Discards the final path segment exactly once and drops any query.
    /// Platform file paths come out in `file://` form, keeping backslashes
    /// after the scheme for drive-letter paths. Relative locations stay
    /// schemeless; one without any separator yields the empty base.
    ///
    /// Call this on document or resource locations, not on containers.
    pub fn base(&self) -> Base {
        match self {
            Location::Network(s) => {
                let (path, _) = split_query(s);
                let scheme_end = path.find("://").map(|pos| pos + 3).unwrap_or(0);
                match path[scheme_end..].find('/') {
                    Some(slash) => {
                        let split = scheme_end + slash + 1;
                        Base {
                            prefix: path[..split].to_string(),
                            segments: parent_segments(&path[split..], '/'),
                            separator: '/',
                            absolute: true,
                        }
                    }
                    // authority only, no path to truncate
                    None => Base {
                        prefix: format!("{path}/"),
                        segments: Vec::new(),
                        separator: '/',
                        absolute: true,
                    },
                }
            }
            Location::File(s) => {
                let (path, _) = split_query(s);
                let rest = strip_prefix_ignore_case(path, "file://").unwrap_or(path);
                if has_drive_letter(rest) {
                    let separator = if rest.contains('\\') { '\\' } else { '/' };
                    let tail = rest[2..].strip_prefix(separator).unwrap_or(&rest[2..]);
                    Base {
                        prefix: format!("file://{}{}", &rest[..2], separator),
                        segments: parent_segments(tail, separator),
                        separator,
                        absolute: true,
                    }
                } else {
                    Base {
                        prefix: "file:///".to_string(),
                        segments: parent_segments(rest.trim_start_matches('/'), '/'),
                        separator: '/',
                        absolute: true,
                    }
                }
            }
            Location::Relative(s) => {
                let (path, _) = split_query(s);
                Base {
                    prefix: String::new(),
                    segments: parent_segments(path, '/'),
                    separator: '/',
                    absolute: false,
                }
            }
        }
    }
}

/// A location known to denote a container, used as the anchor for
/// resolving relative references.
///
/// Built by [`Location::base`]. A base never carries a query, and its
/// textual form always denotes a container: absolute bases end in their
/// separator, relative bases are the bare joined segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    /// Scheme and authority (`http://host/`, `file:///`, `file://c:\`),
    /// empty for relative bases.
    prefix: String,
    /// Climbable path segments between the prefix and the discarded
    /// document segment.
    segments: Vec<String>,
    /// Separator used when joining; `\` only for drive-letter paths.
    separator: char,
    /// Whether the textual form is an absolute URI.
    absolute: bool,
}

impl Base {
    /// The "current directory" anchor, for documents with no own location.
    pub fn empty() -> Self {
        Base {
            prefix: String::new(),
            segments: Vec::new(),
            separator: '/',
            absolute: false,
        }
    }

    /// Whether resolving against this base prepends nothing.
    pub fn is_empty(&self) -> bool {
        !self.absolute && self.segments.is_empty()
    }

    /// Join a normalized relative path onto this base, first climbing one
    /// segment per parent level.
    ///
    /// Climbing past the shallowest available location (authority root,
    /// drive root, or the empty relative path) clamps there instead of
    /// erroring; documents in the wild frequently over-count `..`.
    fn join(&self, parent_levels: usize, path: &str) -> String {
        if parent_levels > self.segments.len() {
            log::warn!(
                "reference climbs {} level(s) above `{}`, clamping",
                parent_levels - self.segments.len(),
                self
            );
        }
        let kept = &self.segments[..self.segments.len().saturating_sub(parent_levels)];

        let mut out = self.prefix.clone();
        for segment in kept {
            out.push_str(segment);
            out.push(self.separator);
        }
        if path.is_empty() {
            // container form; relative bases carry no trailing separator
            if !self.absolute && out.ends_with(self.separator) {
                out.pop();
            }
        } else if self.separator == '/' {
            out.push_str(path);
        } else {
            // keep the platform separator uniform after the scheme
            for (index, segment) in path.split('/').enumerate() {
                if index > 0 {
                    out.push(self.separator);
                }
                out.push_str(segment);
            }
        }
        out
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(0, ""))
    }
}

/// Resolve a reference from document content against a base.
///
/// References that stand on their own (recognized scheme, platform
/// absolute path, or data URI) are returned byte-for-byte and the base is
/// ignored. Everything else is dot-segment normalized and appended to the
/// base with exactly one separator, climbing one base segment per
/// unresolved `..`. A query on the reference is preserved verbatim; an
/// empty reference denotes the base itself.
pub fn resolve(reference: &str, base: &Base) -> String {
    if reference.is_empty() {
        return base.to_string();
    }
    if Location::parse(reference).is_absolute() || is_data_uri(reference) {
        return reference.to_string();
    }

    let (path, query) = split_query(reference);
    let (normalized, parent_levels) = remove_dot_segments(path);
    let resolved = base.join(parent_levels, &normalized);

    match query {
        Some(query) => format!("{resolved}?{query}"),
        None => resolved,
    }
}

/// Path segments of `path` with the final segment removed.
fn parent_segments(path: &str, separator: char) -> Vec<String> {
    let mut segments: Vec<String> = path.split(separator).map(str::to_string).collect();
    segments.pop();
    segments.retain(|segment| !segment.is_empty());
    segments
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if starts_with_ignore_case(s, prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

fn has_drive_letter(location: &str) -> bool {
    let bytes = location.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
