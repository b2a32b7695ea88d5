//! Dot-segment normalization for relative reference paths.

/// Remove dot segments from a relative path.
///
/// Processes segments left to right with an output stack:
///
/// - Replaces backslashes with forward slashes
/// - Collapses redundant separators (`a///b` → `a/b`)
/// - Drops `.` segments
/// - A `..` segment cancels the most recent real segment; if nothing is
///   left to cancel it is counted instead of emitted
///
/// Returns the normalized path and the number of `..` segments that could
/// not be canceled locally. Literal `..` never appears in the output; the
/// caller climbs its base by the returned count, since only the caller
/// knows how deep the base actually is.
pub fn remove_dot_segments(path: &str) -> (String, usize) {
    let replaced = path.replace('\\', "/");
    let mut stack: Vec<&str> = Vec::new();
    let mut parent_levels = 0;

    for segment in replaced.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if stack.pop().is_none() {
                    parent_levels += 1;
                }
            }
            real => stack.push(real),
        }
    }

    (stack.join("/"), parent_levels)
}

/// Split a location at the first `?` into path and verbatim query.
pub(crate) fn split_query(location: &str) -> (&str, Option<&str>) {
    match location.find('?') {
        Some(pos) => (&location[..pos], Some(&location[pos + 1..])),
        None => (location, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_filename() {
        assert_eq!(remove_dot_segments("file.txt"), ("file.txt".into(), 0));
    }

    #[test]
    fn already_normalized() {
        assert_eq!(remove_dot_segments("a/b/c.bin"), ("a/b/c.bin".into(), 0));
    }

    #[test]
    fn leading_parent() {
        assert_eq!(
            remove_dot_segments("../other_folder/file.txt"),
            ("other_folder/file.txt".into(), 1)
        );
    }

    #[test]
    fn canceled_parent() {
        assert_eq!(
            remove_dot_segments("other_folder/../file.txt"),
            ("file.txt".into(), 0)
        );
    }

    #[test]
    fn dot_segment() {
        assert_eq!(
            remove_dot_segments("other_folder/./file.txt"),
            ("other_folder/file.txt".into(), 0)
        );
    }

    #[test]
    fn mixed_dots() {
        assert_eq!(
            remove_dot_segments("other_folder/./../x/../file.txt"),
            ("file.txt".into(), 0)
        );
    }

    #[test]
    fn leading_parent_survives_cancellation() {
        assert_eq!(
            remove_dot_segments("../other_folder/../x/../file.txt"),
            ("file.txt".into(), 1)
        );
    }

    #[test]
    fn only_parents() {
        assert_eq!(remove_dot_segments("../../.."), ("".into(), 3));
    }

    #[test]
    fn empty_path() {
        assert_eq!(remove_dot_segments(""), ("".into(), 0));
    }

    #[test]
    fn redundant_separators() {
        assert_eq!(remove_dot_segments("a//b.png"), ("a/b.png".into(), 0));
    }

    #[test]
    fn backslashes() {
        assert_eq!(
            remove_dot_segments("a\\b\\c.png"),
            ("a/b/c.png".into(), 0)
        );
    }

    #[test]
    fn trailing_separator() {
        assert_eq!(remove_dot_segments("dir/"), ("dir".into(), 0));
    }

    #[test]
    fn query_split() {
        assert_eq!(split_query("file.glb?a=1&b=2"), ("file.glb", Some("a=1&b=2")));
        assert_eq!(split_query("file.glb"), ("file.glb", None));
        assert_eq!(split_query("?a=1"), ("", Some("a=1")));
    }
}
