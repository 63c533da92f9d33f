//! Substring removal on file contents.
//!
//! Matching is plain substring matching: no pattern syntax, no word
//! boundaries. Removal repeats until the needle no longer occurs, so the
//! output never contains the needle (`"a.m.mdd"` becomes `"a"`, not `"a.md"`).

/// Remove every occurrence of `needle` from `content`.
///
/// Returns `None` when `needle` does not occur (or is empty), so callers can
/// tell "nothing to do" apart from "rewritten to the same length".
///
/// Unlike a single `str::replace` pass, removal is repeated while deleting
/// one occurrence re-forms another, so the result never contains `needle`
/// and a second run is a no-op. `"a.m.mdd"` therefore becomes `"a"`, where
/// one pass would leave `"a.md"`.
///
/// ```
/// use docshift_core::strip_all;
///
/// assert_eq!(
///     strip_all("See [here](./other.md) for more.", ".md").as_deref(),
///     Some("See [here](./other) for more.")
/// );
/// assert_eq!(strip_all("plain text", ".md"), None);
/// ```
pub fn strip_all(content: &str, needle: &str) -> Option<String> {
    if needle.is_empty() || !content.contains(needle) {
        return None;
    }
    let mut stripped = content.replace(needle, "");
    while stripped.contains(needle) {
        stripped = stripped.replace(needle, "");
    }
    Some(stripped)
}

/// Remove `needle` only inside markdown inline link targets.
///
/// A link target is the text between `](` and the next `)`. Prose, link
/// labels and code outside targets are left alone. Returns `None` when no
/// target contained the needle.
///
/// ```
/// use docshift_core::strip_in_link_targets;
///
/// let content = "Edit README.md, then read [setup](./setup.md).";
/// assert_eq!(
///     strip_in_link_targets(content, ".md").as_deref(),
///     Some("Edit README.md, then read [setup](./setup).")
/// );
/// ```
pub fn strip_in_link_targets(content: &str, needle: &str) -> Option<String> {
    if needle.is_empty() || !content.contains(needle) {
        return None;
    }

    let mut output = String::with_capacity(content.len());
    let mut rest = content;
    let mut changed = false;

    while let Some(open) = rest.find("](") {
        let target_start = open + 2;
        output.push_str(&rest[..target_start]);
        let after = &rest[target_start..];

        let Some(close) = after.find(')') else {
            // Unterminated target: leave the remainder as-is.
            output.push_str(after);
            rest = "";
            break;
        };

        let target = &after[..close];
        match strip_all(target, needle) {
            Some(stripped) => {
                output.push_str(&stripped);
                changed = true;
            }
            None => output.push_str(target),
        }
        rest = &after[close..];
    }
    output.push_str(rest);

    changed.then_some(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_all_removes_every_occurrence() {
        let content = "[a](a.md) and [b](dir/b.md#anchor) and notes.md";
        assert_eq!(
            strip_all(content, ".md").as_deref(),
            Some("[a](a) and [b](dir/b#anchor) and notes")
        );
    }

    #[test]
    fn test_strip_all_is_blunt_about_context() {
        assert_eq!(strip_all("abc.mdx", ".md").as_deref(), Some("abcx"));
        assert_eq!(strip_all("video.mdb", ".md").as_deref(), Some("videob"));
    }

    #[test]
    fn test_strip_all_no_match() {
        assert_eq!(strip_all("no links here", ".md"), None);
        assert_eq!(strip_all("", ".md"), None);
    }

    #[test]
    fn test_strip_all_empty_needle() {
        assert_eq!(strip_all("anything.md", ""), None);
    }

    #[test]
    fn test_strip_all_leaves_no_reformed_needle() {
        assert_eq!(strip_all("a.m.mdd", ".md").as_deref(), Some("a"));
    }

    #[test]
    fn test_strip_all_is_idempotent() {
        let once = strip_all("x.md y.mdx z.m.mdd", ".md").unwrap();
        assert_eq!(strip_all(&once, ".md"), None);
    }

    #[test]
    fn test_strip_all_multibyte_content() {
        assert_eq!(
            strip_all("Voir [résumé](./résumé.md) ✓", ".md").as_deref(),
            Some("Voir [résumé](./résumé) ✓")
        );
    }

    #[test]
    fn test_link_targets_only() {
        let content = "Rename foo.md.\n\n[Foo](./foo.md) [Bar](https://x.io/bar.md?raw=1)\n";
        assert_eq!(
            strip_in_link_targets(content, ".md").as_deref(),
            Some("Rename foo.md.\n\n[Foo](./foo) [Bar](https://x.io/bar?raw=1)\n")
        );
    }

    #[test]
    fn test_link_targets_prose_only_is_unchanged() {
        assert_eq!(strip_in_link_targets("See README.md", ".md"), None);
        assert_eq!(strip_in_link_targets("[README.md](./intro)", ".md"), None);
    }

    #[test]
    fn test_link_targets_unterminated() {
        assert_eq!(
            strip_in_link_targets("[a](a.md) then [b](b.md", ".md").as_deref(),
            Some("[a](a) then [b](b.md")
        );
    }

    #[test]
    fn test_link_targets_image_links() {
        assert_eq!(
            strip_in_link_targets("![diagram](./diagram.md.png)", ".md").as_deref(),
            Some("![diagram](./diagram.png)")
        );
    }
}
