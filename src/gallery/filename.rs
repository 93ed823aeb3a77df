//! Filename sanitizing and display names.

use unicode_normalization::UnicodeNormalization;

use super::{MAX_FILENAME_LENGTH, THUMBNAIL_EXTENSIONS};

/// Turn a client-supplied filename into a safe storage key.
///
/// Characters are decomposed (NFKD) so accented letters keep their base
/// letter, then anything outside ASCII is dropped. Path separators become
/// word breaks, whitespace runs become a single underscore, and only
/// `[A-Za-z0-9_.-]` survives. Leading and trailing dots and underscores are
/// removed so the result can never be `.` or `..`.
/// Names longer than [`MAX_FILENAME_LENGTH`] lose the end of their stem but
/// keep their extension.
///
/// The result may be empty; callers must reject that.
///
/// ```
/// use gallery::sanitize_filename;
///
/// assert_eq!(sanitize_filename("My cool movie.mov"), "My_cool_movie.mov");
/// assert_eq!(sanitize_filename("../../../etc/passwd"), "etc_passwd");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let spaced: String = name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');
    truncate_keeping_extension(trimmed, MAX_FILENAME_LENGTH)
}

/// Shorten an ASCII filename to at most `max` characters, keeping the extension.
fn truncate_keeping_extension(name: &str, max: usize) -> String {
    if name.len() <= max {
        return name.to_string();
    }

    match split_extension(name) {
        (stem, Some(ext)) if ext.len() + 1 < max => {
            let stem_len = max - ext.len() - 1;
            format!("{}.{}", &stem[..stem_len.min(stem.len())], ext)
        }
        _ => name[..max].to_string(),
    }
}

/// Split a filename into stem and extension at the last dot.
///
/// Leading dots belong to the stem, so `.bashrc` has no extension.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    match name.rfind('.') {
        Some(idx) if idx > leading_dots => (&name[..idx], Some(&name[idx + 1..])),
        _ => (name, None),
    }
}

/// Human-readable name: extension removed, underscores replaced with spaces.
///
/// ```
/// use gallery::display_name;
///
/// assert_eq!(display_name("my_cool_file_v2.png"), "my cool file v2");
/// assert_eq!(display_name("report.pdf"), "report");
/// ```
pub fn display_name(filename: &str) -> String {
    let (stem, _) = split_extension(filename);
    stem.replace('_', " ")
}

/// Whether a filename carries one of the thumbnail extensions.
///
/// The comparison is exact: `photo.PNG` is not accepted.
pub fn is_allowed_thumbnail(filename: &str) -> bool {
    match split_extension(filename) {
        (_, Some(ext)) => THUMBNAIL_EXTENSIONS.contains(&ext),
        (_, None) => false,
    }
}
