//! Common utility functions shared across the codebase.

use unicode_width::UnicodeWidthStr;

/// Upper-cases the first character and lower-cases the rest.
///
/// # Examples
///
/// ```
/// use genapi::utils::capitalize;
///
/// assert_eq!(capitalize("geometry"), "Geometry");
/// assert_eq!(capitalize("GDS_tools"), "Gds_tools");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Builds an RST adornment line as wide as `title` is on screen.
///
/// The length is the display width, not the character count. The two agree
/// for ASCII titles. East Asian wide characters count as two columns and
/// combining marks as zero, which is how docutils measures a title against
/// its underline. A character count would leave `图形` underlined too short.
///
/// # Examples
///
/// ```
/// use genapi::utils::adornment;
///
/// assert_eq!(adornment('=', "Device"), "======");
/// assert_eq!(adornment('=', "图形"), "====");
/// assert_eq!(adornment('*', ""), "");
/// ```
pub fn adornment(ch: char, title: &str) -> String {
    ch.to_string().repeat(UnicodeWidthStr::width(title))
}
