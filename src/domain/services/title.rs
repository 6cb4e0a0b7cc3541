//! Display titles from file and folder names

/// Convert a file or folder name to a display title.
///
/// Every "oe" (any case) becomes "ö", hyphens and underscores become spaces,
/// then the whole string is upper-cased.
///
/// ```
/// use folio::filename_to_title;
///
/// assert_eq!(filename_to_title("my-cool-project"), "MY COOL PROJECT");
/// assert_eq!(filename_to_title("noel-project"), "NÖL PROJECT");
/// ```
pub fn filename_to_title(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            'o' | 'O' if matches!(chars.peek(), Some('e' | 'E')) => {
                chars.next();
                out.push('ö');
            }
            '-' | '_' => out.push(' '),
            other => out.push(other),
        }
    }

    out.to_uppercase()
}
