/// Folds a character to lowercase for case-insensitive comparison.
///
/// Characters whose lowercase form is not a single character are kept as is.
#[inline]
pub(crate) fn fold(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }

    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}
