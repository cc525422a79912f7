/// Returns `true` if the character can appear in the tail of a TPTP word
/// token, that is, if it matches `[A-Za-z0-9_]`.
pub fn is_word_character(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Returns `true` if `s` is a valid lower word (`[a-z][A-Za-z0-9_]*`).
pub fn is_lower_word(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(is_word_character)
}

/// Returns `true` if `s` is an integer literal, i.e. an optional sign
/// followed by one or more digits. Annotated formula names may be integers,
/// which are printed without quotes.
pub fn is_integer_word(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Returns `true` if `s` may be printed verbatim in a functor position:
/// lower words and `$`/`$$` words need no quoting.
pub fn is_plain_functor(s: &str) -> bool {
    match s.strip_prefix("$$").or_else(|| s.strip_prefix('$')) {
        Some(rest) => !rest.is_empty() && rest.chars().all(is_word_character),
        None => is_lower_word(s),
    }
}
