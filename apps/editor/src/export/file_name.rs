//! Export file-name derivation from the contact's full name.

/// Base name used when the full name yields no usable characters.
pub const FALLBACK_FILE_NAME: &str = "curriculo-profissional";

/// Derives a filesystem-safe, lowercase, hyphenated base name (no extension).
///
/// Latin accents are folded to their ASCII letter, anything that is not an ASCII
/// letter or whitespace is dropped, and whitespace runs become single hyphens.
pub fn export_file_name(full_name: &str) -> String {
    let kept: String = full_name
        .trim()
        .chars()
        .filter_map(|c| {
            let c = fold_accent(c);
            if c.is_ascii_alphabetic() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() {
                Some(' ')
            } else {
                None
            }
        })
        .collect();

    let slug = kept.split_whitespace().collect::<Vec<_>>().join("-");
    if slug.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        slug
    }
}

/// Maps accented Latin letters to their base ASCII letter; other chars are unchanged.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' => 'A',
        'é' | 'è' | 'ê' | 'ë' | 'ē' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' | 'Ē' => 'E',
        'í' | 'ì' | 'î' | 'ï' | 'ī' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' | 'Ī' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' => 'O',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ū' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        _ => c,
    }
}
