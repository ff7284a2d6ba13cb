use std::cmp::Ordering;

use phf::phf_map;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

static ND_CHARMAP: phf::Map<char, &'static str> = phf_map! {
    'Æ' => "AE",
    'æ' => "ae",
    'Ð' => "D",
    'ð' => "d",
    'Ø' => "O",
    'ø' => "o",
    'Þ' => "Th",
    'þ' => "th",
    'ß' => "ss",
    'Đ' => "D",
    'đ' => "d",
    'Ħ' => "H",
    'ħ' => "h",
    'ı' => "i",
    'Ł' => "L",
    'ł' => "l",
    'Œ' => "Oe",
    'œ' => "oe",
};

/// Key for human friendly ordering of titles - case folded and without diacritics.
/// Characters without decomposition (CJK, Thai ...) are kept as they are.
pub fn collation_key(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.trim().nfkd() {
        if let Some(mapped) = ND_CHARMAP.get(&c) {
            result.push_str(mapped);
        } else if !is_combining_mark(c) {
            result.push(c);
        }
    }

    result.to_lowercase()
}

/// Compares on collation keys, raw text decides only between equal keys
pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
