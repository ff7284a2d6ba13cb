pub mod collation;

/// Lower-cased first character of each whitespace delimited word,
/// so "Attack on Titan" becomes "aot"
pub fn acronym(title: &str) -> String {
    title
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acronym() {
        assert_eq!(acronym("Attack on Titan"), "aot");
        assert_eq!(acronym("  The   Last of Us "), "tlou");
        assert_eq!(acronym(""), "");
        assert_eq!(acronym("Ōkami"), "ō");
    }

    #[test]
    fn test_acronym_has_letter_per_word() {
        use fake::Fake as _;
        for _ in 0..20 {
            let words: Vec<String> = fake::faker::lorem::en::Words(1..8).fake();
            let title = words.join(" ");
            let initials = acronym(&title);
            assert_eq!(initials.chars().count(), words.len());
            assert!(title.to_lowercase().starts_with(&initials[..1]));
        }
    }
}
