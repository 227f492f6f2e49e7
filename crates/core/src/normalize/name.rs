//! Name folding and Pythagorean letter values.

/// Extended-Latin letters folded to their plain ASCII base letter.
///
/// Covers the Turkish alphabet, Serbian Latin and the circumflexed vowels.
/// Anything not listed here and not already ASCII is dropped by
/// [`normalize_name`].
const FOLDING_TABLE: &[(char, char)] = &[
    ('Ç', 'C'),
    ('ç', 'C'),
    ('Ş', 'S'),
    ('ş', 'S'),
    ('Ğ', 'G'),
    ('ğ', 'G'),
    ('Ö', 'O'),
    ('ö', 'O'),
    ('Ü', 'U'),
    ('ü', 'U'),
    ('İ', 'I'),
    ('ı', 'I'),
    ('Â', 'A'),
    ('â', 'A'),
    ('Ê', 'E'),
    ('ê', 'E'),
    ('Î', 'I'),
    ('î', 'I'),
    ('Ô', 'O'),
    ('ô', 'O'),
    ('Û', 'U'),
    ('û', 'U'),
    ('Č', 'C'),
    ('č', 'C'),
    ('Ć', 'C'),
    ('ć', 'C'),
    ('Đ', 'D'),
    ('đ', 'D'),
    ('Š', 'S'),
    ('š', 'S'),
    ('Ž', 'Z'),
    ('ž', 'Z'),
];

/// Vowels for the soul urge / personality split. `Y` is always a consonant.
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

fn fold_letter(c: char) -> char {
    FOLDING_TABLE
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

/// Canonicalize a raw name into a sequence of `A`-`Z` letters.
///
/// Trims, collapses whitespace runs, folds extended-Latin letters, upper-cases
/// and finally removes every character outside `A`-`Z`. Empty or fully
/// unmappable input produces an empty string.
pub fn normalize_name(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .chars()
        .map(fold_letter)
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Pythagorean value of an upper-case letter; 0 for anything else.
pub fn letter_value(letter: char) -> u32 {
    match letter {
        'A' | 'J' | 'S' => 1,
        'B' | 'K' | 'T' => 2,
        'C' | 'L' | 'U' => 3,
        'D' | 'M' | 'V' => 4,
        'E' | 'N' | 'W' => 5,
        'F' | 'O' | 'X' => 6,
        'G' | 'P' | 'Y' => 7,
        'H' | 'Q' | 'Z' => 8,
        'I' | 'R' => 9,
        _ => 0,
    }
}

pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter)
}

fn sum_where(name: &str, keep: impl Fn(char) -> bool) -> u32 {
    normalize_name(name)
        .chars()
        .filter(|c| keep(*c))
        .map(letter_value)
        .sum()
}

/// Sum of letter values over the whole normalized name.
pub fn sum_name_values(name: &str) -> u32 {
    sum_where(name, |_| true)
}

/// Sum of letter values over the vowels `A E I O U`.
pub fn sum_vowel_values(name: &str) -> u32 {
    sum_where(name, is_vowel)
}

/// Sum of letter values over every non-vowel, `Y` included.
pub fn sum_consonant_values(name: &str) -> u32 {
    sum_where(name, |c| !is_vowel(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turkish_name_is_case_and_diacritic_insensitive() {
        assert_eq!(normalize_name("Çağla Öztürk"), "CAGLAOZTURK");
        assert_eq!(
            normalize_name("çağla öztürk"),
            normalize_name("Çağla Öztürk")
        );
    }

    #[test]
    fn dotted_and_dotless_i_fold_to_i() {
        assert_eq!(normalize_name("İsmail ılgaz"), "ISMAILILGAZ");
    }

    #[test]
    fn serbian_latin_letters_fold() {
        assert_eq!(normalize_name("Đorđe Šćepanović"), "DORDESCEPANOVIC");
        assert_eq!(normalize_name("Žarko Čolić"), "ZARKOCOLIC");
    }

    #[test]
    fn circumflexed_vowels_fold() {
        assert_eq!(normalize_name("Âlâ Îlkîn"), "ALAILKIN");
    }

    #[test]
    fn digits_punctuation_and_unmapped_letters_are_removed() {
        assert_eq!(normalize_name("  O'Brien-Smith 3rd  "), "OBRIENSMITHRD");
        assert_eq!(normalize_name("José"), "JOS");
        assert_eq!(normalize_name("李小龙"), "");
    }

    #[test]
    fn empty_input_normalizes_to_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   \t "), "");
        assert_eq!(sum_name_values(""), 0);
    }

    #[test]
    fn letter_table_cycles_one_to_nine() {
        let alphabet: Vec<char> = ('A'..='Z').collect();
        for (i, c) in alphabet.iter().enumerate() {
            assert_eq!(letter_value(*c), (i as u32 % 9) + 1, "letter {}", c);
        }
        assert_eq!(letter_value('a'), 0);
        assert_eq!(letter_value('1'), 0);
    }

    #[test]
    fn sums_for_simple_name() {
        // A=1 N=5 A=1
        assert_eq!(sum_name_values("Ana"), 7);
        assert_eq!(sum_vowel_values("Ana"), 2);
        assert_eq!(sum_consonant_values("Ana"), 5);
    }

    #[test]
    fn y_counts_as_consonant() {
        assert_eq!(sum_vowel_values("Yy"), 0);
        assert_eq!(sum_consonant_values("Yy"), 14);
    }
}
