//! The fixed, ordered password rule set.

use std::collections::HashSet;
use std::fmt;

/// Minimum number of code points a password must have.
pub const MIN_LENGTH: usize = 9;

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-+";

/// Reason returned when every rule is satisfied.
pub const VALID_MESSAGE: &str = "Senha válida";

/// A single password rule.
///
/// Variants are declared in evaluation order. The first rule a candidate
/// fails decides the verdict, so callers matching on reason text rely on
/// this order staying put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Not absent and not blank after trimming.
    Presence,
    /// No whitespace anywhere in the untrimmed candidate.
    NoWhitespace,
    /// At least [`MIN_LENGTH`] code points.
    MinLength,
    /// At least one ASCII digit.
    Digit,
    /// At least one lowercase letter.
    Lowercase,
    /// At least one uppercase letter.
    Uppercase,
    /// At least one character from [`SPECIAL_CHARACTERS`].
    SpecialCharacter,
    /// No code point occurs twice (case-sensitive).
    NoRepeatedCharacters,
}

impl Rule {
    /// Every rule, in evaluation order.
    pub const ALL: [Rule; 8] = [
        Rule::Presence,
        Rule::NoWhitespace,
        Rule::MinLength,
        Rule::Digit,
        Rule::Lowercase,
        Rule::Uppercase,
        Rule::SpecialCharacter,
        Rule::NoRepeatedCharacters,
    ];

    /// Stable snake_case identifier, used in logs and text output.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Presence => "presence",
            Rule::NoWhitespace => "no_whitespace",
            Rule::MinLength => "min_length",
            Rule::Digit => "digit",
            Rule::Lowercase => "lowercase",
            Rule::Uppercase => "uppercase",
            Rule::SpecialCharacter => "special_character",
            Rule::NoRepeatedCharacters => "no_repeated_characters",
        }
    }

    /// The user-facing reason reported when this rule fails.
    pub fn message(self) -> &'static str {
        match self {
            Rule::Presence => "Senha não pode estar vazia",
            Rule::NoWhitespace => "Senha não pode conter espaços em branco",
            Rule::MinLength => "Senha deve ter pelo menos 9 caracteres",
            Rule::Digit => "Senha deve conter pelo menos 1 dígito",
            Rule::Lowercase => "Senha deve conter pelo menos 1 letra minúscula",
            Rule::Uppercase => "Senha deve conter pelo menos 1 letra maiúscula",
            Rule::SpecialCharacter => "Senha deve conter pelo menos 1 caractere especial",
            Rule::NoRepeatedCharacters => "Senha não pode conter caracteres repetidos",
        }
    }

    /// Check whether `candidate` satisfies this rule.
    ///
    /// Each rule is a single linear scan at most. Only [`Rule::Presence`]
    /// looks at the trimmed string (every char up to U+0020 is trimmed); the
    /// others see the candidate as given.
    pub fn is_satisfied_by(self, candidate: &str) -> bool {
        match self {
            Rule::Presence => !candidate.trim_matches(|c: char| c <= ' ').is_empty(),
            Rule::NoWhitespace => !candidate.chars().any(is_whitespace),
            Rule::MinLength => candidate.chars().nth(MIN_LENGTH - 1).is_some(),
            Rule::Digit => candidate.chars().any(|c| c.is_ascii_digit()),
            Rule::Lowercase => candidate.chars().any(char::is_lowercase),
            Rule::Uppercase => candidate.chars().any(char::is_uppercase),
            Rule::SpecialCharacter => candidate.chars().any(is_special_character),
            Rule::NoRepeatedCharacters => !has_repeated_characters(candidate),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `c` counts as whitespace for [`Rule::NoWhitespace`].
///
/// Space, line and paragraph separators except the no-break ones (U+00A0,
/// U+2007, U+202F), plus the ASCII controls U+0009..U+000D and U+001C..U+001F.
/// U+0085 is not whitespace here.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t'..='\r'
            | '\u{1C}'..='\u{1F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Whether `c` belongs to [`SPECIAL_CHARACTERS`].
pub fn is_special_character(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

fn has_repeated_characters(candidate: &str) -> bool {
    let mut seen = HashSet::new();
    candidate.chars().any(|c| !seen.insert(c))
}
