//! `rename_all` rules for emitted field and variant names.

/// Case conversion applied to declared identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RenameRule {
    Pascal,
    Camel,
    Snake,
    Lower,
    Upper,
    ScreamingSnake,
    Kebab,
}

impl RenameRule {
    pub(crate) const NAMES: &'static str = "`PascalCase`, `camelCase`, `snake_case`, \
        `lowercase`, `UPPERCASE`, `SCREAMING_SNAKE_CASE` or `kebab-case`";

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "PascalCase" => Some(Self::Pascal),
            "camelCase" => Some(Self::Camel),
            "snake_case" => Some(Self::Snake),
            "lowercase" => Some(Self::Lower),
            "UPPERCASE" => Some(Self::Upper),
            "SCREAMING_SNAKE_CASE" => Some(Self::ScreamingSnake),
            "kebab-case" => Some(Self::Kebab),
            _ => None,
        }
    }

    /// Applies the rule to a Rust identifier (`snake_case` fields or `PascalCase` variants).
    pub(crate) fn apply(self, ident: &str) -> String {
        let ident = ident.strip_prefix("r#").unwrap_or(ident);
        let words = split_words(ident);
        match self {
            Self::Pascal => words.iter().map(|word| capitalize(word)).collect(),
            Self::Camel => words
                .iter()
                .enumerate()
                .map(|(index, word)| {
                    if index == 0 {
                        word.to_lowercase()
                    } else {
                        capitalize(word)
                    }
                })
                .collect(),
            Self::Snake => join_lower(&words, "_"),
            Self::Lower => words.concat().to_lowercase(),
            Self::Upper => words.concat().to_uppercase(),
            Self::ScreamingSnake => join_lower(&words, "_").to_uppercase(),
            Self::Kebab => join_lower(&words, "-"),
        }
    }
}

/// Splits on underscores and on lower-to-upper transitions.
fn split_words(ident: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut previous_lower = false;
    for ch in ident.chars() {
        if ch == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous_lower = false;
            continue;
        }
        if ch.is_uppercase() && previous_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        previous_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

fn join_lower(words: &[String], separator: &str) -> String {
    words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_fields_convert() {
        assert_eq!(RenameRule::Pascal.apply("prop_a"), "PropA");
        assert_eq!(RenameRule::Camel.apply("prop_a_b"), "propAB");
        assert_eq!(RenameRule::ScreamingSnake.apply("user_id"), "USER_ID");
        assert_eq!(RenameRule::Kebab.apply("user_id"), "user-id");
        assert_eq!(RenameRule::Lower.apply("user_id"), "userid");
        assert_eq!(RenameRule::Upper.apply("user_id"), "USERID");
    }

    #[test]
    fn pascal_case_variants_convert() {
        assert_eq!(RenameRule::Snake.apply("NotFound"), "not_found");
        assert_eq!(RenameRule::Camel.apply("NotFound"), "notFound");
        assert_eq!(RenameRule::Pascal.apply("NotFound"), "NotFound");
    }

    #[test]
    fn raw_identifiers_lose_their_prefix() {
        assert_eq!(RenameRule::Pascal.apply("r#type"), "Type");
    }

    #[test]
    fn unknown_rule_is_none() {
        assert!(RenameRule::from_name("Title Case").is_none());
        assert_eq!(
            RenameRule::from_name("camelCase"),
            Some(RenameRule::Camel)
        );
    }
}
