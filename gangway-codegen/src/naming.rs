//! Language naming conventions.

/// Naming rules for one target language.
///
/// Holds the casing conversions for generated identifiers plus the
/// reserved-word table and escape hook applied to names that would collide
/// with language keywords.
pub struct NamingConvention {
    /// Convert an identifier to the language's type casing.
    pub ident_to_type: fn(&str) -> String,
    /// Convert an identifier to the language's function casing.
    pub ident_to_function: fn(&str) -> String,
    pub reserved_words: &'static [&'static str],
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Apply the type casing.
    pub fn type_name(&self, ident: &str) -> String {
        self.safe_name(&(self.ident_to_type)(ident))
    }

    /// Apply the function casing.
    pub fn function_name(&self, ident: &str) -> String {
        self.safe_name(&(self.ident_to_function)(ident))
    }

    /// Whether the name collides with a language keyword.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Escape the name when it collides with a language keyword.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(s: &str) -> String {
        s.to_uppercase()
    }

    fn lower(s: &str) -> String {
        s.to_lowercase()
    }

    fn prefix(s: &str) -> String {
        format!("_{}", s)
    }

    const TEST_NAMING: NamingConvention = NamingConvention {
        ident_to_type: upper,
        ident_to_function: lower,
        reserved_words: &["new", "delete"],
        escape_reserved: prefix,
    };

    #[test]
    fn test_casing_hooks() {
        assert_eq!(TEST_NAMING.type_name("user"), "USER");
        assert_eq!(TEST_NAMING.function_name("GetUser"), "getuser");
    }

    #[test]
    fn test_reserved_words() {
        assert!(TEST_NAMING.is_reserved("new"));
        assert!(!TEST_NAMING.is_reserved("create"));
        assert_eq!(TEST_NAMING.safe_name("new"), "_new");
        assert_eq!(TEST_NAMING.safe_name("create"), "create");
    }

    #[test]
    fn test_reserved_applies_after_casing() {
        assert_eq!(TEST_NAMING.function_name("DELETE"), "_delete");
    }
}
