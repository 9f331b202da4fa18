//! Paradigm-class codes
//!
//! A code is the numeric class and variant followed by zero or more flags,
//! e.g. `1 1`, `3 1 DEP`, `5 1 TO_BEING`.

/// Flag tokens recognized inside a paradigm code
pub const RECOGNIZED_FLAGS: &[&str] = &[
    "DEP", "SEMIDEP", "PERFDEF", "TRANS", "INTRANS", "IMPERS", "TO_BEING",
];

/// Flags carried by a paradigm code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeFlags {
    /// Passive in form, active in meaning (`DEP`)
    pub deponent: bool,

    /// Active present system, passive-form perfect system (`SEMIDEP`)
    pub semi_deponent: bool,

    /// Only the perfect system exists (`PERFDEF`)
    pub perfect_only: bool,

    /// Takes a direct object (`TRANS`)
    pub transitive: bool,

    /// Takes no direct object (`INTRANS`)
    pub intransitive: bool,

    /// Third person singular only (`IMPERS`)
    pub impersonal: bool,

    /// Linking verb or compound of one (`TO_BEING`)
    pub copulative: bool,
}

/// A parsed paradigm-class code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParadigmCode {
    /// Primary class number (declension or conjugation)
    pub class: Option<u8>,

    /// Secondary variant number
    pub variant: Option<u8>,

    /// Flags following the numbers
    pub flags: CodeFlags,
}

impl ParadigmCode {
    /// Parse a code string; unknown tokens are ignored
    ///
    /// # Examples
    ///
    /// ```
    /// use ludus_domain::ParadigmCode;
    ///
    /// let code = ParadigmCode::parse("3 1 DEP");
    /// assert_eq!(code.class, Some(3));
    /// assert_eq!(code.variant, Some(1));
    /// assert!(code.flags.deponent);
    /// ```
    pub fn parse(code: &str) -> Self {
        let mut parsed = ParadigmCode::default();

        for token in code.split_whitespace() {
            if let Ok(number) = token.parse::<u8>() {
                if parsed.class.is_none() {
                    parsed.class = Some(number);
                } else if parsed.variant.is_none() {
                    parsed.variant = Some(number);
                }
                continue;
            }

            match token.to_uppercase().as_str() {
                "DEP" => parsed.flags.deponent = true,
                "SEMIDEP" => parsed.flags.semi_deponent = true,
                "PERFDEF" => parsed.flags.perfect_only = true,
                "TRANS" => parsed.flags.transitive = true,
                "INTRANS" => parsed.flags.intransitive = true,
                "IMPERS" => parsed.flags.impersonal = true,
                "TO_BEING" => parsed.flags.copulative = true,
                _ => {}
            }
        }

        parsed
    }

    /// Class and variant as a `"c v"` pair string, e.g. `"9 9"`
    pub fn class_pair(&self) -> String {
        match (self.class, self.variant) {
            (Some(class), Some(variant)) => format!("{} {}", class, variant),
            (Some(class), None) => class.to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class_only() {
        let code = ParadigmCode::parse("1");
        assert_eq!(code.class, Some(1));
        assert_eq!(code.variant, None);
        assert_eq!(code.flags, CodeFlags::default());
    }

    #[test]
    fn test_parse_flags() {
        let code = ParadigmCode::parse("5 1 TO_BEING INTRANS");
        assert_eq!(code.class_pair(), "5 1");
        assert!(code.flags.copulative);
        assert!(code.flags.intransitive);
        assert!(!code.flags.deponent);
    }

    #[test]
    fn test_parse_ignores_unknown_tokens() {
        let code = ParadigmCode::parse("1 1 POS QQQ");
        assert_eq!(code.class, Some(1));
        assert_eq!(code.flags, CodeFlags::default());
    }

    #[test]
    fn test_parse_empty() {
        let code = ParadigmCode::parse("");
        assert_eq!(code.class, None);
        assert_eq!(code.class_pair(), "");
    }
}
