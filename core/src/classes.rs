//! Class-name merging
//!
//! `merge_classes` joins style tokens in argument order, dropping absent and
//! blank ones. Nothing is deduplicated: when two tokens conflict, the later
//! one wins in the stylesheet, so callers pass their overrides last.

/// Anything that can contribute a (possibly absent) class token
pub trait ClassToken {
    fn class_token(&self) -> Option<&str>;
}

impl ClassToken for str {
    fn class_token(&self) -> Option<&str> {
        Some(self)
    }
}

impl ClassToken for String {
    fn class_token(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: ClassToken + ?Sized> ClassToken for &T {
    fn class_token(&self) -> Option<&str> {
        (**self).class_token()
    }
}

impl<T: ClassToken> ClassToken for Option<T> {
    fn class_token(&self) -> Option<&str> {
        self.as_ref().and_then(ClassToken::class_token)
    }
}

/// Join class tokens with single spaces, skipping absent and blank tokens
pub fn merge_classes<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: ClassToken,
{
    let mut merged = String::new();
    for token in tokens {
        let Some(token) = token.class_token().map(str::trim) else {
            continue;
        };
        if token.is_empty() {
            continue;
        }
        if !merged.is_empty() {
            merged.push(' ');
        }
        merged.push_str(token);
    }
    merged
}

/// Merge heterogeneous class tokens: `classes!("base", resolved, caller_class)`
#[macro_export]
macro_rules! classes {
    ($($token:expr),* $(,)?) => {
        $crate::classes::merge_classes([
            $(&$token as &dyn $crate::classes::ClassToken),*
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_preserves_order() {
        assert_eq!(merge_classes(["a", "b", "c"]), "a b c");
        assert_eq!(merge_classes(["c", "b", "a"]), "c b a");
    }

    #[test]
    fn test_merge_skips_empty_and_absent() {
        assert_eq!(merge_classes([Some("a"), None, Some(""), Some("b")]), "a b");
        assert_eq!(merge_classes(["", "  ", ""]), "");
        assert_eq!(merge_classes(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_merge_does_not_dedupe() {
        assert_eq!(merge_classes(["p-2", "p-4", "p-2"]), "p-2 p-4 p-2");
    }

    #[test]
    fn test_classes_macro_mixed_tokens() {
        let owned = String::from("text-accent");
        let absent: Option<&str> = None;
        let extra = Some(String::from("extra-class"));

        let merged = classes!("base", owned, absent, extra);
        assert_eq!(merged, "base text-accent extra-class");
        assert!(merged.ends_with("extra-class"));
    }
}
