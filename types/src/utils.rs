//! Utilities functions which do not linked to domain

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Strip the given character from the end
pub(crate) trait StripChar {
    /// Strip the character from the end
    fn strip_suffix_char(self, ch: char) -> Option<String>;
    /// Split into the last character and the rest of the string
    fn split_last(self) -> Option<(String, char)>;
}

impl StripChar for &str {
    fn strip_suffix_char(self, ch: char) -> Option<String> {
        self.strip_suffix(ch).map(str::to_string)
    }

    fn split_last(self) -> Option<(String, char)> {
        self.chars().last().and_then(|tail| {
            self.strip_suffix_char(tail)
                .map(|stripped| (stripped, tail))
        })
    }
}
