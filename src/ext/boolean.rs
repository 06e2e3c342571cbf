//! Conversions from `bool` to text and numeric representations

use crate::storage::config::BoolLabels;

pub trait BoolExt {
    /// Pick one of two labels
    ///
    /// # Examples
    /// ```
    /// use extkit::ext::boolean::BoolExt;
    /// assert_eq!(true.to_str_with("enabled", "disabled"), "enabled");
    /// assert_eq!(false.to_str_with("enabled", "disabled"), "disabled");
    /// ```
    fn to_str_with<'a>(self, when_true: &'a str, when_false: &'a str) -> &'a str;

    /// Pick the label configured in [`BoolLabels`]
    fn to_label(self, labels: &BoolLabels) -> &str;

    fn to_yes_no(self) -> &'static str;

    /// `1` for true, `0` for false
    fn to_byte(self) -> u8;

    /// `1` for true, `0` for false
    fn to_i32(self) -> i32;
}

impl BoolExt for bool {
    #[inline]
    fn to_str_with<'a>(self, when_true: &'a str, when_false: &'a str) -> &'a str {
        if self { when_true } else { when_false }
    }

    #[inline]
    fn to_label(self, labels: &BoolLabels) -> &str {
        labels.label(self)
    }

    #[inline]
    fn to_yes_no(self) -> &'static str {
        self.to_str_with("Yes", "No")
    }

    #[inline]
    fn to_byte(self) -> u8 {
        u8::from(self)
    }

    #[inline]
    fn to_i32(self) -> i32 {
        i32::from(self)
    }
}
