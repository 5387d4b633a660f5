//! Macros for ergonomic rule specification.

/// Build a [`RuleSpec`](crate::parser::RuleSpec) from `field => rules` pairs.
///
/// Rules may be a compact string or a bracketed list whose items are rule
/// strings or rule objects.
///
/// # Example
///
/// ```
/// use vetting::rules;
///
/// let spec = rules! {
///     "username" => "required|email|max:100",
///     "password" => ["required", "min:6", "max:20"],
/// };
///
/// assert_eq!(spec.len(), 2);
/// ```
#[macro_export]
macro_rules! rules {
    (@field $spec:expr, $field:expr, [$($token:expr),* $(,)?]) => {
        $spec.field($field, ::std::vec![$($crate::parser::RuleToken::from($token)),*])
    };
    (@field $spec:expr, $field:expr, $rules:expr) => {
        $spec.field($field, $rules)
    };
    ($($field:expr => $rules:tt),* $(,)?) => {{
        let spec = $crate::parser::RuleSpec::new();
        $(
            let spec = $crate::rules!(@field spec, $field, $rules);
        )*
        spec
    }};
}
