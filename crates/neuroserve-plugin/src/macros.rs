//! Convenience macros for plugin development.

/// Builds a task [`Payload`](crate::handler::Payload) from `key: value`
/// pairs. Values accept anything `serde_json::json!` does.
///
/// # Example
/// ```rust,ignore
/// let payload = payload! {
///     "text": "أهلاً",
///     "strip_diacritics": false,
/// };
/// ```
#[macro_export]
macro_rules! payload {
    () => {
        $crate::handler::Payload::new()
    };
    ($($key:literal : $value:tt),+ $(,)?) => {{
        let mut map = $crate::handler::Payload::new();
        $(
            map.insert(::std::string::String::from($key), $crate::__private::json!($value));
        )+
        map
    }};
}
