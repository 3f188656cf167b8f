use std::collections::HashMap;

pub type ParamValues = HashMap<String, ParamValue>;

/// A value bound to one parameter during expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    List(Vec<String>),
}

impl ParamValue {
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        ParamValue::List(items.into_iter().map(|item| item.to_string()).collect())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Single(value.clone())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Single(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T: ToString> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        ParamValue::list(items)
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for ParamValue {
    fn from(items: [T; N]) -> Self {
        ParamValue::list(items)
    }
}

impl<T: ToString> From<&[T]> for ParamValue {
    fn from(items: &[T]) -> Self {
        ParamValue::List(items.iter().map(|item| item.to_string()).collect())
    }
}

/// Builds [`ParamValues`] from `name => value` pairs.
///
/// ```
/// use path_template_rs::{ParamValue, params};
///
/// let values = params! { "id" => 42, "tags" => ["a", "b"] };
/// assert_eq!(values["id"], ParamValue::Single("42".to_string()));
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::ParamValues::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut values = $crate::ParamValues::new();
        $(
            values.insert(::std::string::String::from($name), $crate::ParamValue::from($value));
        )+
        values
    }};
}
