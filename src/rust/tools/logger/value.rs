use serde_json::Value;

use super::format::Paint;

/// A single loggable argument. Values are kept apart until the sink renders
/// them, so structured data reaches `table` intact.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Str(String),
    Json(Value),
    Painted(Paint, String),
}

impl LogValue {
    /// Plain string content, whether given as text or as a JSON string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LogValue::Str(s) => Some(s),
            LogValue::Json(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            LogValue::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Render to text. Strings are emitted raw, JSON in compact form.
    pub fn render(&self, ansi: bool) -> String {
        match self {
            LogValue::Str(s) => s.clone(),
            LogValue::Json(Value::String(s)) => s.clone(),
            LogValue::Json(value) => value.to_string(),
            LogValue::Painted(paint, text) => {
                if ansi {
                    paint.apply(text)
                } else {
                    text.clone()
                }
            }
        }
    }
}

impl From<&str> for LogValue {
    fn from(value: &str) -> Self {
        LogValue::Str(value.to_string())
    }
}

impl From<String> for LogValue {
    fn from(value: String) -> Self {
        LogValue::Str(value)
    }
}

impl From<&String> for LogValue {
    fn from(value: &String) -> Self {
        LogValue::Str(value.clone())
    }
}

impl From<Value> for LogValue {
    fn from(value: Value) -> Self {
        LogValue::Json(value)
    }
}

impl From<bool> for LogValue {
    fn from(value: bool) -> Self {
        LogValue::Json(Value::Bool(value))
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LogValue {
                fn from(value: $ty) -> Self {
                    LogValue::Json(Value::from(value))
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_from_float {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LogValue {
                fn from(value: $ty) -> Self {
                    // JSON has no NaN/Infinity
                    match serde_json::Number::from_f64(value as f64) {
                        Some(number) => LogValue::Json(Value::Number(number)),
                        None => LogValue::Str(value.to_string()),
                    }
                }
            }
        )*
    };
}

impl_from_float!(f32, f64);

/// Build a `Vec<LogValue>` from heterogeneous arguments.
///
/// ```
/// use egonlog::values;
/// let args = values!["loaded", 3, "items", serde_json::json!({"ok": true})];
/// assert_eq!(args.len(), 4);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::tools::logger::LogValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::tools::logger::LogValue::from($value)),+]
    };
}
