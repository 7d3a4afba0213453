//! Console arguments and the message join

use std::fmt::{self, Display, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Separator placed between arguments when a message is joined
pub const SEPARATOR: char = ' ';

/// A single argument passed to a console operation.
///
/// Console calls take any number of loosely-typed values. `Arg` keeps the
/// shape a script would see so that the joined text matches what the script
/// author expects:
///
/// - `Undefined` and `Null` print as `undefined` and `null`
/// - booleans print as `true` / `false`
/// - integers print in decimal
/// - floats print `NaN`, `Infinity` and `-Infinity` for non-finite values,
///   drop the fraction when integral (below 1e21, with `-0` as `0`), and
///   otherwise use the shortest round-trip decimal form
/// - strings print verbatim
/// - JSON arrays and objects print as compact JSON rather than the
///   `[object Object]` placeholder a script engine would produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Arg {
    /// A missing value
    Undefined,
    /// An explicit null
    Null,
    /// A boolean
    Bool(bool),
    /// An integer
    Int(i64),
    /// A floating point number
    Float(f64),
    /// A string, printed as-is
    String(String),
    /// Structured data
    Json(Value),
}

impl Arg {
    /// Captures the display text of any value.
    pub fn display(value: &impl Display) -> Self {
        Self::String(value.to_string())
    }
}

impl Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(n) => write_float(f, *n),
            Self::String(s) => f.write_str(s),
            Self::Json(value) => write_json(f, value),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        write!(f, "{n:.0}")
    } else {
        write!(f, "{n}")
    }
}

fn write_json(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                write!(f, "{i}")
            } else if let Some(u) = n.as_u64() {
                write!(f, "{u}")
            } else {
                write_float(f, n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => f.write_str(s),
        Value::Array(_) | Value::Object(_) => write!(f, "{value}"),
    }
}

/// Joins arguments into a single message, separated by single spaces.
///
/// No arguments yield an empty string.
#[must_use]
pub fn join(args: &[Arg]) -> String {
    let mut message = String::new();

    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            message.push(SEPARATOR);
        }
        // Writing into a String cannot fail
        let _ = write!(message, "{arg}");
    }

    message
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Json(Value::Number(n)), Self::Int),
            Value::String(s) => Self::String(s),
            other => Self::Json(other),
        }
    }
}

impl From<Arg> for Value {
    fn from(arg: Arg) -> Self {
        match arg {
            Arg::Undefined | Arg::Null => Self::Null,
            Arg::Bool(b) => Self::Bool(b),
            Arg::Int(i) => Self::from(i),
            // Non-finite floats have no JSON form and become null
            Arg::Float(n) => Self::from(n),
            Arg::String(s) => Self::String(s),
            Arg::Json(value) => value,
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<f32> for Arg {
    fn from(n: f32) -> Self {
        Self::Float(f64::from(n))
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

macro_rules! impl_from_small_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(i: $ty) -> Self {
                    Self::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_small_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                #[allow(clippy::cast_precision_loss)]
                fn from(i: $ty) -> Self {
                    i64::try_from(i).map_or(Self::Float(i as f64), Self::Int)
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, isize);

/// Builds a `Vec<Arg>` from heterogeneous values.
///
/// ```
/// use console_shim::{console_args, join};
///
/// let args = console_args![1, "x", true];
/// assert_eq!(join(&args), "1 x true");
/// ```
#[macro_export]
macro_rules! console_args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}
