//! Rendering of call arguments for log lines.
//!
//! Numbers and booleans render with their `Display` form. Strings render as
//! JSON string literals, and sequences render as `[e1,e2,...]`, so
//! `vec!["a", "b"]` becomes `["a","b"]` while `vec![1, 2]` becomes `[1,2]`.
//!
//! Floats keep their Rust `Display` form rather than JSON's: `1e21` renders
//! as `1000000000000000000000`, and non-finite values render as `NaN`, `inf`
//! and `-inf` instead of `null`. Only `serde_json::Value` arguments follow
//! JSON number rules.

/// A single value that can appear in a logged argument list.
///
/// # Examples
///
/// ```rust
/// use combinars::logging::LogValue;
///
/// let mut output = String::new();
/// vec!["expected", "test"].write_log_value(&mut output);
/// assert_eq!(output, r#"["expected","test"]"#);
/// ```
pub trait LogValue {
    /// Appends the rendering of `self` to `output`.
    fn write_log_value(&self, output: &mut String);

    /// Returns the rendering of `self` as a new string.
    fn to_log_value(&self) -> String {
        let mut output = String::new();
        self.write_log_value(&mut output);
        output
    }
}

/// The full argument list of one call.
///
/// A single value is a one-element argument list. A tuple is a multi-element
/// argument list whose elements are joined with `,`, and `()` is the empty
/// argument list.
///
/// # Examples
///
/// ```rust
/// use combinars::logging::LogArguments;
///
/// assert_eq!(std::f64::consts::PI.format_arguments(), "3.141592653589793");
/// assert_eq!((vec!["a", "b"], 0).format_arguments(), r#"["a","b"],0"#);
/// assert_eq!(().format_arguments(), "");
/// ```
pub trait LogArguments {
    /// Renders the argument list without surrounding parentheses.
    fn format_arguments(&self) -> String;
}

macro_rules! impl_display_value {
    ($($value_type:ty),* $(,)?) => {
        $(
            impl LogValue for $value_type {
                fn write_log_value(&self, output: &mut String) {
                    output.push_str(&self.to_string());
                }
            }

            impl LogArguments for $value_type {
                fn format_arguments(&self) -> String {
                    self.to_log_value()
                }
            }
        )*
    };
}

impl_display_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

impl LogValue for str {
    fn write_log_value(&self, output: &mut String) {
        output.push_str(&serde_json::Value::from(self).to_string());
    }
}

impl LogValue for String {
    fn write_log_value(&self, output: &mut String) {
        self.as_str().write_log_value(output);
    }
}

impl LogArguments for String {
    fn format_arguments(&self) -> String {
        self.to_log_value()
    }
}

impl LogValue for char {
    fn write_log_value(&self, output: &mut String) {
        self.encode_utf8(&mut [0; 4]).write_log_value(output);
    }
}

impl LogArguments for char {
    fn format_arguments(&self) -> String {
        self.to_log_value()
    }
}

impl LogValue for serde_json::Value {
    fn write_log_value(&self, output: &mut String) {
        output.push_str(&self.to_string());
    }
}

impl LogArguments for serde_json::Value {
    fn format_arguments(&self) -> String {
        self.to_log_value()
    }
}

impl<T: LogValue> LogValue for [T] {
    fn write_log_value(&self, output: &mut String) {
        output.push('[');
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                output.push(',');
            }
            element.write_log_value(output);
        }
        output.push(']');
    }
}

impl<T: LogValue> LogValue for Vec<T> {
    fn write_log_value(&self, output: &mut String) {
        self.as_slice().write_log_value(output);
    }
}

impl<T: LogValue> LogArguments for Vec<T> {
    fn format_arguments(&self) -> String {
        self.to_log_value()
    }
}

impl<T: LogValue, const N: usize> LogValue for [T; N] {
    fn write_log_value(&self, output: &mut String) {
        self.as_slice().write_log_value(output);
    }
}

impl<T: LogValue, const N: usize> LogArguments for [T; N] {
    fn format_arguments(&self) -> String {
        self.to_log_value()
    }
}

impl<T: LogValue> LogValue for Option<T> {
    fn write_log_value(&self, output: &mut String) {
        match self {
            Some(value) => value.write_log_value(output),
            None => output.push_str("null"),
        }
    }
}

impl<T: LogValue> LogArguments for Option<T> {
    fn format_arguments(&self) -> String {
        self.to_log_value()
    }
}

impl<T: LogValue + ?Sized> LogValue for &T {
    fn write_log_value(&self, output: &mut String) {
        (**self).write_log_value(output);
    }
}

impl<T: LogValue + ?Sized> LogArguments for &T {
    fn format_arguments(&self) -> String {
        self.to_log_value()
    }
}

impl LogArguments for () {
    fn format_arguments(&self) -> String {
        String::new()
    }
}

macro_rules! impl_tuple_arguments {
    ($($type_parameter:ident $binding:ident),+) => {
        impl<$($type_parameter: LogValue),+> LogArguments for ($($type_parameter,)+) {
            fn format_arguments(&self) -> String {
                let ($($binding,)+) = self;
                [$($binding.to_log_value()),+].join(",")
            }
        }
    };
}

impl_tuple_arguments!(A first);
impl_tuple_arguments!(A first, B second);
impl_tuple_arguments!(A first, B second, C third);
impl_tuple_arguments!(A first, B second, C third, D fourth);
impl_tuple_arguments!(A first, B second, C third, D fourth, E fifth);
impl_tuple_arguments!(A first, B second, C third, D fourth, E fifth, F sixth);
