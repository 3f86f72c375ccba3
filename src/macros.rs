/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys must be string literals. Any other expression is converted
/// through [`to_value`](crate::to_value) and becomes `Value::Null` if it
/// cannot be represented.
///
/// # Examples
///
/// ```rust
/// use serde_xton::{xton, Value};
///
/// let value = xton!({
///     "name": "Alice",
///     "tags": ["a", "b"],
///     "manager": null
/// });
/// assert!(value.is_object());
/// assert_eq!(xton!(true), Value::Bool(true));
/// ```
#[macro_export]
macro_rules! xton {
    // Array elements, one token tree at a time so `-1` stays one element
    (@array [$($elems:expr),*]) => {
        vec![$($elems),*]
    };

    (@array [$($elems:expr),*] - $num:tt $(, $($rest:tt)*)?) => {
        $crate::xton!(@array [$($elems,)* $crate::xton!(-$num)] $($($rest)*)?)
    };

    (@array [$($elems:expr),*] $next:tt $(, $($rest:tt)*)?) => {
        $crate::xton!(@array [$($elems,)* $crate::xton!($next)] $($($rest)*)?)
    };

    // Object entries, inserted into `$object` in order
    (@object $object:ident) => {};

    (@object $object:ident $key:literal : - $num:tt $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::xton!(-$num));
        $crate::xton!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:literal : $value:tt $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::xton!($value));
        $crate::xton!(@object $object $($($rest)*)?);
    };

    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Value::Array($crate::xton!(@array [] $($tt)+))
    };

    ({}) => {
        $crate::Value::Object($crate::XtonMap::new())
    };

    ({ $($tt:tt)+ }) => {{
        let mut object = $crate::XtonMap::new();
        $crate::xton!(@object object $($tt)+);
        $crate::Value::Object(object)
    }};

    // Numbers, strings and any other serializable expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
