/// Construct a [`Value`](crate::Value) from a JSON literal.
///
/// ```
/// use ujson::json;
///
/// let value = json!({
///     "code": 200,
///     "success": true,
///     "payload": {
///         "features": ["strict", "shared"]
///     }
/// });
/// assert_eq!(value.get("code"), Some(&json!(200)));
/// ```
///
/// Interpolated expressions go through the [`ToJson`](crate::ToJson) hook,
/// so variables, fields, and containers of convertible types work directly:
///
/// ```
/// use ujson::json;
///
/// let code = 200;
/// let features = vec!["strict", "shared"];
///
/// let value = json!({
///     "code": code,
///     "success": code == 200,
///     "features": features,
/// });
/// # let _ = value;
/// ```
///
/// Trailing commas are allowed inside both arrays and objects. Object
/// members are kept in source order, duplicate keys included.
#[macro_export(local_inner_macros)]
macro_rules! json {
    // Hide distracting implementation details from the generated rustdoc.
    ($($json:tt)+) => {
        json_internal!($($json)+)
    };
}

#[macro_export(local_inner_macros)]
#[doc(hidden)]
macro_rules! json_internal {
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
        $crate::Value::array(Vec::new())
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Value::array({
            let mut array = Vec::new();
            json_within_array!(array () $($tt)+);
            array
        })
    };

    ({}) => {
        $crate::Value::object(Vec::new())
    };

    ({ $($tt:tt)+ }) => {
        $crate::Value::object({
            let mut object = Vec::new();
            json_within_object!(object () () $($tt)+);
            object
        })
    };

    // Any ToJson type: numbers, strings, variables, containers etc.
    ($other:expr) => {
        $crate::ToJson::to_json(&$other)
    };
}

// TT muncher for parsing the inside of an array [...]. Each element is pushed
// into the given array variable.
//
// Must be invoked as: json_within_array!(var () $($tt)*)
#[macro_export(local_inner_macros)]
#[doc(hidden)]
macro_rules! json_within_array {
    // Done.
    ($array:ident ()) => {};

    // Push a single element. The element must be more than zero tokens.
    ($array:ident ($($elem:tt)+)) => {
        $array.push(json!($($elem)+));
    };

    // Misplaced comma. Trigger a reasonable error message by failing to match
    // the comma in the recursive call.
    ($array:ident () , $($rest:tt)*) => {
        json_within_array!($array ,);
    };

    // Found a comma separator. Push whatever we have so far and move on to
    // remaining elements. Trailing comma is allowed.
    ($array:ident ($($elem:tt)+) , $($rest:tt)*) => {
        json_within_array!($array ($($elem)+));
        json_within_array!($array () $($rest)*);
    };

    // Munch a token into the current element.
    ($array:ident ($($elem:tt)*) $tt:tt $($rest:tt)*) => {
        json_within_array!($array ($($elem)* $tt) $($rest)*);
    };
}

// TT muncher for parsing the inside of an object {...}. Each member is pushed
// onto the given Vec<(String, Value)>; duplicate keys are kept.
//
// Must be invoked as: json_within_object!(var () () $($tt)*)
#[macro_export(local_inner_macros)]
#[doc(hidden)]
macro_rules! json_within_object {
    // Done.
    ($object:ident () ()) => {};

    // Push a single member. The key and value must both be more than zero
    // tokens. The key must be Into-convertible to String.
    ($object:ident ($($key:tt)+) : ($($value:tt)+)) => {
        $object.push((($($key)+).into(), json!($($value)+)));
    };

    // Misplaced colon. Trigger a reasonable error message by failing to match
    // the colon in the recursive call.
    ($object:ident () () : $($rest:tt)*) => {
        json_within_object!($object :);
    };

    // Found a comma inside a key. Trigger a reasonable error message by
    // failing to match the comma in the recursive call.
    ($object:ident ($($key:tt)*) () , $($rest:tt)*) => {
        json_within_object!($object ,);
    };

    // Found a colon after a key. Move on to the value.
    ($object:ident ($($key:tt)+) () : $($rest:tt)*) => {
        json_within_object!($object ($($key)+) : () $($rest)*);
    };

    // Misplaced comma. Trigger a reasonable error message by failing to match
    // the comma in the recursive call.
    ($object:ident ($($key:tt)+) : () , $($rest:tt)*) => {
        json_within_object!($object ,);
    };

    // Found a comma after a value. Push whatever we have so far and move on
    // to remaining members. Trailing comma is allowed.
    ($object:ident ($($key:tt)+) : ($($value:tt)+) , $($rest:tt)*) => {
        json_within_object!($object ($($key)+) : ($($value)+));
        json_within_object!($object () () $($rest)*);
    };

    // Munch a token into the current key.
    ($object:ident ($($key:tt)*) () $tt:tt $($rest:tt)*) => {
        json_within_object!($object ($($key)* $tt) () $($rest)*)
    };

    // Munch a token into the current value.
    ($object:ident ($($key:tt)+) : ($($value:tt)*) $tt:tt $($rest:tt)*) => {
        json_within_object!($object ($($key)+) : ($($value)* $tt) $($rest)*)
    };
}
