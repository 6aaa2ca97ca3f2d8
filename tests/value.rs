use std::sync::Arc;

use ujson::{at, find, json, Number, ToJson, Value, ValueType};

#[test]
fn null() {
    let null0 = Value::default();
    assert!(null0.is_null());
    assert_eq!(null0.value_type(), ValueType::Null);

    let mut null1 = Value::from(1);
    null1 = Value::Null;
    assert_eq!(null1.value_type(), ValueType::Null);

    assert_eq!(ujson::from_str("null").unwrap(), Value::Null);
}

#[test]
fn boolean() {
    let mut bool0 = Value::from(true);
    assert!(bool0.is_boolean());
    assert_eq!(bool0.value_type(), ValueType::Boolean);
    assert_eq!(bool0.bool_cast().unwrap(), true);
    bool0 = Value::from(false);
    assert_eq!(bool0.bool_cast().unwrap(), false);

    let true_value = ujson::from_str("true").unwrap();
    assert_eq!(true_value.value_type(), ValueType::Boolean);
    assert_eq!(true_value.bool_cast().unwrap(), true);

    let mut false_value = ujson::from_str("false").unwrap();
    assert_eq!(false_value.take_bool().unwrap(), false);
    assert!(false_value.is_null());
}

#[test]
fn number_casts() {
    let int0 = Value::from(i32::MIN);
    assert!(int0.is_number());
    assert_eq!(int0.value_type(), ValueType::Number);
    assert_eq!(int0.int32_cast().unwrap(), i32::MIN);

    let mut int1 = Value::from(i32::MAX);
    assert_eq!(int1.take_int32().unwrap(), i32::MAX);
    assert!(int1.is_null());

    let mut int2 = Value::try_from(1e10).unwrap();
    assert!(int2.int32_cast().unwrap_err().is_cast());
    int2 = Value::try_from(-1e10).unwrap();
    assert!(int2.int32_cast().unwrap_err().is_cast());
    assert!(Value::try_from(1.5).unwrap().int32_cast().unwrap_err().is_cast());

    let uint0 = Value::from(u32::MIN);
    assert_eq!(uint0.uint32_cast().unwrap(), u32::MIN);
    let mut uint1 = Value::from(u32::MAX);
    assert_eq!(uint1.take_uint32().unwrap(), u32::MAX);
    assert!(uint1.is_null());
    assert!(Value::try_from(1e10).unwrap().uint32_cast().unwrap_err().is_cast());
    assert!(Value::try_from(-1e0).unwrap().uint32_cast().unwrap_err().is_cast());

    // A failing consuming cast must leave the source untouched.
    let mut big = Value::try_from(1e10).unwrap();
    assert!(big.take_int32().is_err());
    assert_eq!(big.double_cast().unwrap(), 1e10);
}

#[test]
fn number_construction() {
    assert!(Value::number(f64::INFINITY).unwrap_err().is_number());
    assert!(Value::number(f64::NEG_INFINITY).unwrap_err().is_number());
    assert!(Value::number(f64::NAN).unwrap_err().is_number());
    assert!(Value::try_from(f64::INFINITY).is_err());
    assert!(Number::from_f64(f64::NAN).is_err());

    let mut pi = Value::try_from(core::f64::consts::PI).unwrap();
    assert_eq!(pi.take_double().unwrap(), core::f64::consts::PI);
    assert!(pi.is_null());
}

#[test]
fn string_casts() {
    assert!(Value::Null.string_cast().unwrap_err().is_cast());
    assert!(Value::try_from(core::f64::consts::PI)
        .unwrap()
        .string_cast()
        .unwrap_err()
        .is_cast());

    let hello = "Hello, world!";
    let hello_value = Value::from(hello);
    assert!(hello_value.is_string());
    assert_eq!(hello_value.value_type(), ValueType::String);
    assert_eq!(hello_value.string_cast().unwrap(), hello.as_bytes());
    assert_eq!(hello_value.as_str(), Some(hello));

    assert_eq!(Value::from("").string_cast().unwrap().len(), 0);

    // Construction validates UTF-8 unless explicitly disabled.
    assert!(Value::string("test").is_ok());
    assert!(Value::string(b"\xFF".to_vec()).unwrap_err().is_string());
    assert!(Value::string_unchecked(b"\xFF".to_vec()).is_string());

    // Embedded zeros survive.
    let zeros = b"\0foo\0bar\0".to_vec();
    assert_eq!(
        Value::string(zeros.clone()).unwrap().string_cast().unwrap(),
        &zeros[..]
    );
}

#[test]
fn string_move_out() {
    let long = "x".repeat(64);
    let mut value = Value::from(long.clone());

    // Unique owner: the payload moves out without copying.
    let payload_ptr = value.string_cast().unwrap().as_ptr();
    let bytes = value.take_string().unwrap();
    assert!(value.is_null());
    assert_eq!(bytes.as_ptr(), payload_ptr);
    assert_eq!(bytes, long.as_bytes());

    // Shared owner: moving out degrades to a copy and the peer is intact.
    let mut value = Value::from(long.clone());
    let peer = value.clone();
    let bytes = value.take_string().unwrap();
    assert!(value.is_null());
    assert_eq!(bytes, long.as_bytes());
    assert_eq!(peer.string_cast().unwrap(), long.as_bytes());
}

#[test]
fn array_values() {
    let mut a0: Vec<Value> = Vec::new();
    a0.push(json!({"a": "b"}));
    a0.push(Value::default());
    a0.push(Value::from(true));
    a0.push(Value::from(false));
    a0.push(Value::from(1023));
    a0.push(Value::try_from(core::f64::consts::PI).unwrap());
    a0.push(Value::from("Short"));
    a0.push(Value::from("Looooooooooooooooooooooooooooooooong"));
    a0.push(json!({"foo1": "bar1", "foo2": "bar2"}));
    a0.push(json!([1.0, 2.0, 3.0]));

    let array0 = Value::array(a0.clone());
    assert!(array0.is_array());
    assert_eq!(array0.value_type(), ValueType::Array);
    assert_eq!(array0.array_cast().unwrap(), &a0);

    // Move out of a unique owner.
    let data_ptr = a0.as_ptr();
    let mut array1 = Value::array(a0);
    assert_eq!(array1.array_cast().unwrap().as_ptr(), data_ptr);
    let a0 = array1.take_array().unwrap();
    assert!(array1.is_null());
    assert_eq!(a0.as_ptr(), data_ptr);

    // Shared payloads clone on move-out.
    let mut array1 = Value::array(a0);
    let array2 = array1.clone();
    assert_eq!(array1, array2);
    let moved = array1.take_array().unwrap();
    assert!(array1.is_null());
    assert_ne!(moved.as_ptr(), array2.array_cast().unwrap().as_ptr());
    assert_eq!(Value::array(moved), array2);
}

#[test]
fn object_values() {
    let mut o0: Vec<(String, Value)> = Vec::new();
    o0.push(("null".to_owned(), Value::Null));
    o0.push(("boolean".to_owned(), Value::from(true)));
    o0.push(("number".to_owned(), Value::try_from(core::f64::consts::PI).unwrap()));
    o0.push(("array".to_owned(), json!(["a", "b"])));
    o0.push(("object".to_owned(), json!({"a": "b"})));

    let object0 = Value::object(o0.clone());
    assert!(object0.is_object());
    assert_eq!(object0.value_type(), ValueType::Object);
    assert_eq!(object0.object_cast().unwrap(), &o0);

    // Lookups find the first member with the key.
    assert_eq!(find(&o0, "boolean"), Some(&Value::Bool(true)));
    assert_eq!(at(&o0, "boolean"), Some(&Value::Bool(true)));
    assert_eq!(find(&o0, "missing"), None);
    assert_eq!(object0.get("null"), Some(&Value::Null));
    assert_eq!(object0.get("missing"), None);
    assert_eq!(Value::Null.get("null"), None);

    // Move out of a unique owner, then shared clones.
    let data_ptr = o0.as_ptr();
    let mut object1 = Value::object(o0);
    let o0 = object1.take_object().unwrap();
    assert!(object1.is_null());
    assert_eq!(o0.as_ptr(), data_ptr);

    let mut object1 = Value::object(o0);
    let object2 = object1.clone();
    assert_eq!(object1, object2);
    let moved = object1.take_object().unwrap();
    assert_ne!(moved.as_ptr(), object2.object_cast().unwrap().as_ptr());
    assert_eq!(Value::object(moved), object2);
}

#[test]
fn sharing_is_invisible() {
    let mut v = json!([1, 2, 3]);
    let w = v.clone();
    if let (Value::Array(a), Value::Array(b)) = (&v, &w) {
        assert!(Arc::ptr_eq(a, b));
    } else {
        panic!("expected arrays");
    }
    v = json!({"replaced": true});
    assert_eq!(w, json!([1, 2, 3]));
    assert_ne!(v, w);
}

#[test]
fn equality() {
    // Different tags are never equal.
    assert_ne!(Value::Null, Value::from(false));
    assert_ne!(Value::from(0), Value::from(""));

    // Cross-type comparisons.
    let a = Value::from("foo");
    let b = Value::from(42);
    assert_eq!(a, "foo");
    assert_ne!(b, "foo");
    assert_eq!(b, 42);
    assert_eq!(b, 42.0);
    assert_eq!(42, b);
    assert_eq!("foo".to_owned(), a);
    assert_eq!(Value::from(true), true);

    // Objects compare as multisets sorted by key.
    let ab = json!({"a": 1, "b": 2});
    let ba = json!({"b": 2, "a": 1});
    assert_eq!(ab, ba);
    assert_ne!(ab, json!({"a": 1, "b": 3}));
    assert_ne!(ab, json!({"a": 1}));

    // Duplicate keys are significant.
    let dup1 = json!({"a": 1, "a": 2});
    let dup2 = json!({"a": 2, "a": 1});
    assert_ne!(dup1, dup2);
    assert_eq!(dup1, dup1.clone());
}

#[test]
fn swap() {
    let mut a = Value::from(42);
    let mut b = Value::from("foo");
    a.swap(&mut b);
    assert_eq!(a, "foo");
    assert_eq!(b, 42);
}

#[test]
fn conversion_hook() {
    struct Foo {
        bar: String,
        baz: f64,
    }

    impl ToJson for Foo {
        fn to_json(&self) -> Value {
            json!({"bar": self.bar.as_str(), "baz": self.baz})
        }
    }

    let foos = vec![
        Foo { bar: "LN2".to_owned(), baz: core::f64::consts::LN_2 },
        Foo { bar: "PI".to_owned(), baz: core::f64::consts::PI },
    ];
    assert_eq!(
        foos.to_json(),
        json!([
            {"bar": "LN2", "baz": core::f64::consts::LN_2},
            {"bar": "PI", "baz": core::f64::consts::PI},
        ])
    );

    let mut by_name = std::collections::BTreeMap::new();
    by_name.insert("one".to_owned(), 1.0);
    by_name.insert("two".to_owned(), 2.0);
    assert_eq!(by_name.to_json(), json!({"one": 1.0, "two": 2.0}));

    assert_eq!(Some(5).to_json(), Value::from(5));
    assert_eq!(None::<i32>.to_json(), Value::Null);
}

#[test]
#[should_panic(expected = "finite")]
fn conversion_hook_rejects_non_finite() {
    let _ = f64::INFINITY.to_json();
}

#[test]
fn collect_values() {
    let array: Value = (1..=3).map(Value::from).collect();
    assert_eq!(array, json!([1, 2, 3]));

    let object: Value = vec![("a", Value::from(1)), ("b", Value::from(2))]
        .into_iter()
        .collect();
    assert_eq!(object, json!({"a": 1, "b": 2}));
}

#[test]
fn values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();

    // Two owners of the same payload may be dropped on different threads.
    let shared = json!(["a", "looooooooooooooooooooooong", {"k": 1}]);
    let peer = shared.clone();
    let handle = std::thread::spawn(move || peer.array_cast().unwrap().len());
    assert_eq!(handle.join().unwrap(), 3);
    assert_eq!(shared.array_cast().unwrap().len(), 3);
}

#[test]
fn display_renders_json() {
    let value = json!({"a": [1, true]});
    assert_eq!(value.to_string(), r#"{"a":[1,true]}"#);
    assert_eq!(format!("{value:#}"), "{\n    \"a\": [\n        1,\n        true\n    ]\n}");
    assert_eq!(Number::from_f64(1024.0).unwrap().to_string(), "1024");
}
