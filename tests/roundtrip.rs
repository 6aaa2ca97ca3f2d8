use ujson::{json, Encoding, Value, WriteOptions};

const ENCODINGS: [Encoding; 2] = [Encoding::Ascii, Encoding::Utf8];

fn options() -> Vec<WriteOptions> {
    let mut all = Vec::new();
    for encoding in ENCODINGS {
        for indent_amount in [0, 2, 4] {
            all.push(WriteOptions {
                indent_amount,
                encoding,
            });
        }
    }
    all
}

fn sample_document() -> Value {
    json!({
        "null": null,
        "bools": [true, false],
        "numbers": [0, -0.0, 1023, -4321, 3.141592653589793, 1e300, 5e-324, 0.25],
        "strings": ["", "plain", "esc \" \\ / \u{8}\u{c}\n\r\t", "Sk\u{e5}l! \u{1f37b}", "\u{feff}\u{233b4}"],
        "nested": {"empty array": [], "empty object": {}, "deep": [[[["x"]]]]},
        "dup": {"k": 1, "k": 2},
    })
}

#[test]
fn parse_of_to_string_is_identity() {
    let value = sample_document();
    for opts in options() {
        let text = ujson::to_string_with(&value, &opts).unwrap();
        let reparsed = ujson::from_str(&text).unwrap();
        assert_eq!(reparsed, value, "{opts:?}");
    }
}

#[test]
fn serialization_is_idempotent() {
    let value = sample_document();
    for opts in options() {
        let text = ujson::to_string_with(&value, &opts).unwrap();
        let reparsed = ujson::from_str(&text).unwrap();
        assert_eq!(
            ujson::to_string(&reparsed).unwrap(),
            ujson::to_string(&value).unwrap(),
            "{opts:?}"
        );
    }
}

/// Every Unicode scalar value survives a trip through both encodings, both
/// as raw UTF-8 content and as parsed output.
#[test]
fn all_code_points_round_trip() {
    const CHUNK: usize = 4096;
    let mut block = String::new();
    let mut start = 0u32;
    while start <= 0x10FFFF {
        block.clear();
        let end = (start + CHUNK as u32).min(0x110000);
        for cp in start..end {
            if let Some(ch) = char::from_u32(cp) {
                block.push(ch);
            }
        }
        let value = Value::from(block.as_str());
        for encoding in ENCODINGS {
            let opts = WriteOptions {
                indent_amount: 0,
                encoding,
            };
            let text = ujson::to_string_with(&value, &opts).unwrap();
            let reparsed = ujson::from_str(&text).unwrap();
            assert_eq!(reparsed, value, "block at U+{start:04X} via {encoding:?}");
        }
        start = end;
    }
}

#[test]
fn int32_fidelity() {
    let mut i = i64::from(i32::MIN);
    loop {
        let value = Value::from(i as i32);
        let text = ujson::to_string(&value).unwrap();
        assert_eq!(text, i.to_string());
        let reparsed = ujson::from_str(&text).unwrap();
        assert_eq!(reparsed.int32_cast().unwrap(), i as i32);
        if i == i64::from(i32::MAX) {
            break;
        }
        i = (i + 16_777_259).min(i64::from(i32::MAX));
    }
}

#[test]
fn double_constants_round_trip() {
    use core::f64::consts::*;
    for n in [
        E, LOG2_E, LOG10_E, LN_2, LN_10, PI, FRAC_PI_2, FRAC_PI_4, FRAC_1_PI, FRAC_2_PI,
        FRAC_2_SQRT_PI, SQRT_2, FRAC_1_SQRT_2,
    ] {
        let text = ujson::to_string(&Value::try_from(n).unwrap()).unwrap();
        let mut reparsed = ujson::from_str(&text).unwrap();
        assert_eq!(reparsed.take_double().unwrap().to_bits(), n.to_bits());
        assert!(reparsed.is_null());
    }

    // Negative zero keeps its sign bit through the round trip.
    let text = ujson::to_string(&Value::try_from(-0.0).unwrap()).unwrap();
    assert_eq!(text, "-0");
    let reparsed = ujson::from_str(&text).unwrap();
    assert_eq!(reparsed.double_cast().unwrap().to_bits(), (-0.0f64).to_bits());
}

#[test]
fn pretty_output_reparses_equal() {
    let value = sample_document();
    let pretty = ujson::to_string_pretty(&value).unwrap();
    assert_eq!(ujson::from_str(&pretty).unwrap(), value);

    // No trailing whitespace on any line, \n terminators only.
    for line in pretty.lines() {
        assert_eq!(line.trim_end(), line);
    }
    assert!(!pretty.contains('\r'));
}
