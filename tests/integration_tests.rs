use std::collections::BTreeMap;

use indexmap::IndexMap;
use typedump::{dump_enum, to_string, to_string_with_options, Dump, DumpOptions, Dumper, Enum, Error, Result};

#[derive(Clone, Copy)]
enum MyEnum {
    Aaa,
    Bbb,
}

#[derive(Clone, Copy)]
enum YourEnum {
    Eee,
    Fff,
}

dump_enum!(MyEnum { Aaa => "aaa", Bbb => "bbb" });
dump_enum!(YourEnum);

struct Bar {
    x: u32,
    m: BTreeMap<i32, String>,
    e1: MyEnum,
    e2: YourEnum,
}

impl Dump for Bar {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        out.record("Bar")
            .field("x", &self.x)
            .field("m", &self.m)
            .field("e1", &Enum(self.e1))
            .field("e2", &Enum(self.e2))
            .finish()
    }
}

struct Foo {
    x: i32,
    v: Vec<String>,
    m: (i32, String),
    b: Bar,
}

impl Dump for Foo {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        out.record("Foo")
            .field("x", &self.x)
            .field("v", &self.v)
            .field("m", &self.m)
            .field("b", &self.b)
            .finish()
    }
}

fn sample_bar() -> Bar {
    let mut m = BTreeMap::new();
    m.insert(1, "1".to_string());
    m.insert(2, "2".to_string());
    Bar {
        x: 1,
        m,
        e1: MyEnum::Aaa,
        e2: YourEnum::Fff,
    }
}

#[test]
fn test_record_with_map_and_enums() {
    let bar = sample_bar();
    assert_eq!(
        to_string(&bar).unwrap(),
        r#"Bar {x: 1, m: {1: "1", 2: "2"}, e1: aaa, e2: 1}"#
    );
}

#[test]
fn test_nested_record_in_declared_field_order() {
    let foo = Foo {
        x: 10,
        v: vec!["abc".to_string(), "xyz".to_string()],
        m: (7, "7".to_string()),
        b: sample_bar(),
    };

    assert_eq!(
        to_string(&foo).unwrap(),
        r#"Foo {x: 10, v: ["abc", "xyz"], m: (7, "7"), b: Bar {x: 1, m: {1: "1", 2: "2"}, e1: aaa, e2: 1}}"#
    );
}

#[test]
fn test_empty_containers_emit_only_markers() {
    assert_eq!(to_string(&Vec::<String>::new()).unwrap(), "[]");
    assert_eq!(to_string(&BTreeMap::<i32, String>::new()).unwrap(), "{}");
    assert_eq!(to_string(&IndexMap::<String, i32>::new()).unwrap(), "{}");
}

#[test]
fn test_mapping_keeps_its_own_iteration_order() {
    let mut map = IndexMap::new();
    map.insert("zeta".to_string(), 1);
    map.insert("alpha".to_string(), 2);
    map.insert("mid".to_string(), 3);

    // Insertion order, not key order.
    assert_eq!(
        to_string(&map).unwrap(),
        r#"{"zeta": 1, "alpha": 2, "mid": 3}"#
    );
}

#[test]
fn test_enums_render_uniformly_inside_containers() {
    let named = vec![Enum(MyEnum::Aaa), Enum(MyEnum::Bbb)];
    assert_eq!(to_string(&named).unwrap(), "[aaa, bbb]");

    let mut by_id = IndexMap::new();
    by_id.insert(1, Enum(MyEnum::Bbb));
    assert_eq!(to_string(&by_id).unwrap(), "{1: bbb}");

    let coded = vec![Enum(YourEnum::Eee), Enum(YourEnum::Fff)];
    assert_eq!(to_string(&coded).unwrap(), "[0, 1]");
}

#[test]
fn test_records_as_mapping_values() {
    let mut map = BTreeMap::new();
    map.insert(5, sample_bar());
    assert_eq!(
        to_string(&map).unwrap(),
        r#"{5: Bar {x: 1, m: {1: "1", 2: "2"}, e1: aaa, e2: 1}}"#
    );
}

#[test]
fn test_tuples_render_between_braces() {
    let t = (1, "two".to_string(), 3.5);
    assert_eq!(to_string(&t).unwrap(), r#"{1, "two", 3.5}"#);
}

#[test]
fn test_pairs_nest_recursively() {
    let pair = (vec![1, 2], ("x", 9));
    assert_eq!(to_string(&pair).unwrap(), r#"([1, 2], ("x", 9))"#);
}

#[test]
fn test_quoting_escapes_specials() {
    assert_eq!(
        to_string("tab\there\\end\0").unwrap(),
        r#""tab\there\\end\0""#
    );
    assert_eq!(to_string("say \"hi\"").unwrap(), r#""say \"hi\"""#);
}

#[test]
fn test_output_is_single_line() {
    let text = to_string("line one\nline two").unwrap();
    assert!(!text.contains('\n'));
    assert_eq!(text, r#""line one\nline two""#);
}

#[test]
fn test_depth_limit_aborts_instead_of_recursing() {
    let deep = vec![vec![vec![vec![1]]]];
    let options = DumpOptions::new().with_max_depth(3);
    match to_string_with_options(&deep, options) {
        Err(Error::DepthLimit { limit }) => assert_eq!(limit, 3),
        other => panic!("expected depth limit, got {:?}", other),
    }

    let options = DumpOptions::new().with_max_depth(4);
    assert!(to_string_with_options(&deep, options).is_ok());
}

#[test]
fn test_timestamps_render_as_quoted_rfc3339() {
    use chrono::{TimeZone, Utc};

    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    assert_eq!(to_string(&ts).unwrap(), "\"2024-05-01T12:30:00+00:00\"");
}

#[test]
fn test_big_integers_render_in_decimal() {
    use num_bigint::BigInt;

    let big: BigInt = BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
    assert_eq!(
        to_string(&big).unwrap(),
        "123456789012345678901234567890"
    );
}

mod bridge {
    use serde::Serialize;
    use serde_json::json;
    use typedump::{to_string, Error, Serde};

    #[derive(Serialize)]
    struct User {
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_struct_renders_as_named_record() {
        let user = User {
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string()],
        };

        assert_eq!(
            to_string(&Serde(&user)).unwrap(),
            r#"User {name: "Alice", active: true, tags: ["admin"]}"#
        );
    }

    #[test]
    fn test_two_element_tuples_render_as_pairs() {
        assert_eq!(to_string(&Serde(&(7, "7"))).unwrap(), r#"(7, "7")"#);
        assert_eq!(to_string(&Serde(&(1, 2, 3))).unwrap(), "{1, 2, 3}");
    }

    #[test]
    fn test_options_render_as_value_or_null() {
        assert_eq!(to_string(&Serde(&Some(5))).unwrap(), "5");
        assert_eq!(to_string(&Serde(&None::<i32>)).unwrap(), "null");
    }

    #[test]
    fn test_unit_variants_render_as_names() {
        #[derive(Serialize)]
        enum Kind {
            Request,
            #[allow(dead_code)]
            Response,
        }

        assert_eq!(to_string(&Serde(&Kind::Request)).unwrap(), "Request");
    }

    #[test]
    fn test_data_variants_are_rejected() {
        #[derive(Serialize)]
        enum Payload {
            Chunk(u32),
        }

        match to_string(&Serde(&Payload::Chunk(1))) {
            Err(Error::Unsupported(msg)) => assert!(msg.contains("newtype")),
            other => panic!("expected unsupported shape, got {:?}", other),
        }
    }

    #[test]
    fn test_dynamic_json_values() {
        let value = json!({
            "name": "Alice",
            "scores": [1, 2, 3]
        });

        assert_eq!(
            to_string(&Serde(&value)).unwrap(),
            r#"{"name": "Alice", "scores": [1, 2, 3]}"#
        );
    }

    #[test]
    fn test_bridge_agrees_with_native_rendering() {
        use typedump::{Dump, Dumper, Result};

        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        impl Dump for Point {
            fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
                out.record("Point")
                    .field("x", &self.x)
                    .field("y", &self.y)
                    .finish()
            }
        }

        let point = Point { x: 3, y: -4 };
        assert_eq!(
            to_string(&point).unwrap(),
            to_string(&Serde(&point)).unwrap()
        );
    }
}
