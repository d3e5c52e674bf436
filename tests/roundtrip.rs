use assert_matches::assert_matches;
use bicodec::{
    constant, custom, dict, from_bytes, lazy, list, record, set, string, to_bytes, tuple, Codec,
};
use pretty_assertions::assert_eq;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
struct Player {
    name: String,
    position: (f64, f64),
    lives: u32,
    inventory: Vec<Item>,
    title: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Item {
    Coin,
    Potion(u32),
    Weapon(String, u32),
}

fn item_codec() -> Codec<Item> {
    custom()
        .variant0(|| Item::Coin, |i| matches!(i, Item::Coin).then_some(()))
        .variant1(
            Item::Potion,
            |i| match i {
                Item::Potion(strength) => Some((*strength,)),
                _ => None,
            },
            bicodec::u32(),
        )
        .variant2(
            Item::Weapon,
            |i| match i {
                Item::Weapon(name, damage) => Some((name.clone(), *damage)),
                _ => None,
            },
            string(),
            bicodec::u32(),
        )
        .finish()
}

fn player_codec() -> Codec<Player> {
    record()
        .field(|p: &Player| p.name.clone(), string())
        .field(
            |p: &Player| p.position,
            tuple(bicodec::f64(), bicodec::f64()),
        )
        .field(|p: &Player| p.lives, bicodec::u32())
        .field(|p: &Player| p.inventory.clone(), list(item_codec()))
        .field(|p: &Player| p.title.clone(), string().maybe())
        .finish(|(name, position, lives, inventory, title)| Player {
            name,
            position,
            lives,
            inventory,
            title,
        })
}

#[test]
fn composed_record_roundtrips() {
    let codec = player_codec();
    let player = Player {
        name: "alice".to_owned(),
        position: (1.5, -2.25),
        lives: 3,
        inventory: vec![
            Item::Coin,
            Item::Potion(7),
            Item::Weapon("sword".to_owned(), 12),
            Item::Coin,
        ],
        title: Some("captain".to_owned()),
    };
    let bytes = to_bytes(&codec, &player);
    assert_eq!(from_bytes(&codec, &bytes).unwrap(), player);
}

#[test]
fn composed_record_roundtrips_with_absent_option() {
    let codec = player_codec();
    let player = Player {
        name: String::new(),
        position: (0.0, 0.0),
        lives: 0,
        inventory: vec![],
        title: None,
    };
    let bytes = to_bytes(&codec, &player);
    assert_eq!(from_bytes(&codec, &bytes).unwrap(), player);
}

#[test]
fn primitive_roundtrips() {
    let bool_codec = bicodec::bool();
    for value in [true, false] {
        assert_matches!(bool_codec.decode(&bool_codec.encode(&value)), Ok(v) if v == value);
    }

    let u32_codec = bicodec::u32();
    for value in [0, 1, 42, u32::MAX] {
        assert_matches!(u32_codec.decode(&u32_codec.encode(&value)), Ok(v) if v == value);
    }

    let i32_codec = bicodec::i32();
    for value in [0, -1, i32::MIN, i32::MAX] {
        assert_matches!(i32_codec.decode(&i32_codec.encode(&value)), Ok(v) if v == value);
    }

    let char_codec = bicodec::char();
    for value in ['\0', 'a', 'é', '🙂'] {
        assert_matches!(char_codec.decode(&char_codec.encode(&value)), Ok(v) if v == value);
    }

    let string_codec = string();
    for value in ["", "plain", "héllo 🙂"] {
        let value = value.to_owned();
        assert_matches!(
            string_codec.decode(&string_codec.encode(&value)),
            Ok(v) => assert_eq!(v, value)
        );
    }
}

#[test]
#[allow(clippy::float_cmp)]
fn float_roundtrips_are_bit_exact_per_width() {
    let f64_codec = bicodec::f64();
    for value in [0.0, -0.0, 42.42, f64::MAX, f64::MIN_POSITIVE] {
        assert_matches!(f64_codec.decode(&f64_codec.encode(&value)), Ok(v) if v == value);
    }

    let f32_codec = bicodec::f32();
    for value in [0.1f32, -1234.5678, f32::MAX] {
        assert_matches!(f32_codec.decode(&f32_codec.encode(&value)), Ok(v) if v == value);
    }
}

#[test]
fn f64_routed_through_f32_is_within_tolerance() {
    let codec = bicodec::f32().map(f64::from, |d: &f64| *d as f32);
    for value in [0.1f64, 1234.5678, -0.000123] {
        let decoded = codec.decode(&codec.encode(&value)).unwrap();
        assert!(
            ((decoded - value) / value).abs() < 1e-6,
            "{decoded} drifted too far from {value}"
        );
    }
}

#[test]
fn container_roundtrips() {
    let list_codec = list(bicodec::i32());
    let values = vec![-1, 0, 1, i32::MAX];
    assert_eq!(
        from_bytes(&list_codec, &to_bytes(&list_codec, &values)).unwrap(),
        values
    );

    let set_codec = set(bicodec::u32());
    let values: HashSet<u32> = (0..100).collect();
    assert_eq!(
        from_bytes(&set_codec, &to_bytes(&set_codec, &values)).unwrap(),
        values
    );

    let dict_codec = dict(string(), list(bicodec::bool()));
    let values: HashMap<String, Vec<bool>> = [
        ("empty".to_owned(), vec![]),
        ("bits".to_owned(), vec![true, false, true]),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        from_bytes(&dict_codec, &to_bytes(&dict_codec, &values)).unwrap(),
        values
    );

    let array_codec = bicodec::array(string());
    let values: Box<[String]> = vec!["a".to_owned(), "b".to_owned()].into_boxed_slice();
    assert_eq!(
        from_bytes(&array_codec, &to_bytes(&array_codec, &values)).unwrap(),
        values
    );
}

#[test]
fn constant_decodes_from_empty_input() {
    let codec = constant("schema-v1".to_owned());
    assert_eq!(*to_bytes(&codec, &"schema-v1".to_owned()), []);
    assert_eq!(from_bytes(&codec, &[]).unwrap(), "schema-v1");
}

#[derive(Debug, Clone, PartialEq)]
enum IntList {
    Nil,
    Cons(u32, Box<IntList>),
}

fn int_list_codec() -> Codec<IntList> {
    custom()
        .variant0(|| IntList::Nil, |l| matches!(l, IntList::Nil).then_some(()))
        .variant2(
            |head, tail| IntList::Cons(head, Box::new(tail)),
            |l| match l {
                IntList::Cons(head, tail) => Some((*head, (**tail).clone())),
                IntList::Nil => None,
            },
            bicodec::u32(),
            lazy(int_list_codec),
        )
        .finish()
}

#[test]
fn recursive_codec_roundtrips_deep_structures() {
    let mut value = IntList::Nil;
    for head in 0..20u32 {
        value = IntList::Cons(head, Box::new(value));
    }
    let codec = int_list_codec();
    let bytes = to_bytes(&codec, &value);
    // 20 times (tag + u32) plus the closing Nil tag
    assert_eq!(bytes.len(), 20 * 5 + 1);
    assert_eq!(from_bytes(&codec, &bytes).unwrap(), value);
}

#[test]
fn codecs_are_shareable_across_threads() {
    let codec = player_codec();
    let player = Player {
        name: "bob".to_owned(),
        position: (0.5, 0.5),
        lives: 1,
        inventory: vec![Item::Potion(1)],
        title: None,
    };
    let bytes = to_bytes(&codec, &player);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(from_bytes(&codec, &bytes).unwrap(), player);
            });
        }
    });
}
