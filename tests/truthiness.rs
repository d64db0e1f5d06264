/*
 * ==========================================================================
 * DM RUNTIME - Truthiness Core
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 *
 * License:
 * This file is part of the DM runtime shipped with the PAWX toolchain.
 *
 * The DM runtime is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::thread;

use dm_runtime::{is_truthy, Reference, Truthy, Value};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 2_000;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED_D3)
}

#[test]
#[allow(clippy::approx_constant)]
fn documented_scenarios() {
    assert!(!is_truthy(&Value::Double(0.0)));
    assert!(!is_truthy(&Value::Double(-0.0)));
    assert!(is_truthy(&Value::Double(3.14)));
    assert!(!is_truthy(&Value::Int(0)));
    assert!(is_truthy(&Value::Int(5)));
    assert!(!is_truthy(&Value::text("")));
    assert!(is_truthy(&Value::text("0")));
    assert!(is_truthy(&Value::text("hello")));
    assert!(!is_truthy(&Value::Null));
    assert!(is_truthy(&Value::object("/obj", ())));
}

#[test]
fn doubles_are_truthy_iff_nonzero() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        // raw bits reach NaN, infinities and subnormals too
        let x = f64::from_bits(rng.gen::<u64>());
        assert_eq!(is_truthy(&Value::Double(x)), x != 0.0, "x = {x:e}");
    }
}

#[test]
fn floats_are_truthy_iff_nonzero() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x = f32::from_bits(rng.gen::<u32>());
        assert_eq!(is_truthy(&Value::Float(x)), x != 0.0, "x = {x:e}");
        assert_eq!(x.is_truthy(), x != 0.0);
    }
}

#[test]
fn integers_are_truthy_iff_nonzero() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let i = if rng.gen_bool(0.1) { 0 } else { rng.gen::<i32>() };
        assert_eq!(is_truthy(&Value::Int(i)), i != 0, "i = {i}");
    }
}

#[test]
fn text_is_truthy_iff_nonempty() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let len = rng.gen_range(0..4);
        let s: String = (&mut rng).sample_iter(&Alphanumeric).take(len).map(char::from).collect();
        assert_eq!(is_truthy(&Value::text(s.clone())), !s.is_empty(), "s = {s:?}");
    }
}

#[test]
fn nullable_text_follows_null_or_empty_rule() {
    let cases: [(Option<&str>, bool); 4] = [(None, false), (Some(""), false), (Some(" "), true), (Some("0"), true)];

    for (slot, expected) in cases {
        assert_eq!(slot.is_truthy(), expected, "slot = {slot:?}");
        assert_eq!(is_truthy(&Value::from(slot)), expected, "slot = {slot:?}");
    }
}

#[test]
fn references_are_truthy_whatever_they_hold() {
    let falsy_payloads = [
        Value::object("/datum", 0.0_f64),
        Value::object("/datum", String::new()),
        Value::object("/datum", Option::<i32>::None),
        Value::Ref(Reference::new("/list", Vec::<i32>::new())),
    ];

    for value in &falsy_payloads {
        assert!(is_truthy(value), "{value:?}");
    }
}

#[test]
fn repeated_calls_agree() {
    let values = [
        Value::Double(f64::NAN),
        Value::Float(-0.0),
        Value::Int(-1),
        Value::text(""),
        Value::object("/mob", ()),
        Value::Null,
    ];

    for value in &values {
        let first = is_truthy(value);
        for _ in 0..3 {
            assert_eq!(is_truthy(value), first, "{value:?}");
        }
    }
}

#[test]
fn concurrent_callers_see_the_same_answers() {
    let values: Vec<Value> = vec![
        Value::Double(0.0),
        Value::Double(1.5),
        Value::Float(0.0),
        Value::Int(7),
        Value::text(""),
        Value::text("x"),
        Value::object("/mob", ()),
        Value::Null,
    ];
    let expected: Vec<bool> = values.iter().map(is_truthy).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| values.iter().map(is_truthy).collect::<Vec<_>>()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("worker panicked"), expected);
        }
    });
}
