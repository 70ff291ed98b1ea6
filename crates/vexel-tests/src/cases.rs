//! Data-driven conversion cases.
//!
//! Every case in `fixtures/convert.json` names a source and destination
//! vector type; the input is converted with [`vexel_math::convert::convert`]
//! and must match the expected vector exactly.
//!
//! ```bash
//! cargo test --package vexel-tests cases
//! ```

use serde::Deserialize;
use vexel_math::prelude::*;

const CONVERT_CASES: &str = include_str!("../fixtures/convert.json");

#[derive(Debug, Deserialize)]
struct Case<A, B> {
    input: A,
    expected: B,
}

#[derive(Debug, Deserialize)]
struct ConvertCases {
    #[allow(dead_code)]
    version: String,
    int3_to_int4: Vec<Case<Int3, Int4>>,
    int4_to_int2: Vec<Case<Int4, Int2>>,
    double3_to_int3: Vec<Case<Double3, Int3>>,
    float4_to_byte4: Vec<Case<Float4, Byte4>>,
    uint3_to_int3: Vec<Case<UInt3, Int3>>,
    int2_to_byte3: Vec<Case<Int2, Byte3>>,
    short2_to_float4: Vec<Case<Short2, Float4>>,
}

fn load_cases() -> ConvertCases {
    serde_json::from_str(CONVERT_CASES).expect("fixtures/convert.json is malformed")
}

fn check<A, B>(name: &str, cases: &[Case<A, B>])
where
    A: Vector,
    B: Vector,
    A::Scalar: AsPrimitive<B::Scalar>,
{
    assert!(!cases.is_empty(), "{name}: no cases");
    for (i, case) in cases.iter().enumerate() {
        let got: B = vexel_math::convert::convert(case.input);
        assert_eq!(got, case.expected, "{name}[{i}]: {:?}", case.input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_cases() {
        let cases = load_cases();
        check("int3_to_int4", &cases.int3_to_int4);
        check("int4_to_int2", &cases.int4_to_int2);
        check("double3_to_int3", &cases.double3_to_int3);
        check("float4_to_byte4", &cases.float4_to_byte4);
        check("uint3_to_int3", &cases.uint3_to_int3);
        check("int2_to_byte3", &cases.int2_to_byte3);
        check("short2_to_float4", &cases.short2_to_float4);
    }
}
