//! Named aliases for every element type and arity.
//!
//! | Prefix   | Element |
//! |----------|---------|
//! | `Byte`   | `u8`    |
//! | `SByte`  | `i8`    |
//! | `Short`  | `i16`   |
//! | `UShort` | `u16`   |
//! | `Int`    | `i32`   |
//! | `UInt`   | `u32`   |
//! | `Long`   | `i64`   |
//! | `ULong`  | `u64`   |
//! | `Half`   | `f16`   |
//! | `Float`  | `f32`   |
//! | `Double` | `f64`   |

use crate::{Vector2, Vector3, Vector4};
use vexel_core::f16;

macro_rules! vector_aliases {
    ($($t:ty => $v2:ident, $v3:ident, $v4:ident;)*) => {
        $(
            #[doc = concat!("2-component `", stringify!($t), "` vector.")]
            pub type $v2 = Vector2<$t>;
            #[doc = concat!("3-component `", stringify!($t), "` vector.")]
            pub type $v3 = Vector3<$t>;
            #[doc = concat!("4-component `", stringify!($t), "` vector.")]
            pub type $v4 = Vector4<$t>;
        )*
    };
}

vector_aliases! {
    u8 => Byte2, Byte3, Byte4;
    i8 => SByte2, SByte3, SByte4;
    i16 => Short2, Short3, Short4;
    u16 => UShort2, UShort3, UShort4;
    i32 => Int2, Int3, Int4;
    u32 => UInt2, UInt3, UInt4;
    i64 => Long2, Long3, Long4;
    u64 => ULong2, ULong3, ULong4;
    f16 => Half2, Half3, Half4;
    f32 => Float2, Float3, Float4;
    f64 => Double2, Double3, Double4;
}
