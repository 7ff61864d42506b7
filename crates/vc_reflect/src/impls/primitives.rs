use alloc::string::String;

use crate::registry::{TypeTraitDefault, TypeTraitDeserialize, TypeTraitSerialize};

crate::impl_reflect_opaque!(bool: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);
crate::impl_reflect_opaque!(char: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);

crate::impl_reflect_opaque!(u8: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);
crate::impl_reflect_opaque!(u16: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);
crate::impl_reflect_opaque!(u32: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);
crate::impl_reflect_opaque!(u64: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);
crate::impl_reflect_opaque!(u128: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);
crate::impl_reflect_opaque!(usize: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);

crate::impl_reflect_opaque!(i8: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);
crate::impl_reflect_opaque!(i16: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);
crate::impl_reflect_opaque!(i32: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);
crate::impl_reflect_opaque!(i64: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);
crate::impl_reflect_opaque!(i128: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);
crate::impl_reflect_opaque!(isize: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);

crate::impl_reflect_opaque!(f32: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);
crate::impl_reflect_opaque!(f64: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);

crate::impl_reflect_opaque!(String: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn primitives_are_opaque() {
        assert_eq!(<u64 as Typed>::type_info().kind(), ReflectKind::Opaque);
        assert_eq!(<String as Typed>::type_info().type_path(), "alloc::string::String");
        assert_eq!(1.5_f32.reflect_type_path(), "f32");
    }
}
