use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{OptionInfo, TypeInfo, Typed};
use crate::ops::Optional;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Option(OptionInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        <Self as Typed>::type_info()
    }

    crate::__impl_reflect_cast_fn!(Option);
}

impl<T: Reflect + Typed> Optional for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    fn replace(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Some(value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for Option<T> {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::of::<Self>();
        meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::ReflectMut;

    #[test]
    fn option_info_is_cached_per_type() {
        let a = <Option<u8> as Typed>::type_info();
        let b = <Option<String> as Typed>::type_info();
        assert_eq!(a.kind(), ReflectKind::Option);
        assert!(a.type_is::<Option<u8>>());
        assert!(b.type_is::<Option<String>>());
        assert!(core::ptr::eq(a, <Option<u8> as Typed>::type_info()));
        assert!(b.as_option().unwrap().some_ty().is::<String>());
    }

    #[test]
    fn replace_and_clear() {
        let mut value: Option<u8> = None;
        let ReflectMut::Option(opt) = value.reflect_mut() else {
            panic!("expected option");
        };
        opt.replace(5_u8.into_boxed_reflect()).unwrap();
        assert_eq!(opt.value().and_then(|v| v.downcast_ref::<u8>()), Some(&5));
        assert!(opt.replace(5_i32.into_boxed_reflect()).is_err());
        opt.clear();
        assert!(value.is_none());
    }
}
