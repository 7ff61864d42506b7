use crate::info::TypeInfo;

/// A static accessor to compile-time type information.
///
/// Implemented by [`impl_reflect_struct!`](crate::impl_reflect_struct) and
/// [`impl_reflect_opaque!`](crate::impl_reflect_opaque), and by hand for the
/// generic containers in [`impls`](crate::impls).
///
/// The returned reference is created once and cached, see
/// [`NonGenericTypeInfoCell`](crate::impls::NonGenericTypeInfoCell).
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{ReflectKind, Typed};
///
/// assert_eq!(<i32 as Typed>::type_info().kind(), ReflectKind::Opaque);
/// assert_eq!(<Option<i32> as Typed>::type_info().kind(), ReflectKind::Option);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Typed`",
    note = "consider implementing reflection with `vc_reflect::impl_reflect_struct!`"
)]
pub trait Typed: 'static {
    /// Returns the compile-time info for this type.
    fn type_info() -> &'static TypeInfo;
}
