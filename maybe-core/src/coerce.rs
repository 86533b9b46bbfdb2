//! Type-directed coercions used where a constructor's meaning depends on `T`.

use std::any::{Any, TypeId};

/// Whether `T` is the owned string type
pub(crate) fn is_text<T: 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<String>()
}

macro_rules! integer_types {
    ($mac:ident) => {
        $mac!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize)
    };
}

/// Whether `T` is a primitive integer type
pub(crate) fn is_integer<T: 'static>() -> bool {
    let id = TypeId::of::<T>();
    macro_rules! any_of {
        ($($ty:ty),+) => { $(id == TypeId::of::<$ty>())||+ };
    }
    integer_types!(any_of)
}

/// `code` as the integer type identified by `id`, if it fits
fn boxed_integer(id: TypeId, code: i32) -> Option<Box<dyn Any>> {
    macro_rules! narrow {
        ($($ty:ty),+) => {
            $(
                if id == TypeId::of::<$ty>() {
                    return <$ty>::try_from(code).ok().map(|v| Box::new(v) as Box<dyn Any>);
                }
            )+
        };
    }
    integer_types!(narrow);
    None
}

fn unbox<T: 'static>(boxed: Box<dyn Any>) -> Option<T> {
    boxed.downcast::<T>().ok().map(|value| *value)
}

/// `code` as an integer `T`; `None` when `T` is not an integer type or the
/// code is out of its range.
pub(crate) fn integer_from_code<T: 'static>(code: i32) -> Option<T> {
    boxed_integer(TypeId::of::<T>(), code).and_then(unbox)
}

/// `flag` as a `T`: itself for `bool`, 1/0 for integers, "true"/"false" for
/// `String`, and `T::default()` for anything else.
pub(crate) fn bool_into<T: Default + 'static>(flag: bool) -> T {
    let id = TypeId::of::<T>();
    let boxed: Option<Box<dyn Any>> = if id == TypeId::of::<bool>() {
        Some(Box::new(flag))
    } else if id == TypeId::of::<String>() {
        Some(Box::new(flag.to_string()))
    } else {
        boxed_integer(id, i32::from(flag))
    };

    boxed.and_then(unbox).unwrap_or_default()
}

/// The value itself when `T` is `bool`
pub(crate) fn as_bool<T: 'static>(value: &T) -> Option<bool> {
    (value as &dyn Any).downcast_ref::<bool>().copied()
}
