//! The [`Describe`] capability: how a Rust type reports its own shape.
//!
//! Standard library types are covered here. Application types implement
//! `Describe` by building a [`CompositeDescriptor`] or [`EnumDescriptor`];
//! a recursive type refers back to itself with [`TypeDescriptor::reference`].
//!
//! ```
//! use typed_avro_schema::descriptor::{CompositeDescriptor, Field, TypeDescriptor};
//! use typed_avro_schema::reflect::Describe;
//!
//! struct Node {
//!     label: String,
//!     next: Option<Box<Node>>,
//! }
//!
//! impl Describe for Node {
//!     fn describe() -> TypeDescriptor {
//!         CompositeDescriptor::new("graph.Node")
//!             .field(Field::new("label", String::describe()))
//!             .field(Field::new(
//!                 "next",
//!                 TypeDescriptor::optional(TypeDescriptor::reference("graph.Node")),
//!             ))
//!             .into()
//!     }
//! }
//! ```
//!
//! [`CompositeDescriptor`]: crate::descriptor::CompositeDescriptor
//! [`EnumDescriptor`]: crate::descriptor::EnumDescriptor

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::descriptor::{Primitive, TypeDescriptor};

pub trait Describe {
    fn describe() -> TypeDescriptor;
}

macro_rules! describe_primitive {
    ($($ty:ty => $primitive:expr),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::primitive($primitive)
                }
            }
        )*
    };
}

describe_primitive! {
    String => Primitive::Str,
    str => Primitive::Str,
    char => Primitive::Str,
    bool => Primitive::Bool,
    i8 => Primitive::Int32,
    i16 => Primitive::Int32,
    i32 => Primitive::Int32,
    u8 => Primitive::Int32,
    u16 => Primitive::Int32,
    i64 => Primitive::Int,
    isize => Primitive::Int,
    u32 => Primitive::Int64,
    u64 => Primitive::Int64,
    usize => Primitive::Int64,
    f32 => Primitive::Float32,
    f64 => Primitive::Float,
    () => Primitive::Null,
    [u8] => Primitive::Bytes,
}

impl<T: Describe> Describe for Option<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::optional(T::describe())
    }
}

/// A `Vec<u8>` is a sequence of small integers like any other `Vec<T>`; use
/// `Box<[u8]>` (or describe the field as [`Primitive::Bytes`]) for `bytes`.
impl<T: Describe> Describe for Vec<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::sequence(T::describe())
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::sequence(T::describe())
    }
}

impl<T: Describe> Describe for HashSet<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::set(T::describe())
    }
}

impl<T: Describe> Describe for BTreeSet<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::set(T::describe())
    }
}

impl<K: Describe, V: Describe> Describe for HashMap<K, V> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::mapping(K::describe(), V::describe())
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::mapping(K::describe(), V::describe())
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe() -> TypeDescriptor {
        T::describe()
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn describe() -> TypeDescriptor {
        T::describe()
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn describe() -> TypeDescriptor {
        T::describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containers_nest() {
        let desc = <HashMap<String, Vec<Option<i64>>>>::describe();
        assert_eq!(
            desc,
            TypeDescriptor::mapping(
                Primitive::Str.into(),
                TypeDescriptor::sequence(TypeDescriptor::optional(Primitive::Int.into())),
            )
        );
    }

    #[test]
    fn smart_pointers_are_transparent() {
        assert_eq!(<Arc<Box<u64>>>::describe(), Primitive::Int64.into());
        assert_eq!(<Box<[u8]>>::describe(), Primitive::Bytes.into());
    }

    #[test]
    fn byte_vec_is_a_sequence() {
        assert_eq!(
            <Vec<u8>>::describe(),
            TypeDescriptor::sequence(Primitive::Int32.into())
        );
    }
}
