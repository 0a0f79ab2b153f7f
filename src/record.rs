//! Typed access to a record's fields.
//!
//! A configuration target is described twice: statically, by
//! [`Field::SHAPE`] (which fields exist, their annotations, which of them are
//! nested records), and dynamically, by [`Record::field_mut`], which hands out a
//! [`Slot`] for one field so the engine can write a coerced value into it.
//!
//! `#[derive(Record)]` writes both. Implementing them by hand is equivalent and
//! is the way to describe a type the derive cannot see.

use std::any::type_name;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

use crate::types::Shape;

/// Anything that can appear as a field of a record.
pub trait Field {
    const SHAPE: Shape;

    fn slot(&mut self) -> Slot<'_>;
}

/// A record whose fields can be reached by name.
pub trait Record {
    /// Borrow the field called `name`. Returns `None` for names the record
    /// does not expose.
    fn field_mut(&mut self, name: &str) -> Option<Slot<'_>>;

    /// Return every field to its zero value. Called on a nested record before
    /// it is filled, so values no source supplies do not survive a pass.
    fn reset(&mut self);
}

/// A writable destination for one field.
pub enum Slot<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Str(&'a mut String),
    Record(&'a mut dyn Record),
    /// A field whose type cannot be assigned from text. Carries the type name.
    Unsupported(&'static str),
}

impl Slot<'_> {
    /// Human-readable kind, used in log events and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Slot::Bool(_) => "bool",
            Slot::I8(_) => "i8",
            Slot::I16(_) => "i16",
            Slot::I32(_) => "i32",
            Slot::I64(_) => "i64",
            Slot::Isize(_) => "isize",
            Slot::U8(_) => "u8",
            Slot::U16(_) => "u16",
            Slot::U32(_) => "u32",
            Slot::U64(_) => "u64",
            Slot::Usize(_) => "usize",
            Slot::F32(_) => "f32",
            Slot::F64(_) => "f64",
            Slot::Str(_) => "string",
            Slot::Record(_) => "record",
            Slot::Unsupported(name) => *name,
        }
    }
}

macro_rules! terminal {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Field for $ty {
                const SHAPE: Shape = Shape::Terminal;

                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }
        )*
    };
}

terminal! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => Str,
}

macro_rules! unsupported {
    ($(impl<$($param:ident),*> for $ty:ty;)*) => {
        $(
            impl<$($param),*> Field for $ty {
                const SHAPE: Shape = Shape::Terminal;

                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported(type_name::<Self>())
                }
            }
        )*
    };
}

unsupported! {
    impl<T> for Vec<T>;
    impl<T> for Option<T>;
    impl<T> for Box<T>;
    impl<T> for Rc<T>;
    impl<T> for Arc<T>;
    impl<K, V> for HashMap<K, V>;
    impl<K, V> for BTreeMap<K, V>;
    impl<T> for Sender<T>;
    impl<T> for Receiver<T>;
}

impl<T, const N: usize> Field for [T; N] {
    const SHAPE: Shape = Shape::Terminal;

    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(type_name::<Self>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_slots_write_through() {
        let mut port: u16 = 0;
        if let Slot::U16(p) = port.slot() {
            *p = 8080;
        }
        assert_eq!(port, 8080);

        let mut name = String::new();
        if let Slot::Str(s) = name.slot() {
            s.push_str("bob");
        }
        assert_eq!(name, "bob");
    }

    #[test]
    fn composite_slots_are_unsupported() {
        let mut tags: Vec<String> = Vec::new();
        match tags.slot() {
            Slot::Unsupported(kind) => assert!(kind.contains("Vec")),
            other => panic!("expected unsupported, got {}", other.kind()),
        }

        let mut pair = [0u8; 2];
        assert!(matches!(pair.slot(), Slot::Unsupported(kind) if kind.contains("[u8; 2]")));
    }

    #[test]
    fn scalar_shape_is_terminal() {
        assert!(matches!(<bool as Field>::SHAPE, Shape::Terminal));
        assert!(matches!(<Option<u8> as Field>::SHAPE, Shape::Terminal));
    }
}
