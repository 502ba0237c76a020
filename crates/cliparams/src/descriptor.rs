//! Field-descriptor tables and the unwrapping of configuration sources.

use crate::types::FieldRef;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// One entry of a field-descriptor table: an export key and an accessor.
pub struct Field<C> {
    key: &'static str,
    read: for<'a> fn(&'a C) -> FieldRef<'a>,
}

impl<C> Field<C> {
    /// Declare a field exported under `key`
    pub const fn new(key: &'static str, read: for<'a> fn(&'a C) -> FieldRef<'a>) -> Self {
        Self { key, read }
    }

    /// Export key of this field
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Read this field from a record
    pub fn read<'a>(&self, record: &'a C) -> FieldRef<'a> {
        (self.read)(record)
    }
}

impl<C> fmt::Debug for Field<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("key", &self.key).finish()
    }
}

/// A record with a static field-descriptor table.
///
/// Usually implemented through [`cli_params!`](crate::cli_params), which
/// also implements [`ParamSource`] for the record.
pub trait CliParams: Sized + 'static {
    /// Exported fields, in declaration order
    fn fields() -> &'static [Field<Self>];
}

/// Anything that resolves to a record, possibly through several layers of
/// indirection or optional wrapping.
///
/// `None` at any layer means no configuration block was provided.
pub trait ParamSource {
    /// The record this source resolves to
    type Record: CliParams;

    /// Unwrap to the record, or `None` if a layer is absent
    fn resolve(&self) -> Option<&Self::Record>;
}

impl<S: ParamSource> ParamSource for Option<S> {
    type Record = S::Record;

    fn resolve(&self) -> Option<&Self::Record> {
        self.as_ref().and_then(ParamSource::resolve)
    }
}

impl<S: ParamSource + ?Sized> ParamSource for &S {
    type Record = S::Record;

    fn resolve(&self) -> Option<&Self::Record> {
        (**self).resolve()
    }
}

impl<S: ParamSource + ?Sized> ParamSource for &mut S {
    type Record = S::Record;

    fn resolve(&self) -> Option<&Self::Record> {
        (**self).resolve()
    }
}

impl<S: ParamSource + ?Sized> ParamSource for Box<S> {
    type Record = S::Record;

    fn resolve(&self) -> Option<&Self::Record> {
        (**self).resolve()
    }
}

impl<S: ParamSource + ?Sized> ParamSource for Rc<S> {
    type Record = S::Record;

    fn resolve(&self) -> Option<&Self::Record> {
        (**self).resolve()
    }
}

impl<S: ParamSource + ?Sized> ParamSource for Arc<S> {
    type Record = S::Record;

    fn resolve(&self) -> Option<&Self::Record> {
        (**self).resolve()
    }
}

/// Declare the field-descriptor table of a record.
///
/// ```
/// use cliparams::{cli_params, Value};
///
/// #[derive(Default)]
/// struct RoleCollection {
///     name: String,
///     description: Value<String>,
///     internal_note: String,
/// }
///
/// cli_params!(RoleCollection {
///     name => "roleCollectionName",
///     description => "description",
/// });
///
/// let params = cliparams::to_params(&RoleCollection {
///     name: "Viewers".into(),
///     description: Value::Null,
///     internal_note: "not exported".into(),
/// })?;
/// assert_eq!(params.len(), 1);
/// assert_eq!(params["roleCollectionName"], "Viewers");
/// # Ok::<(), cliparams::Error>(())
/// ```
#[macro_export]
macro_rules! cli_params {
    ($ty:ty { $($field:ident => $key:literal),* $(,)? }) => {
        impl $crate::CliParams for $ty {
            fn fields() -> &'static [$crate::Field<Self>] {
                const FIELDS: &[$crate::Field<$ty>] = &[
                    $(
                        $crate::Field::new($key, |record: &$ty| {
                            $crate::ParamField::field_ref(&record.$field)
                        }),
                    )*
                ];
                FIELDS
            }
        }

        impl $crate::ParamSource for $ty {
            type Record = $ty;

            fn resolve(&self) -> ::std::option::Option<&Self::Record> {
                ::std::option::Option::Some(self)
            }
        }
    };
}
