//! `define_port_error!`: error enums for driven ports.
//!
//! Every variant carries named fields. The macro derives `thiserror::Error`,
//! adds one snake_case constructor per variant taking `impl Into<_>` for each
//! field, and a `kind` accessor returning the same snake_case name for use as
//! a structured log field.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant {
                    $(
                        #[doc = concat!("Reported `", stringify!($field), "`.")]
                        $field: $ty,
                    )+
                },
            )+
        }

        ::paste::paste! {
            impl $name {
                $(
                    /// Build this error variant.
                    #[must_use]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                )+

                /// Snake-case variant name, stable across message changes.
                #[must_use]
                pub const fn kind(&self) -> &'static str {
                    match self {
                        $(Self::$variant { .. } => stringify!([<$variant:snake>]),)+
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;
