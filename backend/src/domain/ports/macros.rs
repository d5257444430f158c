//! Helper macro for port error enums.
//!
//! Each variant carries named fields; the macro derives `thiserror::Error`
//! and adds a snake-case constructor per variant whose parameters accept
//! anything convertible into the field type.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum RelayProbeError {
            Refused { host: String } => "relay {host} refused the connection",
            Rejected { host: String, code: u16 } => "relay {host} answered {code}",
        }
    }

    #[test]
    fn constructors_convert_string_fields() {
        let err = RelayProbeError::refused("smtp.test");
        assert_eq!(err.to_string(), "relay smtp.test refused the connection");
    }

    #[test]
    fn constructors_keep_numeric_fields() {
        let err = RelayProbeError::rejected("smtp.test", 535_u16);
        assert_eq!(err.to_string(), "relay smtp.test answered 535");
        assert_eq!(
            err,
            RelayProbeError::Rejected {
                host: "smtp.test".to_owned(),
                code: 535
            }
        );
    }
}
