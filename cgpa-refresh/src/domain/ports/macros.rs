//! `define_port_error!`: message-carrying error enums for repository ports.
//!
//! Every variant holds named fields and renders through `thiserror`. Each
//! variant also gets a snake_case constructor taking `impl Into<T>` per
//! field, so adapters can write `StandingRepositoryError::query(msg)` and
//! pass the constructor itself as an error-mapping callback.

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
                    #[doc = concat!("Build a `", stringify!($variant), "` error.")]
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
    //! Constructor and message coverage for the generated repository errors.

    use rstest::rstest;

    use crate::domain::ports::{CohortRepositoryError, StandingRepositoryError};

    #[rstest]
    #[case(
        StandingRepositoryError::connection("refused").to_string(),
        "standing repository connection failed: refused"
    )]
    #[case(
        StandingRepositoryError::query(String::from("bad cast")).to_string(),
        "standing repository query failed: bad cast"
    )]
    #[case(
        CohortRepositoryError::connection("closed").to_string(),
        "cohort repository connection failed: closed"
    )]
    #[case(
        CohortRepositoryError::query("deadlock").to_string(),
        "cohort repository query failed: deadlock"
    )]
    fn constructors_render_port_messages(
        #[case] error: String,
        #[case] rendered: &str,
    ) {
        assert_eq!(error, rendered);
    }

    #[rstest]
    fn constructors_build_the_named_variant() {
        assert_eq!(
            StandingRepositoryError::query("timeout"),
            StandingRepositoryError::Query {
                message: "timeout".to_owned(),
            }
        );
        assert_ne!(
            CohortRepositoryError::connection("x"),
            CohortRepositoryError::query("x")
        );
    }

    #[rstest]
    fn constructors_serve_as_mapping_callbacks() {
        let mapped: Result<(), CohortRepositoryError> =
            Err(String::from("gone")).map_err(CohortRepositoryError::connection);
        assert_eq!(
            mapped,
            Err(CohortRepositoryError::Connection {
                message: "gone".to_owned(),
            })
        );
    }
}
