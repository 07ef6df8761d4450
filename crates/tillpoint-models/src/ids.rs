//! Strongly-typed ID newtypes for domain entities.
//!
//! Every table uses an unsigned auto-increment key. Wrapping it per entity
//! keeps a `ProductId` from being passed where a `UserId` is expected.

use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlTypeInfo;
use sqlx::{Database, Decode, Encode, MySql, Type};
use std::fmt;
use utoipa::ToSchema;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
        #[serde(transparent)]
        #[schema(value_type = u64)]
        pub struct $name(pub u64);

        impl $name {
            #[inline]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            #[inline]
            fn from(id: $name) -> u64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl Type<MySql> for $name {
            fn type_info() -> MySqlTypeInfo {
                <u64 as Type<MySql>>::type_info()
            }

            fn compatible(ty: &MySqlTypeInfo) -> bool {
                <u64 as Type<MySql>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, MySql> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <MySql as Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <u64 as Encode<'q, MySql>>::encode_by_ref(&self.0, buf)
            }
        }

        impl<'r> Decode<'r, MySql> for $name {
            fn decode(
                value: <MySql as Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <u64 as Decode<'r, MySql>>::decode(value).map(Self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                u64::deserialize(deserializer).map(Self)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for User entities.
    UserId
);

define_id!(
    /// Strongly-typed ID for Product entities.
    ProductId
);

define_id!(
    /// Strongly-typed ID for Transaction entities.
    TransactionId
);

define_id!(
    /// Strongly-typed ID for a single line of a transaction.
    TransactionItemId
);
