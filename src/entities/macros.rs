//! Macros for reducing boilerplate when defining entity enums
//!
//! Every status/type/category enum in the console has the same three faces:
//! a Rust variant, an integer on the wire and a label in the UI. The macro
//! below generates all of them from one table.

/// Define an enum whose variants map to wire integers and UI labels
///
/// Generates:
/// - the enum itself (`Copy`, `Eq`, `Hash`, serde as integer code)
/// - [`WireEnum`](crate::core::field::WireEnum) with exhaustive `match` arms in
///   both directions
/// - `TryFrom<u8>`, `From<Enum> for u8` and `Display` (the label)
///
/// # Example
///
/// ```rust,ignore
/// impl_wire_enum! {
///     /// Lifecycle status of a coupon
///     pub enum CouponStatus {
///         Active = 0 => "Active",
///         Expired = 1 => "Expired",
///         Inactive = 2 => "Inactive",
///     }
/// }
///
/// assert_eq!(CouponStatus::from_label("expired"), Some(CouponStatus::Expired));
/// assert_eq!(u8::from(CouponStatus::Inactive), 2);
/// ```
#[macro_export]
macro_rules! impl_wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $type:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        $vis enum $type {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::core::field::WireEnum for $type {
            const ALL: &'static [Self] = &[ $( $type::$variant ),+ ];

            fn code(self) -> u8 {
                match self {
                    $( $type::$variant => $code ),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $( $type::$variant => $label ),+
                }
            }

            fn from_code(code: u8) -> Option<Self> {
                match code {
                    $( $code => Some($type::$variant), )+
                    _ => None,
                }
            }

            fn from_label_exact(label: &str) -> Option<Self> {
                match label {
                    $( $label => Some($type::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::std::convert::TryFrom<u8> for $type {
            type Error = String;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                <$type as $crate::core::field::WireEnum>::from_code(code).ok_or_else(|| {
                    format!("invalid {} code: {}", stringify!($type), code)
                })
            }
        }

        impl ::std::convert::From<$type> for u8 {
            fn from(value: $type) -> u8 {
                $crate::core::field::WireEnum::code(value)
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::core::field::WireEnum::label(*self))
            }
        }
    };
}
