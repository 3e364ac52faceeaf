//! Rule Definition Macro
//!
//! Declares rule enums with their identifier, category, severity and
//! message template in one place.
//!
//! # Example
//!
//! ```ignore
//! define_rules! {
//!     pub enum PresenceRule {
//!         #[rule(
//!             id = "QC001",
//!             category = Completeness,
//!             severity = Error,
//!             message = "{label} 不能为空，请补充。"
//!         )]
//!         RequiredMissing { label: String },
//!     }
//! }
//! ```

/// Macro to define rule enums with automatic trait implementations
///
/// This macro generates:
/// - The enum, every variant carrying a `field_ref: String` in addition to
///   the declared fields
/// - `Display` implementation rendering the message template
/// - `Rule` trait implementation
/// - An `IDS` constant listing the rule identifiers of the enum
///
/// Every declared field must appear in the message template.
#[macro_export]
macro_rules! define_rules {
    (
        $vis:vis enum $name:ident {
            $(
                #[rule(
                    id = $id:literal,
                    category = $category:ident,
                    severity = $severity:ident,
                    message = $msg:literal
                )]
                $variant:ident {
                    $( $field:ident : $field_ty:ty ),* $(,)?
                }
            ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        $vis enum $name {
            $(
                $variant {
                    field_ref: String,
                    $( $field: $field_ty ),*
                }
            ),*
        }

        impl $name {
            /// Identifiers of every rule in this enum
            pub const IDS: &'static [&'static str] = &[$( $id ),*];
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$variant { $( $field, )* .. } => {
                            write!(f, $msg, $( $field = $field ),*)
                        }
                    ),*
                }
            }
        }

        impl $crate::rule::Rule for $name {
            fn id(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => $id ),*
                }
            }

            fn category(&self) -> $crate::Category {
                match self {
                    $( Self::$variant { .. } => $crate::Category::$category ),*
                }
            }

            fn severity(&self) -> $crate::Severity {
                match self {
                    $( Self::$variant { .. } => $crate::Severity::$severity ),*
                }
            }

            fn field_ref(&self) -> &str {
                match self {
                    $( Self::$variant { field_ref, .. } => field_ref ),*
                }
            }
        }
    };
}
