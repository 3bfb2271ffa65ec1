//! Text label enums for the CRM tables.
//!
//! Each enum maps 1:1 onto the label stored in the corresponding TEXT
//! column. The labels are part of the schema contract with the SQLite tool
//! connector, so they must not be renamed.

use crate::error::CoreError;

macro_rules! define_label_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The label stored in the database.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Parse a stored label back into the enum.
            pub fn from_label(value: &str) -> Result<Self, CoreError> {
                match value {
                    $( $label => Ok($name::$variant), )+
                    other => Err(CoreError::UnknownLabel {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

define_label_enum! {
    /// Where a prospect sits in the sales relationship.
    ProspectStatus ("prospect status") {
        Contacted = "Contacted",
        Negotiating = "Negotiating",
        Customer = "Customer",
        Lost = "Lost",
    }
}

define_label_enum! {
    /// Most recent touchpoint recorded on the prospect row itself.
    Activity ("activity") {
        PhoneCall = "Phone call",
        EmailSent = "Email sent",
        ZoomMeeting = "Zoom meeting",
        ProductDemo = "Product demo",
    }
}

define_label_enum! {
    /// Kind of a logged contact event.
    InteractionKind ("interaction type") {
        Call = "Call",
        Email = "Email",
        Meeting = "Meeting",
    }
}

define_label_enum! {
    /// Pipeline stage of a deal.
    DealStage ("deal stage") {
        ProposalSent = "Proposal sent",
        Negotiation = "Negotiation",
        ClosedWon = "Closed won",
        ClosedLost = "Closed lost",
    }
}
