//! Enumerated DCIM attributes
//!
//! Stored as integer codes (form factors) or short strings (custom field
//! types) in the database.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// INTERFACE FORM FACTORS
// ============================================================================

/// Physical or logical type of a network interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormFactor {
    Virtual,
    Lag,
    Base100Tx,
    Base1000T,
    Gbic,
    Sfp,
    Base10GT,
    SfpPlus,
    Xfp,
    Xenpak,
    X2,
    Sfp28,
    QsfpPlus,
    Cfp,
    Qsfp28,
    T1,
    E1,
    T3,
    E3,
    StackWise,
    StackWisePlus,
    FlexStack,
    FlexStackPlus,
    JuniperVcp,
    Other,
}

impl FormFactor {
    pub const ALL: &'static [FormFactor] = &[
        Self::Virtual,
        Self::Lag,
        Self::Base100Tx,
        Self::Base1000T,
        Self::Gbic,
        Self::Sfp,
        Self::Base10GT,
        Self::SfpPlus,
        Self::Xfp,
        Self::Xenpak,
        Self::X2,
        Self::Sfp28,
        Self::QsfpPlus,
        Self::Cfp,
        Self::Qsfp28,
        Self::T1,
        Self::E1,
        Self::T3,
        Self::E3,
        Self::StackWise,
        Self::StackWisePlus,
        Self::FlexStack,
        Self::FlexStackPlus,
        Self::JuniperVcp,
        Self::Other,
    ];

    /// Types that carry no physical connector
    pub const VIRTUAL: &'static [FormFactor] = &[Self::Virtual, Self::Lag];

    /// Stored integer code
    pub fn code(&self) -> i64 {
        match self {
            Self::Virtual => 0,
            Self::Lag => 200,
            Self::Base100Tx => 800,
            Self::Base1000T => 1000,
            Self::Gbic => 1050,
            Self::Sfp => 1100,
            Self::Base10GT => 1150,
            Self::SfpPlus => 1200,
            Self::Xfp => 1300,
            Self::Xenpak => 1310,
            Self::X2 => 1320,
            Self::Sfp28 => 1350,
            Self::QsfpPlus => 1400,
            Self::Cfp => 1500,
            Self::Qsfp28 => 1600,
            Self::T1 => 4000,
            Self::E1 => 4010,
            Self::T3 => 4040,
            Self::E3 => 4050,
            Self::StackWise => 5000,
            Self::StackWisePlus => 5050,
            Self::FlexStack => 5100,
            Self::FlexStackPlus => 5150,
            Self::JuniperVcp => 5200,
            Self::Other => 32767,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|ff| ff.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Virtual => "Virtual",
            Self::Lag => "Link Aggregation Group (LAG)",
            Self::Base100Tx => "100BASE-TX (10/100ME)",
            Self::Base1000T => "1000BASE-T (1GE)",
            Self::Gbic => "GBIC (1GE)",
            Self::Sfp => "SFP (1GE)",
            Self::Base10GT => "10GBASE-T (10GE)",
            Self::SfpPlus => "SFP+ (10GE)",
            Self::Xfp => "XFP (10GE)",
            Self::Xenpak => "XENPAK (10GE)",
            Self::X2 => "X2 (10GE)",
            Self::Sfp28 => "SFP28 (25GE)",
            Self::QsfpPlus => "QSFP+ (40GE)",
            Self::Cfp => "CFP (100GE)",
            Self::Qsfp28 => "QSFP28 (100GE)",
            Self::T1 => "T1 (1.544 Mbps)",
            Self::E1 => "E1 (2.048 Mbps)",
            Self::T3 => "T3 (45 Mbps)",
            Self::E3 => "E3 (34 Mbps)",
            Self::StackWise => "Cisco StackWise",
            Self::StackWisePlus => "Cisco StackWise Plus",
            Self::FlexStack => "Cisco FlexStack",
            Self::FlexStackPlus => "Cisco FlexStack Plus",
            Self::JuniperVcp => "Juniper VCP",
            Self::Other => "Other",
        }
    }
}

/// Interface category selected by the `type` filter parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceKind {
    Physical,
    Virtual,
    Lag,
}

impl InterfaceKind {
    /// Parse a `type` parameter (trimmed, case-insensitive); `None` for unknown values
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "physical" => Some(Self::Physical),
            "virtual" => Some(Self::Virtual),
            "lag" => Some(Self::Lag),
            _ => None,
        }
    }
}

// ============================================================================
// CUSTOM FIELDS
// ============================================================================

/// Value type of a user-defined custom field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CustomFieldType {
    Text,
    Integer,
    Boolean,
    Select,
}

impl CustomFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Select => "select",
        }
    }

    /// Parse a stored type; unknown values fall back to `Text`
    pub fn from_db(value: &str) -> Self {
        match value {
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "select" => Self::Select,
            _ => Self::Text,
        }
    }
}
