//! # Automatic Status Back (ASB)
//!
//! Every printer response carries a 32-bit `status` field. Each bit reports
//! an independent condition of the device; [`decode`] turns the bitmask into
//! readable messages in ascending bit order.
//!
//! ```
//! use epos::status;
//!
//! assert!(status::decode(0).is_empty());
//! assert_eq!(
//!     status::decode(status::ASB_OFF_LINE | status::ASB_COVER_OPEN),
//!     vec!["Offline status", "Cover is open"]
//! );
//! ```
//!
//! ## Bit Table
//!
//! The top bit appears twice: the device documentation lists both the
//! paper removal detector and the spooler under `0x80000000`, so a status
//! with that bit set yields both messages.

pub const ASB_NO_RESPONSE: u32 = 0x0000_0001;
pub const ASB_PRINT_SUCCESS: u32 = 0x0000_0002;
pub const ASB_DRAWER_KICK: u32 = 0x0000_0004;
pub const ASB_OFF_LINE: u32 = 0x0000_0008;
pub const ASB_COVER_OPEN: u32 = 0x0000_0020;
pub const ASB_PAPER_FEED: u32 = 0x0000_0040;
pub const ASB_WAIT_ON_LINE: u32 = 0x0000_0100;
pub const ASB_PANEL_SWITCH: u32 = 0x0000_0200;
pub const ASB_MECHANICAL_ERR: u32 = 0x0000_0400;
pub const ASB_AUTOCUTTER_ERR: u32 = 0x0000_0800;
pub const ASB_UNRECOVER_ERR: u32 = 0x0000_2000;
pub const ASB_AUTORECOVER_ERR: u32 = 0x0000_4000;
pub const ASB_RECEIPT_NEAR_END: u32 = 0x0002_0000;
pub const ASB_RECEIPT_END: u32 = 0x0008_0000;
pub const ASB_WAIT_SLIP_INSERT: u32 = 0x0001_0000;
pub const ASB_WAIT_SLIP_EJECT: u32 = 0x0004_0000;
pub const ASB_BUZZER: u32 = 0x0100_0000;
pub const ASB_REMOVAL_DETECT_PAPER_NONE: u32 = 0x8000_0000;
pub const ASB_SPOOLER_IS_STOPPED: u32 = 0x8000_0000;

/// Status bits and their messages, in ascending mask order.
pub static ASB_TABLE: &[(u32, &str)] = &[
    (ASB_NO_RESPONSE, "No printer response"),
    (ASB_PRINT_SUCCESS, "Printing is successfully completed"),
    (
        ASB_DRAWER_KICK,
        "Status of the drawer kick number 3 connector pin = \"H\"",
    ),
    (ASB_OFF_LINE, "Offline status"),
    (ASB_COVER_OPEN, "Cover is open"),
    (ASB_PAPER_FEED, "Paper feed switch is feeding paper"),
    (ASB_WAIT_ON_LINE, "Waiting for online recovery"),
    (ASB_PANEL_SWITCH, "Panel switch is ON"),
    (ASB_MECHANICAL_ERR, "Mechanical error generated"),
    (ASB_AUTOCUTTER_ERR, "Auto cutter error generated"),
    (ASB_UNRECOVER_ERR, "Unrecoverable error generated"),
    (ASB_AUTORECOVER_ERR, "Auto recovery error generated"),
    (
        ASB_WAIT_SLIP_INSERT,
        "Waiting for insertion of a slip sheet for slip printing",
    ),
    (ASB_RECEIPT_NEAR_END, "Roll paper has almost run out"),
    (
        ASB_WAIT_SLIP_EJECT,
        "Waiting for ejection of a slip sheet for slip printing",
    ),
    (ASB_RECEIPT_END, "Roll paper has run out"),
    (ASB_BUZZER, "Buzzer is sounding OR Waiting for paper removal"),
    // TODO: 0x80000000 is listed for two conditions; split once a device
    // reference confirms which bit the spooler state really uses.
    (
        ASB_REMOVAL_DETECT_PAPER_NONE,
        "No paper is detected with the paper removal detector",
    ),
    (ASB_SPOOLER_IS_STOPPED, "Spooler stopped"),
];

/// Messages for every condition set in `asb`, in table order.
///
/// Bits without a table entry are ignored.
pub fn decode(asb: u32) -> Vec<&'static str> {
    ASB_TABLE
        .iter()
        .filter(|(mask, _)| asb & mask == *mask)
        .map(|(_, message)| *message)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
