use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The fixed allowlist. Codes are distributed out of band; the list never
/// changes at runtime.
pub const VALID_ACCESS_CODES: [&str; 20] = [
    "EDU-7K9D-2X3F",
    "EDU-Z4LQ-8W1N",
    "EDU-B8VY-0R6M",
    "EDU-Q2ME-4L9J",
    "EDU-X7PW-1T6A",
    "EDU-C5RN-9Z2Y",
    "EDU-K3VG-6F8B",
    "EDU-W9AT-7Q0E",
    "EDU-M2LC-3D5K",
    "EDU-R1YN-5P4X",
    "EDU-T0XB-9K7W",
    "EDU-H3QF-2V6J",
    "EDU-L8DZ-1R9M",
    "EDU-V6NW-0Y3L",
    "EDU-G5MC-8Z7P",
    "EDU-A2VX-6L9T",
    "EDU-Y0PR-5K1Q",
    "EDU-J3TL-9D2B",
    "EDU-N9WF-1X6A",
    "EDU-S7EK-4M8V",
];

static ALLOWLIST: Lazy<HashSet<&'static str>> =
    Lazy::new(|| VALID_ACCESS_CODES.iter().copied().collect());

/// Exact allowlist membership after uppercasing; no partial matching.
pub fn is_valid_code(code: &str) -> bool {
    ALLOWLIST.contains(code.to_uppercase().as_str())
}

/// Association between an access code and the first email that used it.
/// Records are append-only; there is no revocation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UsedAccessCode {
    pub code: String,
    pub email: String,
}

impl UsedAccessCode {
    pub fn new(code: &str, email: &str) -> Self {
        UsedAccessCode {
            code: code.to_string(),
            email: email.to_string(),
        }
    }

    pub fn matches_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }
}
