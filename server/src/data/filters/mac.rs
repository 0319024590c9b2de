//! Hardware (EUI-48) address parsing

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Accepted layouts, each with the hex width its groups are zero-padded to.
/// One separator per address.
static LAYOUTS: LazyLock<Vec<(Regex, usize)>> = LazyLock::new(|| {
    [
        // 00:1a:2b:3c:4d:5e, 0-1a-2b-3c-4d-5e
        (r"^[0-9a-f]{1,2}(?::[0-9a-f]{1,2}){5}$", 2),
        (r"^[0-9a-f]{1,2}(?:-[0-9a-f]{1,2}){5}$", 2),
        // 001a.2b3c.4d5e, 1a:2b3c:4d5e
        (r"^[0-9a-f]{1,4}(?::[0-9a-f]{1,4}){2}$", 4),
        (r"^[0-9a-f]{1,4}(?:-[0-9a-f]{1,4}){2}$", 4),
        (r"^[0-9a-f]{1,4}(?:\.[0-9a-f]{1,4}){2}$", 4),
        // 001a2b-3c4d5e, 001a2b:3c4d5e
        (r"^[0-9a-f]{5,6}[-:][0-9a-f]{5,6}$", 6),
        // 001a2b3c4d5e
        (r"^[0-9a-f]{11,12}$", 12),
    ]
    .into_iter()
    .map(|(pattern, width)| {
        let regex = Regex::new(&format!("(?i){}", pattern)).expect("valid regex");
        (regex, width)
    })
    .collect()
});

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid MAC address: {0}")]
pub struct MacParseError(pub String);

/// EUI-48 hardware address; displays as `AA:BB:CC:DD:EE:FF`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl FromStr for MacAddress {
    type Err = MacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || MacParseError(s.to_string());

        let width = LAYOUTS
            .iter()
            .find(|(regex, _)| regex.is_match(s))
            .map(|(_, width)| *width)
            .ok_or_else(err)?;

        let digits: String = s
            .split([':', '-', '.'])
            .map(|group| format!("{:0>width$}", group, width = width))
            .collect();

        let mut out = [0u8; 6];
        for (i, octet) in out.iter_mut().enumerate() {
            *octet = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| err())?;
        }
        Ok(Self(out))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            a, b, c, d, e, g
        )
    }
}
