// Flash loan contract message payloads
//
// These are printed for operators to submit with an external chain client;
// nothing here is ever sent over the network.

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io;

use crate::errors::FlashLoanResult;

/// Execute messages accepted by the flash loan contract
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Provide {},
    Withdraw {},
    Loan {
        receiver: String,
        /// Uint128 travels as a decimal string
        amount: String,
    },
}

/// Query messages accepted by the flash loan contract
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetConfig {},
    Balance {},
    Provided { address: String },
}

impl ExecuteMsg {
    pub fn loan(receiver: &str, amount: u128) -> Self {
        ExecuteMsg::Loan {
            receiver: receiver.to_string(),
            amount: amount.to_string(),
        }
    }
}

/// Single-line JSON with a space after `:` and `,`, the layout chain CLIs echo back
#[derive(Debug, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn render<T, F>(msg: &T, formatter: F) -> FlashLoanResult<String>
where
    T: Serialize,
    F: Formatter,
{
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    msg.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8
    Ok(escape_non_ascii(&String::from_utf8_lossy(&buf)))
}

/// Replace every non-ASCII character with `\uXXXX` escapes (surrogate pairs
/// above the BMP), so payloads survive any terminal or shell encoding.
///
/// Non-ASCII can only occur inside JSON strings, where the escape is equivalent.
fn escape_non_ascii(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for ch in json.chars() {
        if ch.is_ascii() {
            escaped.push(ch);
        } else {
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    escaped
}

/// Render a message on one line, as pasted into a shell command
pub fn to_compact_json<T: Serialize>(msg: &T) -> FlashLoanResult<String> {
    render(msg, SpacedFormatter)
}

/// Render a message with two-space indentation
pub fn to_pretty_json<T: Serialize>(msg: &T) -> FlashLoanResult<String> {
    render(msg, PrettyFormatter::with_indent(b"  "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_message_keeps_field_order() {
        let msg = ExecuteMsg::loan("receiver123", 500);
        assert_eq!(
            to_compact_json(&msg).unwrap(),
            r#"{"loan": {"receiver": "receiver123", "amount": "500"}}"#
        );
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(to_compact_json(&ExecuteMsg::Provide {}).unwrap(), r#"{"provide": {}}"#);
        assert_eq!(to_compact_json(&ExecuteMsg::Withdraw {}).unwrap(), r#"{"withdraw": {}}"#);
        assert_eq!(to_compact_json(&QueryMsg::GetConfig {}).unwrap(), r#"{"get_config": {}}"#);
        assert_eq!(to_compact_json(&QueryMsg::Balance {}).unwrap(), r#"{"balance": {}}"#);
    }

    #[test]
    fn test_pretty_rendering() {
        let msg = QueryMsg::Provided {
            address: "core1xyz".to_string(),
        };
        assert_eq!(
            to_pretty_json(&msg).unwrap(),
            "{\n  \"provided\": {\n    \"address\": \"core1xyz\"\n  }\n}"
        );
        assert_eq!(
            to_pretty_json(&ExecuteMsg::Provide {}).unwrap(),
            "{\n  \"provide\": {}\n}"
        );
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let msg = ExecuteMsg::loan("café", 1);
        assert_eq!(
            to_compact_json(&msg).unwrap(),
            r#"{"loan": {"receiver": "caf\u00e9", "amount": "1"}}"#
        );

        let msg = QueryMsg::Provided {
            address: "😀".to_string(),
        };
        assert_eq!(
            to_pretty_json(&msg).unwrap(),
            "{\n  \"provided\": {\n    \"address\": \"\\ud83d\\ude00\"\n  }\n}"
        );
    }

    #[test]
    fn test_large_amount_stays_exact() {
        let msg = ExecuteMsg::loan("r", u128::MAX);
        let json = to_compact_json(&msg).unwrap();
        assert!(json.contains(&format!("\"amount\": \"{}\"", u128::MAX)));
    }
}
