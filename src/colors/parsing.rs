use nom::bytes::complete::{tag, take_while_m_n};
use nom::combinator::{all_consuming, map_res, opt};
use nom::sequence::tuple;
use nom::IResult;

use super::ColorError;
use std::str::FromStr;

/// A 24-bit color parsed from a `#rrggbb` identifier
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn from_hex(input: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(input, 16)
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), from_hex)(input)
}

/// Parse `#rrggbb` or `#rrggbbaa`. Terminals cannot blend, so alpha is dropped
fn parse_hex_color(input: &str) -> IResult<&str, HexColor> {
    let (input, _) = tag("#")(input)?;
    let (input, (r, g, b)) = tuple((hex_primary, hex_primary, hex_primary))(input)?;
    let (input, _alpha) = opt(hex_primary)(input)?;
    Ok((input, HexColor { r, g, b }))
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(parse_hex_color)(s)
            .map(|(_, color)| color)
            .map_err(|_| ColorError::InvalidColor(s.to_string()))
    }
}

#[cfg(test)]
#[test]
fn test_parse_color() {
    let i = "#ffffff";
    let target = HexColor {
        r: 255,
        g: 255,
        b: 255,
    };
    assert_eq!(parse_hex_color(i).unwrap(), ("", target));

    let i = "#569CD6";
    let target = HexColor {
        r: 0x56,
        g: 0x9c,
        b: 0xd6,
    };
    assert_eq!(parse_hex_color(i).unwrap(), ("", target));

    let i = "#000000ff";
    let target = HexColor { r: 0, g: 0, b: 0 };
    assert_eq!(parse_hex_color(i).unwrap(), ("", target));
}

#[cfg(test)]
#[test]
fn test_parse_malformed_color() {
    assert_eq!(
        "569CD6".parse::<HexColor>(),
        Err(ColorError::InvalidColor("569CD6".to_string()))
    );
    assert!("#56".parse::<HexColor>().is_err());
    assert!("#gg0000".parse::<HexColor>().is_err());
    assert!("#0000001".parse::<HexColor>().is_err());
}
