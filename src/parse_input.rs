use crate::error::InvalidChannelInput;
use crate::types::ChannelValue;

pub fn format_channel(value: ChannelValue) -> String {
    value.rounded().to_string()
}

/// Parses committed text into a channel value.
///
/// Surrounding whitespace is a parse failure unless `trim_whitespace` is set.
pub fn parse_channel_input(
    raw: &str,
    trim_whitespace: bool,
) -> Result<ChannelValue, InvalidChannelInput> {
    ChannelValue::try_new(parse_number(raw, trim_whitespace)?)
}

/// Number parsing without the range check, for live clamping.
pub fn parse_number(raw: &str, trim_whitespace: bool) -> Result<f64, InvalidChannelInput> {
    let text = if trim_whitespace { raw.trim() } else { raw };
    text.parse::<f64>()
        .map_err(|_| InvalidChannelInput::NotANumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_rounded_integer() {
        assert_eq!(format_channel(ChannelValue::clamped(150.0)), "150");
        assert_eq!(format_channel(ChannelValue::clamped(86.6)), "87");
        assert_eq!(format_channel(ChannelValue::clamped(0.2)), "0");
    }

    #[test]
    fn accepts_decimals_in_range() {
        assert_eq!(parse_channel_input("255.0", false).map(ChannelValue::get), Ok(255.0));
        assert_eq!(parse_channel_input("12.5", false).map(ChannelValue::get), Ok(12.5));
        assert_eq!(parse_channel_input("0", false).map(ChannelValue::get), Ok(0.0));
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert_eq!(
            parse_channel_input("", false),
            Err(InvalidChannelInput::NotANumber(String::new()))
        );
        assert_eq!(
            parse_channel_input("abc", false),
            Err(InvalidChannelInput::NotANumber("abc".to_string()))
        );
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            parse_channel_input("999", false),
            Err(InvalidChannelInput::OutOfRange(999.0))
        );
        assert_eq!(
            parse_channel_input("-1", false),
            Err(InvalidChannelInput::OutOfRange(-1.0))
        );
        assert!(parse_channel_input("inf", false).is_err());
        assert!(parse_channel_input("NaN", false).is_err());
    }

    #[test]
    fn parse_number_skips_range_check() {
        assert_eq!(parse_number("999", false), Ok(999.0));
        assert_eq!(parse_number("-3.5", false), Ok(-3.5));
        assert!(parse_number("12a", false).is_err());
    }

    #[test]
    fn whitespace_only_trimmed_when_enabled() {
        assert!(parse_channel_input(" 42 ", false).is_err());
        assert_eq!(parse_channel_input(" 42 ", true).map(ChannelValue::get), Ok(42.0));
        assert!(parse_channel_input("   ", true).is_err());
    }

    #[test]
    fn formatted_output_parses_back_to_same_rounded_value() {
        for raw in [0.0, 0.4, 12.5, 87.0, 127.49, 200.51, 255.0] {
            let value = ChannelValue::clamped(raw);
            let reparsed = parse_channel_input(&format_channel(value), false);
            assert_eq!(reparsed.map(ChannelValue::rounded), Ok(value.rounded()));
        }
    }
}
