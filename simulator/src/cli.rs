//! Command-line configuration for the simulator.

use clap::Parser;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use sevenseg_common::DisplayStyle;
use sevenseg_common::config::{DEFAULT_DIGIT_COUNT, DEFAULT_DIGIT_SPACING, DEFAULT_SEGMENT_THICKNESS, MAX_DIGIT_COUNT};

/// Mines on the counter when a new game starts (beginner board).
const DEFAULT_MINES: u32 = 10;

#[derive(Debug, Parser)]
#[command(name = "sevenseg-sim", version, about = "Desktop host for the seven-segment display widget")]
pub struct Cli {
    /// Value of the mines counter at the start of each game.
    #[arg(long, default_value_t = DEFAULT_MINES)]
    pub mines: u32,

    /// Digit slots per display.
    #[arg(long, default_value_t = DEFAULT_DIGIT_COUNT as u8, value_parser = clap::value_parser!(u8).range(1..=MAX_DIGIT_COUNT as i64))]
    pub digits: u8,

    /// Segment thickness in device units.
    #[arg(long, default_value_t = DEFAULT_SEGMENT_THICKNESS, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub thickness: u32,

    /// Gap between digits and around the border.
    #[arg(long, default_value_t = DEFAULT_DIGIT_SPACING, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub spacing: u32,

    /// Show zeros instead of blanks in unused leading slots.
    #[arg(long)]
    pub leading_zeros: bool,

    /// Lit segment color as RRGGBB.
    #[arg(long, default_value = "FFFF00", value_parser = parse_color)]
    pub foreground: Rgb888,

    /// Background color as RRGGBB.
    #[arg(long, default_value = "000000", value_parser = parse_color)]
    pub background: Rgb888,

    /// Window pixel scale.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,
}

impl Cli {
    /// Style shared by both displays.
    pub fn display_style(&self) -> DisplayStyle {
        DisplayStyle::new()
            .with_digit_count(usize::from(self.digits))
            .with_segment_thickness(self.thickness)
            .with_digit_spacing(self.spacing)
            .with_leading_zeros(self.leading_zeros)
            .with_colors(self.background, self.foreground)
    }
}

/// Parse `RRGGBB` or `#RRGGBB`.
fn parse_color(s: &str) -> Result<Rgb888, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected a color as RRGGBB, got \"{s}\""));
    }
    let raw = u32::from_str_radix(hex, 16).map_err(|e| e.to_string())?;
    Ok(Rgb888::new((raw >> 16) as u8, (raw >> 8) as u8, raw as u8))
}

/// Format a color the way `--foreground`/`--background` accept it.
pub fn format_color(color: Rgb888) -> String { format!("{:02X}{:02X}{:02X}", color.r(), color.g(), color.b()) }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_accepts_hex() {
        assert_eq!(parse_color("FFFF00"), Ok(Rgb888::new(255, 255, 0)));
        assert_eq!(parse_color("#12ab9F"), Ok(Rgb888::new(0x12, 0xAB, 0x9F)));
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert!(parse_color("FFF").is_err(), "Short form is not supported");
        assert!(parse_color("GG0000").is_err());
        assert!(parse_color("+12345").is_err(), "Sign must not sneak through from_str_radix");
        assert!(parse_color("").is_err());
    }

    #[test]
    fn test_format_color_round_trips_through_parser() {
        let color = Rgb888::new(1, 128, 255);
        assert_eq!(format_color(color), "0180FF");
        assert_eq!(parse_color(&format_color(color)), Ok(color));
    }

    #[test]
    fn test_defaults_match_widget_defaults() {
        let cli = Cli::parse_from(["sevenseg-sim"]);
        assert_eq!(cli.mines, 10);
        assert_eq!(cli.display_style(), DisplayStyle::default());
    }

    #[test]
    fn test_digit_count_is_range_checked() {
        assert!(Cli::try_parse_from(["sevenseg-sim", "--digits", "0"]).is_err());
        assert!(Cli::try_parse_from(["sevenseg-sim", "--digits", "17"]).is_err());
        let cli = Cli::try_parse_from(["sevenseg-sim", "--digits", "5", "--leading-zeros"]).unwrap();
        let style = cli.display_style();
        assert_eq!(style.digit_count, 5);
        assert!(style.leading_zeros_visible);
    }

    #[test]
    fn test_spacing_and_thickness_are_range_checked() {
        assert!(Cli::try_parse_from(["sevenseg-sim", "--spacing", "2000000000"]).is_err());
        assert!(Cli::try_parse_from(["sevenseg-sim", "--spacing", "101"]).is_err());
        assert!(Cli::try_parse_from(["sevenseg-sim", "--thickness", "0"]).is_err());

        let cli = Cli::try_parse_from(["sevenseg-sim", "--digits", "16", "--spacing", "100", "--thickness", "10"]).unwrap();
        assert_eq!(cli.display_style().validate(), Ok(()), "Every accepted combination must be drawable");
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        assert!(Cli::try_parse_from(["sevenseg-sim", "--foreground", "yellow"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
