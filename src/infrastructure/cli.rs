use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(long, help = "Skip the boot sequence and open the gallery directly")]
    pub skip_boot: bool,

    #[arg(
        short,
        long,
        value_name = "PAGE",
        help = "Gallery page to open first (controls, overlays, terminal, timer)"
    )]
    pub page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["neonkit"]).expect("defaults parse");
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert!(!cli.skip_boot);
        assert_eq!(cli.page, None);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["neonkit", "--skip-boot", "-p", "terminal", "-f", "60"])
            .expect("flags parse");
        assert!(cli.skip_boot);
        assert_eq!(cli.page.as_deref(), Some("terminal"));
        assert_eq!(cli.frame_rate, 60.0);
    }
}
