//! Command line flags and interactive prompts, resolved into a [Config] before anything runs.
use crate::render::RenderOptions;
use anyhow::Context;
use clap::Parser;
use star_coil::PointCount;
use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

/// Point count used when the points prompt is left empty.
pub const DEFAULT_POINTS: u32 = 10;

/// Generate star coil patterns: every star polygon for N points on a circle, one JPEG each.
#[derive(Parser, Debug)]
#[command(name = "starcoil", version, about)]
#[command(after_help = "EXAMPLES:
  # Ask for every option interactively
  starcoil

  # All patterns for 90 points with guide lines, without opening them
  starcoil -p 90 -l --no-display -o out/

  # Print the patterns for 10 points as JSON
  starcoil -p 10 --list
")]
pub struct Cli {
    /// Number of star points (half of it should be an odd number, e.g. 10, 30, 90)
    #[arg(short = 'p', long = "points", value_name = "N")]
    pub points: Option<PointCount>,

    /// Include text annotations on images
    #[arg(short = 't', long = "include-text")]
    pub include_text: bool,

    /// Include lines from center to points
    #[arg(short = 'l', long = "include-lines")]
    pub include_lines: bool,

    /// Open generated images after creation
    #[arg(short = 'd', long = "display", conflicts_with = "no_display")]
    pub display: bool,

    /// Never open generated images
    #[arg(long = "no-display")]
    pub no_display: bool,

    /// Directory the images are written to
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Width and height of the images in pixels
    #[arg(
        long = "size",
        value_name = "PX",
        default_value_t = RenderOptions::DEFAULT_SIZE,
        value_parser = clap::value_parser!(u32).range(100..)
    )]
    pub size: u32,

    /// Font file for labels, the built-in font is used if it can't be loaded
    #[arg(
        long = "font",
        value_name = "FILE",
        default_value = "/System/Library/Fonts/Helvetica.ttc"
    )]
    pub font: PathBuf,

    /// Font size in pixels
    #[arg(long = "font-size", value_name = "PX", default_value_t = 12.0)]
    pub font_size: f32,

    /// Print the patterns as JSON instead of rendering images
    #[arg(long = "list")]
    pub list: bool,

    /// Show debug output
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter for the verbosity flags, `RUST_LOG` still takes precedence.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub points: PointCount,
    pub render: RenderOptions,
    pub display: bool,
    pub output_dir: PathBuf,
    pub font: PathBuf,
    pub font_size: f32,
    pub list_only: bool,
}

/// Resolve `cli` into a [Config], prompting on `input`/`output` for anything not given.
///
/// Passing `--points` switches prompting off: text is included, lines are not, and images are
/// displayed unless `--no-display` is given.
pub fn resolve<R, W>(cli: Cli, input: &mut R, output: &mut W) -> anyhow::Result<Config>
where
    R: BufRead,
    W: Write,
{
    let interactive = cli.points.is_none();
    let points = match cli.points {
        Some(points) => points,
        None => {
            let answer = prompt(
                input,
                output,
                "How many star points (1/2 points should be an odd number: 90, 30, [10])? ",
            )?;
            if answer.is_empty() {
                PointCount::new(i64::from(DEFAULT_POINTS))?
            } else {
                answer.parse::<PointCount>()?
            }
        }
    };

    let ask_remaining = interactive && !cli.list;

    let include_text = if cli.include_text || !ask_remaining {
        true
    } else {
        let answer = prompt(input, output, "Include text ([y]/n)? ")?;
        answer.is_empty() || answer.eq_ignore_ascii_case("y")
    };

    let include_lines = if cli.include_lines {
        true
    } else if !ask_remaining {
        false
    } else {
        let answer = prompt(input, output, "Include lines (y/[n])? ")?;
        answer.eq_ignore_ascii_case("y")
    };

    let display = if cli.no_display || cli.list {
        false
    } else if cli.display || !ask_remaining {
        true
    } else {
        let answer = prompt(input, output, "Display generated images? ([y]/n)? ")?;
        !answer.eq_ignore_ascii_case("n")
    };

    Ok(Config {
        points,
        render: RenderOptions {
            include_text,
            include_lines,
            size: cli.size,
        },
        display,
        output_dir: cli.output_dir,
        font: cli.font,
        font_size: cli.font_size,
        list_only: cli.list,
    })
}

/// Write `question`, then read one line of answer. End of input is an empty answer.
fn prompt<R, W>(input: &mut R, output: &mut W, question: &str) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{question}").context("failed to write prompt")?;
    output.flush().context("failed to write prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read answer")?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use star_coil::StarCoilError;
    use std::io::Cursor;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("starcoil").chain(args.iter().copied())).unwrap()
    }

    fn resolve_with(args: &[&str], answers: &str) -> (anyhow::Result<Config>, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let config = resolve(cli(args), &mut input, &mut output);
        (config, String::from_utf8(output).unwrap())
    }

    #[test]
    fn points_flag_skips_prompts() {
        let (config, prompts) = resolve_with(&["-p", "30"], "");
        let config = config.unwrap();
        assert!(prompts.is_empty());
        assert_eq!(config.points.get(), 30);
        assert_eq!(
            config.render,
            RenderOptions {
                include_text: true,
                include_lines: false,
                size: 800,
            }
        );
        assert!(config.display);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn points_flag_with_options() {
        let (config, _) = resolve_with(&["-p", "30", "-l", "--no-display", "--size", "400"], "");
        let config = config.unwrap();
        assert!(config.render.include_lines);
        assert!(config.render.include_text);
        assert_eq!(config.render.size, 400);
        assert!(!config.display);
    }

    #[test]
    fn empty_answers_use_defaults() {
        let (config, prompts) = resolve_with(&[], "\n\n\n\n");
        let config = config.unwrap();
        assert_eq!(config.points.get(), DEFAULT_POINTS);
        assert!(config.render.include_text);
        assert!(!config.render.include_lines);
        assert!(config.display);
        assert!(prompts.starts_with("How many star points"));
        assert!(prompts.contains("Include text ([y]/n)? "));
        assert!(prompts.contains("Include lines (y/[n])? "));
        assert!(prompts.contains("Display generated images? ([y]/n)? "));
    }

    #[test]
    fn interactive_answers() {
        let (config, _) = resolve_with(&[], "14\nn\nY\nn\n");
        let config = config.unwrap();
        assert_eq!(config.points.get(), 14);
        assert!(!config.render.include_text);
        assert!(config.render.include_lines);
        assert!(!config.display);
    }

    #[test]
    fn forced_flags_are_not_asked() {
        let (config, prompts) = resolve_with(&["-t", "-l", "-d"], "90\n");
        let config = config.unwrap();
        assert_eq!(config.points.get(), 90);
        assert!(config.render.include_text && config.render.include_lines && config.display);
        assert!(!prompts.contains("Include"));
        assert!(!prompts.contains("Display"));
    }

    #[test]
    fn end_of_input_uses_defaults() {
        let (config, _) = resolve_with(&[], "");
        let config = config.unwrap();
        assert_eq!(config.points.get(), DEFAULT_POINTS);
        assert!(config.display);
    }

    #[test]
    fn invalid_points_answer() {
        for answer in ["0\n", "-3\n", "ten\n"] {
            let (config, _) = resolve_with(&[], answer);
            let err = config.unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<StarCoilError>(),
                    Some(StarCoilError::InvalidArgument { .. })
                ),
                "{answer:?}: {err}"
            );
        }
    }

    #[test]
    fn invalid_points_flag_is_rejected_by_parser() {
        let args = ["starcoil", "-p", "0"];
        assert!(Cli::try_parse_from(args).is_err());
        let args = ["starcoil", "-p", "abc"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn list_only_asks_for_points() {
        let (config, prompts) = resolve_with(&["--list"], "7\n");
        let config = config.unwrap();
        assert!(config.list_only);
        assert!(!config.display);
        assert!(!prompts.contains("Include"));
    }

    #[test]
    fn display_conflicts_with_no_display() {
        let args = ["starcoil", "-d", "--no-display"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn size_has_minimum() {
        let args = ["starcoil", "--size", "50"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn log_filter_levels() {
        assert_eq!(cli(&[]).log_filter(), "info");
        assert_eq!(cli(&["-v"]).log_filter(), "debug");
        assert_eq!(cli(&["-q"]).log_filter(), "warn");
    }
}
