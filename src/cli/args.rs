// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Evaluate Options:
    --exercise, -e <NAME>     Exercise to evaluate (squats, pushups)
    --frames, -f <PATH>       JSON file with one frame or a list of frames
    --min-visibility <F>      Drop landmarks whose visibility is below this
    --policy <POLICY>         Highlight tie-break (first-match, worst-severity)
    --json                    Print one JSON result per line
    --save                    Save annotated frames to runs/<exercise>/evaluate
    --image <PATH>            Background image for annotated frames
    --verbose <BOOL>          Show verbose output

Examples:
    form-coach evaluate --exercise squats --frames session.json
    form-coach evaluate -e pushups -f pose.json --json
    form-coach evaluate -e squats -f session.json --min-visibility 0.5 --save
    form-coach evaluate -e squats -f session.json --save --image still.jpg --policy worst-severity"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate exercise form for recorded landmark frames
    Evaluate(EvaluateArgs),
}

/// Arguments for the evaluate command.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Exercise to evaluate (squats, pushups)
    #[arg(short, long)]
    pub exercise: String,

    /// JSON file with one frame or a list of frames
    #[arg(short, long)]
    pub frames: PathBuf,

    /// Drop landmarks whose visibility is below this
    #[arg(long)]
    pub min_visibility: Option<f32>,

    /// Highlight tie-break when issues share a joint (first-match, worst-severity)
    #[arg(long, default_value = "first-match")]
    pub policy: String,

    /// Print one JSON result per line instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Save annotated frames to runs/<exercise>/evaluate
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Background image for annotated frames
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_evaluate_args_defaults() {
        let args = Cli::parse_from(["app", "evaluate", "-e", "squats", "-f", "frames.json"]);
        match args.command {
            Commands::Evaluate(evaluate_args) => {
                assert_eq!(evaluate_args.exercise, "squats");
                assert_eq!(evaluate_args.frames, PathBuf::from("frames.json"));
                assert_eq!(evaluate_args.policy, "first-match");
                assert!(evaluate_args.min_visibility.is_none());
                assert!(!evaluate_args.json);
                assert!(!evaluate_args.save);
                assert!(evaluate_args.verbose);
            }
        }
    }

    #[test]
    fn test_evaluate_args_custom() {
        let args = Cli::parse_from([
            "app",
            "evaluate",
            "--exercise",
            "pushups",
            "--frames",
            "pose.json",
            "--min-visibility",
            "0.5",
            "--policy",
            "worst-severity",
            "--json",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Evaluate(evaluate_args) => {
                assert_eq!(evaluate_args.exercise, "pushups");
                assert!((evaluate_args.min_visibility.unwrap() - 0.5).abs() < f32::EPSILON);
                assert_eq!(evaluate_args.policy, "worst-severity");
                assert!(evaluate_args.json);
                assert!(!evaluate_args.verbose);
            }
        }
    }

    #[test]
    fn test_evaluate_args_require_frames() {
        assert!(Cli::try_parse_from(["app", "evaluate", "-e", "squats"]).is_err());
    }
}
