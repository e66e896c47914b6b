// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use form_coach::cli::args::{Cli, Commands};
use form_coach::cli::evaluate::run_evaluation;
use form_coach::cli::logging::set_verbose;

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Evaluate(args) => {
            set_verbose(args.verbose);
            run_evaluation(args);
        }
    }
}
