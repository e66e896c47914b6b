// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::io;
use std::process;
use std::time::Instant;

#[cfg(feature = "annotate")]
use colored::Colorize;

#[cfg(feature = "annotate")]
use crate::annotate::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, annotate_frame, blank_canvas, find_next_run_dir,
    load_image, save_annotated,
};

use crate::cli::args::EvaluateArgs;
use crate::io::{load_frames, write_result_line};
use crate::results::EvaluationResult;
use crate::visualizer::HighlightPolicy;
use crate::{EvaluationConfig, Evaluator, Exercise, VERSION};
use crate::{error, good_form, info, issue, section, success, verbose, warn};

fn print_result(index: usize, total: usize, result: &EvaluationResult, elapsed_ms: f64) {
    verbose!(
        "frame {}/{} {}: {}, {:.2}ms",
        index + 1,
        total,
        result.phase,
        result.summary(),
        elapsed_ms
    );
    if result.is_correct {
        good_form!();
    }
    for found in &result.issues {
        issue!(found.severity, "{}", found.message);
    }
}

/// Run form evaluation over a frames file.
#[allow(clippy::too_many_lines, clippy::cast_precision_loss)]
pub fn run_evaluation(args: &EvaluateArgs) {
    let exercise: Exercise = match args.exercise.parse() {
        Ok(e) => e,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let policy: HighlightPolicy = match args.policy.parse() {
        Ok(p) => p,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let mut config = EvaluationConfig::new().with_policy(policy);
    if let Some(v) = args.min_visibility {
        config = config.with_min_visibility(v);
    }

    let evaluator = match Evaluator::new(config) {
        Ok(ev) => ev,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let frames = match load_frames(&args.frames) {
        Ok(f) => f,
        Err(e) => {
            error!("Error loading frames: {e}");
            process::exit(1);
        }
    };

    if frames.is_empty() {
        warn!("No frames found in {}", args.frames.display());
        return;
    }

    #[cfg(feature = "annotate")]
    let save_dir = if args.save {
        let dir = find_next_run_dir(&format!("runs/{exercise}"), "evaluate");
        if let Err(e) = std::fs::create_dir_all(&dir) {
            error!("Failed to create save directory {}: {e}", dir.display());
            process::exit(1);
        }
        Some(dir)
    } else {
        None
    };

    #[cfg(feature = "annotate")]
    let background = match (&args.image, args.save) {
        (Some(path), true) => match load_image(path) {
            Ok(img) => img,
            Err(e) => {
                error!("Error loading image {}: {e}", path.display());
                process::exit(1);
            }
        },
        _ => blank_canvas(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
    };

    #[cfg(not(feature = "annotate"))]
    if args.save {
        warn!(
            "--save requires the 'annotate' feature. Compile with --features annotate to enable saving."
        );
    }

    if !args.json {
        section!("form-coach {VERSION} 🏋️ {exercise}");
        verbose!(
            "{} frames from {}, policy={}, min_visibility={}",
            frames.len(),
            args.frames.display(),
            policy,
            args.min_visibility
                .map_or_else(|| "none".to_string(), |v| format!("{v}"))
        );
        verbose!("");
    }

    let mut correct = 0usize;
    let mut total_ms = 0.0;
    let stdout = io::stdout();

    for (i, frame) in frames.iter().enumerate() {
        let start = Instant::now();
        let result = evaluator.evaluate(exercise, frame);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        total_ms += elapsed_ms;

        if result.is_correct {
            correct += 1;
        }

        if args.json {
            if let Err(e) = write_result_line(stdout.lock(), &result) {
                error!("Failed to write result: {e}");
                process::exit(1);
            }
        } else {
            print_result(i, frames.len(), &result, elapsed_ms);
        }

        #[cfg(feature = "annotate")]
        if let Some(dir) = &save_dir {
            let highlights = evaluator.highlights(&result);
            let annotated = annotate_frame(&background, frame, &highlights);
            if let Err(e) = save_annotated(dir, i, &annotated) {
                error!("Failed to save annotated frame {i}: {e}");
            }
        }
    }

    if args.json {
        return;
    }

    verbose!(
        "\nSpeed: {:.3}ms evaluation per frame",
        total_ms / frames.len() as f64
    );
    success!(
        "{}/{} frames with good form",
        correct,
        frames.len()
    );

    #[cfg(feature = "annotate")]
    if let Some(dir) = &save_dir {
        info!("Results saved to {}", dir.display().to_string().bold());
    }
}
