//! Application startup sequence

use super::cli::args::{auto_color, Args};
use super::error::{AppError, AppResult};
use crate::core::error_handling::{format_error_with_context, log_error_with_context};
use crate::core::logging::init_logging;
use crate::core::styles::palette_to_clap;
use crate::core::version::build_info;
use crate::report::BuildReport;
use crate::resolver::VersionResolver;
use clap::{CommandFactory, FromArgMatches};

/// Parse the process arguments, run, and exit with the resulting status
pub fn startup() {
    let matches = Args::command()
        .styles(palette_to_clap(auto_color()))
        .get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    std::process::exit(run(&args));
}

/// Run with parsed arguments and return the process exit code
pub fn run(args: &Args) -> i32 {
    if args.build_info {
        println!("{}", build_info());
        return 0;
    }

    let use_color = args.use_color();
    let logging = init_logging(
        Some(args.effective_log_level()),
        args.log_format.as_deref(),
        args.log_file.as_deref(),
        use_color,
    )
    .map_err(|e| AppError::Logging {
        message: e.to_string(),
    });
    let logging_ready = logging.is_ok();

    match logging.and_then(|_| execute(args, use_color)) {
        Ok(report) => {
            println!("{}", report);
            0
        }
        Err(e) => {
            if logging_ready {
                log_error_with_context(&e, e.operation_context());
            } else {
                eprintln!("{}", format_error_with_context(&e, e.operation_context()));
            }
            1
        }
    }
}

/// Resolve the version, load the manifest, and render the report
pub fn execute(args: &Args, use_color: bool) -> AppResult<String> {
    let format = args
        .report_format()
        .map_err(|message| AppError::InvalidArgument { message })?;
    let (manifest, source) = args.load_manifest()?;
    log::debug!("Manifest source: {:?}", source);

    let repo_dir = args.repository_dir();
    log::info!(
        "Resolving version of {} with {}",
        repo_dir.display(),
        args.git_binary().display()
    );
    let resolver = VersionResolver::with_git(repo_dir, args.git_binary());
    let version = resolver.resolve()?;

    let report = BuildReport::new(version, manifest);
    Ok(report.render(format, args.verbose, use_color))
}
