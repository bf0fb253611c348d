use gantt_rs::api::GanttChartConfig;
use gantt_rs::render::DEFAULT_EXPORT_FILE_NAME;
use gantt_rs::telemetry::init_default_tracing;
use gantt_rs::timing::{TimelineOutput, TimingCapture, build_resources_timeline};
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input_path)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input_path.display()))?;
    let capture = TimingCapture::from_json_str(&raw).map_err(|err| err.to_string())?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            GanttChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => GanttChartConfig::default(),
    };

    match build_resources_timeline(&capture, &config).map_err(|err| err.to_string())? {
        TimelineOutput::Chart(document) => {
            let path = document
                .write_to_path(&args.output_path)
                .map_err(|err| err.to_string())?;
            println!("wrote {}", path.display());
            Ok(())
        }
        TimelineOutput::NotSupported(message) => Err(message.to_owned()),
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from(DEFAULT_EXPORT_FILE_NAME);
    let mut config_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin render_timeline -- --input <capture.json> [--output <file.svg>] [--config <config.json>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        input_path: input_path.ok_or_else(|| "missing required --input <path>".to_owned())?,
        output_path,
        config_path,
    })
}
