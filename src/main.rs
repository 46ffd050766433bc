use clap::{Parser, Subcommand};
use log::info;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use intmat::{codec, io, CodecConfig, SparseMatrix};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct CliArgs {
    #[command(subcommand)]
    command: Cmd,

    /// Also write `<operation>_result.txt` into this directory
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Serialize entries sorted by row, then column
    #[arg(long, global = true)]
    sorted: bool,

    /// Log level: 0 = off, 1 = info, 2 = debug, 3 = trace
    #[arg(long, global = true, default_value_t = 1)]
    log: u8,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// A + B
    Add { a: PathBuf, b: PathBuf },
    /// A - B
    Subtract { a: PathBuf, b: PathBuf },
    /// A × B
    Multiply { a: PathBuf, b: PathBuf },
    /// Transpose of A
    Transpose { a: PathBuf },
    /// Run every operation over the sample files
    Demo {
        #[arg(long, default_value = "./sample_input_for_students")]
        sample_dir: PathBuf,
    },
}

/// Settings shared by every subcommand
struct DriverConfig {
    out_dir: Option<PathBuf>,
    codec: CodecConfig,
}

impl DriverConfig {
    fn from_args(args: &CliArgs) -> Self {
        let codec = if args.sorted { CodecConfig::sorted() } else { CodecConfig::default() };
        Self {
            out_dir: args.out.clone(),
            codec,
        }
    }

    fn load(&self, path: &Path) -> intmat::Result<SparseMatrix> {
        let outcome = io::load_matrix(path, &self.codec)?;
        if !outcome.warnings.is_empty() {
            info!("{}: {} entries skipped", path.display(), outcome.warnings.len());
        }
        Ok(outcome.matrix)
    }

    /// Serializes `matrix` and writes the result file when an output directory is set
    fn emit(&self, operation: &str, matrix: &SparseMatrix) -> intmat::Result<String> {
        if let Some(dir) = &self.out_dir {
            io::write_result(dir, operation, matrix, &self.codec)?;
        }
        Ok(codec::serialize_with(matrix, &self.codec))
    }
}

fn log_level(level: u8) -> log::LevelFilter {
    use log::LevelFilter::*;
    match level {
        0 => Off,
        1 => Info,
        2 => Debug,
        _ => Trace,
    }
}

fn init_logger(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::*;

    let mut cb = ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    let config = cb.build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

/// The sample workflow: add and subtract two same-shaped matrices, multiply a
/// compatible pair and transpose the first matrix. A failing step is reported
/// and the remaining steps still run.
fn demo(config: &DriverConfig, sample_dir: &Path) -> Result<String, Box<dyn Error>> {
    let matrix1 = config.load(&sample_dir.join("easy_sample_02_1.txt"))?;
    let matrix2 = config.load(&sample_dir.join("easy_sample_02_2.txt"))?;
    let matrix3 = config.load(&sample_dir.join("easy_sample_02_3.txt"))?;

    let mut report = String::new();
    report.push_str(&format!("Matrix 1:\n{}\n", codec::serialize_with(&matrix1, &config.codec)));
    report.push_str(&format!("\nMatrix 2:\n{}\n", codec::serialize_with(&matrix2, &config.codec)));

    let steps: [(&str, &str, intmat::Result<SparseMatrix>); 4] = [
        ("Matrix Addition", "addition", matrix1.add(&matrix2)),
        ("Matrix Subtraction", "subtraction", matrix1.subtract(&matrix2)),
        ("Matrix Multiplication", "multiplication", matrix2.multiply(&matrix3)),
        ("Matrix 1 Transpose", "transpose", Ok(matrix1.transpose())),
    ];

    for (title, operation, result) in steps {
        report.push_str(&format!("\n{}:\n", title));
        match result.and_then(|matrix| config.emit(operation, &matrix)) {
            Ok(text) => {
                report.push_str(&text);
                report.push('\n');
                info!("{} completed", operation);
            }
            Err(e) => {
                log::error!("{} failed: {}", operation, e);
                report.push_str(&format!("{} error: {}\n", operation, e));
            }
        }
    }

    Ok(report.trim_end().to_string())
}

fn dispatch(args: &CliArgs) -> Result<String, Box<dyn Error>> {
    let config = DriverConfig::from_args(args);

    let output = match &args.command {
        Cmd::Add { a, b } => {
            let result = config.load(a)?.add(&config.load(b)?)?;
            config.emit("addition", &result)?
        }
        Cmd::Subtract { a, b } => {
            let result = config.load(a)?.subtract(&config.load(b)?)?;
            config.emit("subtraction", &result)?
        }
        Cmd::Multiply { a, b } => {
            let result = config.load(a)?.multiply(&config.load(b)?)?;
            config.emit("multiplication", &result)?
        }
        Cmd::Transpose { a } => {
            let result = config.load(a)?.transpose();
            config.emit("transpose", &result)?
        }
        Cmd::Demo { sample_dir } => demo(&config, sample_dir)?,
    };

    Ok(output)
}

fn run(args: &CliArgs) -> Result<String, Box<dyn Error>> {
    init_logger(log_level(args.log))?;
    info!("args: {:?}", args);

    let start = Instant::now();
    let res = dispatch(args);
    info!("time: {:?}", start.elapsed());

    res
}

fn main() {
    let args = CliArgs::parse();

    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("\x1b[0;31merror\x1b[0m: {e}");
            std::process::exit(1)
        }
    }
}
