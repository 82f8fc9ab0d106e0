//! matcalc CLI: evaluate a matrix operation read from a problem file.

use clap::{Args, Parser};
use log::info;
use matcalc::{evaluate, CalcError, Number};
use std::{fs, path::Path, path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(name = "matcalc")]
#[command(about = "Evaluate a matrix operation described in a text file")]
#[command(version)]
struct Cli {
    /// Problem file: an operation line, then each operand as `height width` and its elements
    file: PathBuf,

    #[command(flatten)]
    precision: Precision,
}

/// Element type used for the computation
#[derive(Args)]
#[group(required = true, multiple = false)]
struct Precision {
    /// Compute with single-precision (f32) elements
    #[arg(short = 'f', long = "float")]
    float: bool,

    /// Compute with double-precision (f64) elements
    #[arg(short = 'd', long = "double")]
    double: bool,
}

impl Precision {
    fn is_single(&self) -> bool {
        self.float && !self.double
    }
}

fn run<T: Number>(path: &Path) -> Result<String, CalcError> {
    let input = fs::read_to_string(path)?;
    let result = evaluate::<T>(&input)?;
    info!(
        "{}: result is {}x{}",
        path.display(),
        result.height(),
        result.width()
    );
    Ok(result.to_string())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let output = if cli.precision.is_single() {
        run::<f32>(&cli.file)
    } else {
        run::<f64>(&cli.file)
    };

    match output {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[matcalc] error: {}", e);
            e.exit_code()
        }
    }
}
