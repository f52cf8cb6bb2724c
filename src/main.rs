use guidedown::error::CliError;
use guidedown::{parser, translator};

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Format {
    Html,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Format::Html),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format: {}", other)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "guidedown", about = "Render guide markup to HTML or JSON nodes")]
struct Opt {
    #[structopt(long = "debug")]
    pub debug: bool,
    #[structopt(long = "format", default_value = "html", possible_values = &["html", "json"])]
    pub format: Format,
    /// Extra class for the HTML wrapper element
    #[structopt(long = "class")]
    pub class_name: Option<String>,
    /// Markup file to read; stdin when omitted
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,
}

fn read(input: Option<&PathBuf>) -> Result<String, CliError> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        }),
        None => {
            let mut content = String::new();
            io::stdin().lock().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

fn write(buf: &str) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", buf)?;
    Ok(())
}

fn convert(content: &str, opt: &Opt) -> Result<String, CliError> {
    let nodes = parser::render(content);
    if opt.debug {
        tracing::debug!(?nodes, "render nodes");
    }
    match opt.format {
        Format::Html => {
            let options = translator::TranslateOptions {
                class_name: opt.class_name.clone(),
            };
            Ok(translator::translate(&nodes, &options))
        }
        Format::Json => Ok(serde_json::to_string_pretty(&nodes)?),
    }
}

fn run(opt: &Opt) -> Result<(), CliError> {
    let content = read(opt.input.as_ref())?;
    let output = convert(&content, opt)?;
    write(&output)
}

fn main() {
    let opt = Opt::from_args();

    // --debug forces DEBUG, otherwise RUST_LOG decides
    let filter = if opt.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    tracing::debug!(?opt, "options");

    if let Err(err) = run(&opt) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
