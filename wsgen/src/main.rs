use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use structopt::StructOpt;
use thiserror::Error;

use wsgen_codegen as codegen;
use wsgen_wsdl as wsdl;

#[derive(Debug, Error)]
enum Error {
    #[error("Error parsing WSDL: {0}")]
    ParseError(#[from] wsdl::error::Error),

    #[error("WSDL definition has no name and none could be derived from the input")]
    MissingName,

    #[error("Definition name {0:?} is not a plain file name")]
    InvalidName(String),

    #[error("Unable to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Generate Go stubs from a WSDL document
#[derive(Debug, StructOpt)]
struct Args {
    /// Directory the generated file is written to
    #[structopt(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Package name used in the generated file
    #[structopt(short, long, default_value = "ws")]
    package: String,

    /// Overrides the definition name, which is also the output file name
    #[structopt(short, long)]
    name: Option<String>,

    /// Path or URL of the WSDL document
    #[structopt(default_value = "resources/stockquote.wsdl")]
    input: String,
}

fn fallback_name(input: &str) -> Option<String> {
    Path::new(input)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(ToOwned::to_owned)
}

/// Places `<name>.go` inside `output_dir`, refusing names that would resolve
/// anywhere else.
fn output_path(output_dir: &Path, name: &str) -> Result<PathBuf, Error> {
    let mut components = Path::new(name).components();

    match (components.next(), components.next()) {
        (Some(Component::Normal(component)), None) if component == name => {
            Ok(output_dir.join(format!("{}.go", name)))
        }
        _ => Err(Error::InvalidName(name.to_owned())),
    }
}

fn run(args: &Args) -> Result<PathBuf, Error> {
    let mut definition = wsdl::parse(&args.input)?;

    if let Some(name) = &args.name {
        definition.name = name.clone();
    } else if definition.name.is_empty() {
        definition.name = fallback_name(&args.input).ok_or(Error::MissingName)?;
        log::warn!(
            "definition has no name, using {} from the input path",
            definition.name
        );
    }

    let path = output_path(&args.output_dir, &definition.name)?;
    let options = codegen::Options {
        package: args.package.clone(),
    };

    let source = codegen::from_definition(definition, &options);
    fs::write(&path, source).map_err(|source| Error::WriteError {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[paw::main]
fn main(args: Args) -> Result<(), Error> {
    pretty_env_logger::init();

    match run(&args) {
        Ok(path) => {
            log::info!("wrote {}", path.display());
            Ok(())
        }

        Err(err) => {
            log::error!("{}", err);
            Err(err)
        }
    }
}
