#![deny(missing_docs)]

//! # Generate Command
//!
//! Renders the markdown tree for one specification file.

use std::path::PathBuf;

use oasdoc_core::{
    generate_docs, AppError, AppResult, FsWriter, GenerateOptions, GenerationReport, RenderMode,
};

/// Page layout selectable from the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeArg {
    /// Summary, docs link and parameter listing.
    #[default]
    Summary,
    /// Raw operation object plus every resolved reference.
    FullDump,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Summary => RenderMode::Summary,
            ModeArg::FullDump => RenderMode::FullDump,
        }
    }
}

/// Arguments for a documentation run.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the OpenAPI JSON document.
    pub input: PathBuf,

    /// Directory receiving `README.md` and one page per `GET` operation.
    pub output: PathBuf,

    /// Layout of operation pages.
    #[clap(long, value_enum, env = "OASDOC_MODE", default_value_t = ModeArg::Summary)]
    pub mode: ModeArg,

    /// Do not write `README.md`.
    #[clap(long, env = "OASDOC_NO_README", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_readme: bool,
}

impl GenerateArgs {
    /// Core options equivalent to these arguments.
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            mode: self.mode.into(),
            readme: !self.no_readme,
        }
    }
}

/// Executes the documentation run.
pub fn execute(args: &GenerateArgs) -> AppResult<GenerationReport> {
    if !args.input.exists() {
        return Err(AppError::General(format!(
            "OpenAPI file not found: {:?}",
            args.input
        )));
    }

    let mut writer = FsWriter::new(&args.output);
    let report = generate_docs(&args.input, &args.options(), &mut writer)?;

    tracing::info!(
        output = %writer.root().display(),
        pages = report.written.len(),
        "generated documentation"
    );
    Ok(report)
}
