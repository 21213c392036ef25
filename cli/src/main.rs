#![deny(missing_docs)]

//! # oasdoc CLI
//!
//! Writes markdown documentation for the `GET` operations of an OpenAPI JSON
//! document.
//!
//! Usage: `oasdoc <INPUT> <OUTPUT_DIR> [--mode summary|full-dump] [--no-readme]`

use clap::Parser;
use oasdoc_core::AppResult;

mod generate;
mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI to Markdown documentation")]
struct Cli {
    #[clap(flatten)]
    args: generate::GenerateArgs,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init();

    generate::execute(&cli.args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_arguments() {
        let cli = Cli::try_parse_from(["oasdoc", "spec.json", "out"]).unwrap();
        assert_eq!(cli.args.input, std::path::PathBuf::from("spec.json"));
        assert_eq!(cli.args.output, std::path::PathBuf::from("out"));
    }

    #[test]
    fn no_readme_accepts_common_env_values() {
        std::env::set_var("OASDOC_NO_README", "1");
        let from_env = Cli::try_parse_from(["oasdoc", "spec.json", "out"]);
        std::env::remove_var("OASDOC_NO_README");
        assert!(from_env.unwrap().args.no_readme);

        let from_flag = Cli::try_parse_from(["oasdoc", "spec.json", "out", "--no-readme"]).unwrap();
        assert!(from_flag.args.no_readme);
    }

    #[test]
    fn parses_mode_flag() {
        let cli = Cli::try_parse_from(["oasdoc", "spec.json", "out", "--mode", "full-dump"]).unwrap();
        assert_eq!(cli.args.mode, generate::ModeArg::FullDump);
    }

    #[test]
    fn rejects_missing_output() {
        assert!(Cli::try_parse_from(["oasdoc", "spec.json"]).is_err());
    }
}
