use clap::{Parser, Subcommand};
use hikma_i18n_cli::commands::{CheckArgs, TranslateArgs, run_check, run_languages, run_translate};
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "hikma-i18n")]
#[command(about = "Check and query the Hikma Digital translation files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report keys missing from any language
    Check(CheckArgs),

    /// Print the translation of a key
    Translate(TranslateArgs),

    /// List the site languages and their reading direction
    Languages,
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    hikma_i18n_cli::ui::init_logging();

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Translate(args) => run_translate(args),
        Commands::Languages => run_languages(),
    };

    result.map_err(miette::Report::new)
}
