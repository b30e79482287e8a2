mod cli;
mod cmd_color;
mod cmd_vec;
mod parse;
mod repl;

use cli::CommonArgs;
use cmd_color::ColorOptions;
use cmd_vec::VecOptions;
use repl::Calculator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, launch_time) = cli::parse_args::<CliArgs>();

    cli::setup_logging(
        args.common.log_timestamp.then_some(launch_time),
        args.common.log_level,
    );
    log::info!("{}", cli::launch_message("linal-calc", launch_time));

    match args.command.unwrap_or(SubCommand::Interactive) {
        SubCommand::Interactive => {
            let stdin = std::io::stdin();
            Calculator::new(stdin.lock(), std::io::stdout()).run()?;
        },
        SubCommand::Vec(opts) => {
            println!("{}", cmd_vec::evaluate(opts.op, &opts.a, opts.b.as_ref())?);
        },
        SubCommand::Color(opts) => {
            println!("{}", cmd_color::evaluate(&opts)?);
        },
    }

    Ok(())
}

/// Command line arguments of the calculator.
#[derive(clap::Parser, Debug)]
#[clap(
    author,
    version,
    about = "Vector and color calculator built on linal-base."
)]
pub struct CliArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Command to execute, `interactive` when omitted.
    #[clap(subcommand)]
    pub command: Option<SubCommand>,
}

/// Calculator command.
#[derive(clap::Subcommand, Debug)]
pub enum SubCommand {
    /// Runs the menu-driven calculator on two vectors A and B.
    Interactive,

    /// Evaluates one vector operation.
    Vec(VecOptions),

    /// Converts and prints a color.
    Color(ColorOptions),
}
