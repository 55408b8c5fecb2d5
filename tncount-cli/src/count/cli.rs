use clap::{ArgAction, Command, arg, value_parser};

pub const COUNT_CMD: &str = "count";

pub fn create_count_cli() -> Command {
    Command::new(COUNT_CMD)
        .about("Count WIG track hits falling inside each feature of an annotation table.")
        .arg_required_else_help(true)
        .arg(arg!(-f --features <features> "Tab-separated feature table (SGD_features.tab layout by default)"))
        .arg(arg!(-w --wig <wig> "WIG track of hit positions, or '-' for stdin"))
        .arg(arg!(-o --output <output> "Output csv path; a .gz suffix compresses it").required(false))
        .arg(arg!(-e --backend <backend> "Which backend to use (bits or linear)").required(false))
        .arg(
            arg!(-t --threads <threads> "Number of threads used for counting")
                .required(false)
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(-c --config <config> "TOML file with run settings").required(false))
        .arg(
            arg!(--header "The feature table starts with a header row")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--"skip-zero" "Ignore variableStep lines whose value is zero (fixedStep zeros are always ignored)")
                .action(ArgAction::SetTrue),
        )
}
