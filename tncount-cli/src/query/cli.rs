use clap::{ArgAction, Command, arg, value_parser};

pub const QUERY_CMD: &str = "query";

pub fn create_query_cli() -> Command {
    Command::new(QUERY_CMD)
        .about("List the features of an annotation table that contain a position.")
        .arg_required_else_help(true)
        .arg(arg!(-f --features <features> "Tab-separated feature table (SGD_features.tab layout by default)"))
        .arg(arg!(-c --chrom <chrom> "Chromosome of the position"))
        .arg(arg!(-p --position <position> "1-based position").value_parser(value_parser!(u32)))
        .arg(arg!(-e --backend <backend> "Which backend to use (bits or linear)").required(false))
        .arg(
            arg!(--header "The feature table starts with a header row")
                .action(ArgAction::SetTrue),
        )
}
