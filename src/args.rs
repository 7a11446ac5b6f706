use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lootsplit", version, about = "Loot split calculator for party hunt analyzers")]
pub struct Options {
    /// Analyzer text file (stdin when omitted or "-")
    pub file_path: Option<PathBuf>,

    /// Print the split and exit instead of opening the interface
    #[arg(long)]
    pub print: bool,

    /// With --print, emit the split as JSON
    #[arg(long, requires = "print")]
    pub json: bool,

    /// Leave a player out of the split (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Also write the text report to this file
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_print_mode_flags() {
        let opts = Options::parse_from([
            "lootsplit", "hunt.txt", "--print", "--json", "-x", "Ann", "-x", "Ben",
        ]);
        assert_eq!(opts.file_path, Some(PathBuf::from("hunt.txt")));
        assert!(opts.print && opts.json);
        assert_eq!(opts.exclude, ["Ann", "Ben"]);
    }

    #[test]
    fn json_requires_print() {
        assert!(Options::try_parse_from(["lootsplit", "--json"]).is_err());
    }
}
