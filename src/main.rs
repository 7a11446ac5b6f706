use std::fs;
use std::io::{self, IsTerminal};

use clap::Parser;
use color_eyre::Result;
use lootsplit::{analyzer, app::App, args::Options, input::Source, logging, report, roster, split};

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    logging::init(options.log_file.as_deref(), options.print)?;

    let source = Source::from_arg(options.file_path.as_deref());
    if source == Source::Stdin && io::stdin().is_terminal() {
        eprintln!("Paste the party hunt analyzer, then press Ctrl-D.");
    }
    let text = source.read()?;

    let report = if options.print {
        print_split(&options, &text)?
    } else {
        let terminal = ratatui::init();
        let result = App::new(source, text).run(terminal);
        ratatui::restore();
        result?
    };

    if let Some(report) = report {
        if !options.print {
            print!("{report}");
        }
        if let Some(path) = &options.output {
            fs::write(path, &report)?;
        }
    }
    Ok(())
}

fn print_split(options: &Options, text: &str) -> Result<Option<String>> {
    let (_, players) = analyzer::parse(text)?;
    let players = roster::without_names(&players, &options.exclude);
    let split = split::calculate(&players)?;
    let plain = report::plain(&split);
    if options.json {
        println!("{}", report::json(&split)?);
    } else {
        print!("{plain}");
    }
    Ok(Some(plain))
}
