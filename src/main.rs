use clap::Parser;
use tagfield::cli::Cli;
use tagfield::tui;
use tagfield::tui::theme::Theme;

fn main() {
    let cli = Cli::parse();
    let theme = Theme::with_accent(cli.accent.as_deref());

    if let Err(e) = tui::run(cli.tag_names(), theme) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
