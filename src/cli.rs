use clap::Parser;

/// Built-in candidate pool for the demo.
const DEFAULT_TAGS: &[&str] = &[
    "JavaScript",
    "Java",
    "Ruby",
    "Rust",
    "Python",
    "Go",
    "Clojure",
    "Haskell",
    "Erlang",
    "Elixir",
];

#[derive(Parser)]
#[command(
    name = "tagfield",
    version,
    about = "Inline-autocompleting tag entry field demo"
)]
pub struct Cli {
    /// Comma-separated candidate tag names (replaces the built-in set)
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Accent color as #RRGGBB
    #[arg(long)]
    pub accent: Option<String>,
}

impl Cli {
    /// The candidate pool to run the demo with.
    pub fn tag_names(&self) -> Vec<String> {
        match &self.tags {
            Some(tags) => tags
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            None => DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_when_no_flag() {
        let cli = Cli::parse_from(["tagfield"]);
        assert_eq!(cli.tag_names().len(), DEFAULT_TAGS.len());
    }

    #[test]
    fn tags_flag_splits_on_commas_and_trims() {
        let cli = Cli::parse_from(["tagfield", "--tags", "rust, go ,,zig"]);
        assert_eq!(
            cli.tag_names(),
            vec!["rust".to_string(), "go".to_string(), "zig".to_string()]
        );
    }
}
