use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    tillerup completions bash > ~/.bash_completion.d/tillerup\n\n\
                  Generate zsh completions:\n    tillerup completions zsh > ~/.zfunc/_tillerup\n\n\
                  Generate fish completions:\n    tillerup completions fish > ~/.config/fish/completions/tillerup.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
