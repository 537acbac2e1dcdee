use clap::{Parser, Subcommand};

/// One line typed into the interactive shell.
#[derive(Parser, Debug)]
#[command(multicall = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Refetch and show the list
    #[command(visible_alias = "ls")]
    List,
    /// Add an item
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        due: String,
    },
    /// Edit an item
    Edit {
        id: u64,
        #[arg(num_args = 0..)]
        text: Vec<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete an item
    #[command(visible_alias = "rm")]
    Delete { id: u64 },
    /// Mark an item completed
    #[command(visible_alias = "complete")]
    Done { id: u64 },
    /// Clear the current notification
    Dismiss,
    /// Leave the shell
    #[command(visible_alias = "exit")]
    Quit,
}

/// Split a line into words, honouring single and double quotes.
pub fn split_args(line: &str) -> Result<Vec<String>, String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_word = false;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    args.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if quote.is_some() {
        return Err("Unterminated quote".to_string());
    }
    if in_word {
        args.push(current);
    }
    Ok(args)
}

/// Parse a shell line. Blank lines yield `Ok(None)`; the error is printable help or usage text.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>, String> {
    let args = split_args(line)?;
    if args.is_empty() {
        return Ok(None);
    }
    ReplLine::try_parse_from(args)
        .map(|l| Some(l.command))
        .map_err(|e| e.render().to_string())
}
