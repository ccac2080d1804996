use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ivan")]
#[command(about = "Terminal chat client for the Ivan assistant", long_about = None)]
pub struct Args {
    #[arg(help = "Send a single message and exit; interactive chat otherwise")]
    pub message: Vec<String>,

    #[arg(
        short = 'n',
        long = "new",
        help = "Start a new conversation instead of resuming the last one"
    )]
    pub new_conversation: bool,

    #[arg(
        long = "model",
        help = "Model tier id (fast, plus, pro, smart, creator)"
    )]
    pub model: Option<String>,

    #[arg(long = "list-sessions", help = "List stored conversations and exit")]
    pub list_sessions: bool,

    #[arg(long = "search", help = "Search stored conversations by title and exit")]
    pub search: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Print diagnostic output")]
    pub verbose: bool,
}
