use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ledgerscope::cli::{
    handle_goal_command, handle_history_command, handle_request_command, handle_rule_command,
    handle_txn_command, GoalCommands, HistoryArgs, RequestCommands, RuleCommands,
    TransactionCommands,
};
use ledgerscope::store::LedgerFile;

#[derive(Parser)]
#[command(
    name = "ledgerscope",
    version,
    about = "Ledger analytics for a personal-finance backend",
    long_about = "ledgerscope stores a transaction ledger in a JSON file and derives \
                  analytics from it: bucketed balance history, saving-goal \
                  projections, rule-based categorization, and payment-request \
                  reconciliation."
)]
struct Cli {
    /// Path to the session's ledger file
    #[arg(short, long, global = true, env = "LEDGERSCOPE_FILE", default_value = "ledger.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new ledger file for a fresh session
    Init,

    /// Show bucketed balance history
    History(HistoryArgs),

    /// Saving-goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Payment-request commands
    #[command(subcommand)]
    Request(RequestCommands),

    /// Category-rule commands
    #[command(subcommand)]
    Rule(RuleCommands),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            if cli.file.exists() {
                anyhow::bail!("Refusing to overwrite existing ledger {}", cli.file.display());
            }
            let ledger = LedgerFile::new();
            ledger.save(&cli.file)?;
            println!("Initialized ledger {} (session {})", cli.file.display(), ledger.session);
        }
        Commands::History(args) => handle_history_command(&cli.file, args)?,
        Commands::Goal(cmd) => handle_goal_command(&cli.file, cmd)?,
        Commands::Request(cmd) => handle_request_command(&cli.file, cmd)?,
        Commands::Rule(cmd) => handle_rule_command(&cli.file, cmd)?,
        Commands::Transaction(cmd) => handle_txn_command(&cli.file, cmd)?,
    }

    Ok(())
}
