/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands;
use commands::{
  action::ActionCommand, chat::ChatCommand, fetch::FetchCommand, news::NewsCommand,
};

mod config;
use config::ConnectionArgs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "agentai")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  #[command(flatten)]
  connection: ConnectionArgs,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// List every action id and its endpoint
  Actions,
  /// Run a single action with JSON parameters
  Action(ActionCommand),
  /// Ask the invokeLlm action a question
  Chat(ChatCommand),
  /// Fetch news for a topic and have an LLM analyze the headlines
  News(NewsCommand),
  /// Grab the text of several web pages concurrently
  Fetch(FetchCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  // Execute command
  match cli.command {
    Commands::Actions => commands::action::list(),
    Commands::Action(cmd) => commands::action::execute(cmd, cli.connection.client()?).await?,
    Commands::Chat(cmd) => commands::chat::execute(cmd, cli.connection.client()?).await?,
    Commands::News(cmd) => commands::news::execute(cmd, cli.connection.client()?).await?,
    Commands::Fetch(cmd) => commands::fetch::execute(cmd, cli.connection.client()?).await?,
  }

  Ok(())
}
