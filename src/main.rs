use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use log::{error, info};
use serde_json::Value;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt};

mod message;
mod node;

use self::node::{Node, NodeConfig};

fn load_config() -> Result<NodeConfig, Box<dyn Error>> {
  let path = match env::args().nth(1).or_else(|| env::var("TANK_VOLUME_CONFIG").ok()) {
    Some(path) => path,
    None => return Ok(NodeConfig::default()),
  };

  info!("Loading configuration from {}", path);
  Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
}

#[actix_rt::main]
async fn main() -> Result<(), Box<dyn Error>> {
  env_logger::init();

  let node = Node::new(load_config()?)?;

  let mut lines = io::BufReader::new(io::stdin()).lines();
  let mut stdout = io::stdout();

  while let Some(line) = lines.next_line().await? {
    if line.trim().is_empty() {
      continue
    }

    let message = match serde_json::from_str::<Value>(&line) {
      Ok(message) => message,
      Err(err) => {
        error!("Invalid message: {}", err);
        continue
      },
    };

    if let Some(message) = node.handle(message) {
      let mut output = serde_json::to_vec(&message)?;
      output.push(b'\n');

      stdout.write_all(&output).await?;
      stdout.flush().await?;
    }
  }

  Ok(())
}
