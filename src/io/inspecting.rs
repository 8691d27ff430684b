use anyhow::{Context, Result};
use tracing::instrument;

use crate::{cli::commands::Commands, codec::key::KeyMatrix};

#[instrument(skip(args))]
pub async fn handle_inspect(args: Commands) -> Result<()> {
    let key_text = match args {
        Commands::Inspect { key } => key,
        _ => unreachable!(),
    };

    let key = KeyMatrix::parse(&key_text).context("Invalid key text")?;
    let inverse = key.inverse().context("Key inversion failed")?;

    println!("key matrix ({0}x{0}): {1}", key.size(), key.render());
    println!("determinant mod 26:  {}", key.determinant_mod26());
    println!("inverse matrix:      {}", serde_json::to_string(&inverse)?);
    Ok(())
}
