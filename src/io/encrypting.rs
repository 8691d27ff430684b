use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::fs;
use tracing::{info, instrument};

use crate::{
    cli::commands::Commands,
    codec::{cipher::encrypt, key::KeyMatrix},
};

#[instrument(skip(args))]
pub async fn handle_encrypt(args: Commands) -> Result<()> {
    let (key_text, text, input, output) = match args {
        Commands::Encrypt {
            key,
            text,
            input,
            output,
        } => (key, text, input, output),
        _ => unreachable!(),
    };

    let key = KeyMatrix::parse(&key_text).context("Invalid key text")?;
    info!("Key matrix ({0}x{0}): {1}", key.size(), key.render());

    let plaintext = match (text, input) {
        (Some(t), _) => t,
        (None, Some(path)) => fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read input file: {:?}", path))?,
        (None, None) => unreachable!("clap requires --text or --input"),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {spinner:.cyan} {msg}").unwrap(),
    );
    pb.set_message("Encrypting blocks...");
    pb.enable_steady_tick(Duration::from_millis(80));

    let ciphertext = tokio::task::spawn_blocking(move || encrypt(&plaintext, &key))
        .await
        .context("Encryption task panicked")?;
    pb.finish_with_message("Encryption complete!");

    match output {
        Some(path) => {
            fs::write(&path, &ciphertext)
                .await
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            info!(
                "✅ Successfully encrypted {} letters into '{}'",
                ciphertext.len(),
                path.display()
            );
        }
        None => println!("{ciphertext}"),
    }
    Ok(())
}
