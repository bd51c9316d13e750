use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Error};
use clap::{builder::NonEmptyStringValueParser, Parser};
use log::Level;

use identicon_adapters::files::{get_identicon_path, write_identicon_file};
use identicon_core::Identicon;

/// Generate identicon image
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value_t = Level::Warn)]
    pub log_level: Level,

    /// Input string
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    name: String,

    /// Output directory
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Write image to standard output
    #[arg(long, conflicts_with = "path")]
    stdout: bool,
}

impl Cli {
    pub fn execute(&self) -> Result<(), Error> {
        let data = self.name.as_bytes();
        log::debug!("name: {}", self.name);
        log::debug!("bytes: {:?}", data);
        let identicon = Identicon::generate(data);

        if self.stdout {
            let mut stdout = std::io::stdout().lock();
            identicon.write_image(&mut stdout)?;
            stdout.flush()?;
            return Ok(());
        };
        let file_path = get_identicon_path(&self.path, &self.name)
            .map_err(Error::msg)?;
        write_identicon_file(&identicon, &file_path)
            .with_context(|| format!("failed to write {}", file_path.display()))?;
        println!("identicon saved to {}", file_path.display());
        Ok(())
    }
}
