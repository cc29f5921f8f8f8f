use anyhow::Result;
use clap::{CommandFactory, Parser};
use clover_fontgen::{config, FontGenConfig, UsageError};
use std::{path::PathBuf, process::ExitCode};

/// Generates a font texture and clover font def from a TTF file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "clover_fontgen [options] <TTF_FILENAME>")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Pixel height of the font
    #[arg(short, long, default_value_t = 0.0, hide_default_value = true)]
    size: f32,

    /// Find a font size closest to this ascent
    #[arg(short, long, default_value_t = 0, hide_default_value = true)]
    ascent: i32,

    /// Width of the atlas
    #[arg(short = 'x', long = "x", default_value_t = 0, hide_default_value = true)]
    width: u32,

    /// Height of the atlas [default: the width]
    #[arg(short = 'y', long = "y", default_value_t = 0, hide_default_value = true)]
    height: u32,

    /// Output png binary data in the c file
    #[arg(short, long)]
    image: bool,

    /// Directory the generated files are written to [default: .]
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// The TrueType font to convert
    ttf_filename: Option<PathBuf>,
}
impl Cli {
    fn into_config(self) -> Result<FontGenConfig> {
        let size = config::size_request(self.size, self.ascent)?;
        let (width, height) = config::atlas_dimensions(self.width, self.height)?;
        let font_path = match self.ttf_filename {
            Some(path) => path,
            None => return Err(UsageError::new("font name not specified").into()),
        };

        let mut config = FontGenConfig::new(font_path, size, width, height);
        if self.image {
            config = config.embed_image();
        }
        if let Some(dir) = self.output_dir {
            config = config.output_dir(dir);
        }
        Ok(config)
    }
}

fn execute(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    clover_fontgen::run(&config)
}
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print().ok();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };
    match execute(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error encountered: {:?}", e);
            if e.downcast_ref::<UsageError>().is_some() {
                eprintln!();
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}
