use anyhow::Result;
use clap::Parser;
use itunes_playlister::export::{write_conversion, Destination, LogReporter, Reporter, SilentReporter};
use itunes_playlister::{Conversion, ConversionPipeline, ConvertConfig, OutputFormat};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "itunes-playlister", version)]
#[command(about = "Convert iTunes playlist exports to m3u, m3u8 or xspf", long_about = None)]
struct Args {
    /// Path to an exported playlist (.xml) or a directory of them
    target_path: String,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Type of output list: m3u, m3u8 or xspf
    #[arg(short = 't', long = "type", default_value = "m3u")]
    format: OutputFormat,

    /// Output file or directory (default: next to the target)
    #[arg(short = 'o', long)]
    output_path: Option<String>,

    /// Path to the music files, replacing the original iTunes media folder
    #[arg(short = 'm', long)]
    music_path: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let target = PathBuf::from(shellexpand::tilde(&args.target_path).as_ref());
    let mut config = ConvertConfig::new(target, args.format);

    if let Some(output) = &args.output_path {
        config = config.with_output(PathBuf::from(shellexpand::tilde(output).as_ref()));
    }
    if let Some(music) = args.music_path.as_deref().filter(|m| !m.trim().is_empty()) {
        log::debug!("Rewriting track locations onto {}", music);
        config = config.with_music_path(shellexpand::tilde(music).into_owned());
    }

    let conversions = if args.verbose {
        convert(config, LogReporter::new())?
    } else {
        convert(config, SilentReporter)?
    };

    let mut written = 0;
    for conversion in &conversions {
        if write_conversion(conversion)? {
            written += 1;
        }
    }

    log::info!(
        "Wrote {} of {} playlist(s) as {}",
        written,
        conversions.len(),
        args.format
    );

    Ok(())
}

fn convert<R: Reporter>(config: ConvertConfig, reporter: R) -> Result<Vec<Conversion>> {
    let pipeline = ConversionPipeline::new(config, reporter)?;

    match pipeline.organizer().destination_kind() {
        Destination::Directory(dir) => log::debug!("Writing playlists into {:?}", dir),
        Destination::File(file) => log::debug!("Writing playlist to {:?}", file),
    }

    Ok(pipeline.run()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_is_case_insensitive() {
        let args = Args::try_parse_from(["itunes-playlister", "-t", "XSPF", "lists"]).unwrap();
        assert_eq!(args.format, OutputFormat::Xspf);

        let args = Args::try_parse_from(["itunes-playlister", "lists"]).unwrap();
        assert_eq!(args.format, OutputFormat::M3u);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = Args::try_parse_from(["itunes-playlister", "-t", "pls", "lists"]).unwrap_err();
        assert!(err.to_string().contains("unknown output format 'pls'"));
    }
}
