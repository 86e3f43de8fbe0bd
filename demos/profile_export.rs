use clap::Parser;
use folio::{ExportError, ExporterBuilder, FileSink, Profile};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Exports a profile JSON file to a paginated PDF", long_about = None)]
struct Args {
    /// Profile data to export
    #[arg(long, default_value = "demos/data/profile.json")]
    profile: PathBuf,

    /// Optional export configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the PDF is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Skip system font discovery; text is then left unpainted
    #[arg(long, default_value_t = false)]
    no_system_fonts: bool,
}

fn main() -> Result<(), ExportError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "folio=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let profile: Profile = serde_json::from_str(&fs::read_to_string(&args.profile)?)?;
    println!("✓ Profile loaded from {}", args.profile.display());

    let mut builder = ExporterBuilder::new().with_system_fonts(!args.no_system_fonts);
    if let Some(config) = &args.config {
        builder = builder.with_config_file(config)?;
    }
    let exporter = builder.build()?;
    println!("✓ Exporter built.");

    let mut sink = FileSink::new(&args.out_dir);
    let artifact = exporter.export_to(&profile, &mut sink)?;

    println!(
        "\nSuccess! Generated {} ({} page(s))",
        args.out_dir.join(&artifact.file_name).display(),
        artifact.page_count()
    );
    Ok(())
}
