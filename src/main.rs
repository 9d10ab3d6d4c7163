#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "types2avro", about = "Convert type descriptors to Avro Schema")]
struct Cli {
    /// Path or URL to the type descriptor document
    #[arg(value_name = "DESCRIPTOR")]
    input: String,

    /// Path to the Avro schema output file
    #[arg(value_name = "AVRO")]
    output: String,

    /// JSON file with translation options
    #[arg(long)]
    config: Option<String>,

    /// JSON file mapping fully-qualified type names to alias lists
    #[arg(long)]
    aliases: Option<String>,

    /// Namespace override
    #[arg(long)]
    namespace: Option<String>,

    /// Emit platform integers as 32-bit `int`
    #[arg(long = "int-32")]
    int_32: bool,

    /// Emit platform floats as 32-bit `float`
    #[arg(long = "float-32")]
    float_32: bool,

    /// Wrap containers into named records with an identity field
    #[arg(long)]
    wrap_into_records: bool,

    /// Add a nullable `__id` field to records
    #[arg(long)]
    add_reference_id: bool,

    /// Union a missing marker into optionally-absent fields
    #[arg(long)]
    mark_non_total: bool,

    /// Include doc text
    #[arg(long)]
    doc: bool,

    /// Use each type's own namespace
    #[arg(long)]
    auto_namespace: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
impl Cli {
    fn options(&self) -> typed_avro_schema::Result<typed_avro_schema::Options> {
        use typed_avro_schema::fetch::{fetch_content, ContentCache};
        use typed_avro_schema::{Options, SchemaFlag};

        let base = match &self.config {
            Some(path) => serde_json::from_str(&fetch_content(path, &mut ContentCache::new())?)?,
            None => Options::new(),
        };

        let mut flags = Options::new()
            .with_doc(self.doc)
            .with_auto_namespace(self.auto_namespace);
        for (enabled, flag) in [
            (self.int_32, SchemaFlag::Int32),
            (self.float_32, SchemaFlag::Float32),
            (self.wrap_into_records, SchemaFlag::WrapIntoRecords),
            (self.add_reference_id, SchemaFlag::AddReferenceId),
            (self.mark_non_total, SchemaFlag::MarkNonTotalTypedDicts),
        ] {
            if enabled {
                flags = flags.with_flag(flag);
            }
        }
        if let Some(namespace) = &self.namespace {
            flags = flags.with_namespace(namespace);
        }
        Ok(base.merge(flags))
    }
}

#[cfg(feature = "cli")]
fn main() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(level),
        )
        .init();

    let result = cli.options().and_then(|options| {
        typed_avro_schema::converter::convert_descriptor_file(
            &cli.input,
            &cli.output,
            &options,
            cli.aliases.as_deref(),
        )
    });
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary is only available with the `cli` feature enabled.");
    std::process::exit(1);
}
