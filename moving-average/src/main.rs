use anyhow::{Context, Result};
use boxcar_common::init_tracer;
use clap::Parser;
use moving_average::{
    Block, BlockParameters, processing::run_stream, samples::SampleReader,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};
use tracing::{info, level_filters::LevelFilter};

// cargo run --bin moving-average -- --window-length 4 --scale 1.0 --input samples.txt

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    #[command(flatten)]
    block: BlockParameters,

    /// Number of samples delivered to the block per call, 0 delivers the whole stream at once
    #[clap(long, env, default_value = "1024")]
    batch_size: usize,

    /// File of whitespace separated samples, stdin is used if not set
    #[clap(long)]
    input: Option<PathBuf>,

    /// File to write one output sample per line to, stdout is used if not set
    #[clap(long)]
    output: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[clap(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let _tracer = init_tracer!(args.log_level);

    let mut block = args.block.build()?;
    info!(
        window_length = block.window_length(),
        scale = block.scale(),
        history = block.history(),
        batch_size = args.batch_size,
        "Moving average configured"
    );

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Cannot open input {}", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Cannot create output {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let total = run_stream(
        &mut block,
        SampleReader::new(reader),
        args.batch_size,
        &mut writer,
    )?;
    writer.flush()?;

    info!(
        consumed = total.consumed,
        produced = total.produced,
        "Stream complete"
    );
    Ok(())
}
