use std::io;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use pinba_dump::cliopt::CliOpt;
use pinba_dump::input::{ProtobufDecoder, UdpReader};
use pinba_dump::output::{HumanReadableFormatter, LineWriter};
use pinba_dump::runner::Runner;

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();
    init_tracing(opt.verbose);

    let reader = UdpReader::bind(opt.listen)
        .map_err(|e| format!("can't open UDP socket on {}: {}", opt.listen, e))?;
    tracing::info!("Start listening on udp://{}", reader.local_addr()?);

    let mut runner = Runner::new(
        Box::new(reader),
        Box::new(ProtobufDecoder::new()),
        Box::new(HumanReadableFormatter::new(opt.verbose)),
        Box::new(LineWriter::new(io::stdout())),
    );

    runner.run()?;

    Ok(())
}
