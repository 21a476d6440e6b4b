use convbench::{
    config::{Args, BenchConfig},
    driver,
    report::ReportWriter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // the worker count is fixed before any processing starts
    let config =
        BenchConfig::from_args(args, &mut std::io::stdin().lock(), &mut std::io::stdout())?;

    let available = std::thread::available_parallelism().map_or(1, |n| n.get());
    log::info!(
        "using {} worker threads ({} processors available)",
        config.num_threads,
        available
    );

    let mut report = ReportWriter::new(std::io::stdout().lock());
    report.banner(config.num_threads, available)?;

    if let Err(err) = driver::run(&config, &mut report) {
        log::error!("{err}");
        return Err(err.into());
    }

    Ok(())
}
