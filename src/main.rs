use warmupkit::init_logging;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    // Any command-line argument selects CLI mode; a bare invocation runs
    // the interactive wizard
    if std::env::args().len() > 1 {
        warmupkit::cli::run()
    } else {
        warmupkit::wizard::run()
    }
}
