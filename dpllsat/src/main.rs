use dpll::szs;
use dpllsat::{parse, Cli, Error};
use std::fs::File;
use std::io::Write;

fn main() {
    use clap::Parser;
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = run(&cli);
    if let Err(e) = result {
        print!("{}", szs::Status(e.kind()));
        if let Some(detail) = e.detail() {
            if let Err(e) = cli.output(detail) {
                log::error!("cannot write output: {}", e)
            }
        };
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let fm = parse::parse(&cli.file)?.join();
    let decision = dpllsat::decide(fm, cli)?;

    if let Some(file) = &cli.stats {
        let mut f = File::create(file)?;
        let stats = serde_json::to_string(&decision.stats)?;
        writeln!(f, "{}", stats)?;
    };

    print!("{}", szs::Status(decision.status));
    if let Some(model) = decision.model {
        cli.output(model)?;
    }
    Ok(())
}
