use crate::cli::OutputFormat;
use crate::commands::evaluate_assessment;
use crate::infra::build_engine;
use clap::Args;
use matron::assessment::sample_assessment;
use matron::config::AppConfig;
use matron::error::AppError;
use matron::MATRON_VERSION;
use std::io::{self, Write};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let engine = build_engine(&config.rules, None)?;
    let assessment = sample_assessment()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.format == OutputFormat::Text {
        writeln!(
            out,
            "MATRON {MATRON_VERSION} demo: reference client, {} rules loaded\n",
            engine.rules().len()
        )?;
    }
    evaluate_assessment(&assessment, &engine, args.format, &mut out)
}
