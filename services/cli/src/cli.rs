use crate::commands::{
    run_care_plan_prompt, run_evaluate, run_handover_prompt, run_incident_prompt, run_rules,
    CarePlanPromptArgs, EvaluateArgs, HandoverArgs, IncidentArgs, RulesArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::bootstrap;
use clap::{Parser, Subcommand, ValueEnum};
use matron::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "matron",
    about = "Evaluate MATRON care assessments against trigger rules from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score an assessment, fire trigger rules and print the care plan
    Evaluate(EvaluateArgs),
    /// List the rules the engine would load
    Rules(RulesArgs),
    /// Render an assistant prompt from an assessment
    Prompt {
        #[command(subcommand)]
        command: PromptCommand,
    },
    /// Evaluate the built-in reference client (default command)
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PromptCommand {
    /// Shift handover summary prompt
    Handover(HandoverArgs),
    /// Care planning prompt seeded with the engine's recommendations
    CarePlan(CarePlanPromptArgs),
    /// Incident analysis prompt
    Incident(IncidentArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = bootstrap()?;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Evaluate(args) => run_evaluate(&config, args),
        Command::Rules(args) => run_rules(&config, args),
        Command::Prompt {
            command: PromptCommand::Handover(args),
        } => run_handover_prompt(&config, args),
        Command::Prompt {
            command: PromptCommand::CarePlan(args),
        } => run_care_plan_prompt(&config, args),
        Command::Prompt {
            command: PromptCommand::Incident(args),
        } => run_incident_prompt(args),
        Command::Demo(args) => run_demo(&config, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments parse")
    }

    #[test]
    fn evaluate_accepts_rules_and_format() {
        let cli = parse(&[
            "matron",
            "evaluate",
            "--assessment",
            "client.json",
            "--rules",
            "extra.json",
            "--format",
            "csv",
        ]);

        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.assessment, PathBuf::from("client.json"));
                assert_eq!(args.rules, Some(PathBuf::from("extra.json")));
                assert_eq!(args.format, OutputFormat::Csv);
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }

    #[test]
    fn evaluate_defaults_to_text() {
        let cli = parse(&["matron", "evaluate", "--assessment", "client.json"]);
        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.format, OutputFormat::Text);
                assert!(args.rules.is_none());
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }

    #[test]
    fn evaluate_requires_an_assessment() {
        assert!(Cli::try_parse_from(["matron", "evaluate"]).is_err());
    }

    #[test]
    fn prompt_subcommands_use_kebab_case() {
        let cli = parse(&[
            "matron",
            "prompt",
            "care-plan",
            "--assessment",
            "client.json",
            "--family-preferences",
            "stay at home",
        ]);
        match cli.command {
            Some(Command::Prompt {
                command: PromptCommand::CarePlan(args),
            }) => assert_eq!(args.family_preferences.as_deref(), Some("stay at home")),
            other => panic!("expected care-plan prompt, got {other:?}"),
        }
    }

    #[test]
    fn incident_collects_repeated_witnesses() {
        let cli = parse(&[
            "matron",
            "prompt",
            "incident",
            "--assessment",
            "client.json",
            "--incident-type",
            "fall",
            "--description",
            "Found on floor",
            "--witness",
            "night carer",
            "--witness",
            "daughter",
        ]);
        match cli.command {
            Some(Command::Prompt {
                command: PromptCommand::Incident(args),
            }) => assert_eq!(args.witnesses, vec!["night carer", "daughter"]),
            other => panic!("expected incident prompt, got {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_leaves_demo_to_run() {
        assert!(parse(&["matron"]).command.is_none());
    }
}
