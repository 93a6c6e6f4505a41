//! greet - a small application built on runcli
//!
//! Greets NAME, optionally louder or more often.

use clap::{Arg, ArgAction};
use runcli::config::ConfigBuilder;
use runcli::{AppError, ArgumentMap, Command, Context, OptionMap, Runner, Value};

const USAGE: &str = "[OPTIONS]... NAME";

#[derive(Default)]
struct Greet {
    name: String,
}

impl Command for Greet {
    fn command_options(&self) -> OptionMap {
        OptionMap::from([
            ("greeting".to_string(), Value::from("Hello")),
            ("repeat".to_string(), Value::Int(1)),
            ("shout".to_string(), Value::Bool(false)),
            ("quiet".to_string(), Value::Bool(false)),
        ])
    }

    fn command_arguments(&self) -> ArgumentMap {
        ArgumentMap::from([("name".to_string(), Value::Null)])
    }

    fn define_options(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            Arg::new("greeting")
                .short('g')
                .long("greeting")
                .value_name("TEXT")
                .help("Greeting to use"),
        )
        .arg(
            Arg::new("repeat")
                .short('r')
                .long("repeat")
                .value_name("N")
                .help("Print the greeting N times"),
        )
        .arg(
            Arg::new("shout")
                .short('s')
                .long("shout")
                .action(ArgAction::SetTrue)
                .help("Greet in upper case"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Print nothing"),
        )
    }

    fn process_options(&mut self, ctx: &mut Context) -> runcli::Result<()> {
        if ctx.is_verbose() {
            log::set_max_level(log::LevelFilter::Debug);
        }

        let flag = |name: &str| ctx.option(name).and_then(Value::as_bool).unwrap_or(false);
        if flag("shout") && flag("quiet") {
            return Err(AppError::InvalidOptions(
                "--shout and --quiet are mutually exclusive".to_string(),
            ));
        }

        let repeat = ctx.option("repeat").and_then(Value::as_int).unwrap_or(1);
        if repeat < 1 {
            return Err(AppError::InvalidOptions(format!(
                "--repeat must be at least 1, got {}",
                repeat
            )));
        }
        Ok(())
    }

    fn process_arguments(&mut self, ctx: &mut Context) -> runcli::Result<()> {
        ctx.bind_positionals();
        self.name = ctx
            .argument("name")
            .map(Value::to_string)
            .unwrap_or_default();
        Ok(())
    }

    fn command(&mut self, ctx: &Context) -> runcli::Result<i32> {
        if ctx.option("quiet").and_then(Value::as_bool) == Some(true) {
            return Ok(0);
        }

        let greeting = ctx.option("greeting").map(Value::to_string).unwrap_or_default();
        let mut line = format!("{}, {}!", greeting, self.name);
        if ctx.option("shout").and_then(Value::as_bool) == Some(true) {
            line = line.to_uppercase();
        }

        let repeat = ctx.option("repeat").and_then(Value::as_int).unwrap_or(1);
        for _ in 0..repeat {
            println!("{}", line);
        }
        Ok(0)
    }
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let config_path = std::env::var("GREET_CONFIG").ok();
    let config = ConfigBuilder::new("greet")
        .with_file(config_path.as_deref())
        .with_usage(Some(USAGE.to_string()))
        .build();

    let result = Runner::with_config(Greet::default(), std::env::args_os().skip(1), config)
        .and_then(|mut runner| runner.run());

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            if matches!(e, AppError::Unimplemented) {
                eprintln!();
                eprintln!("Hint: implement Command::command for this application.");
            }
            std::process::exit(1);
        }
    }
}
