use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::IntoEnumIterator;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Language;
use crate::domain::models::ProviderName;
use crate::domain::services::help_text;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    let mut cmd = Command::new("debug");
    cmd = cmd
        .about("Debug helpers for Polyglot")
        .hide(true)
        .subcommand(Command::new("languages").about("List all supported target languages."))
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Polyglot with environment variable RUST_LOG=polyglot")
        )
        .subcommand(Command::new("enum-config").about("List all config keys as strings."));

    return cmd;
}

fn arg_provider() -> Arg {
    return Arg::new(ConfigKey::Provider.to_string())
        .short('p')
        .long(ConfigKey::Provider.to_string())
        .env("POLYGLOT_PROVIDER")
        .num_args(1)
        .help(format!(
            "The translation provider that serves detection and translation requests. [default: {}]",
            Config::default(ConfigKey::Provider)
        ))
        .value_parser(PossibleValuesParser::new(ProviderName::VARIANTS));
}

fn arg_provider_health_check_timeout() -> Arg {
    return Arg::new(ConfigKey::ProviderHealthCheckTimeout.to_string())
        .long(ConfigKey::ProviderHealthCheckTimeout.to_string())
        .env("POLYGLOT_PROVIDER_HEALTH_CHECK_TIMEOUT")
        .num_args(1)
        .help(
            format!("Time to wait in milliseconds before timing out when doing a healthcheck for a provider. [default: {}]", Config::default(ConfigKey::ProviderHealthCheckTimeout)),
        );
}

fn arg_target_language() -> Arg {
    return Arg::new(ConfigKey::TargetLanguage.to_string())
        .short('l')
        .long(ConfigKey::TargetLanguage.to_string())
        .env("POLYGLOT_TARGET_LANGUAGE")
        .num_args(1)
        .help(format!(
            "The language translations are produced in until changed with /language. [default: {}]",
            Config::default(ConfigKey::TargetLanguage)
        ))
        .value_parser(PossibleValuesParser::new(Language::VARIANTS));
}

fn subcommand_chat() -> Command {
    return Command::new("chat")
        .about("Start a new chat session.")
        .arg(arg_provider())
        .arg(arg_provider_health_check_timeout())
        .arg(arg_target_language());
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}")).underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    );

    return Command::new("polyglot")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(arg_provider())
        .arg(arg_provider_health_check_timeout())
        .arg(arg_target_language())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("POLYGLOT_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ProviderURL.to_string())
                .long(ConfigKey::ProviderURL.to_string())
                .env("POLYGLOT_PROVIDER_URL")
                .num_args(1)
                .help(format!(
                    "LibreTranslate API URL when using the libre provider. [default: {}]",
                    Config::default(ConfigKey::ProviderURL)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ProviderAPIKey.to_string())
                .long(ConfigKey::ProviderAPIKey.to_string())
                .env("POLYGLOT_PROVIDER_API_KEY")
                .num_args(1)
                .help("API key passed to the provider with each request, when required.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('u')
                .long(ConfigKey::Username.to_string())
                .env("POLYGLOT_USERNAME")
                .num_args(1)
                .help("Your user name displayed in all chat bubbles.")
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("languages", _)) => {
                    let res = Language::iter()
                        .map(|language| {
                            return format!("{language}: {}", language.display_name());
                        })
                        .collect::<Vec<String>>()
                        .join("\n");
                    println!("{}", res);
                }
                Some(("log-path", _)) => {
                    let log_path = dirs::cache_dir().unwrap().join("polyglot/debug.log");
                    println!("{}", log_path.to_str().unwrap());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
