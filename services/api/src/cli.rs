use crate::advise::{run_advise, run_profile_import, run_profile_show, AdviseArgs, ImportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skill_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Skill Advisor",
    about = "Serve or print ranked progression advice for an Old School RuneScape account",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the top three recommendations
    Advise(AdviseArgs),
    /// Inspect or update the stored profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Print the stored profile as JSON
    Show,
    /// Merge hiscores levels, from a saved response or the live hiscores, into the stored profile
    Import(ImportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Advise(args) => run_advise(args),
        Command::Profile {
            command: ProfileCommand::Show,
        } => run_profile_show(),
        Command::Profile {
            command: ProfileCommand::Import(args),
        } => run_profile_import(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["skill-advisor-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_profile_import() {
        let cli = Cli::try_parse_from([
            "skill-advisor-api",
            "profile",
            "import",
            "--player",
            "Zezima",
            "--file",
            "hiscores.txt",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Profile {
                command: ProfileCommand::Import(args),
            }) => {
                assert_eq!(args.player, "Zezima");
                assert_eq!(args.file, Some(std::path::PathBuf::from("hiscores.txt")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn profile_import_without_file_fetches_live() {
        let cli = Cli::try_parse_from([
            "skill-advisor-api",
            "profile",
            "import",
            "--player",
            "Iron Bob",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Profile {
                command: ProfileCommand::Import(args),
            }) => {
                assert_eq!(args.player, "Iron Bob");
                assert!(args.file.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn profile_import_requires_a_player() {
        assert!(Cli::try_parse_from(["skill-advisor-api", "profile", "import"]).is_err());
    }

    #[test]
    fn serve_accepts_host_and_port_overrides() {
        let cli = Cli::try_parse_from(["skill-advisor-api", "serve", "--port", "8080"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
