mod notify;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Bus address to use instead of the session bus"
    )]
    address: Option<String>,

    #[command(subcommand)]
    command: NotifyCommand,
}

#[derive(Subcommand)]
enum NotifyCommand {
    #[command(about = "Send a notification")]
    Send(notify::SendArgs),

    #[command(about = "Close a notification")]
    Close { id: u32 },

    #[command(about = "List the capabilities of the notification server")]
    Capabilities,

    #[command(about = "Show information about the notification server")]
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let address = cli.address.as_deref();

    match cli.command {
        NotifyCommand::Send(args) => {
            let event = notify::Event::Send {
                notification: Box::new(args.notification()?),
                wait: args.wait,
                print_id: args.print_id,
            };
            notify::emit(address, event).await?
        }
        NotifyCommand::Close { id } => notify::emit(address, notify::Event::Close(id)).await?,
        NotifyCommand::Capabilities => notify::emit(address, notify::Event::Capabilities).await?,
        NotifyCommand::Info => notify::emit(address, notify::Event::Info).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use fdo_notify::{Hint, Urgency};

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn send_defaults() {
        let cli = Cli::try_parse_from(["notifyctl", "send", "Hello"]).unwrap();
        let NotifyCommand::Send(args) = cli.command else {
            panic!("expected send");
        };
        let notification = args.notification().unwrap();

        assert_eq!(notification.title, "Hello");
        assert_eq!(notification.body, "");
        assert_eq!(notification.icon, "");
        assert_eq!(notification.replaces_id, 0);
        assert!(notification.actions.is_empty());
        assert!(notification.hints.is_empty());
        assert_eq!(notification.timeout, -1);
        assert!(!args.wait);
    }

    #[test]
    fn send_everything() {
        let cli = Cli::try_parse_from([
            "notifyctl",
            "--address",
            "unix:path=/run/user/1000/bus",
            "send",
            "Hello",
            "World",
            "--app-name",
            "MyApp",
            "--icon",
            "zen-beta",
            "--replaces-id",
            "7",
            "--action",
            "default:Open",
            "--hint",
            "int:value:25",
            "--urgency",
            "critical",
            "--expire-time",
            "-1",
            "--wait",
        ])
        .unwrap();
        assert_eq!(cli.address.as_deref(), Some("unix:path=/run/user/1000/bus"));

        let NotifyCommand::Send(args) = cli.command else {
            panic!("expected send");
        };
        let notification = args.notification().unwrap();

        assert_eq!(notification.appname, "MyApp");
        assert_eq!(notification.body, "World");
        assert_eq!(notification.icon, "zen-beta");
        assert_eq!(notification.replaces_id, 7);
        assert_eq!(notification.actions, ["default", "Open"]);
        assert_eq!(notification.hints["value"], Hint::Int(25));
        assert_eq!(notification.hints["urgency"], Hint::from(Urgency::Critical));
        assert_eq!(notification.timeout, -1);
        assert!(args.wait);
    }

    #[test]
    fn unsupported_hint_is_rejected() {
        let cli =
            Cli::try_parse_from(["notifyctl", "send", "Hello", "--hint", "double:x:1.5"]).unwrap();
        let NotifyCommand::Send(args) = cli.command else {
            panic!("expected send");
        };
        assert!(args.notification().is_err());
    }
}
