use anyhow::Context;
use fdo_notify::{CloseReason, Hint, MarshalingError, Notification, Outcome, Sender, Urgency};
use std::io::{self, Write};

pub enum Event {
    Send {
        notification: Box<Notification>,
        wait: bool,
        print_id: bool,
    },
    Close(u32),
    Capabilities,
    Info,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum UrgencyArg {
    Low,
    Normal,
    Critical,
}

impl From<UrgencyArg> for Urgency {
    fn from(urgency: UrgencyArg) -> Self {
        match urgency {
            UrgencyArg::Low => Urgency::Low,
            UrgencyArg::Normal => Urgency::Normal,
            UrgencyArg::Critical => Urgency::Critical,
        }
    }
}

#[derive(clap::Args)]
pub struct SendArgs {
    title: String,

    #[arg(default_value = "")]
    body: String,

    #[arg(
        short,
        long,
        env = "NOTIFY_APP_NAME",
        default_value = "notifyctl",
        help = "Name of the sending application"
    )]
    app_name: String,

    #[arg(short, long, default_value = "", help = "Icon name or path")]
    icon: String,

    #[arg(short, long, default_value_t = 0, help = "Id of a notification to replace")]
    replaces_id: u32,

    #[arg(short = 'A', long = "action", value_name = "ID:LABEL", help = "Add an action")]
    actions: Vec<String>,

    #[arg(short = 'H', long = "hint", value_name = "TYPE:NAME:VALUE", help = "Add a hint")]
    hints: Vec<String>,

    #[arg(short, long, value_enum)]
    urgency: Option<UrgencyArg>,

    #[arg(
        short = 't',
        long,
        default_value_t = -1,
        allow_hyphen_values = true,
        help = "Milliseconds until the notification expires, -1 for the server default"
    )]
    expire_time: i32,

    #[arg(short, long, help = "Wait until an action is invoked or the notification is closed")]
    pub wait: bool,

    #[arg(short, long, help = "Print the id of the notification")]
    pub print_id: bool,
}

impl SendArgs {
    pub fn notification(&self) -> anyhow::Result<Notification> {
        let mut notification = Notification::new(&self.app_name, &self.title, &self.body)
            .icon(&self.icon)
            .replaces_id(self.replaces_id)
            .timeout(self.expire_time);

        for action in &self.actions {
            notification = match action.split_once(':') {
                Some((id, label)) => notification.action(id, label),
                None => notification.action(action, action),
            };
        }

        for hint in &self.hints {
            let (name, hint) = parse_hint(hint)?;
            notification = notification.hint(name, hint);
        }

        if let Some(urgency) = self.urgency {
            notification = notification.urgency(urgency.into());
        }

        Ok(notification)
    }
}

fn parse_hint(spec: &str) -> anyhow::Result<(&str, Hint)> {
    let mut parts = spec.splitn(3, ':');
    let (Some(kind), Some(name), Some(value)) = (parts.next(), parts.next(), parts.next()) else {
        anyhow::bail!("Invalid hint `{spec}`, expected TYPE:NAME:VALUE");
    };

    let hint = match kind {
        "boolean" | "bool" => Hint::Bool(
            value
                .parse()
                .with_context(|| format!("Invalid boolean for hint `{name}`"))?,
        ),
        "byte" => Hint::Byte(
            value
                .parse()
                .with_context(|| format!("Invalid byte for hint `{name}`"))?,
        ),
        "int" => Hint::Int(
            value
                .parse()
                .with_context(|| format!("Invalid int for hint `{name}`"))?,
        ),
        "string" => Hint::Str(value.into()),
        kind => {
            return Err(MarshalingError::UnsupportedHint {
                key: name.into(),
                signature: kind.into(),
            }
            .into())
        }
    };

    Ok((name, hint))
}

pub async fn emit(address: Option<&str>, event: Event) -> anyhow::Result<()> {
    let sender = match address {
        Some(address) => Sender::address(address).await,
        None => Sender::session().await,
    }
    .context("Failed to reach the notification service")?;
    let mut out = io::stdout().lock();

    match event {
        Event::Send {
            notification,
            wait: true,
            print_id,
        } => {
            let (id, outcome) = sender.send_and_wait(&notification).await?;
            if print_id {
                writeln!(out, "{id}")?;
            }
            match outcome {
                Outcome::Action(key) => writeln!(out, "{key}")?,
                Outcome::Closed(reason) => writeln!(out, "closed: {}", describe(reason))?,
            }
        }
        Event::Send {
            notification,
            print_id,
            ..
        } => {
            let id = sender.send(&notification).await?;
            if print_id {
                writeln!(out, "{id}")?;
            }
        }
        Event::Close(id) => sender.close(id).await?,
        Event::Capabilities => {
            for capability in sender.capabilities().await? {
                writeln!(out, "{capability}")?;
            }
        }
        Event::Info => {
            let info = sender.server_information().await?;
            writeln!(out, "name: {}", info.name)?;
            writeln!(out, "vendor: {}", info.vendor)?;
            writeln!(out, "version: {}", info.version)?;
            writeln!(out, "spec version: {}", info.spec_version)?;
        }
    }

    Ok(())
}

fn describe(reason: CloseReason) -> String {
    match reason {
        CloseReason::Expired => "expired".into(),
        CloseReason::Dismissed => "dismissed".into(),
        CloseReason::Closed => "closed by call".into(),
        CloseReason::Undefined(n) => format!("undefined ({n})"),
    }
}
