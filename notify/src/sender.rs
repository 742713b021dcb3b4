use crate::{
    dbus::{NotificationsProxy, Outcome, ServerInformation},
    error::{Error, Result},
    notification::Notification,
};
use futures_lite::StreamExt;
use zbus::proxy::CacheProperties;

/// Client for the desktop notification service.
///
/// The connection is opened once and reused for every call made through the
/// same `Sender`.
#[derive(Debug, Clone)]
pub struct Sender {
    proxy: NotificationsProxy<'static>,
}

impl Sender {
    pub async fn session() -> Result<Self> {
        let conn = zbus::Connection::session().await.map_err(Error::connect)?;
        Self::with_connection(&conn).await
    }

    pub async fn address(address: &str) -> Result<Self> {
        let conn = zbus::connection::Builder::address(address)
            .map_err(Error::connect)?
            .build()
            .await
            .map_err(Error::connect)?;
        Self::with_connection(&conn).await
    }

    pub async fn with_connection(conn: &zbus::Connection) -> Result<Self> {
        let proxy = NotificationsProxy::builder(conn)
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self { proxy })
    }

    /// Sends `Notify` and returns the id assigned by the server.
    pub async fn send(&self, notification: &Notification) -> Result<u32> {
        let wire = notification.to_wire()?;
        log::debug!("{}", wire.log_line());

        let id = self
            .proxy
            .notify(
                wire.app_name,
                wire.replaces_id,
                wire.app_icon,
                wire.summary,
                wire.body,
                wire.actions,
                wire.hints,
                wire.expire_timeout,
            )
            .await?;

        log::debug!("Notification id: {id}");
        Ok(id)
    }

    /// Sends the notification and resolves once the server reports that an
    /// action was invoked on it or that it was closed.
    pub async fn send_and_wait(&self, notification: &Notification) -> Result<(u32, Outcome)> {
        // Subscribe first so a fast server cannot signal before we listen.
        let actions = self.proxy.receive_action_invoked().await?;
        let closed = self.proxy.receive_notification_closed().await?;

        let id = self.send(notification).await?;

        let actions = actions.filter_map(move |signal| match signal.args() {
            Ok(args) if *args.id() == id => Some(Outcome::Action(args.action_key().to_string())),
            Ok(_) => None,
            Err(e) => {
                log::warn!("Malformed ActionInvoked signal: {e}");
                None
            }
        });
        let closed = closed.filter_map(move |signal| match signal.args() {
            Ok(args) if *args.id() == id => Some(Outcome::Closed((*args.reason()).into())),
            Ok(_) => None,
            Err(e) => {
                log::warn!("Malformed NotificationClosed signal: {e}");
                None
            }
        });

        let outcomes = actions.or(closed);
        futures_lite::pin!(outcomes);

        match outcomes.next().await {
            Some(outcome) => Ok((id, outcome)),
            None => Err(Error::Connection(zbus::Error::Failure(
                "signal stream ended before the notification was closed".into(),
            ))),
        }
    }

    pub async fn close(&self, id: u32) -> Result<()> {
        log::debug!("CloseNotification id={id}");
        Ok(self.proxy.close_notification(id).await?)
    }

    pub async fn capabilities(&self) -> Result<Vec<String>> {
        Ok(self.proxy.get_capabilities().await?)
    }

    pub async fn server_information(&self) -> Result<ServerInformation> {
        Ok(self.proxy.get_server_information().await?.into())
    }
}

/// Sends a notification with every optional argument left at its default
/// over a fresh session bus connection.
pub async fn notify(appname: &str, title: &str, body: &str) -> Result<u32> {
    Sender::session()
        .await?
        .send(&Notification::new(appname, title, body))
        .await
}
