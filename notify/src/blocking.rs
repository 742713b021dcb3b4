//! Blocking counterpart of [`Sender`](crate::Sender). Every call parks the
//! calling thread until the notification service replies.

use crate::{
    dbus::{NotificationsProxyBlocking, ServerInformation},
    error::{Error, Result},
    notification::Notification,
};
use zbus::proxy::CacheProperties;

#[derive(Debug, Clone)]
pub struct BlockingSender {
    proxy: NotificationsProxyBlocking<'static>,
}

impl BlockingSender {
    pub fn session() -> Result<Self> {
        let conn = zbus::blocking::Connection::session().map_err(Error::connect)?;
        Self::with_connection(&conn)
    }

    pub fn address(address: &str) -> Result<Self> {
        let conn = zbus::blocking::connection::Builder::address(address)
            .map_err(Error::connect)?
            .build()
            .map_err(Error::connect)?;
        Self::with_connection(&conn)
    }

    pub fn with_connection(conn: &zbus::blocking::Connection) -> Result<Self> {
        let proxy = NotificationsProxyBlocking::builder(conn)
            .cache_properties(CacheProperties::No)
            .build()?;

        Ok(Self { proxy })
    }

    pub fn send(&self, notification: &Notification) -> Result<u32> {
        let wire = notification.to_wire()?;
        log::debug!("{}", wire.log_line());

        Ok(self.proxy.notify(
            wire.app_name,
            wire.replaces_id,
            wire.app_icon,
            wire.summary,
            wire.body,
            wire.actions,
            wire.hints,
            wire.expire_timeout,
        )?)
    }

    pub fn close(&self, id: u32) -> Result<()> {
        Ok(self.proxy.close_notification(id)?)
    }

    pub fn capabilities(&self) -> Result<Vec<String>> {
        Ok(self.proxy.get_capabilities()?)
    }

    pub fn server_information(&self) -> Result<ServerInformation> {
        Ok(self.proxy.get_server_information()?.into())
    }
}

pub fn notify(appname: &str, title: &str, body: &str) -> Result<u32> {
    BlockingSender::session()?.send(&Notification::new(appname, title, body))
}
