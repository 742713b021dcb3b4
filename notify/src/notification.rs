use crate::{
    error::MarshalingError,
    hint::{Hint, Urgency},
};
use std::collections::HashMap;
use zbus::zvariant::Value;

/// A single `Notify` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub appname: String,
    pub title: String,
    pub body: String,
    pub icon: String,
    pub replaces_id: u32,
    pub actions: Vec<String>,
    pub hints: HashMap<String, Hint>,
    /// Milliseconds, -1 lets the server decide and 0 never expires.
    pub timeout: i32,
}

/// Arguments of `Notify` in the order the method signature declares them.
#[derive(Debug, PartialEq)]
pub struct WireArgs<'a> {
    pub app_name: &'a str,
    pub replaces_id: u32,
    pub app_icon: &'a str,
    pub summary: &'a str,
    pub body: &'a str,
    pub actions: Box<[&'a str]>,
    pub hints: HashMap<&'a str, Value<'a>>,
    pub expire_timeout: i32,
}

impl WireArgs<'_> {
    pub(crate) fn log_line(&self) -> String {
        format!(
            "Notify app_name={:?} replaces_id={} summary={:?} actions={} hints={}",
            self.app_name,
            self.replaces_id,
            self.summary,
            self.actions.len(),
            self.hints.len()
        )
    }
}

impl Notification {
    pub fn new(appname: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            appname: appname.into(),
            title: title.into(),
            body: body.into(),
            icon: String::new(),
            replaces_id: 0,
            actions: Vec::new(),
            hints: HashMap::new(),
            timeout: -1,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn replaces_id(mut self, id: u32) -> Self {
        self.replaces_id = id;
        self
    }

    pub fn action(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.actions.push(id.into());
        self.actions.push(label.into());
        self
    }

    /// Replaces the action list verbatim, ids and labels alternating.
    pub fn actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions = actions.into_iter().map(Into::into).collect();
        self
    }

    pub fn hint(mut self, key: impl Into<String>, hint: impl Into<Hint>) -> Self {
        self.hints.insert(key.into(), hint.into());
        self
    }

    pub fn urgency(self, urgency: Urgency) -> Self {
        self.hint("urgency", urgency)
    }

    pub fn timeout(mut self, timeout: i32) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn to_wire(&self) -> Result<WireArgs<'_>, MarshalingError> {
        let texts = [
            ("app name", &self.appname),
            ("icon", &self.icon),
            ("title", &self.title),
            ("body", &self.body),
        ];
        if let Some(&(arg, _)) = texts.iter().find(|(_, s)| s.contains('\0')) {
            return Err(MarshalingError::InteriorNul { arg });
        }
        if self.actions.iter().any(|a| a.contains('\0')) {
            return Err(MarshalingError::InteriorNul { arg: "action" });
        }
        if self.hints.iter().any(|(k, v)| k.contains('\0') || v.has_nul()) {
            return Err(MarshalingError::InteriorNul { arg: "hint" });
        }

        Ok(WireArgs {
            app_name: &self.appname,
            replaces_id: self.replaces_id,
            app_icon: &self.icon,
            summary: &self.title,
            body: &self.body,
            actions: self.actions.iter().map(String::as_str).collect(),
            hints: self
                .hints
                .iter()
                .map(|(k, v)| (k.as_str(), v.to_value()))
                .collect(),
            expire_timeout: self.timeout,
        })
    }
}
