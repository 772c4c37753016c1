use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::prelude::Reducible;

use crate::text::escape_html;

pub const DEFAULT_ALERT_DURATION_MS: u32 = 4000;
pub const ALERT_FADE_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Default for Severity {
    fn default() -> Self {
        Self::Info
    }
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "alert-info",
            Severity::Success => "alert-success",
            Severity::Warning => "alert-warning",
            Severity::Danger => "alert-danger",
        }
    }
}

/// One visible banner. `markup` is already escaped and safe for raw
/// insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: usize,
    pub markup: String,
    pub severity: Severity,
    pub duration: u32,
    pub fading: bool,
}

#[derive(Debug, Clone)]
pub enum AlertAction {
    Show {
        message: String,
        severity: Severity,
        duration: u32,
    },
    BeginFade(usize),
    Remove(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alerts {
    pub entries: Vec<Alert>,
    next_id: usize,
}

impl Reducible for Alerts {
    type Action = AlertAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AlertAction::Show {
                message,
                severity,
                duration,
            } => Rc::new(self.show(message, severity, duration)),
            AlertAction::BeginFade(id) => Rc::new(self.begin_fade(id)),
            AlertAction::Remove(id) => Rc::new(self.remove(id)),
        }
    }
}

impl Alerts {
    pub fn show(&self, message: String, severity: Severity, duration: u32) -> Self {
        let alert = Alert {
            id: self.next_id,
            markup: escape_html(Some(&message)),
            severity,
            duration,
            fading: false,
        };
        Self {
            entries: self.entries.iter().cloned().chain([alert]).collect(),
            next_id: self.next_id + 1,
        }
    }

    pub fn begin_fade(&self, id: usize) -> Self {
        let entries = self
            .entries
            .iter()
            .cloned()
            .map(|alert| {
                if alert.id == id {
                    Alert {
                        fading: true,
                        ..alert
                    }
                } else {
                    alert
                }
            })
            .collect();
        Self {
            entries,
            next_id: self.next_id,
        }
    }

    pub fn remove(&self, id: usize) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|alert| alert.id != id)
            .cloned()
            .collect();
        Self {
            entries,
            next_id: self.next_id,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserContext {
    Anonymous,
    User(UserInfo),
}

impl Default for UserContext {
    fn default() -> Self {
        Self::Anonymous
    }
}

impl UserContext {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, UserContext::Anonymous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(alerts: Alerts, message: &str) -> Alerts {
        alerts.show(message.into(), Severity::Info, DEFAULT_ALERT_DURATION_MS)
    }

    #[test]
    fn showing_appends_and_escapes_the_message() {
        let alerts = shown(Alerts::default(), "<a>&\"b\"");
        assert_eq!(alerts.entries.len(), 1);
        assert_eq!(alerts.entries[0].markup, "&lt;a&gt;&amp;&quot;b&quot;");
        assert_eq!(alerts.entries[0].duration, 4000);
        assert!(!alerts.entries[0].fading);
    }

    #[test]
    fn alerts_stack_with_distinct_ids() {
        let alerts = shown(shown(Alerts::default(), "first"), "second");
        assert_eq!(alerts.entries.len(), 2);
        assert_ne!(alerts.entries[0].id, alerts.entries[1].id);
    }

    #[test]
    fn fading_marks_only_the_matching_entry() {
        let alerts = shown(shown(Alerts::default(), "first"), "second");
        let id = alerts.entries[0].id;
        let alerts = alerts.begin_fade(id);
        assert!(alerts.entries[0].fading);
        assert!(!alerts.entries[1].fading);
    }

    #[test]
    fn removing_drops_the_entry() {
        let alerts = shown(shown(Alerts::default(), "first"), "second");
        let id = alerts.entries[0].id;
        let alerts = alerts.remove(id);
        assert_eq!(alerts.entries.len(), 1);
        assert_eq!(alerts.entries[0].markup, "second");
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let alerts = shown(Alerts::default(), "only");
        let alerts = alerts.begin_fade(99).remove(99);
        assert_eq!(alerts.entries.len(), 1);
        assert!(!alerts.entries[0].fading);
    }

    #[test]
    fn reducing_threads_actions_through() {
        let alerts = Rc::new(Alerts::default());
        let alerts = alerts.reduce(AlertAction::Show {
            message: "gone".into(),
            severity: Severity::Warning,
            duration: 0,
        });
        assert_eq!(alerts.entries[0].duration, 0);
        let id = alerts.entries[0].id;
        let alerts = alerts.reduce(AlertAction::BeginFade(id));
        assert!(alerts.entries[0].fading);
        let alerts = alerts.reduce(AlertAction::Remove(id));
        assert!(alerts.entries.is_empty());
    }

    #[test]
    fn severity_maps_to_css_classes() {
        assert_eq!(Severity::Info.css_class(), "alert-info");
        assert_eq!(Severity::Success.css_class(), "alert-success");
        assert_eq!(Severity::Warning.css_class(), "alert-warning");
        assert_eq!(Severity::Danger.css_class(), "alert-danger");
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn anonymous_contexts_are_unauthenticated() {
        assert!(!UserContext::Anonymous.is_authenticated());
        assert!(UserContext::User(UserInfo::default()).is_authenticated());
    }
}
