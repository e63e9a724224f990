use std::sync::Mutex;

/// Blocking user interaction the dashboard needs: yes/no and a notice.
pub trait UserPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Prompt backed by a single web request.
///
/// The browser shows the confirmation dialog (`hx-confirm`) and only then
/// posts `confirmado=sim`; alerts are collected and rendered into the
/// response.
#[derive(Debug, Default)]
pub struct RequestPrompt {
    confirmed: bool,
    alerts: Mutex<Vec<String>>,
}

impl RequestPrompt {
    pub fn new(confirmed: bool) -> Self {
        Self {
            confirmed,
            alerts: Mutex::new(Vec::new()),
        }
    }

    pub fn from_form_value(value: Option<&str>) -> Self {
        let confirmed = value
            .map(|v| {
                let v = v.trim();
                v.eq_ignore_ascii_case("sim") || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);
        Self::new(confirmed)
    }

    pub fn into_alerts(self) -> Vec<String> {
        self.alerts.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl UserPrompt for RequestPrompt {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!("confirm '{}' => {}", message, self.confirmed);
        self.confirmed
    }

    fn alert(&self, message: &str) {
        let mut alerts = self.alerts.lock().unwrap_or_else(|e| e.into_inner());
        alerts.push(message.to_string());
    }
}
