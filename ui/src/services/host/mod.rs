//! Host-platform boundary: toast notifications, navigation and wizard
//! dismissal are fire-and-forget calls into the page embedding the wizard.

#[cfg(feature = "web")]
pub mod web_host;

#[cfg(feature = "web")]
pub use web_host::WebHost;

/// Toast severities observed by the host.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastSeverity {
    Success,
    Error,
}

impl ToastSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "success",
            ToastSeverity::Error => "error",
        }
    }
}

/// Where to send the user after a successful submit.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NavigationTarget {
    /// An external web page, addressed by full URL.
    WebPage { url: String },
    /// The standard record view for an object.
    RecordView {
        object: &'static str,
        record_id: String,
    },
}

impl NavigationTarget {
    /// The quote line editor for the freshly created record.
    pub fn quote_edit_products(record_id: &str) -> Self {
        NavigationTarget::WebPage {
            url: format!(
                "/apex/sbqq__sb?scontrolCaching=1&id={0}#quote/le?qId={0}",
                record_id
            ),
        }
    }

    pub fn record_view(object: &'static str, record_id: &str) -> Self {
        NavigationTarget::RecordView {
            object,
            record_id: record_id.to_string(),
        }
    }

    /// URL the host should open for this target.
    pub fn url(&self) -> String {
        match self {
            NavigationTarget::WebPage { url } => url.clone(),
            NavigationTarget::RecordView { object, record_id } => {
                format!("/lightning/r/{}/{}/view", object, record_id)
            }
        }
    }
}

/// Outbound UI effects owned by the host page. The wizard never renders
/// toasts or performs navigation itself; it only signals through this trait.
pub trait HostBridge {
    fn notify(&self, title: &str, message: &str, severity: ToastSeverity);
    fn navigate(&self, target: &NavigationTarget);
    fn close_wizard(&self);
}
