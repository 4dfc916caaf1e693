//! Scripted doubles for the capability traits, shared across unit tests.

use std::sync::{Arc, Mutex};

use memekit_bridge::context::HostContext;
use memekit_bridge::frame::OutboundFrameMessage;

use crate::environment::HostEnvironment;
use crate::host::{HostActionError, HostApi};

/// One observed call against a [`RecordingHost`], in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Ready,
    OpenUrl(String),
    Close,
    ShareText(String),
    ShareCast {
        text: String,
        embeds: Option<Vec<String>>,
    },
}

/// Host API double that records every call and always succeeds.
#[derive(Default)]
pub struct RecordingHost {
    pub context: HostContext,
    calls: Mutex<Vec<HostCall>>,
}

impl RecordingHost {
    pub fn with_context(context: HostContext) -> Arc<Self> {
        Arc::new(Self {
            context,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl HostApi for RecordingHost {
    fn context(&self) -> HostContext {
        self.context.clone()
    }

    fn ready(&self) -> Result<(), HostActionError> {
        self.record(HostCall::Ready);
        Ok(())
    }

    fn open_url(&self, url: &str) -> Result<(), HostActionError> {
        self.record(HostCall::OpenUrl(url.to_string()));
        Ok(())
    }

    fn close(&self) -> Result<(), HostActionError> {
        self.record(HostCall::Close);
        Ok(())
    }

    fn share_text(&self, text: &str) -> Result<(), HostActionError> {
        self.record(HostCall::ShareText(text.to_string()));
        Ok(())
    }

    fn share_cast(&self, text: &str, embeds: Option<&[String]>) -> Result<(), HostActionError> {
        self.record(HostCall::ShareCast {
            text: text.to_string(),
            embeds: embeds.map(<[String]>::to_vec),
        });
        Ok(())
    }
}

/// Environment double with scripted signals and recorded fallback effects.
#[derive(Default)]
pub struct ScriptedEnvironment {
    pub referrer: String,
    pub user_agent: String,
    pub query: String,
    pub nested: bool,
    pub host: Mutex<Option<Arc<RecordingHost>>>,
    pub posted: Mutex<Vec<OutboundFrameMessage>>,
    pub opened: Mutex<Vec<String>>,
}

impl ScriptedEnvironment {
    /// A plain top-level page with no embedding signals.
    pub fn standalone() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A page nested in a parent frame, with no host API attached.
    pub fn nested() -> Arc<Self> {
        Arc::new(Self {
            nested: true,
            ..Self::default()
        })
    }

    /// A page with the given host API attached from the start.
    pub fn with_host(host: Arc<RecordingHost>) -> Arc<Self> {
        let environment = Self::default();
        *environment.host.lock().unwrap() = Some(host);
        Arc::new(environment)
    }

    /// Attaches a host API mid-session.
    pub fn attach_host(&self, host: Arc<RecordingHost>) {
        *self.host.lock().unwrap() = Some(host);
    }

    /// Messages posted to the parent frame so far.
    pub fn posted(&self) -> Vec<OutboundFrameMessage> {
        self.posted.lock().unwrap().clone()
    }

    /// URLs opened in a new browsing context so far.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl HostEnvironment for ScriptedEnvironment {
    fn referrer(&self) -> String {
        self.referrer.clone()
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn query_string(&self) -> String {
        self.query.clone()
    }

    fn is_nested(&self) -> bool {
        self.nested
    }

    fn host_api(&self) -> Option<Arc<dyn HostApi>> {
        self.host
            .lock()
            .unwrap()
            .clone()
            .map(|host| host as Arc<dyn HostApi>)
    }

    fn open_external(&self, url: &str) -> Result<(), HostActionError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn post_to_parent(&self, message: &OutboundFrameMessage) -> Result<(), HostActionError> {
        if !self.nested {
            return Err(HostActionError::ChannelUnavailable {
                action: "post_to_parent",
            });
        }
        self.posted.lock().unwrap().push(message.clone());
        Ok(())
    }
}
