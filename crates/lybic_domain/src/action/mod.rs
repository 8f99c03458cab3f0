mod desktop;
mod mobile;

pub use desktop::*;
use derive_more::From;
use derive_setters::Setters;
use lybic_config::{DecodeConfig, Strictness};
pub use mobile::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result, json_kind};
use crate::fields::{Fields, ObjectWriter};

/// Which device family an action targets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
    fake::Dummy,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Desktop,
    Mobile,
}

impl Platform {
    /// Name of the remote service handling this platform's actions
    pub fn service(&self) -> &'static str {
        match self {
            Platform::Desktop => "computer-use",
            Platform::Mobile => "mobile-use",
        }
    }
}

/// Registry of every wire discriminator in the action catalog.
///
/// Parsing a tag is the only way a decoder is selected; no structural
/// inspection of the remaining fields takes place.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum ActionKind {
    #[strum(serialize = "mouse:click")]
    MouseClick,
    #[strum(serialize = "mouse:doubleClick")]
    MouseDoubleClick,
    #[strum(serialize = "mouse:move")]
    MouseMove,
    #[strum(serialize = "mouse:scroll")]
    MouseScroll,
    #[strum(serialize = "mouse:drag")]
    MouseDrag,
    #[strum(serialize = "keyboard:type")]
    KeyboardType,
    #[strum(serialize = "keyboard:hotkey")]
    KeyboardHotkey,
    #[strum(serialize = "screenshot")]
    Screenshot,
    #[strum(serialize = "wait")]
    Wait,
    #[strum(serialize = "finished")]
    Finished,
    #[strum(serialize = "failed")]
    Failed,
    #[strum(serialize = "mobile:tap")]
    MobileTap,
    #[strum(serialize = "mobile:doubleTap")]
    MobileDoubleTap,
    #[strum(serialize = "mobile:swipe")]
    MobileSwipe,
    #[strum(serialize = "mobile:type")]
    MobileType,
    #[strum(serialize = "mobile:hotkey")]
    MobileHotkey,
    #[strum(serialize = "mobile:home")]
    MobileHome,
    #[strum(serialize = "mobile:back")]
    MobileBack,
    #[strum(serialize = "mobile:screenshot")]
    MobileScreenshot,
    #[strum(serialize = "mobile:wait")]
    MobileWait,
    #[strum(serialize = "mobile:finished")]
    MobileFinished,
    #[strum(serialize = "mobile:failed")]
    MobileFailed,
}

impl ActionKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }

    /// The wire discriminator
    pub fn tag(self) -> &'static str {
        self.into()
    }

    pub fn platform(self) -> Platform {
        match self {
            ActionKind::MouseClick
            | ActionKind::MouseDoubleClick
            | ActionKind::MouseMove
            | ActionKind::MouseScroll
            | ActionKind::MouseDrag
            | ActionKind::KeyboardType
            | ActionKind::KeyboardHotkey
            | ActionKind::Screenshot
            | ActionKind::Wait
            | ActionKind::Finished
            | ActionKind::Failed => Platform::Desktop,
            ActionKind::MobileTap
            | ActionKind::MobileDoubleTap
            | ActionKind::MobileSwipe
            | ActionKind::MobileType
            | ActionKind::MobileHotkey
            | ActionKind::MobileHome
            | ActionKind::MobileBack
            | ActionKind::MobileScreenshot
            | ActionKind::MobileWait
            | ActionKind::MobileFinished
            | ActionKind::MobileFailed => Platform::Mobile,
        }
    }

    /// Whether the action ends a task
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ActionKind::Finished
                | ActionKind::Failed
                | ActionKind::MobileFinished
                | ActionKind::MobileFailed
        )
    }

    fn decode(self, fields: &Fields<'_>) -> Result<Action> {
        match self {
            ActionKind::MouseClick => MouseClick::read(fields).map(Action::from),
            ActionKind::MouseDoubleClick => MouseDoubleClick::read(fields).map(Action::from),
            ActionKind::MouseMove => MouseMove::read(fields).map(Action::from),
            ActionKind::MouseScroll => MouseScroll::read(fields).map(Action::from),
            ActionKind::MouseDrag => MouseDrag::read(fields).map(Action::from),
            ActionKind::KeyboardType => KeyboardType::read(fields).map(Action::from),
            ActionKind::KeyboardHotkey => KeyboardHotkey::read(fields).map(Action::from),
            ActionKind::Screenshot => Screenshot::read(fields).map(Action::from),
            ActionKind::Wait => Wait::read(fields).map(Action::from),
            ActionKind::Finished => Finished::read(fields).map(Action::from),
            ActionKind::Failed => Failed::read(fields).map(Action::from),
            ActionKind::MobileTap => MobileTap::read(fields).map(Action::from),
            ActionKind::MobileDoubleTap => MobileDoubleTap::read(fields).map(Action::from),
            ActionKind::MobileSwipe => MobileSwipe::read(fields).map(Action::from),
            ActionKind::MobileType => MobileType::read(fields).map(Action::from),
            ActionKind::MobileHotkey => MobileHotkey::read(fields).map(Action::from),
            ActionKind::MobileHome => MobileHome::read(fields).map(Action::from),
            ActionKind::MobileBack => MobileBack::read(fields).map(Action::from),
            ActionKind::MobileScreenshot => MobileScreenshot::read(fields).map(Action::from),
            ActionKind::MobileWait => MobileWait::read(fields).map(Action::from),
            ActionKind::MobileFinished => MobileFinished::read(fields).map(Action::from),
            ActionKind::MobileFailed => MobileFailed::read(fields).map(Action::from),
        }
    }
}

/// Capabilities shared by every action variant.
pub trait ActionVariant {
    fn kind(&self) -> ActionKind;

    /// Identifier of the tool invocation this action answers, if any
    fn tool_call_id(&self) -> Option<&str>;

    fn encode(&self) -> Value;
}

/// Wire shape of one catalog entry.
pub(crate) trait Wire: Sized {
    const KIND: ActionKind;

    /// Appends the variant's fields after the discriminator.
    fn write(&self, writer: ObjectWriter) -> ObjectWriter;

    fn read(fields: &Fields<'_>) -> Result<Self>;

    fn tool_call_id(&self) -> Option<&str>;
}

impl<T: Wire> ActionVariant for T {
    fn kind(&self) -> ActionKind {
        T::KIND
    }

    fn tool_call_id(&self) -> Option<&str> {
        Wire::tool_call_id(self)
    }

    fn encode(&self) -> Value {
        self.write(ObjectWriter::new(T::KIND.tag())).finish()
    }
}

/// Options applied to a single decode call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Setters)]
#[setters(strip_option, into)]
pub struct DecodeOptions {
    pub strictness: Strictness,
    /// Restricts decoding to one platform's catalog. Discriminators from the
    /// other catalog are then reported as unknown.
    pub platform: Option<Platform>,
}

impl From<&DecodeConfig> for DecodeOptions {
    fn from(config: &DecodeConfig) -> Self {
        Self {
            strictness: config.strictness,
            platform: None,
        }
    }
}

/// One action from the closed desktop and mobile catalog.
#[derive(Debug, Clone, PartialEq, Eq, From, fake::Dummy)]
pub enum Action {
    MouseClick(MouseClick),
    MouseDoubleClick(MouseDoubleClick),
    MouseMove(MouseMove),
    MouseScroll(MouseScroll),
    MouseDrag(MouseDrag),
    KeyboardType(KeyboardType),
    KeyboardHotkey(KeyboardHotkey),
    Screenshot(Screenshot),
    Wait(Wait),
    Finished(Finished),
    Failed(Failed),
    MobileTap(MobileTap),
    MobileDoubleTap(MobileDoubleTap),
    MobileSwipe(MobileSwipe),
    MobileType(MobileType),
    MobileHotkey(MobileHotkey),
    MobileHome(MobileHome),
    MobileBack(MobileBack),
    MobileScreenshot(MobileScreenshot),
    MobileWait(MobileWait),
    MobileFinished(MobileFinished),
    MobileFailed(MobileFailed),
}

impl Action {
    fn variant(&self) -> &dyn ActionVariant {
        match self {
            Action::MouseClick(action) => action,
            Action::MouseDoubleClick(action) => action,
            Action::MouseMove(action) => action,
            Action::MouseScroll(action) => action,
            Action::MouseDrag(action) => action,
            Action::KeyboardType(action) => action,
            Action::KeyboardHotkey(action) => action,
            Action::Screenshot(action) => action,
            Action::Wait(action) => action,
            Action::Finished(action) => action,
            Action::Failed(action) => action,
            Action::MobileTap(action) => action,
            Action::MobileDoubleTap(action) => action,
            Action::MobileSwipe(action) => action,
            Action::MobileType(action) => action,
            Action::MobileHotkey(action) => action,
            Action::MobileHome(action) => action,
            Action::MobileBack(action) => action,
            Action::MobileScreenshot(action) => action,
            Action::MobileWait(action) => action,
            Action::MobileFinished(action) => action,
            Action::MobileFailed(action) => action,
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.variant().kind()
    }

    pub fn platform(&self) -> Platform {
        self.kind().platform()
    }

    pub fn is_terminal(&self) -> bool {
        self.kind().is_terminal()
    }

    pub fn call_id(&self) -> Option<&str> {
        self.variant().tool_call_id()
    }

    /// Message attached to a terminal action
    pub fn message(&self) -> Option<&str> {
        match self {
            Action::Finished(action) => action.message.as_deref(),
            Action::Failed(action) => action.message.as_deref(),
            Action::MobileFinished(action) => action.message.as_deref(),
            Action::MobileFailed(action) => action.message.as_deref(),
            _ => None,
        }
    }

    pub fn encode(&self) -> Value {
        self.variant().encode()
    }

    /// Decodes any catalog entry with the permissive field policy.
    pub fn decode(value: &Value) -> Result<Self> {
        Self::decode_with(value, &DecodeOptions::default())
    }

    pub fn decode_with(value: &Value, options: &DecodeOptions) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::Shape {
                context: "action".to_string(),
                found: json_kind(value),
            });
        };
        let tag = match map.get("type") {
            Some(Value::String(tag)) => tag.as_str(),
            Some(other) => return Err(Error::UnknownActionType(other.to_string())),
            None => return Err(Error::UnknownActionType(String::new())),
        };
        let platform = options.platform;
        let kind = ActionKind::from_tag(tag)
            .filter(|kind| platform.is_none_or(|p| kind.platform() == p))
            .ok_or_else(|| Error::UnknownActionType(tag.to_string()))?;

        tracing::debug!(action = %kind, "Decoding action");
        let fields = Fields::new(map, kind.tag(), options.strictness);
        kind.decode(&fields)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::decode(&serde_json::from_slice(bytes)?)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.encode())?)
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Action::decode(&raw).map_err(serde::de::Error::custom)
    }
}
