use derive_setters::Setters;

use super::{ActionKind, Wire};
use crate::Length;
use crate::error::Result;
use crate::fields::{Fields, ObjectWriter};

/// `mobile:tap`
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MobileTap {
    pub x: Length,
    pub y: Length,
    pub call_id: Option<String>,
}

impl MobileTap {
    pub fn new(x: Length, y: Length) -> Self {
        Self {
            x,
            y,
            call_id: None,
        }
    }
}

impl Wire for MobileTap {
    const KIND: ActionKind = ActionKind::MobileTap;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .length("x", &self.x)
            .length("y", &self.y)
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            x: fields.length("x")?,
            y: fields.length("y")?,
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mobile:doubleTap`
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MobileDoubleTap {
    pub x: Length,
    pub y: Length,
    pub call_id: Option<String>,
}

impl MobileDoubleTap {
    pub fn new(x: Length, y: Length) -> Self {
        Self {
            x,
            y,
            call_id: None,
        }
    }
}

impl Wire for MobileDoubleTap {
    const KIND: ActionKind = ActionKind::MobileDoubleTap;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .length("x", &self.x)
            .length("y", &self.y)
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            x: fields.length("x")?,
            y: fields.length("y")?,
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mobile:swipe`
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MobileSwipe {
    pub start_x: Length,
    pub start_y: Length,
    pub end_x: Length,
    pub end_y: Length,
    /// Gesture duration in milliseconds
    pub duration: i64,
    pub call_id: Option<String>,
}

impl MobileSwipe {
    pub fn new(
        start_x: Length,
        start_y: Length,
        end_x: Length,
        end_y: Length,
        duration: i64,
    ) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
            duration,
            call_id: None,
        }
    }
}

impl Wire for MobileSwipe {
    const KIND: ActionKind = ActionKind::MobileSwipe;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .length("startX", &self.start_x)
            .length("startY", &self.start_y)
            .length("endX", &self.end_x)
            .length("endY", &self.end_y)
            .field("duration", self.duration)
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            start_x: fields.length("startX")?,
            start_y: fields.length("startY")?,
            end_x: fields.length("endX")?,
            end_y: fields.length("endY")?,
            duration: fields.int("duration")?,
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mobile:type`
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MobileType {
    pub content: String,
    pub call_id: Option<String>,
}

impl MobileType {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            call_id: None,
        }
    }
}

impl Wire for MobileType {
    const KIND: ActionKind = ActionKind::MobileType;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .field("content", self.content.as_str())
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            content: fields.string("content")?,
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mobile:hotkey`
///
/// Unlike the desktop hotkey this carries a single key name such as
/// `VOLUME_UP`.
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MobileHotkey {
    pub key: String,
    pub call_id: Option<String>,
}

impl MobileHotkey {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            call_id: None,
        }
    }
}

impl Wire for MobileHotkey {
    const KIND: ActionKind = ActionKind::MobileHotkey;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .field("key", self.key.as_str())
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            key: fields.string("key")?,
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mobile:home`
#[derive(Debug, Default, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MobileHome {
    pub call_id: Option<String>,
}

impl MobileHome {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Wire for MobileHome {
    const KIND: ActionKind = ActionKind::MobileHome;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer.optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mobile:back`
#[derive(Debug, Default, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MobileBack {
    pub call_id: Option<String>,
}

impl MobileBack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Wire for MobileBack {
    const KIND: ActionKind = ActionKind::MobileBack;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer.optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mobile:screenshot`
#[derive(Debug, Default, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MobileScreenshot {
    pub call_id: Option<String>,
}

impl MobileScreenshot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Wire for MobileScreenshot {
    const KIND: ActionKind = ActionKind::MobileScreenshot;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer.optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mobile:wait`
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MobileWait {
    pub duration: i64,
    pub call_id: Option<String>,
}

impl MobileWait {
    pub fn new(duration: i64) -> Self {
        Self {
            duration,
            call_id: None,
        }
    }
}

impl Wire for MobileWait {
    const KIND: ActionKind = ActionKind::MobileWait;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .field("duration", self.duration)
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            duration: fields.int("duration")?,
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mobile:finished`
#[derive(Debug, Default, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MobileFinished {
    pub message: Option<String>,
    pub call_id: Option<String>,
}

impl MobileFinished {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Wire for MobileFinished {
    const KIND: ActionKind = ActionKind::MobileFinished;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .optional("message", self.message.as_deref())
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            message: fields.opt_string("message")?,
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mobile:failed`
#[derive(Debug, Default, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MobileFailed {
    pub message: Option<String>,
    pub call_id: Option<String>,
}

impl MobileFailed {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Wire for MobileFailed {
    const KIND: ActionKind = ActionKind::MobileFailed;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .optional("message", self.message.as_deref())
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            message: fields.opt_string("message")?,
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}
