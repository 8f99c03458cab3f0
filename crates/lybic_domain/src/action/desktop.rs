use std::ops::BitOr;

use derive_setters::Setters;

use super::{ActionKind, Wire};
use crate::Length;
use crate::error::Result;
use crate::fields::{Fields, ObjectWriter, PointerBase};

/// Mouse button flags. Values combine with `|` for chorded clicks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, fake::Dummy)]
pub struct MouseButtons(pub i64);

impl MouseButtons {
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const MIDDLE: Self = Self(4);
    pub const BACK: Self = Self(8);
    pub const FORWARD: Self = Self(16);

    pub fn bits(self) -> i64 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for MouseButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// `mouse:click`
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MouseClick {
    pub x: Length,
    pub y: Length,
    pub button: MouseButtons,
    /// Modifier held during the click in xdotool syntax, e.g. `ctrl` or
    /// `alt+shift`
    pub hold_key: Option<String>,
    pub call_id: Option<String>,
}

impl MouseClick {
    pub fn new(x: Length, y: Length, button: MouseButtons) -> Self {
        Self {
            x,
            y,
            button,
            hold_key: None,
            call_id: None,
        }
    }
}

impl Wire for MouseClick {
    const KIND: ActionKind = ActionKind::MouseClick;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .length("x", &self.x)
            .length("y", &self.y)
            .field("button", self.button.bits())
            .optional("holdKey", self.hold_key.as_deref())
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        let PointerBase {
            x,
            y,
            hold_key,
            call_id,
        } = fields.pointer()?;
        let button = MouseButtons(fields.int("button")?);
        Ok(Self {
            x,
            y,
            button,
            hold_key,
            call_id,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mouse:doubleClick`
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MouseDoubleClick {
    pub x: Length,
    pub y: Length,
    pub button: MouseButtons,
    pub hold_key: Option<String>,
    pub call_id: Option<String>,
}

impl MouseDoubleClick {
    pub fn new(x: Length, y: Length, button: MouseButtons) -> Self {
        Self {
            x,
            y,
            button,
            hold_key: None,
            call_id: None,
        }
    }
}

impl Wire for MouseDoubleClick {
    const KIND: ActionKind = ActionKind::MouseDoubleClick;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .length("x", &self.x)
            .length("y", &self.y)
            .field("button", self.button.bits())
            .optional("holdKey", self.hold_key.as_deref())
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        let PointerBase {
            x,
            y,
            hold_key,
            call_id,
        } = fields.pointer()?;
        let button = MouseButtons(fields.int("button")?);
        Ok(Self {
            x,
            y,
            button,
            hold_key,
            call_id,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mouse:move`
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MouseMove {
    pub x: Length,
    pub y: Length,
    pub hold_key: Option<String>,
    pub call_id: Option<String>,
}

impl MouseMove {
    pub fn new(x: Length, y: Length) -> Self {
        Self {
            x,
            y,
            hold_key: None,
            call_id: None,
        }
    }
}

impl Wire for MouseMove {
    const KIND: ActionKind = ActionKind::MouseMove;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .length("x", &self.x)
            .length("y", &self.y)
            .optional("holdKey", self.hold_key.as_deref())
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        let PointerBase {
            x,
            y,
            hold_key,
            call_id,
        } = fields.pointer()?;
        Ok(Self {
            x,
            y,
            hold_key,
            call_id,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mouse:scroll`
///
/// Steps are signed wheel notches: positive scrolls down or right.
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MouseScroll {
    pub x: Length,
    pub y: Length,
    pub step_vertical: i64,
    pub step_horizontal: i64,
    pub hold_key: Option<String>,
    pub call_id: Option<String>,
}

impl MouseScroll {
    pub fn new(x: Length, y: Length, step_vertical: i64, step_horizontal: i64) -> Self {
        Self {
            x,
            y,
            step_vertical,
            step_horizontal,
            hold_key: None,
            call_id: None,
        }
    }
}

impl Wire for MouseScroll {
    const KIND: ActionKind = ActionKind::MouseScroll;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .length("x", &self.x)
            .length("y", &self.y)
            .field("stepVertical", self.step_vertical)
            .field("stepHorizontal", self.step_horizontal)
            .optional("holdKey", self.hold_key.as_deref())
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        let PointerBase {
            x,
            y,
            hold_key,
            call_id,
        } = fields.pointer()?;
        Ok(Self {
            x,
            y,
            step_vertical: fields.int("stepVertical")?,
            step_horizontal: fields.int("stepHorizontal")?,
            hold_key,
            call_id,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `mouse:drag`
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct MouseDrag {
    pub start_x: Length,
    pub start_y: Length,
    pub end_x: Length,
    pub end_y: Length,
    pub hold_key: Option<String>,
    pub call_id: Option<String>,
}

impl MouseDrag {
    pub fn new(start_x: Length, start_y: Length, end_x: Length, end_y: Length) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
            hold_key: None,
            call_id: None,
        }
    }
}

impl Wire for MouseDrag {
    const KIND: ActionKind = ActionKind::MouseDrag;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .length("startX", &self.start_x)
            .length("startY", &self.start_y)
            .length("endX", &self.end_x)
            .length("endY", &self.end_y)
            .optional("holdKey", self.hold_key.as_deref())
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            start_x: fields.length("startX")?,
            start_y: fields.length("startY")?,
            end_x: fields.length("endX")?,
            end_y: fields.length("endY")?,
            hold_key: fields.opt_string("holdKey")?,
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `keyboard:type`
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct KeyboardType {
    pub content: String,
    /// Sends `\n` as an Enter key press instead of a literal newline
    pub treat_new_line_as_enter: bool,
    pub call_id: Option<String>,
}

impl KeyboardType {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            treat_new_line_as_enter: false,
            call_id: None,
        }
    }
}

impl Wire for KeyboardType {
    const KIND: ActionKind = ActionKind::KeyboardType;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .field("content", self.content.as_str())
            .field("treatNewLineAsEnter", self.treat_new_line_as_enter)
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            content: fields.string("content")?,
            treat_new_line_as_enter: fields.bool("treatNewLineAsEnter")?,
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `keyboard:hotkey`
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct KeyboardHotkey {
    /// Key combination in xdotool syntax, e.g. `ctrl+c`
    pub keys: String,
    /// How long to hold the combination, in milliseconds
    pub duration: Option<i64>,
    pub call_id: Option<String>,
}

impl KeyboardHotkey {
    pub fn new(keys: impl Into<String>) -> Self {
        Self {
            keys: keys.into(),
            duration: None,
            call_id: None,
        }
    }
}

impl Wire for KeyboardHotkey {
    const KIND: ActionKind = ActionKind::KeyboardHotkey;

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .field("keys", self.keys.as_str())
            .optional("duration", self.duration)
            .optional("callId", self.call_id.as_deref())
    }

    fn read(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            keys: fields.string("keys")?,
            duration: fields.opt_int("duration")?,
            call_id: fields.call_id()?,
        })
    }

    fn tool_call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }
}

/// `screenshot`
#[derive(Debug, Default, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct Screenshot {
    pub call_id: Option<String>,
}

impl Screenshot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Wire for Screenshot {
    const KIND: ActionKind = ActionKind::Screenshot;

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

/// `wait`
#[derive(Debug, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct Wait {
    /// Milliseconds
    pub duration: i64,
    pub call_id: Option<String>,
}

impl Wait {
    pub fn new(duration: i64) -> Self {
        Self {
            duration,
            call_id: None,
        }
    }
}

impl Wire for Wait {
    const KIND: ActionKind = ActionKind::Wait;

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

/// `finished`
#[derive(Debug, Default, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct Finished {
    pub message: Option<String>,
    pub call_id: Option<String>,
}

impl Finished {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Wire for Finished {
    const KIND: ActionKind = ActionKind::Finished;

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

/// `failed`
#[derive(Debug, Default, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct Failed {
    pub message: Option<String>,
    pub call_id: Option<String>,
}

impl Failed {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Wire for Failed {
    const KIND: ActionKind = ActionKind::Failed;

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
