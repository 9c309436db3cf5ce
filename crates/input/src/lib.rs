#![warn(missing_docs)]
//! Keyboard routing for the editor panel.
//!
//! Raw key presses are reduced to a [`KeyInput`], looked up in a fixed
//! dispatch table and applied to the session only while the panel is visible
//! and focused. Everything else passes through untouched.

use scribe3d_core::EditorSession;
use tracing::trace;
use winit::event::ElementState;
use winit::keyboard::{Key, NamedKey};

/// A key press reduced to what the editor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A key producing exactly one printable code point.
    Character(char),
    /// Backspace.
    Backspace,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// Anything else (arrows, function keys, multi-character input).
    Other,
}

impl KeyInput {
    /// Reduce a winit logical key.
    pub fn from_winit(key: &Key) -> Self {
        match key {
            Key::Character(text) => single_char(text.as_str()),
            Key::Named(NamedKey::Space) => Self::Character(' '),
            Key::Named(NamedKey::Backspace) => Self::Backspace,
            Key::Named(NamedKey::Enter) => Self::Enter,
            Key::Named(NamedKey::Tab) => Self::Tab,
            _ => Self::Other,
        }
    }

    /// Reduce a key name as written in scripts: `Backspace`, `Enter`, `Tab`,
    /// `Space`, or a single character.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Backspace" => Self::Backspace,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            "Space" => Self::Character(' '),
            other => single_char(other),
        }
    }
}

fn single_char(text: &str) -> KeyInput {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() => KeyInput::Character(c),
        _ => KeyInput::Other,
    }
}

/// A buffer edit produced by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    /// Append one code point.
    Append(char),
    /// Remove the last code point.
    Backspace,
    /// Append a line break.
    Newline,
    /// Append four spaces.
    Tab,
}

impl EditCommand {
    /// Apply this edit to the session.
    pub fn apply(self, session: &mut EditorSession) {
        match self {
            Self::Append(c) => session.append_char(c),
            Self::Backspace => session.backspace(),
            Self::Newline => session.newline(),
            Self::Tab => session.tab(),
        }
    }
}

/// The key dispatch table.
pub fn command_for(key: KeyInput) -> Option<EditCommand> {
    match key {
        KeyInput::Character(c) => Some(EditCommand::Append(c)),
        KeyInput::Backspace => Some(EditCommand::Backspace),
        KeyInput::Enter => Some(EditCommand::Newline),
        KeyInput::Tab => Some(EditCommand::Tab),
        KeyInput::Other => None,
    }
}

/// Whether the host should consider a key event consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The editor took the event; suppress its default behavior.
    Handled,
    /// The editor is not accepting keys; deliver the event elsewhere.
    Passthrough,
}

/// Routes key presses into an [`EditorSession`].
#[derive(Debug, Default)]
pub struct InputRouter {
    handled: u64,
    passthrough: u64,
}

impl InputRouter {
    /// Create a router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one key press.
    ///
    /// While the session is visible and focused every key is consumed, even
    /// ones with no edit attached, so nothing leaks to other text targets.
    pub fn route(&mut self, session: &mut EditorSession, key: KeyInput) -> KeyDisposition {
        if !(session.is_visible() && session.is_focused()) {
            self.passthrough += 1;
            return KeyDisposition::Passthrough;
        }

        self.handled += 1;
        match command_for(key) {
            Some(command) => {
                trace!(?command, "key routed");
                command.apply(session);
            }
            None => trace!(?key, "key swallowed"),
        }
        KeyDisposition::Handled
    }

    /// Route a winit key event. Releases always pass through; repeats count as
    /// presses.
    pub fn route_winit(
        &mut self,
        session: &mut EditorSession,
        key: &Key,
        state: ElementState,
    ) -> KeyDisposition {
        match state {
            ElementState::Pressed => self.route(session, KeyInput::from_winit(key)),
            ElementState::Released => KeyDisposition::Passthrough,
        }
    }

    /// Number of key presses consumed so far.
    pub fn handled_count(&self) -> u64 {
        self.handled
    }

    /// Number of key presses passed through so far.
    pub fn passthrough_count(&self) -> u64 {
        self.passthrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focused_session(initial: &str) -> EditorSession {
        let mut session = EditorSession::new(initial);
        session.set_visible(true);
        session.set_focused(true);
        session
    }

    fn type_str(router: &mut InputRouter, session: &mut EditorSession, text: &str) {
        for c in text.chars() {
            router.route(session, KeyInput::Character(c));
        }
    }

    #[test]
    fn dispatch_table() {
        assert_eq!(
            command_for(KeyInput::Character('a')),
            Some(EditCommand::Append('a'))
        );
        assert_eq!(
            command_for(KeyInput::Backspace),
            Some(EditCommand::Backspace)
        );
        assert_eq!(command_for(KeyInput::Enter), Some(EditCommand::Newline));
        assert_eq!(command_for(KeyInput::Tab), Some(EditCommand::Tab));
        assert_eq!(command_for(KeyInput::Other), None);
    }

    #[test]
    fn winit_keys_reduce() {
        assert_eq!(
            KeyInput::from_winit(&Key::Character("q".into())),
            KeyInput::Character('q')
        );
        assert_eq!(
            KeyInput::from_winit(&Key::Character("é".into())),
            KeyInput::Character('é')
        );
        assert_eq!(
            KeyInput::from_winit(&Key::Character("ab".into())),
            KeyInput::Other
        );
        assert_eq!(
            KeyInput::from_winit(&Key::Named(NamedKey::Space)),
            KeyInput::Character(' ')
        );
        assert_eq!(
            KeyInput::from_winit(&Key::Named(NamedKey::Backspace)),
            KeyInput::Backspace
        );
        assert_eq!(
            KeyInput::from_winit(&Key::Named(NamedKey::ArrowLeft)),
            KeyInput::Other
        );
    }

    #[test]
    fn key_names_reduce() {
        assert_eq!(KeyInput::from_name("Enter"), KeyInput::Enter);
        assert_eq!(KeyInput::from_name("Space"), KeyInput::Character(' '));
        assert_eq!(KeyInput::from_name("x"), KeyInput::Character('x'));
        assert_eq!(KeyInput::from_name("Escape"), KeyInput::Other);
    }

    #[test]
    fn typing_while_focused() {
        let mut router = InputRouter::new();
        let mut session = focused_session("Line One");
        router.route(&mut session, KeyInput::Enter);
        type_str(&mut router, &mut session, "Line Two");
        assert_eq!(session.buffer(), "Line One\nLine Two");

        router.route(&mut session, KeyInput::Tab);
        router.route(&mut session, KeyInput::Backspace);
        assert_eq!(session.buffer(), "Line One\nLine Two   ");
    }

    #[test]
    fn unfocused_keys_pass_through() {
        let mut router = InputRouter::new();
        let mut session = EditorSession::new("abc");
        session.set_visible(true);

        let disposition = router.route(&mut session, KeyInput::Character('x'));
        assert_eq!(disposition, KeyDisposition::Passthrough);
        assert_eq!(session.buffer(), "abc");
        assert_eq!(router.passthrough_count(), 1);
        assert_eq!(router.handled_count(), 0);
    }

    #[test]
    fn unmapped_keys_are_still_consumed_while_focused() {
        let mut router = InputRouter::new();
        let mut session = focused_session("abc");
        let disposition = router.route(&mut session, KeyInput::Other);
        assert_eq!(disposition, KeyDisposition::Handled);
        assert_eq!(session.buffer(), "abc");
    }

    #[test]
    fn releases_pass_through() {
        let mut router = InputRouter::new();
        let mut session = focused_session("");
        let key = Key::Character("a".into());
        assert_eq!(
            router.route_winit(&mut session, &key, ElementState::Released),
            KeyDisposition::Passthrough
        );
        assert_eq!(
            router.route_winit(&mut session, &key, ElementState::Pressed),
            KeyDisposition::Handled
        );
        assert_eq!(session.buffer(), "a");
    }

    #[test]
    fn erase_scenario() {
        let mut router = InputRouter::new();
        let mut session = focused_session("Hello World!");
        for _ in 0..6 {
            router.route(&mut session, KeyInput::Backspace);
        }
        assert_eq!(session.buffer(), "Hello ");
        router.route(&mut session, KeyInput::Character('!'));
        assert_eq!(session.buffer(), "Hello !");
    }
}
