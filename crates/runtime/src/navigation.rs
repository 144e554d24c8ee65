//! Screen routing with typed hand-off between generators.
//!
//! A generator that opens another screen "with" something attaches a
//! [`NavigationPayload`]. The target screen takes it once; a second take, or
//! a take from any other screen, sees nothing.

use forge_core::CharacterRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Character,
    Npc,
    Quest,
    Wilderness,
    Oracle,
    Dice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationPayload {
    /// The NPC generated for a Character Based quest, opened in the NPC screen.
    QuestNpc(CharacterRecord),
}

impl NavigationPayload {
    /// Screen the payload is addressed to.
    pub const fn target(&self) -> Screen {
        match self {
            Self::QuestNpc(_) => Screen::Npc,
        }
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    current: Screen,
    pending: Option<NavigationPayload>,
}

impl Navigator {
    pub fn new(start: Screen) -> Self {
        Self {
            current: start,
            pending: None,
        }
    }

    pub const fn current(&self) -> Screen {
        self.current
    }

    /// Switch screens. Any undelivered payload is dropped.
    pub fn navigate(&mut self, to: Screen) {
        if let Some(payload) = self.pending.take() {
            tracing::debug!(target_screen = ?payload.target(), "dropping undelivered payload");
        }
        self.current = to;
    }

    /// Switch to the payload's target screen carrying `payload`.
    pub fn navigate_with(&mut self, payload: NavigationPayload) {
        self.navigate(payload.target());
        tracing::debug!(screen = ?self.current, "navigating with payload");
        self.pending = Some(payload);
    }

    /// Take the payload addressed to `screen`, if `screen` is showing.
    pub fn take_payload(&mut self, screen: Screen) -> Option<NavigationPayload> {
        if self.current != screen {
            return None;
        }
        self.pending.take_if(|payload| payload.target() == screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn npc() -> CharacterRecord {
        let catalog = forge_content::builtin::catalog().unwrap();
        forge_core::roll_new_npc(&catalog, &mut forge_core::PcgRng::new(5)).unwrap()
    }

    #[test]
    fn payload_is_consumed_once() {
        let npc = npc();
        let mut navigator = Navigator::new(Screen::Quest);
        navigator.navigate_with(NavigationPayload::QuestNpc(npc.clone()));
        assert_eq!(navigator.current(), Screen::Npc);

        assert_eq!(
            navigator.take_payload(Screen::Npc),
            Some(NavigationPayload::QuestNpc(npc))
        );
        assert_eq!(navigator.take_payload(Screen::Npc), None);
    }

    #[test]
    fn other_screens_never_see_the_payload() {
        let mut navigator = Navigator::default();
        navigator.navigate_with(NavigationPayload::QuestNpc(npc()));
        assert_eq!(navigator.take_payload(Screen::Character), None);

        navigator.navigate(Screen::Oracle);
        navigator.navigate(Screen::Npc);
        assert_eq!(navigator.take_payload(Screen::Npc), None);
    }
}
