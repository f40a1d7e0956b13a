/// Inputs the dropdown menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    TriggerClick,
    /// Document click whose target is neither the menu nor the trigger.
    OutsideClick,
    Escape,
    /// ArrowUp or ArrowDown pressed.
    ArrowKey { trigger_focused: bool },
    /// Focus moved from inside the menu to somewhere outside menu and trigger.
    FocusLeft,
}

impl MenuEvent {
    /// Keyboard events relevant to the menu, by `KeyboardEvent.key`.
    pub fn from_key(key: &str, trigger_focused: bool) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            "ArrowDown" | "ArrowUp" => Some(Self::ArrowKey { trigger_focused }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuEffect {
    /// Open/closed state flipped and the ARIA pair must be rewritten.
    pub changed: bool,
    /// The key's default scrolling must be suppressed.
    pub prevent_default: bool,
}

/// Open/closed state of the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the trigger's `aria-expanded`.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Value for the menu's `aria-hidden`.
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }

    pub fn handle(&mut self, event: MenuEvent) -> MenuEffect {
        match event {
            MenuEvent::TriggerClick => self.set(!self.open),
            MenuEvent::OutsideClick | MenuEvent::Escape | MenuEvent::FocusLeft => self.set(false),
            MenuEvent::ArrowKey { trigger_focused } => {
                if trigger_focused && !self.open {
                    MenuEffect {
                        prevent_default: true,
                        ..self.set(true)
                    }
                } else {
                    MenuEffect::default()
                }
            }
        }
    }

    fn set(&mut self, open: bool) -> MenuEffect {
        let changed = self.open != open;
        self.open = open;
        MenuEffect {
            changed,
            prevent_default: false,
        }
    }
}
