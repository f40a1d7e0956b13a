use serde::{Deserialize, Serialize};

/// Caption variants of the header overlay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Portuguese,
    Yoruba,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Portuguese, Language::Yoruba];

    pub fn other(self) -> Self {
        match self {
            Self::Portuguese => Self::Yoruba,
            Self::Yoruba => Self::Portuguese,
        }
    }

    /// Class of the overlay child carrying this variant.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Portuguese => "lang-pt",
            Self::Yoruba => "lang-yo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// Controller attached to the page.
    Init,
    /// The rotation interval fired.
    Tick,
    /// Click, or Enter/Space while the overlay is focused.
    ManualToggle,
    PointerEnter,
    PointerLeave,
}

/// What to do with the rotation interval after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Keep,
    Schedule,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayEffect {
    /// Variant to make visible, when visibility must be (re)applied.
    pub show: Option<Language>,
    pub timer: TimerCommand,
}

/// Rotation state of the bilingual header caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayState {
    current: Language,
    reduced_motion: bool,
    timer_running: bool,
    stopped: bool,
}

impl OverlayState {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            current: Language::Portuguese,
            reduced_motion,
            timer_running: false,
            stopped: false,
        }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    /// True once a manual toggle has stopped rotation for the session.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn is_visible(&self, language: Language) -> bool {
        self.current == language
    }

    pub fn handle(&mut self, event: OverlayEvent) -> OverlayEffect {
        match event {
            OverlayEvent::Init => {
                self.current = Language::Portuguese;
                OverlayEffect {
                    show: Some(self.current),
                    timer: self.start(),
                }
            }
            OverlayEvent::Tick => {
                if !self.timer_running {
                    return OverlayEffect {
                        show: None,
                        timer: TimerCommand::Keep,
                    };
                }
                self.current = self.current.other();
                OverlayEffect {
                    show: Some(self.current),
                    timer: TimerCommand::Keep,
                }
            }
            OverlayEvent::ManualToggle => {
                let timer = self.stop();
                self.stopped = true;
                self.current = self.current.other();
                OverlayEffect {
                    show: Some(self.current),
                    timer,
                }
            }
            OverlayEvent::PointerEnter => OverlayEffect {
                show: None,
                timer: self.stop(),
            },
            OverlayEvent::PointerLeave => OverlayEffect {
                show: None,
                timer: self.start(),
            },
        }
    }

    fn start(&mut self) -> TimerCommand {
        if self.reduced_motion || self.stopped || self.timer_running {
            return TimerCommand::Keep;
        }
        self.timer_running = true;
        TimerCommand::Schedule
    }

    fn stop(&mut self) -> TimerCommand {
        if !self.timer_running {
            return TimerCommand::Keep;
        }
        self.timer_running = false;
        TimerCommand::Cancel
    }
}
