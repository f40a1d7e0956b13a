use heritage_core::{MenuEffect, MenuEvent, MenuState};

#[test]
fn trigger_click_toggles() {
    let mut menu = MenuState::default();
    assert!(!menu.is_open());

    assert!(menu.handle(MenuEvent::TriggerClick).changed);
    assert!(menu.is_open());
    assert_eq!(menu.aria_expanded(), "true");
    assert_eq!(menu.aria_hidden(), "false");

    assert!(menu.handle(MenuEvent::TriggerClick).changed);
    assert!(!menu.is_open());
    assert_eq!(menu.aria_expanded(), "false");
    assert_eq!(menu.aria_hidden(), "true");
}

#[test]
fn outside_click_closes_open_menu() {
    let mut menu = MenuState::new(true);
    assert!(menu.handle(MenuEvent::OutsideClick).changed);
    assert!(!menu.is_open());
    assert!(!menu.handle(MenuEvent::OutsideClick).changed);
}

#[test]
fn escape_closes_open_menu() {
    let mut menu = MenuState::new(true);
    let event = MenuEvent::from_key("Escape", false).expect("Escape is a menu key");
    menu.handle(event);
    assert!(!menu.is_open());
}

#[test]
fn focus_leaving_menu_closes_it() {
    let mut menu = MenuState::new(true);
    menu.handle(MenuEvent::FocusLeft);
    assert!(!menu.is_open());
}

#[test]
fn arrow_down_on_focused_trigger_opens_closed_menu() {
    let mut menu = MenuState::new(false);
    let event = MenuEvent::from_key("ArrowDown", true).expect("ArrowDown is a menu key");

    assert_eq!(
        menu.handle(event),
        MenuEffect {
            changed: true,
            prevent_default: true,
        }
    );
    assert!(menu.is_open());

    // Already open: arrows fall through to the page.
    assert_eq!(menu.handle(event), MenuEffect::default());
    assert!(menu.is_open());
}

#[test]
fn arrow_without_trigger_focus_is_ignored() {
    let mut menu = MenuState::new(false);
    let event = MenuEvent::from_key("ArrowUp", false).expect("ArrowUp is a menu key");
    assert_eq!(menu.handle(event), MenuEffect::default());
    assert!(!menu.is_open());
    assert_eq!(MenuEvent::from_key("Enter", true), None);
}
