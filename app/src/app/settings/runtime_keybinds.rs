//! Process-wide key binding table consulted by the `keybinds` predicates.
//!
//! Installed once at startup from `Settings::keybinds`; until then the
//! defaults apply.

use std::collections::HashMap;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard};

use once_cell::sync::Lazy;

use crate::errors::SettingsError;
use crate::input::KeyCode;

/// Every action name that may appear in `[keybinds]`.
pub const ACTIONS: &[&str] = &[
    "quit",
    "up",
    "down",
    "left",
    "right",
    "next_focus",
    "prev_focus",
    "toggle",
    "book",
    "dismiss",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keybinds {
    map: HashMap<String, Vec<KeyCode>>,
}

impl Default for Keybinds {
    fn default() -> Self {
        let defaults: [(&str, Vec<KeyCode>); 10] = [
            ("quit", vec![KeyCode::Char('q')]),
            ("up", vec![KeyCode::Up, KeyCode::Char('k')]),
            ("down", vec![KeyCode::Down, KeyCode::Char('j')]),
            ("left", vec![KeyCode::Left, KeyCode::Char('h')]),
            ("right", vec![KeyCode::Right, KeyCode::Char('l')]),
            ("next_focus", vec![KeyCode::Tab]),
            ("prev_focus", vec![KeyCode::BackTab]),
            ("toggle", vec![KeyCode::Char(' '), KeyCode::Enter]),
            ("book", vec![KeyCode::Char('b')]),
            ("dismiss", vec![KeyCode::Esc, KeyCode::Enter]),
        ];
        Keybinds {
            map: defaults
                .into_iter()
                .map(|(a, keys)| (a.to_string(), keys))
                .collect(),
        }
    }
}

impl Keybinds {
    /// Defaults with the given per-action overrides applied. An override
    /// replaces the whole key list of its action.
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Result<Self, SettingsError> {
        let mut kb = Keybinds::default();
        for (action, names) in overrides {
            if !ACTIONS.contains(&action.as_str()) {
                return Err(format!("unknown keybind action `{}`", action).into());
            }
            let keys = names
                .iter()
                .map(|n| parse_key(n))
                .collect::<Result<Vec<_>, _>>()?;
            kb.map.insert(action.clone(), keys);
        }
        Ok(kb)
    }

    pub fn is_bound(&self, action: &str, code: &KeyCode) -> bool {
        self.map
            .get(action)
            .map(|keys| keys.contains(code))
            .unwrap_or(false)
    }
}

/// Parse a key name from the settings file.
pub fn parse_key(name: &str) -> Result<KeyCode, SettingsError> {
    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("unknown key `{}`", name).into()),
            }
        }
    };
    Ok(code)
}

static RUNTIME: Lazy<RwLock<Keybinds>> = Lazy::new(|| RwLock::new(Keybinds::default()));

/// Replace the active bindings.
pub fn install(kb: Keybinds) {
    let mut g = RUNTIME.write().unwrap_or_else(|e| e.into_inner());
    *g = kb;
}

pub fn get() -> RwLockReadGuard<'static, Keybinds> {
    RUNTIME.read().unwrap_or_else(|e| e.into_inner())
}
