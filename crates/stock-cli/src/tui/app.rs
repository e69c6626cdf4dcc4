//! Terminal UI state and key handling.
//!
//! Key handling is synchronous: it updates local UI state and returns an
//! [`Action`] for the event loop to carry out through the controller.

use crossterm::event::{KeyCode, KeyModifiers};
use stock_core::entities::Item;
use stock_core::time::DEFAULT_DATE_FORMAT;

/// Where typed keys go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate the list and open dialogs.
    #[default]
    Browse,
    /// Edit the search text.
    Search,
}

/// Modal dialog over the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    ConfirmDelete { item: Item, yes_selected: bool },
    EditAmount { item: Item, amount: u32 },
}

/// Work requested by a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Search(String),
    Update(Item),
    Delete(Item),
}

pub struct App {
    pub mode: Mode,
    pub search: String,
    pub items: Vec<Item>,
    pub selected: usize,
    pub dialog: Option<Dialog>,
    pub status: Option<String>,
    pub date_format: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl App {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            mode: Mode::Browse,
            search: String::new(),
            items: Vec::new(),
            selected: 0,
            dialog: None,
            status: None,
            date_format: date_format.into(),
        }
    }

    /// Replace the list, keeping the selection in range.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    /// Record how a dispatched action went.
    pub fn finish(&mut self, action: &Action, outcome: Result<(), String>) {
        self.status = match (action, outcome) {
            (_, Err(error)) => Some(error),
            (Action::Update(item), Ok(())) => {
                Some(format!("{}: amount set to {}", item.name, item.amount))
            }
            (Action::Delete(item), Ok(())) => Some(format!("Deleted {}", item.name)),
            (_, Ok(())) => None,
        };
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Action {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return Action::Quit;
        }

        if let Some(dialog) = self.dialog.take() {
            return self.handle_dialog_key(dialog, code);
        }

        match self.mode {
            Mode::Browse => self.handle_browse_key(code),
            Mode::Search => self.handle_search_key(code),
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('/' | 's') => {
                self.mode = Mode::Search;
                self.status = None;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < self.items.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.selected = 0,
            KeyCode::Char('G') | KeyCode::End => {
                self.selected = self.items.len().saturating_sub(1);
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(item) = self.selected_item() {
                    self.dialog = Some(Dialog::EditAmount {
                        amount: item.amount,
                        item: item.clone(),
                    });
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(item) = self.selected_item() {
                    self.dialog = Some(Dialog::ConfirmDelete {
                        item: item.clone(),
                        yes_selected: false,
                    });
                }
            }
            KeyCode::Char('+') => {
                if let Some(item) = self.selected_item() {
                    return Action::Update(item.incremented());
                }
            }
            KeyCode::Char('-') => {
                if let Some(item) = self.selected_item().filter(|item| item.amount > 0) {
                    return Action::Update(item.decremented());
                }
            }
            _ => {}
        }
        Action::None
    }

    fn handle_search_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => {
                self.mode = Mode::Browse;
                Action::None
            }
            KeyCode::Backspace => {
                if self.search.pop().is_some() {
                    self.selected = 0;
                    Action::Search(self.search.clone())
                } else {
                    Action::None
                }
            }
            KeyCode::Char(ch) => {
                self.search.push(ch);
                self.selected = 0;
                Action::Search(self.search.clone())
            }
            _ => Action::None,
        }
    }

    /// `dialog` has been taken out of `self`; put it back unless it closes.
    fn handle_dialog_key(&mut self, dialog: Dialog, code: KeyCode) -> Action {
        match dialog {
            Dialog::ConfirmDelete { item, yes_selected } => match code {
                KeyCode::Char('y' | 'Y') => Action::Delete(item),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Action::None,
                KeyCode::Enter if yes_selected => Action::Delete(item),
                KeyCode::Enter => Action::None,
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char('h' | 'l') => {
                    self.dialog = Some(Dialog::ConfirmDelete {
                        item,
                        yes_selected: !yes_selected,
                    });
                    Action::None
                }
                _ => {
                    self.dialog = Some(Dialog::ConfirmDelete { item, yes_selected });
                    Action::None
                }
            },
            Dialog::EditAmount { item, amount } => match code {
                KeyCode::Enter => {
                    if amount == item.amount {
                        Action::None
                    } else {
                        Action::Update(item.with_amount(amount))
                    }
                }
                KeyCode::Esc => Action::None,
                KeyCode::Char('+' | 'k') | KeyCode::Up | KeyCode::Right => {
                    self.dialog = Some(Dialog::EditAmount {
                        item,
                        amount: stock_core::amount::increment(amount),
                    });
                    Action::None
                }
                KeyCode::Char('-' | 'j') | KeyCode::Down | KeyCode::Left => {
                    self.dialog = Some(Dialog::EditAmount {
                        item,
                        amount: stock_core::amount::decrement(amount),
                    });
                    Action::None
                }
                _ => {
                    self.dialog = Some(Dialog::EditAmount { item, amount });
                    Action::None
                }
            },
        }
    }
}
