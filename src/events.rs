use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::routes::Route;
use crate::tea::message::{FeedMessage, NewsMessage, SystemMessage, UIMessage};
use crate::tea::{Message, Model};

/// Rows moved by PageUp and PageDown
const PAGE_ROWS: u16 = 10;

/// Translates terminal key presses into messages for the current model
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key event to a message; `None` means the key is ignored
    pub fn handle_key_event(&self, key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Message::System(SystemMessage::Quit));
        }

        if model.route == Route::News && model.news.search_active {
            return self.handle_search_key(key);
        }

        match key.code {
            KeyCode::Char('q') => Some(Message::System(SystemMessage::Quit)),
            KeyCode::Char('r') => Some(Message::Feed(FeedMessage::Refresh)),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                Some(Message::UI(UIMessage::Navigate(Route::ALL[index])))
            }
            KeyCode::Tab => Some(Message::UI(UIMessage::NextPage)),
            KeyCode::BackTab => Some(Message::UI(UIMessage::PreviousPage)),
            _ if model.route == Route::News => self.handle_news_key(key, model),
            _ if matches!(model.route, Route::Home | Route::Poems) => self.handle_scroll_key(key),
            _ => None,
        }
    }

    fn handle_news_key(&self, key: KeyEvent, model: &Model) -> Option<Message> {
        let message = match key.code {
            KeyCode::Char('/') => NewsMessage::StartSearch,
            KeyCode::Char('j') | KeyCode::Down => NewsMessage::SelectNext,
            KeyCode::Char('k') | KeyCode::Up => NewsMessage::SelectPrevious,
            KeyCode::Enter => NewsMessage::OpenSelected,
            KeyCode::Esc if !model.news.term().is_empty() => NewsMessage::SearchClear,
            _ => return None,
        };
        Some(Message::News(message))
    }

    fn handle_scroll_key(&self, key: KeyEvent) -> Option<Message> {
        let message = match key.code {
            KeyCode::Char('j') | KeyCode::Down => UIMessage::ScrollDown(1),
            KeyCode::Char('k') | KeyCode::Up => UIMessage::ScrollUp(1),
            KeyCode::PageDown | KeyCode::Char(' ') => UIMessage::ScrollDown(PAGE_ROWS),
            KeyCode::PageUp => UIMessage::ScrollUp(PAGE_ROWS),
            KeyCode::Home | KeyCode::Char('g') => UIMessage::ScrollUp(u16::MAX),
            KeyCode::End | KeyCode::Char('G') => UIMessage::ScrollDown(u16::MAX),
            _ => return None,
        };
        Some(Message::UI(message))
    }

    fn handle_search_key(&self, key: KeyEvent) -> Option<Message> {
        let message = match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NewsMessage::SearchClear
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                NewsMessage::SearchInput(c)
            }
            KeyCode::Backspace => NewsMessage::SearchBackspace,
            KeyCode::Enter | KeyCode::Esc => NewsMessage::EndSearch,
            KeyCode::Down => NewsMessage::SelectNext,
            KeyCode::Up => NewsMessage::SelectPrevious,
            _ => return None,
        };
        Some(Message::News(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn news_model(search_active: bool) -> Model {
        let mut model = Model::new(Route::News);
        model.news.search_active = search_active;
        model
    }

    #[test]
    fn test_global_keys() {
        let handler = EventHandler::new();
        let model = Model::default();

        assert!(matches!(
            handler.handle_key_event(key(KeyCode::Char('q')), &model),
            Some(Message::System(SystemMessage::Quit))
        ));
        assert!(matches!(
            handler.handle_key_event(key(KeyCode::Char('r')), &model),
            Some(Message::Feed(FeedMessage::Refresh))
        ));
        assert!(matches!(
            handler.handle_key_event(key(KeyCode::Char('3')), &model),
            Some(Message::UI(UIMessage::Navigate(Route::Poems)))
        ));
        assert!(handler.handle_key_event(key(KeyCode::Char('/')), &model).is_none());
    }

    #[test]
    fn test_scroll_keys_on_text_pages() {
        let handler = EventHandler::new();
        for route in [Route::Home, Route::Poems] {
            let model = Model::new(route);
            assert!(matches!(
                handler.handle_key_event(key(KeyCode::Char('j')), &model),
                Some(Message::UI(UIMessage::ScrollDown(1)))
            ));
            assert!(matches!(
                handler.handle_key_event(key(KeyCode::Up), &model),
                Some(Message::UI(UIMessage::ScrollUp(1)))
            ));
            assert!(matches!(
                handler.handle_key_event(key(KeyCode::PageDown), &model),
                Some(Message::UI(UIMessage::ScrollDown(PAGE_ROWS)))
            ));
            assert!(matches!(
                handler.handle_key_event(key(KeyCode::Home), &model),
                Some(Message::UI(UIMessage::ScrollUp(u16::MAX)))
            ));
        }

        // The about page is static
        let model = Model::new(Route::About);
        assert!(handler.handle_key_event(key(KeyCode::Char('j')), &model).is_none());
    }

    #[test]
    fn test_search_mode_captures_letters() {
        let handler = EventHandler::new();
        let model = news_model(true);

        assert!(matches!(
            handler.handle_key_event(key(KeyCode::Char('q')), &model),
            Some(Message::News(NewsMessage::SearchInput('q')))
        ));
        assert!(matches!(
            handler.handle_key_event(key(KeyCode::Backspace), &model),
            Some(Message::News(NewsMessage::SearchBackspace))
        ));
        assert!(matches!(
            handler.handle_key_event(key(KeyCode::Esc), &model),
            Some(Message::News(NewsMessage::EndSearch))
        ));
        assert!(matches!(
            handler.handle_key_event(
                KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
                &model
            ),
            Some(Message::News(NewsMessage::SearchClear))
        ));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let handler = EventHandler::new();
        let model = news_model(true);
        assert!(matches!(
            handler.handle_key_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &model
            ),
            Some(Message::System(SystemMessage::Quit))
        ));
    }

    #[test]
    fn test_news_page_keys() {
        let handler = EventHandler::new();
        let model = news_model(false);

        assert!(matches!(
            handler.handle_key_event(key(KeyCode::Char('/')), &model),
            Some(Message::News(NewsMessage::StartSearch))
        ));
        assert!(matches!(
            handler.handle_key_event(key(KeyCode::Char('j')), &model),
            Some(Message::News(NewsMessage::SelectNext))
        ));
        assert!(matches!(
            handler.handle_key_event(key(KeyCode::Enter), &model),
            Some(Message::News(NewsMessage::OpenSelected))
        ));
        // Nothing to clear yet
        assert!(handler.handle_key_event(key(KeyCode::Esc), &model).is_none());
    }
}
