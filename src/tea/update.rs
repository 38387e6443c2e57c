//! Update function for TEA pattern
//!
//! The only place the model changes. Feed content changes at exactly two
//! points: a loaded snapshot and a failed batch.

use crate::tea::message::{FeedMessage, NewsMessage, SystemMessage, ToastLevel, UIMessage};
use crate::tea::model::PageScroll;
use crate::tea::{Command, Message, Model, UpdateResult};
use crate::routes::Route;
use crate::ui::{self, SPINNER_FRAMES};

/// Main update function that processes messages and returns updated model with commands
pub fn update(model: Model, message: Message) -> UpdateResult<Model> {
    match message {
        Message::System(msg) => update_system(model, msg),
        Message::UI(msg) => update_ui(model, msg),
        Message::News(msg) => update_news(model, msg),
        Message::Feed(msg) => update_feed(model, msg),
    }
}

/// Handle system messages
fn update_system(mut model: Model, message: SystemMessage) -> UpdateResult<Model> {
    match message {
        SystemMessage::Quit => {
            model.app_state.should_quit = true;
            UpdateResult::just_model(model)
        }

        SystemMessage::Initialize(route) => {
            model.route = route;
            UpdateResult::with_command(
                model,
                Command::message(Message::Feed(FeedMessage::Refresh)),
            )
        }

        SystemMessage::Tick => {
            if model.feed.is_loading() {
                model.app_state.spinner_frame =
                    (model.app_state.spinner_frame + 1) % SPINNER_FRAMES.len();
            }
            model.toasts.update();
            UpdateResult::just_model(model)
        }

        SystemMessage::Resize(width, height) => {
            model.app_state.terminal_size = (width, height);
            clamp_scroll(&mut model);
            UpdateResult::just_model(model)
        }
    }
}

/// Handle shell messages
fn update_ui(mut model: Model, message: UIMessage) -> UpdateResult<Model> {
    match message {
        UIMessage::Navigate(route) => {
            model.route = route;
            model.news.search_active = false;
            UpdateResult::just_model(model)
        }

        UIMessage::NextPage => {
            let next = model.route.next();
            update_ui(model, UIMessage::Navigate(next))
        }

        UIMessage::PreviousPage => {
            let previous = model.route.previous();
            update_ui(model, UIMessage::Navigate(previous))
        }

        UIMessage::ScrollDown(rows) => {
            let route = model.route;
            let offset = model.scroll.offset(route).saturating_add(rows);
            model.scroll.set(route, offset, ui::max_scroll(&model, route));
            UpdateResult::just_model(model)
        }

        UIMessage::ScrollUp(rows) => {
            let route = model.route;
            let offset = model.scroll.offset(route).saturating_sub(rows);
            model.scroll.set(route, offset, ui::max_scroll(&model, route));
            UpdateResult::just_model(model)
        }

        UIMessage::ShowToast(text, level) => {
            model.toasts.show(text, level);
            UpdateResult::just_model(model)
        }
    }
}

/// Pull scroll offsets back inside the content after the viewport changed
fn clamp_scroll(model: &mut Model) {
    for route in [Route::Home, Route::Poems] {
        let offset = model.scroll.offset(route);
        let max = ui::max_scroll(model, route);
        model.scroll.set(route, offset, max);
    }
}

/// Handle news page messages
fn update_news(mut model: Model, message: NewsMessage) -> UpdateResult<Model> {
    let Model { feed, news, .. } = &mut model;

    match message {
        NewsMessage::StartSearch => news.search_active = true,
        NewsMessage::EndSearch => news.search_active = false,
        NewsMessage::SearchInput(c) => news.push_char(c, feed.news()),
        NewsMessage::SearchBackspace => news.pop_char(feed.news()),
        NewsMessage::SearchClear => news.set_term(String::new(), feed.news()),
        NewsMessage::SelectNext => news.select_next(),
        NewsMessage::SelectPrevious => news.select_previous(),
        NewsMessage::OpenSelected => {
            let command = match model.selected_article() {
                Some(article) if !article.url.is_empty() => Command::OpenUrl(article.url.clone()),
                Some(_) => Command::toast("This article has no link", ToastLevel::Info),
                None => Command::none(),
            };
            return UpdateResult::with_command(model, command);
        }
    }

    UpdateResult::just_model(model)
}

/// Handle feed lifecycle messages
fn update_feed(mut model: Model, message: FeedMessage) -> UpdateResult<Model> {
    match message {
        FeedMessage::Refresh => {
            if model.app_state.fetch_in_flight {
                tracing::debug!("Refresh ignored, a fetch is already in flight");
                return UpdateResult::just_model(model);
            }
            model.app_state.fetch_in_flight = true;
            model.feed.begin_refresh();
            UpdateResult::with_command(model, Command::FetchFeed)
        }

        FeedMessage::Loaded(snapshot) => {
            let was_refresh = model.feed.has_content();
            model.app_state.fetch_in_flight = false;
            model.feed.apply_snapshot(*snapshot);
            model.news.recompute(model.feed.news());
            model.scroll = PageScroll::default();

            if was_refresh {
                model.toasts.show("Feed refreshed".to_string(), ToastLevel::Success);
            }
            UpdateResult::just_model(model)
        }

        FeedMessage::Failed(error) => {
            model.app_state.fetch_in_flight = false;
            model.feed.record_failure(&error);
            model.toasts.show(
                format!("Could not load the feed: {}. Press r to retry.", error),
                ToastLevel::Error,
            );
            UpdateResult::just_model(model)
        }
    }
}
