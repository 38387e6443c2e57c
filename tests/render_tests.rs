use chrono::Local;
use ratatui::{backend::TestBackend, Terminal};

use stellarfeed::feed::testing::{sample_apod, sample_constellation, sample_news, sample_poems};
use stellarfeed::feed::{Endpoint, FeedSnapshot, FetchError, Poem};
use stellarfeed::routes::Route;
use stellarfeed::tea::message::{FeedMessage, NewsMessage, SystemMessage, UIMessage};
use stellarfeed::tea::{update, Message, Model};
use stellarfeed::theme::Theme;
use stellarfeed::ui::{
    self,
    about::ABOUT_HEADING,
    home::{HOME_HEADING, HOME_LOADING, POEM_HEADING},
    news::{NO_NEWS_MESSAGE, NO_RESULTS_MESSAGE, SEARCH_PLACEHOLDER},
    poems::{NO_POEMS_MESSAGE, POEMS_HEADING},
    LOADING_MESSAGE,
};

fn snapshot() -> FeedSnapshot {
    FeedSnapshot {
        picture: serde_json::from_value(sample_apod()).unwrap(),
        news: serde_json::from_value(sample_news()).unwrap(),
        poems: serde_json::from_value(sample_poems()).unwrap(),
        constellation: serde_json::from_value(sample_constellation()).unwrap(),
        fetched_at: Local::now(),
    }
}

fn send(model: Model, message: Message) -> Model {
    update(model, message).model
}

/// Model on `route` after one successful fetch
fn loaded(route: Route, snapshot: FeedSnapshot) -> Model {
    let model = send(Model::new(route), Message::Feed(FeedMessage::Refresh));
    let mut model = send(model, Message::Feed(FeedMessage::Loaded(Box::new(snapshot))));
    model.toasts.clear();
    model
}

fn search(mut model: Model, term: &str) -> Model {
    model = send(model, Message::News(NewsMessage::StartSearch));
    for c in term.chars() {
        model = send(model, Message::News(NewsMessage::SearchInput(c)));
    }
    send(model, Message::News(NewsMessage::EndSearch))
}

fn render(model: &Model) -> String {
    render_sized(model, 110, 40)
}

fn render_sized(model: &Model, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let theme = Theme::stellar_dark();
    terminal.draw(|frame| ui::render(frame, model, &theme)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_first_load_shows_loading_screen() {
    let model = send(Model::default(), Message::Feed(FeedMessage::Refresh));
    let screen = render(&model);

    assert!(screen.contains(LOADING_MESSAGE));
    assert!(screen.contains("Loading feed…"));
    assert!(!screen.contains(HOME_HEADING));
}

#[test]
fn test_home_shows_picture_and_poem_of_the_day() {
    let screen = render(&loaded(Route::Home, snapshot()));

    assert!(screen.contains(HOME_HEADING));
    assert!(screen.contains("The Pillars of Creation"));
    assert!(screen.contains(POEM_HEADING));
    assert!(screen.contains("The night unfolds its silver map"));
    assert!(screen.contains("Gemini AI"));
    // Only the first poem is the poem of the day
    assert!(!screen.contains("Sarah Williams"));
}

#[test]
fn test_home_without_poems_shows_placeholder() {
    let mut data = snapshot();
    data.poems.clear();
    let screen = render(&loaded(Route::Home, data));

    assert!(screen.contains(HOME_LOADING));
    assert!(!screen.contains("The Pillars of Creation"));
}

#[test]
fn test_news_lists_every_article_in_order() {
    let screen = render(&loaded(Route::News, snapshot()));

    assert!(screen.contains(SEARCH_PLACEHOLDER));
    let mars = screen.find("Mars Rover Lands").unwrap();
    let jupiter = screen.find("Jupiter Moons").unwrap();
    assert!(mars < jupiter);
    assert!(screen.contains("2 of 2 articles"));
}

#[test]
fn test_news_search_filters_case_insensitively() {
    let model = search(loaded(Route::News, snapshot()), "JUPITER");
    let screen = render(&model);

    assert!(screen.contains("Jupiter Moons"));
    assert!(!screen.contains("Mars Rover Lands"));
    assert!(screen.contains("1 of 2 articles"));
}

#[test]
fn test_news_empty_states_are_distinct() {
    let mut data = snapshot();
    data.news.clear();
    let screen = render(&loaded(Route::News, data));
    assert!(screen.contains(NO_NEWS_MESSAGE));
    assert!(!screen.contains(NO_RESULTS_MESSAGE));

    let model = search(loaded(Route::News, snapshot()), "saturn");
    let screen = render(&model);
    assert!(screen.contains(NO_RESULTS_MESSAGE));
    assert!(!screen.contains(NO_NEWS_MESSAGE));
    assert!(screen.contains("saturn"));
}

#[test]
fn test_poems_page() {
    let screen = render(&loaded(Route::Poems, snapshot()));
    assert!(screen.contains(POEMS_HEADING));
    assert!(screen.contains("The night unfolds its silver map"));
    assert!(screen.contains("Sarah Williams"));

    let mut data = snapshot();
    data.poems.clear();
    let screen = render(&loaded(Route::Poems, data));
    assert!(screen.contains(NO_POEMS_MESSAGE));
}

/// Model on `route` in an 80x24 terminal
fn small_terminal(route: Route, snapshot: FeedSnapshot) -> Model {
    send(
        loaded(route, snapshot),
        Message::System(SystemMessage::Resize(80, 24)),
    )
}

#[test]
fn test_every_poem_is_reachable_by_scrolling() {
    let mut data = snapshot();
    data.poems = (1..=12)
        .map(|n| {
            Poem::new(
                format!("Poem {n} opens\nPoem {n} turns\nPoem {n} closes"),
                format!("Poet {n}"),
            )
        })
        .collect();
    let mut model = small_terminal(Route::Poems, data);

    let screen = render_sized(&model, 80, 24);
    assert!(screen.contains("Poem 1 opens"));
    assert!(screen.contains("Poem 3 closes"));
    assert!(!screen.contains("Poem 12 closes"));

    for _ in 0..5 {
        model = send(model, Message::UI(UIMessage::ScrollDown(10)));
    }
    let screen = render_sized(&model, 80, 24);
    assert!(screen.contains("Poem 12 closes"));
    assert!(screen.contains("Poet 12"));
    assert!(!screen.contains("Poem 1 opens"));

    model = send(model, Message::UI(UIMessage::ScrollUp(u16::MAX)));
    let screen = render_sized(&model, 80, 24);
    assert!(screen.contains("Poem 1 opens"));
}

#[test]
fn test_long_picture_explanation_scrolls_to_the_poem() {
    let mut data = snapshot();
    data.picture.explanation = "Cold gas and dust drift through the Eagle Nebula. ".repeat(60);
    let mut model = small_terminal(Route::Home, data);

    let screen = render_sized(&model, 80, 24);
    assert!(screen.contains("The Pillars of Creation"));
    assert!(!screen.contains("Gemini AI"));

    model = send(model, Message::UI(UIMessage::ScrollDown(u16::MAX)));
    let screen = render_sized(&model, 80, 24);
    assert!(screen.contains(POEM_HEADING));
    assert!(screen.contains("The night unfolds its silver map"));
    assert!(screen.contains("Gemini AI"));
    assert!(!screen.contains("The Pillars of Creation"));
}

#[test]
fn test_about_page_is_static() {
    let model = send(
        Model::new(Route::Home),
        Message::UI(UIMessage::Navigate(Route::About)),
    );
    let mut model = send(model, Message::Feed(FeedMessage::Refresh));
    model = send(
        model,
        Message::Feed(FeedMessage::Failed(FetchError::network(
            Endpoint::Apod,
            "connection refused",
        ))),
    );
    model.toasts.clear();

    let screen = render(&model);
    assert!(screen.contains(ABOUT_HEADING));
    assert!(screen.contains("NewsAPI.org"));
}

#[test]
fn test_failed_refresh_keeps_content_and_offers_retry() {
    let model = send(loaded(Route::Home, snapshot()), Message::Feed(FeedMessage::Refresh));
    let mut model = send(
        model,
        Message::Feed(FeedMessage::Failed(FetchError::status(Endpoint::News, 502))),
    );
    model.toasts.clear();

    let screen = render(&model);
    assert!(screen.contains("The Pillars of Creation"));
    assert!(screen.contains("Fetch failed"));
}

#[test]
fn test_navbar_marks_all_pages() {
    let screen = render(&loaded(Route::Poems, snapshot()));
    for route in Route::ALL {
        assert!(screen.contains(route.title()), "{}", route);
    }
}
