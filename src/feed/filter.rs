//! Case-insensitive search over the news list

use crate::feed::types::NewsArticle;

/// A prepared news search term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsQuery {
    needle: String,
}

impl NewsQuery {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// An empty query matches every article
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether the term occurs in the article title or description
    pub fn matches(&self, article: &NewsArticle) -> bool {
        self.is_empty()
            || article.title.to_lowercase().contains(&self.needle)
            || article.description.to_lowercase().contains(&self.needle)
    }

    /// Matching articles in their original order
    pub fn apply<'a>(&self, news: &'a [NewsArticle]) -> Vec<&'a NewsArticle> {
        news.iter().filter(|article| self.matches(article)).collect()
    }

    /// Indices of matching articles in their original order
    pub fn positions(&self, news: &[NewsArticle]) -> Vec<usize> {
        news.iter()
            .enumerate()
            .filter(|(_, article)| self.matches(article))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Filter `news` down to the articles whose title or description contains `term`,
/// ignoring case. The input is left untouched and order is preserved.
pub fn filter_news<'a>(news: &'a [NewsArticle], term: &str) -> Vec<&'a NewsArticle> {
    NewsQuery::new(term).apply(news)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, description: &str) -> NewsArticle {
        NewsArticle::new(title, description, format!("https://news/{}", title.len()), "")
    }

    fn sample() -> Vec<NewsArticle> {
        vec![
            article("Mars Rover Lands", "NASA"),
            article("Jupiter Moons", "new discovery"),
            article("Solar storm warning", "Aurora expected over mars base"),
            article("Telescope upgrade", "Webb gets a new instrument"),
        ]
    }

    fn owned(filtered: Vec<&NewsArticle>) -> Vec<NewsArticle> {
        filtered.into_iter().cloned().collect()
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let news = vec![
            article("Mars Rover Lands", "NASA"),
            article("Jupiter Moons", "new discovery"),
        ];
        let result = filter_news(&news, "jupiter");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Jupiter Moons");
    }

    #[test]
    fn test_matches_description() {
        let news = sample();
        let titles: Vec<_> = filter_news(&news, "NEW")
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Jupiter Moons", "Telescope upgrade"]);
    }

    #[test]
    fn test_empty_term_returns_everything() {
        let news = sample();
        assert_eq!(owned(filter_news(&news, "")), news);
    }

    #[test]
    fn test_empty_list_returns_empty() {
        assert!(filter_news(&[], "anything").is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let news = sample();
        for term in ["mars", "a", "zzz", "new", " "] {
            let positions = NewsQuery::new(term).positions(&news);
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            let by_position: Vec<_> = positions.iter().map(|&i| &news[i]).collect();
            assert_eq!(by_position, filter_news(&news, term));
        }
    }

    #[test]
    fn test_case_of_term_does_not_matter() {
        let news = sample();
        assert_eq!(filter_news(&news, "MARS"), filter_news(&news, "mars"));
        assert_eq!(filter_news(&news, "mars").len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let news = sample();
        for term in ["mars", "moon", "", "xyz"] {
            let once = owned(filter_news(&news, term));
            let twice = owned(filter_news(&once, term));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_input_is_not_modified() {
        let news = sample();
        let before = news.clone();
        let _ = filter_news(&news, "mars");
        assert_eq!(news, before);
    }

    #[test]
    fn test_unicode_case_folding() {
        let news = vec![article("Éclipse totale", "")];
        assert_eq!(filter_news(&news, "ÉCLIPSE").len(), 1);
        assert_eq!(filter_news(&news, "éclipse").len(), 1);
    }
}
