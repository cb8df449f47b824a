/// Home feed state: highlighted category pill and search text

use super::data::CATEGORIES;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    CategorySelected(&'static str),
    SearchChanged(String),
}

#[derive(Debug)]
pub struct Home {
    /// Highlighted pill; the feed always lists every recipe
    category: &'static str,
    search: String,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            category: CATEGORIES[0],
            search: String::new(),
        }
    }
}

impl Home {
    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::CategorySelected(category) => self.category = category,
            Message::SearchChanged(search) => self.search = search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_highlighted_first() {
        let home = Home::default();
        assert_eq!(home.category(), "All");
        assert!(home.search().is_empty());
    }

    #[test]
    fn test_category_selection_moves_highlight() {
        let mut home = Home::default();
        home.update(Message::CategorySelected("Dessert"));
        assert_eq!(home.category(), "Dessert");

        home.update(Message::CategorySelected("Dinner"));
        assert_eq!(home.category(), "Dinner");
    }

    #[test]
    fn test_search_text_is_kept() {
        let mut home = Home::default();
        home.update(Message::SearchChanged("pasta".to_string()));
        assert_eq!(home.search(), "pasta");
        assert_eq!(home.category(), "All");
    }
}
