/// Recipe detail state
///
/// Tracks which section is open and the user's progress through the
/// ingredient and step checklists of the featured recipe.

use super::data::{RecipeDetail, FEATURED_RECIPE};

/// Section toggle under the recipe header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Ingredients,
    Steps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SectionSelected(Section),
    IngredientToggled(usize),
    StepToggled(usize),
    LikeToggled,
}

#[derive(Debug)]
pub struct RecipeView {
    recipe: RecipeDetail,
    section: Section,
    ingredients_checked: Vec<bool>,
    steps_completed: Vec<bool>,
    liked: bool,
}

impl Default for RecipeView {
    fn default() -> Self {
        Self::new(FEATURED_RECIPE)
    }
}

impl RecipeView {
    pub fn new(recipe: RecipeDetail) -> Self {
        Self {
            section: Section::Ingredients,
            ingredients_checked: vec![false; recipe.ingredients.len()],
            steps_completed: vec![false; recipe.steps.len()],
            liked: false,
            recipe,
        }
    }

    pub fn recipe(&self) -> &RecipeDetail {
        &self.recipe
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn is_ingredient_checked(&self, index: usize) -> bool {
        self.ingredients_checked.get(index).copied().unwrap_or(false)
    }

    pub fn is_step_completed(&self, index: usize) -> bool {
        self.steps_completed.get(index).copied().unwrap_or(false)
    }

    /// (checked, total)
    pub fn ingredient_progress(&self) -> (usize, usize) {
        progress(&self.ingredients_checked)
    }

    /// (completed, total)
    pub fn step_progress(&self) -> (usize, usize) {
        progress(&self.steps_completed)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::SectionSelected(section) => self.section = section,
            Message::IngredientToggled(index) => toggle(&mut self.ingredients_checked, index),
            Message::StepToggled(index) => toggle(&mut self.steps_completed, index),
            Message::LikeToggled => self.liked = !self.liked,
        }
    }
}

fn toggle(flags: &mut [bool], index: usize) {
    if let Some(flag) = flags.get_mut(index) {
        *flag = !*flag;
    }
}

fn progress(flags: &[bool]) -> (usize, usize) {
    (flags.iter().filter(|&&done| done).count(), flags.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let view = RecipeView::default();
        assert_eq!(view.section(), Section::Ingredients);
        assert_eq!(view.ingredient_progress(), (0, 8));
        assert_eq!(view.step_progress(), (0, 7));
        assert!(!view.is_liked());
    }

    #[test]
    fn test_toggles() {
        let mut view = RecipeView::default();
        view.update(Message::IngredientToggled(2));
        view.update(Message::StepToggled(0));
        view.update(Message::StepToggled(6));
        assert!(view.is_ingredient_checked(2));
        assert_eq!(view.ingredient_progress(), (1, 8));
        assert_eq!(view.step_progress(), (2, 7));

        view.update(Message::StepToggled(0));
        assert!(!view.is_step_completed(0));
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut view = RecipeView::default();
        view.update(Message::IngredientToggled(100));
        view.update(Message::StepToggled(7));
        assert_eq!(view.ingredient_progress(), (0, 8));
        assert_eq!(view.step_progress(), (0, 7));
        assert!(!view.is_ingredient_checked(100));
    }

    #[test]
    fn test_like_toggles_heart() {
        let mut view = RecipeView::default();
        view.update(Message::LikeToggled);
        assert!(view.is_liked());
        view.update(Message::LikeToggled);
        assert!(!view.is_liked());
    }
}
