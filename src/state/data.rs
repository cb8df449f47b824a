/// Shared data structures and the built-in catalog
///
/// Everything the screens display is fixed mock content. The structs here
/// are the data model that flows from the state layer into the views.

/// A recipe card on the Home feed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recipe {
    pub id: u32,
    pub title: &'static str,
    /// Preparation time as displayed (e.g. "25 min")
    pub time: &'static str,
    pub category: &'static str,
    pub likes: u32,
}

/// Full recipe shown on the detail screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeDetail {
    pub title: &'static str,
    pub author: &'static str,
    pub time: &'static str,
    pub servings: u32,
    pub difficulty: &'static str,
    pub description: &'static str,
    /// (name, amount)
    pub ingredients: &'static [(&'static str, &'static str)],
    pub steps: &'static [&'static str],
}

/// An onboarding slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub description: &'static str,
}

/// An ingredient recognised by the camera scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectedIngredient {
    pub name: &'static str,
    /// Confidence in percent
    pub confidence: u8,
}

/// Someone in a live cooking session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Participant {
    pub name: &'static str,
    pub is_host: bool,
}

/// A chat line in a live cooking session
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub user: String,
    pub message: String,
    /// Relative time as displayed (e.g. "2m ago")
    pub time: String,
}

/// A line on the grocery list
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryItem {
    pub id: u32,
    pub name: &'static str,
    pub amount: &'static str,
    pub category: &'static str,
    /// Unit price in dollars
    pub price: f64,
    pub quantity: u32,
    pub checked: bool,
}

/// A profile statistic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// A profile menu entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    pub badge: Option<&'static str>,
    /// Whether the entry carries the notifications toggle
    pub has_toggle: bool,
}

pub const RECIPES: [Recipe; 6] = [
    Recipe { id: 1, title: "Colorful Buddha Bowl", time: "25 min", category: "Healthy", likes: 234 },
    Recipe { id: 2, title: "Creamy Pasta Delight", time: "30 min", category: "Italian", likes: 456 },
    Recipe { id: 3, title: "Breakfast Bliss", time: "15 min", category: "Breakfast", likes: 189 },
    Recipe { id: 4, title: "Sweet Dessert Dreams", time: "45 min", category: "Dessert", likes: 567 },
    Recipe { id: 5, title: "Asian Fusion Bowl", time: "35 min", category: "Asian", likes: 321 },
    Recipe { id: 6, title: "Fresh Ingredients Mix", time: "20 min", category: "Quick", likes: 198 },
];

/// Category pills on the Home feed; the first one starts highlighted
pub const CATEGORIES: [&str; 7] = [
    "All", "Breakfast", "Lunch", "Dinner", "Dessert", "Quick", "Healthy",
];

pub const FEATURED_RECIPE: RecipeDetail = RecipeDetail {
    title: "Creamy Pasta Delight",
    author: "Chef Maria",
    time: "30 min",
    servings: 4,
    difficulty: "Easy",
    description: "A creamy and delicious pasta dish that's perfect for any occasion. \
        Rich flavors combined with fresh ingredients make this a family favorite.",
    ingredients: &[
        ("Pasta (penne or fusilli)", "400g"),
        ("Heavy cream", "1 cup"),
        ("Parmesan cheese", "1 cup grated"),
        ("Garlic cloves", "4 cloves minced"),
        ("Olive oil", "2 tbsp"),
        ("Fresh basil", "1/4 cup chopped"),
        ("Salt and pepper", "to taste"),
        ("Cherry tomatoes", "1 cup halved"),
    ],
    steps: &[
        "Bring a large pot of salted water to boil and cook pasta according to package directions.",
        "While pasta cooks, heat olive oil in a large skillet over medium heat. Add minced garlic and sauté until fragrant.",
        "Add cherry tomatoes to the skillet and cook for 3-4 minutes until they start to soften.",
        "Pour in the heavy cream and bring to a gentle simmer. Cook for 2-3 minutes.",
        "Add the grated Parmesan cheese and stir until melted and smooth. Season with salt and pepper.",
        "Drain the cooked pasta and add it to the sauce. Toss well to coat.",
        "Garnish with fresh basil and extra Parmesan. Serve immediately and enjoy!",
    ],
};

pub const SLIDES: [Slide; 3] = [
    Slide {
        title: "Snap & Cook",
        description: "Take a photo of ingredients and get instant recipe suggestions",
    },
    Slide {
        title: "Cook Together",
        description: "Join live cooking sessions with friends and family anywhere",
    },
    Slide {
        title: "Smart Grocery",
        description: "Auto-generate shopping lists and get ingredients delivered",
    },
];

pub const DETECTED_INGREDIENTS: [DetectedIngredient; 5] = [
    DetectedIngredient { name: "Tomatoes", confidence: 98 },
    DetectedIngredient { name: "Basil", confidence: 95 },
    DetectedIngredient { name: "Garlic", confidence: 92 },
    DetectedIngredient { name: "Onion", confidence: 88 },
    DetectedIngredient { name: "Olive Oil", confidence: 85 },
];

/// Session participants; the first entry is the local user
pub const PARTICIPANTS: [Participant; 4] = [
    Participant { name: "You", is_host: true },
    Participant { name: "Sarah", is_host: false },
    Participant { name: "Mike", is_host: false },
    Participant { name: "Emma", is_host: false },
];

pub fn initial_chat() -> Vec<ChatMessage> {
    [
        ("Sarah", "This looks amazing!", "2m ago"),
        ("Mike", "What temperature should the oven be?", "1m ago"),
        ("Emma", "Can't wait to try this! 🍳", "30s ago"),
    ]
    .into_iter()
    .map(|(user, message, time)| ChatMessage {
        user: user.to_string(),
        message: message.to_string(),
        time: time.to_string(),
    })
    .collect()
}

pub fn initial_grocery_items() -> Vec<GroceryItem> {
    [
        (1, "Pasta (Penne)", "400g", "Grains", 3.99),
        (2, "Heavy Cream", "1 cup", "Dairy", 4.50),
        (3, "Parmesan Cheese", "200g", "Dairy", 7.99),
        (4, "Fresh Garlic", "4 cloves", "Produce", 2.50),
        (5, "Olive Oil", "2 tbsp", "Oils", 12.99),
        (6, "Fresh Basil", "1/4 cup", "Produce", 3.50),
        (7, "Cherry Tomatoes", "1 cup", "Produce", 4.99),
        (8, "Salt & Pepper", "to taste", "Spices", 5.50),
    ]
    .into_iter()
    .map(|(id, name, amount, category, price)| GroceryItem {
        id,
        name,
        amount,
        category,
        price,
        quantity: 1,
        checked: false,
    })
    .collect()
}

pub const PROFILE_STATS: [Stat; 3] = [
    Stat { label: "Recipes", value: "42" },
    Stat { label: "Followers", value: "1.2K" },
    Stat { label: "Following", value: "856" },
];

pub const PROFILE_MENU: [MenuItem; 5] = [
    MenuItem { label: "Account Settings", badge: None, has_toggle: false },
    MenuItem { label: "Notifications", badge: None, has_toggle: true },
    MenuItem { label: "Saved Recipes", badge: Some("24"), has_toggle: false },
    MenuItem { label: "My Recipes", badge: Some("12"), has_toggle: false },
    MenuItem { label: "Achievements", badge: None, has_toggle: false },
];
