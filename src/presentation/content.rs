//! Static restaurant information shown on the Home and About screens.

pub struct Dish {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

pub const RESTAURANT_NAME: &str = "Kamayan Filipino Restaurant";
pub const TAGLINE: &str = "Authentic Filipino Cuisine Since 1995";
pub const RATING: &str = "4.9 • 1,247 reviews";
pub const PHONE: &str = "+63 2 123 4567";
pub const EMAIL: &str = "info@kamayanrestaurant.com";
pub const ADDRESS: [&str; 2] = ["123 Rizal Street, Makati City", "Metro Manila, Philippines"];
pub const HOURS_SUMMARY: &str = "11AM - 10PM";
pub const HOURS: [&str; 3] = [
    "Monday - Thursday: 11:00 AM - 10:00 PM",
    "Friday - Saturday: 11:00 AM - 11:00 PM",
    "Sunday: 12:00 PM - 9:00 PM",
];

pub const FEATURED_DISHES: [Dish; 4] = [
    Dish {
        name: "Adobo",
        price: "₱280",
        description: "Traditional Filipino braised pork and chicken",
    },
    Dish {
        name: "Lechon Kawali",
        price: "₱320",
        description: "Crispy pork belly with liver sauce",
    },
    Dish {
        name: "Kare-Kare",
        price: "₱350",
        description: "Oxtail stew with peanut sauce",
    },
    Dish {
        name: "Lumpia Shanghai",
        price: "₱180",
        description: "Crispy spring rolls with ground pork",
    },
];

/// (title, description) pairs for "Why Choose Kamayan?".
pub const FEATURES: [(&str, &str); 3] = [
    ("Authentic Recipes", "Traditional Filipino dishes passed down through generations"),
    ("Fresh Ingredients", "Sourced locally and prepared daily for maximum freshness"),
    ("Expert Chefs", "Filipino culinary masters with over 20 years of experience"),
];

pub const STORY: [&str; 2] = [
    "Since 1995, Kamayan Filipino Restaurant has been serving authentic Filipino cuisine to the \
     community. Founded by the Dela Cruz family, we've maintained our commitment to traditional \
     recipes, fresh ingredients, and warm Filipino hospitality for nearly three decades.",
    "The name \"Kamayan\" refers to the traditional Filipino way of eating with hands, \
     symbolizing the communal and familial spirit that defines Filipino culture. We invite you \
     to experience this tradition in our welcoming atmosphere.",
];

/// (value, label) pairs.
pub const STATS: [(&str, &str); 3] = [("4.9", "Rating"), ("29", "Years"), ("15+", "Awards")];

pub const SPECIALTIES: [(&str, &str); 4] = [
    ("Traditional Adobo", "Our signature dish with perfectly balanced vinegar and soy sauce"),
    ("Kare-Kare", "Rich oxtail stew with authentic peanut sauce"),
    ("Lechon Kawali", "Crispy pork belly served with traditional liver sauce"),
    ("Lumpia Shanghai", "Golden crispy spring rolls with seasoned ground pork"),
];

pub const MISSION: &str = "To preserve and share the rich culinary heritage of the Philippines \
    while creating a gathering place where families and friends can enjoy authentic flavors, \
    warm hospitality, and unforgettable dining experiences.";
