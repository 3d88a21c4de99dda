use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Menu categories offered by the restaurant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    Appetizers,
    Soups,
    Seafood,
    #[serde(rename = "Main Course")]
    MainCourse,
    Vegetarian,
    Desserts,
}

impl MenuCategory {
    /// Every concrete category, in menu order
    pub const ALL: [MenuCategory; 6] = [
        MenuCategory::Appetizers,
        MenuCategory::Soups,
        MenuCategory::Seafood,
        MenuCategory::MainCourse,
        MenuCategory::Vegetarian,
        MenuCategory::Desserts,
    ];
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuCategory::Appetizers => write!(f, "Appetizers"),
            MenuCategory::Soups => write!(f, "Soups"),
            MenuCategory::Seafood => write!(f, "Seafood"),
            MenuCategory::MainCourse => write!(f, "Main Course"),
            MenuCategory::Vegetarian => write!(f, "Vegetarian"),
            MenuCategory::Desserts => write!(f, "Desserts"),
        }
    }
}

impl FromStr for MenuCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "appetizers" => Ok(MenuCategory::Appetizers),
            "soups" => Ok(MenuCategory::Soups),
            "seafood" => Ok(MenuCategory::Seafood),
            "main course" => Ok(MenuCategory::MainCourse),
            "vegetarian" => Ok(MenuCategory::Vegetarian),
            "desserts" => Ok(MenuCategory::Desserts),
            _ => Err(format!("Invalid menu category: {}", s)),
        }
    }
}

/// Menu category selector; `All` is filter-only and never stored on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCategoryFilter {
    All,
    Category(MenuCategory),
}

impl fmt::Display for MenuCategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuCategoryFilter::All => write!(f, "All"),
            MenuCategoryFilter::Category(category) => category.fmt(f),
        }
    }
}

impl FromStr for MenuCategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(MenuCategoryFilter::All)
        } else {
            s.parse().map(MenuCategoryFilter::Category)
        }
    }
}

/// Gallery categories used on the photo wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalleryCategory {
    Restaurant,
    Food,
    Resort,
    Rooms,
    Events,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 5] = [
        GalleryCategory::Restaurant,
        GalleryCategory::Food,
        GalleryCategory::Resort,
        GalleryCategory::Rooms,
        GalleryCategory::Events,
    ];
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryCategory::Restaurant => write!(f, "Restaurant"),
            GalleryCategory::Food => write!(f, "Food"),
            GalleryCategory::Resort => write!(f, "Resort"),
            GalleryCategory::Rooms => write!(f, "Rooms"),
            GalleryCategory::Events => write!(f, "Events"),
        }
    }
}

impl FromStr for GalleryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "restaurant" => Ok(GalleryCategory::Restaurant),
            "food" => Ok(GalleryCategory::Food),
            "resort" => Ok(GalleryCategory::Resort),
            "rooms" => Ok(GalleryCategory::Rooms),
            "events" => Ok(GalleryCategory::Events),
            _ => Err(format!("Invalid gallery category: {}", s)),
        }
    }
}

/// Gallery category selector with the filter-only `All` pseudo-value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCategoryFilter {
    All,
    Category(GalleryCategory),
}

impl fmt::Display for GalleryCategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryCategoryFilter::All => write!(f, "All"),
            GalleryCategoryFilter::Category(category) => category.fmt(f),
        }
    }
}

impl FromStr for GalleryCategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(GalleryCategoryFilter::All)
        } else {
            s.parse().map(GalleryCategoryFilter::Category)
        }
    }
}

/// Days a special can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weekday::Monday => write!(f, "Monday"),
            Weekday::Tuesday => write!(f, "Tuesday"),
            Weekday::Wednesday => write!(f, "Wednesday"),
            Weekday::Thursday => write!(f, "Thursday"),
            Weekday::Friday => write!(f, "Friday"),
            Weekday::Saturday => write!(f, "Saturday"),
            Weekday::Sunday => write!(f, "Sunday"),
        }
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            _ => Err(format!("Invalid weekday: {}", s)),
        }
    }
}

/// Optional occasion attached to a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Birthday,
    Anniversary,
    Proposal,
    Business,
    Celebration,
    Other,
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occasion::Birthday => write!(f, "birthday"),
            Occasion::Anniversary => write!(f, "anniversary"),
            Occasion::Proposal => write!(f, "proposal"),
            Occasion::Business => write!(f, "business"),
            Occasion::Celebration => write!(f, "celebration"),
            Occasion::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Occasion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "birthday" => Ok(Occasion::Birthday),
            "anniversary" => Ok(Occasion::Anniversary),
            "proposal" => Ok(Occasion::Proposal),
            "business" => Ok(Occasion::Business),
            "celebration" => Ok(Occasion::Celebration),
            "other" => Ok(Occasion::Other),
            _ => Err(format!("Invalid occasion: {}", s)),
        }
    }
}
