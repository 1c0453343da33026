//! The fixed sample catalog table.

use chrono::NaiveDate;

use crate::{Category, Product};

fn category(
  id: u32,
  name: &str,
  description: &str,
  product_count: usize,
  subcategories: &[&str],
) -> Category {
  Category {
    id,
    name: name.to_owned(),
    description: description.to_owned(),
    product_count,
    subcategories: subcategories.iter().map(|s| (*s).to_owned()).collect(),
  }
}

fn product(
  id: u32,
  name: &str,
  description: &str,
  price: f64,
  category: &str,
  brand: &str,
  tags: &[&str],
  added: &str,
) -> Product {
  let added = NaiveDate::parse_from_str(added, "%Y-%m-%d").unwrap_or_default();
  Product {
    id,
    name: name.to_owned(),
    description: description.to_owned(),
    price,
    original_price: None,
    category: category.to_owned(),
    brand: brand.to_owned(),
    tags: tags.iter().map(|t| (*t).to_owned()).collect(),
    rating: None,
    review_count: None,
    created_at: added,
    updated_at: added,
  }
}

pub(crate) fn categories() -> Vec<Category> {
  vec![
    category(
      1,
      "Electronics",
      "Latest gadgets and electronic devices",
      8,
      &["Smartphones", "Laptops", "Audio", "Cameras"],
    ),
    category(
      2,
      "Fashion",
      "Trendy clothing and accessories",
      6,
      &["Clothing", "Shoes", "Accessories", "Jewelry"],
    ),
    category(
      3,
      "Home & Garden",
      "Everything for your home and garden",
      5,
      &["Furniture", "Decor", "Garden", "Kitchen"],
    ),
    category(
      4,
      "Sports & Fitness",
      "Equipment for active lifestyle",
      4,
      &["Fitness", "Outdoor", "Team Sports", "Yoga"],
    ),
    category(
      5,
      "Books & Media",
      "Books, magazines, and digital content",
      3,
      &["Fiction", "Non-Fiction", "Magazines"],
    ),
    category(
      6,
      "Beauty & Personal Care",
      "Beauty products and personal care items",
      4,
      &["Skincare", "Makeup", "Fragrances", "Hair Care"],
    ),
    category(
      7,
      "Automotive",
      "Car parts and accessories",
      3,
      &["Parts", "Accessories", "Maintenance"],
    ),
    category(
      8,
      "Garden & Outdoor",
      "Garden tools and outdoor equipment",
      4,
      &["Tools", "Plants", "Outdoor Living", "Landscaping"],
    ),
  ]
}

pub(crate) fn products() -> Vec<Product> {
  vec![
    // Electronics
    product(
      1,
      "iPhone 15 Pro",
      "Latest iPhone with advanced camera system and A17 Pro chip",
      999.99,
      "Electronics",
      "Apple",
      &["smartphone", "camera", "5G", "wireless charging"],
      "2024-01-15",
    ),
    product(
      2,
      "MacBook Air M2",
      "Ultra-thin laptop with M2 chip for ultimate performance",
      1199.99,
      "Electronics",
      "Apple",
      &["laptop", "ultrabook", "M2 chip", "retina display"],
      "2024-01-10",
    ),
    product(
      3,
      "Sony WH-1000XM5",
      "Premium noise-canceling headphones with exceptional sound quality",
      399.99,
      "Electronics",
      "Sony",
      &["headphones", "noise-canceling", "bluetooth", "premium audio"],
      "2024-01-08",
    ),
    product(
      4,
      "Canon EOS R6",
      "Full-frame mirrorless camera for professional photography",
      2499.99,
      "Electronics",
      "Canon",
      &["camera", "mirrorless", "full-frame", "4K video"],
      "2024-01-05",
    ),
    product(
      5,
      "iPad Air",
      "Powerful tablet with M1 chip and stunning display",
      599.99,
      "Electronics",
      "Apple",
      &["tablet", "iPad", "M1 chip", "pencil support"],
      "2024-01-12",
    ),
    product(
      6,
      "Samsung Galaxy S24",
      "Android flagship with AI features and stunning display",
      799.99,
      "Electronics",
      "Samsung",
      &["smartphone", "Android", "AI", "5G"],
      "2024-01-18",
    ),
    product(
      7,
      "Dell XPS 13",
      "Premium ultrabook with InfinityEdge display",
      1299.99,
      "Electronics",
      "Dell",
      &["laptop", "ultrabook", "Windows", "premium"],
      "2024-01-20",
    ),
    product(
      8,
      "AirPods Pro",
      "Wireless earbuds with active noise cancellation",
      249.99,
      "Electronics",
      "Apple",
      &["earbuds", "wireless", "noise-canceling", "bluetooth"],
      "2024-01-22",
    ),
    // Fashion
    product(
      9,
      "Classic White T-Shirt",
      "Premium cotton t-shirt with perfect fit",
      29.99,
      "Fashion",
      "Premium Basics",
      &["t-shirt", "cotton", "basic", "casual"],
      "2024-01-15",
    ),
    product(
      10,
      "Summer Floral Dress",
      "Beautiful floral print dress perfect for summer",
      89.99,
      "Fashion",
      "Summer Style",
      &["dress", "floral", "summer", "casual"],
      "2024-01-10",
    ),
    product(
      11,
      "Nike Air Max Sneakers",
      "Comfortable sneakers with iconic Air Max design",
      129.99,
      "Fashion",
      "Nike",
      &["sneakers", "athletic", "comfortable", "stylish"],
      "2024-01-08",
    ),
    product(
      12,
      "Premium Denim Jeans",
      "High-quality denim jeans with perfect stretch",
      79.99,
      "Fashion",
      "Denim Co.",
      &["jeans", "denim", "stretch", "premium"],
      "2024-01-05",
    ),
    product(
      13,
      "Leather Jacket",
      "Classic leather jacket with modern styling",
      199.99,
      "Fashion",
      "Leather Craft",
      &["jacket", "leather", "classic", "stylish"],
      "2024-01-12",
    ),
    product(
      14,
      "Silk Scarf",
      "Elegant silk scarf with beautiful patterns",
      49.99,
      "Fashion",
      "Silk Elegance",
      &["scarf", "silk", "elegant", "accessory"],
      "2024-01-18",
    ),
    // Home & Garden
    product(
      15,
      "Modern Coffee Table",
      "Sleek coffee table with storage shelf",
      299.99,
      "Home & Garden",
      "Modern Home",
      &["furniture", "coffee table", "modern", "storage"],
      "2024-01-15",
    ),
    product(
      16,
      "LED Floor Lamp",
      "Adjustable LED lamp with warm lighting",
      89.99,
      "Home & Garden",
      "Light Co.",
      &["lamp", "LED", "adjustable", "modern"],
      "2024-01-10",
    ),
    product(
      17,
      "Indoor Plant Set",
      "Set of 3 low-maintenance indoor plants",
      59.99,
      "Home & Garden",
      "Green Thumb",
      &["plants", "indoor", "low-maintenance", "decor"],
      "2024-01-08",
    ),
    product(
      18,
      "Non-Stick Cookware Set",
      "Complete cookware set with non-stick coating",
      199.99,
      "Home & Garden",
      "Kitchen Pro",
      &["cookware", "non-stick", "kitchen", "complete set"],
      "2024-01-05",
    ),
    product(
      19,
      "Garden Tool Set",
      "Essential garden tools for every gardener",
      79.99,
      "Home & Garden",
      "Garden Master",
      &["garden", "tools", "essential", "durable"],
      "2024-01-12",
    ),
    // Sports & Fitness
    product(
      20,
      "Yoga Mat Premium",
      "Non-slip yoga mat with carrying strap",
      39.99,
      "Sports & Fitness",
      "Yoga Life",
      &["yoga", "mat", "non-slip", "premium"],
      "2024-01-15",
    ),
    product(
      21,
      "Dumbbell Set",
      "Adjustable dumbbell set for home workouts",
      149.99,
      "Sports & Fitness",
      "Fitness Pro",
      &["dumbbells", "fitness", "adjustable", "home gym"],
      "2024-01-10",
    ),
    product(
      22,
      "Basketball",
      "Official size basketball for indoor/outdoor use",
      29.99,
      "Sports & Fitness",
      "Sports Co.",
      &["basketball", "sports", "official size", "durable"],
      "2024-01-08",
    ),
    product(
      23,
      "Tennis Racket",
      "Professional tennis racket with premium grip",
      89.99,
      "Sports & Fitness",
      "Tennis Pro",
      &["tennis", "racket", "professional", "premium grip"],
      "2024-01-05",
    ),
    // Books & Media
    product(
      24,
      "The Great Gatsby",
      "Classic novel by F. Scott Fitzgerald",
      12.99,
      "Books & Media",
      "Classic Books",
      &["novel", "classic", "fiction", "literature"],
      "2024-01-15",
    ),
    product(
      25,
      "Cooking Masterclass",
      "Comprehensive cookbook with 500+ recipes",
      34.99,
      "Books & Media",
      "Culinary Arts",
      &["cookbook", "recipes", "cooking", "comprehensive"],
      "2024-01-10",
    ),
    product(
      26,
      "Tech Magazine",
      "Monthly technology magazine with latest trends",
      8.99,
      "Books & Media",
      "Tech Media",
      &["magazine", "technology", "monthly", "trends"],
      "2024-01-08",
    ),
    // Beauty & Personal Care
    product(
      27,
      "Anti-Aging Cream",
      "Advanced anti-aging formula with retinol",
      79.99,
      "Beauty & Personal Care",
      "Beauty Science",
      &["skincare", "anti-aging", "retinol", "premium"],
      "2024-01-15",
    ),
    product(
      28,
      "Matte Lipstick Set",
      "Set of 6 long-lasting matte lipsticks",
      49.99,
      "Beauty & Personal Care",
      "Color Cosmetics",
      &["lipstick", "matte", "long-lasting", "set"],
      "2024-01-10",
    ),
    product(
      29,
      "Luxury Perfume",
      "Exclusive fragrance with notes of jasmine and vanilla",
      129.99,
      "Beauty & Personal Care",
      "Luxury Scents",
      &["perfume", "luxury", "fragrance", "exclusive"],
      "2024-01-08",
    ),
    product(
      30,
      "Hair Care Kit",
      "Complete hair care set for all hair types",
      69.99,
      "Beauty & Personal Care",
      "Hair Essentials",
      &["hair care", "complete set", "all hair types", "nourishing"],
      "2024-01-05",
    ),
    // Automotive
    product(
      31,
      "Car Phone Mount",
      "Universal phone holder for dashboard",
      24.99,
      "Automotive",
      "Auto Accessories",
      &["phone mount", "car", "universal", "dashboard"],
      "2024-01-15",
    ),
    product(
      32,
      "LED Headlight Bulbs",
      "Bright LED replacement bulbs for better visibility",
      89.99,
      "Automotive",
      "Auto Lighting",
      &["headlights", "LED", "bright", "replacement"],
      "2024-01-10",
    ),
    product(
      33,
      "Car Wash Kit",
      "Professional car washing and detailing kit",
      59.99,
      "Automotive",
      "Auto Care",
      &["car wash", "detailing", "professional", "complete kit"],
      "2024-01-08",
    ),
    // Garden & Outdoor
    product(
      34,
      "Garden Hose",
      "Heavy-duty garden hose with spray nozzle",
      39.99,
      "Garden & Outdoor",
      "Garden Tools",
      &["garden hose", "heavy-duty", "spray nozzle", "durable"],
      "2024-01-15",
    ),
    product(
      35,
      "Outdoor Patio Set",
      "Comfortable patio furniture for outdoor living",
      299.99,
      "Garden & Outdoor",
      "Outdoor Living",
      &["patio furniture", "outdoor", "comfortable", "durable"],
      "2024-01-10",
    ),
    product(
      36,
      "Solar Garden Lights",
      "Solar-powered lights for garden pathways",
      49.99,
      "Garden & Outdoor",
      "Solar Lighting",
      &["garden lights", "solar-powered", "pathway", "eco-friendly"],
      "2024-01-08",
    ),
    product(
      37,
      "Bird Feeder",
      "Attractive bird feeder to attract garden birds",
      29.99,
      "Garden & Outdoor",
      "Wildlife Garden",
      &["bird feeder", "wildlife", "garden", "attractive"],
      "2024-01-05",
    ),
  ]
}
