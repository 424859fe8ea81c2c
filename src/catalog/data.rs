//! Built-in Checkers Pizza — Redmond menu.

use rust_decimal::Decimal;

use super::models::{
    CatalogDocument, Category, Crust, Product, ServiceHours, Size, Store, StoreHours, Topping,
};

fn cents(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

fn category(id: &str, name: &str, badge: Option<&str>) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        badge: badge.map(Into::into),
    }
}

/// Menu entry under construction; finished with `Product::from`.
struct Entry(Product);

impl Entry {
    fn about(mut self, description: &str) -> Self {
        self.0.description = description.into();
        self
    }

    fn tag(mut self, tag: &str) -> Self {
        self.0.tag = Some(tag.into());
        self
    }

    fn toppings(mut self, toppings: &[&str]) -> Self {
        self.0.default_toppings = toppings.iter().map(|t| t.to_string()).collect();
        self
    }

    fn calories(mut self, calories: &str) -> Self {
        self.0.calories = calories.into();
        self
    }
}

impl From<Entry> for Product {
    fn from(entry: Entry) -> Self {
        entry.0
    }
}

fn entry(id: &str, category: &str, name: &str, price: i64, emoji: &str, customizable: bool) -> Entry {
    Entry(Product {
        id: id.into(),
        category: category.into(),
        name: name.into(),
        description: String::new(),
        base_price: cents(price),
        tag: None,
        default_toppings: Vec::new(),
        calories: String::new(),
        emoji: Some(emoji.into()),
        customizable,
    })
}

/// A customizable pizza.
fn pizza(id: &str, category: &str, name: &str, price: i64) -> Entry {
    entry(id, category, name, price, "🍕", true)
}

/// A fixed-price item.
fn item(id: &str, category: &str, name: &str, price: i64, emoji: &str) -> Entry {
    entry(id, category, name, price, emoji, false)
}

fn menu(entries: Vec<Entry>) -> Vec<Product> {
    entries.into_iter().map(Product::from).collect()
}

fn store() -> Store {
    let hours = || ServiceHours {
        sun_thu: "10:00am - 12:00am".into(),
        fri_sat: "10:00am - 1:00am".into(),
    };
    Store {
        id: "redmond-01".into(),
        name: "Checkers Pizza — Redmond".into(),
        address: "16011 NE 36th Way".into(),
        city: "Redmond".into(),
        state: "WA".into(),
        zip: "98052".into(),
        phone: "(425) 555-0199".into(),
        delivery_estimate: "20-35 minutes".into(),
        hours: StoreHours {
            carryout: hours(),
            delivery: hours(),
        },
    }
}

fn categories() -> Vec<Category> {
    vec![
        category("build-your-own", "Build Your Own", None),
        category("specialty", "Specialty Pizzas", Some("NEW!")),
        category("breads", "Breads", Some("NEW!")),
        category("loaded-tots", "Loaded Tots", None),
        category("chicken", "Chicken", None),
        category("desserts", "Desserts", Some("NEW!")),
        category("pastas", "Oven-Baked Pastas", None),
        category("sandwiches", "Oven-Baked Sandwiches", None),
        category("salads", "Salads", None),
        category("drinks", "Drinks", None),
        category("extras", "Extras", None),
    ]
}

fn pizzas() -> Vec<Product> {
    menu(vec![
        pizza("cheese", "build-your-own", "Cheese", 1099)
            .about("A timeless classic — 100% real mozzarella on our signature sauce.")
            .calories("280 Cal/slice"),
        pizza("pepperoni", "build-your-own", "Pepperoni", 1299)
            .about("Classic pepperoni with 100% real mozzarella on our signature sauce.")
            .tag("TRENDING")
            .toppings(&["pepperoni"])
            .calories("310 Cal/slice"),
        pizza("margherita", "build-your-own", "Margherita", 1299)
            .about("Fresh mozzarella, tomatoes, and basil on a garlic-herb crust.")
            .toppings(&["tomatoes"])
            .calories("290 Cal/slice"),
        pizza("white-pizza", "build-your-own", "White Pizza", 1349)
            .about("Creamy Alfredo sauce with garlic, ricotta, mozzarella, and provolone.")
            .calories("300 Cal/slice"),
        pizza("garlic-lovers", "build-your-own", "Garlic Lovers", 1199)
            .about("Roasted garlic sauce with mozzarella and a parmesan blend.")
            .calories("285 Cal/slice"),
        pizza("buffalo-base", "build-your-own", "Buffalo Style", 1249)
            .about("Spicy buffalo sauce base with mozzarella. Add your favorite toppings!")
            .tag("NEW!")
            .calories("295 Cal/slice"),
        pizza("meatzza", "specialty", "MeatZZa", 1599)
            .about("Pepperoni, ham, Italian sausage and beef, sandwiched between two layers of mozzarella.")
            .toppings(&["pepperoni", "ham", "italian-sausage", "beef"])
            .calories("380 Cal/slice"),
        pizza("extravaganzza", "specialty", "ExtravaganZZa", 1699)
            .about("Pepperoni, ham, Italian sausage, beef, onions, green peppers, mushrooms, black olives, and mozzarella.")
            .toppings(&["pepperoni", "ham", "italian-sausage", "beef", "onions", "green-peppers", "mushrooms", "black-olives"])
            .calories("360 Cal/slice"),
        pizza("veggie", "specialty", "Veggie Supreme", 1499)
            .about("Mushrooms, green peppers, onions, black olives, tomatoes, and mozzarella on our signature sauce.")
            .tag("NEW!")
            .toppings(&["mushrooms", "green-peppers", "onions", "black-olives", "tomatoes"])
            .calories("270 Cal/slice"),
        pizza("bbq-chicken", "specialty", "BBQ Chicken", 1599)
            .about("Grilled chicken, BBQ sauce, onions, mozzarella and provolone.")
            .toppings(&["chicken", "onions"])
            .calories("320 Cal/slice"),
        pizza("spicy-bacon", "specialty", "Spicy Chicken Bacon Ranch", 1699)
            .about("Grilled chicken breast, creamy ranch, smoked bacon, jalapeños, provolone and mozzarella.")
            .tag("NEW!")
            .toppings(&["chicken", "bacon", "jalapenos"])
            .calories("350 Cal/slice"),
        pizza("hawaiian", "specialty", "Hawaiian", 1399)
            .about("Ham, pineapple, mozzarella, and our signature sauce.")
            .toppings(&["ham", "pineapple"])
            .calories("300 Cal/slice"),
        pizza("supreme", "specialty", "Supreme", 1649)
            .about("Pepperoni, sausage, green peppers, onions, mushrooms, and black olives on our signature sauce.")
            .toppings(&["pepperoni", "italian-sausage", "green-peppers", "onions", "mushrooms", "black-olives"])
            .calories("340 Cal/slice"),
        pizza("philly-steak", "specialty", "Philly Cheese Steak", 1699)
            .about("Sliced steak, onions, green peppers, mushrooms, and provolone on a garlic parmesan white sauce.")
            .toppings(&["beef", "onions", "green-peppers", "mushrooms"])
            .calories("370 Cal/slice"),
    ])
}

fn sides() -> Vec<Product> {
    menu(vec![
        item("cheesy-bread", "breads", "Stuffed Cheesy Bread", 799, "🧀")
            .about("Oven-baked breadsticks stuffed with cheese and drizzled with garlic butter.")
            .calories("180 Cal/piece"),
        item("garlic-breadsticks", "breads", "Garlic Breadsticks", 599, "🥖")
            .about("Warm, soft breadsticks brushed with garlic butter and Italian herbs.")
            .calories("140 Cal/piece"),
        item("cinnamon-twists", "breads", "Cinnamon Bread Twists", 649, "🥨")
            .about("Sweet bread twists dusted with cinnamon sugar, served with vanilla icing.")
            .tag("NEW!")
            .calories("190 Cal/piece"),
        item("garlic-knots", "breads", "Garlic Knots", 649, "🥖")
            .about("Soft, hand-tied bread knots tossed in garlic butter and parmesan. 8 per order.")
            .calories("120 Cal/piece"),
        item("cheesy-marinara-bread", "breads", "Cheesy Marinara Bread", 749, "🍞")
            .about("Toasted bread topped with marinara, melted mozzarella, and Italian seasonings.")
            .calories("200 Cal/piece"),
        item("classic-loaded-tots", "loaded-tots", "Classic Loaded Tots", 699, "🥔")
            .about("Crispy tots loaded with cheese, bacon, and ranch.")
            .calories("320 Cal/serving"),
        item("buffalo-chicken-tots", "loaded-tots", "Buffalo Chicken Tots", 849, "🥔")
            .about("Tots topped with buffalo chicken, blue cheese crumbles, and ranch drizzle.")
            .calories("380 Cal/serving"),
        item("philly-tots", "loaded-tots", "Philly Steak Tots", 849, "🥔")
            .about("Tots loaded with seasoned steak, onions, peppers, and cheese sauce.")
            .calories("370 Cal/serving"),
        item("bbq-chicken-tots", "loaded-tots", "BBQ Chicken Tots", 849, "🥔")
            .about("Tots topped with BBQ chicken, mozzarella, red onions, and cilantro.")
            .tag("NEW!")
            .calories("360 Cal/serving"),
        item("chili-cheese-tots", "loaded-tots", "Chili Cheese Tots", 799, "🥔")
            .about("Crispy tots covered in seasoned beef chili and nacho cheese sauce.")
            .calories("400 Cal/serving"),
        item("wings-8pc", "chicken", "8pc Chicken Wings", 999, "🍗")
            .about("Crispy, juicy chicken wings with your choice of sauce.")
            .calories("80 Cal/wing"),
        item("wings-14pc", "chicken", "14pc Chicken Wings", 1599, "🍗")
            .about("Party-size crispy wings with your choice of sauce.")
            .calories("80 Cal/wing"),
        item("chicken-tenders", "chicken", "Chicken Tenders", 849, "🍗")
            .about("Hand-breaded chicken tenders served with dipping sauce. 5 per order.")
            .calories("130 Cal/tender"),
        item("chicken-habanero", "chicken", "Habanero Chicken Bites", 949, "🌶️")
            .about("Boneless chicken bites tossed in a spicy sweet habanero glaze.")
            .tag("NEW!")
            .calories("65 Cal/piece"),
        item("lava-cakes", "desserts", "Chocolate Lava Crunch Cakes", 699, "🍫")
            .about("Oven-baked chocolate cakes with a molten chocolate center. 2 per order.")
            .calories("350 Cal/cake"),
        item("cookie-brownie", "desserts", "Marbled Cookie Brownie", 799, "🍪")
            .about("A decadent brownie swirled with cookie dough, baked to perfection. Serves 6.")
            .tag("TRENDING")
            .calories("210 Cal/slice"),
        item("churro-bites", "desserts", "Churro Bites", 599, "🍩")
            .about("Warm, sugar-coated churro bites with chocolate dipping sauce. 10 per order.")
            .tag("NEW!")
            .calories("45 Cal/piece"),
        item("funnel-cake", "desserts", "Mini Funnel Cakes", 649, "🎪")
            .about("Crispy funnel cake sticks dusted with powdered sugar. Served with chocolate sauce.")
            .calories("280 Cal/serving"),
        item("cinnamon-pull-aparts", "desserts", "Cinnamon Pull-Aparts", 699, "🥐")
            .about("Warm pull-apart bread pieces tossed in cinnamon sugar with sweet vanilla icing.")
            .calories("160 Cal/piece"),
        item("chicken-alfredo", "pastas", "Chicken Alfredo", 999, "🍝")
            .about("Penne pasta in a rich Alfredo sauce with grilled chicken, baked to bubbly perfection.")
            .calories("620 Cal"),
        item("sausage-marinara", "pastas", "Italian Sausage Marinara", 999, "🍝")
            .about("Penne pasta with Italian sausage in a savory marinara sauce, topped with provolone.")
            .calories("590 Cal"),
        item("chicken-carbonara", "pastas", "Chicken Carbonara", 1049, "🍝")
            .about("Penne with grilled chicken, smoked bacon, and onions in a creamy Alfredo sauce.")
            .tag("TRENDING")
            .calories("650 Cal"),
        item("mac-cheese", "pastas", "5-Cheese Mac & Cheese", 799, "🧀")
            .about("Creamy mac & cheese made with five real cheeses, oven-baked to perfection.")
            .calories("540 Cal"),
        item("pasta-primavera", "pastas", "Pasta Primavera", 949, "🍝")
            .about("Penne with mushrooms, onions, green peppers, tomatoes, and Alfredo sauce.")
            .calories("520 Cal"),
        item("baked-ziti", "pastas", "Baked Ziti", 999, "🍝")
            .about("Ziti in a hearty marinara with Italian sausage, ricotta, mozzarella, and provolone.")
            .calories("610 Cal"),
        item("italian-sub", "sandwiches", "Italian", 899, "🥪")
            .about("Salami, ham, pepperoni, provolone, banana peppers, onions, and Italian dressing on artisan bread.")
            .calories("680 Cal"),
        item("chicken-parm-sub", "sandwiches", "Chicken Parm", 899, "🥪")
            .about("Breaded chicken, marinara sauce, mozzarella, and provolone on oven-baked artisan bread.")
            .tag("TRENDING")
            .calories("710 Cal"),
        item("meatball-sub", "sandwiches", "Meatball", 849, "🥪")
            .about("Seasoned meatballs with marinara and melted provolone on artisan bread.")
            .calories("740 Cal"),
        item("buffalo-chicken-sub", "sandwiches", "Buffalo Chicken", 899, "🥪")
            .about("Crispy chicken breast, hot sauce, blue cheese crumbles, and onions on artisan bread.")
            .calories("650 Cal"),
        item("philly-sub", "sandwiches", "Philly Cheese Steak", 949, "🥪")
            .about("Seasoned steak, onions, green peppers, mushrooms, and provolone on artisan bread.")
            .calories("690 Cal"),
        item("mediterranean-veggie-sub", "sandwiches", "Mediterranean Veggie", 849, "🥪")
            .about("Roasted red peppers, banana peppers, diced tomatoes, spinach, feta, and American cheese.")
            .tag("NEW!")
            .calories("530 Cal"),
        item("classic-garden", "salads", "Classic Garden", 799, "🥗")
            .about("Fresh lettuce, tomatoes, carrots, red cabbage, and cucumbers with your choice of dressing.")
            .calories("160 Cal"),
        item("caesar-salad", "salads", "Caesar", 799, "🥗")
            .about("Crisp romaine, croutons, and parmesan tossed in creamy Caesar dressing.")
            .calories("220 Cal"),
        item("chicken-caesar", "salads", "Chicken Caesar", 999, "🥗")
            .about("Romaine, grilled chicken, croutons, and parmesan with Caesar dressing.")
            .tag("TRENDING")
            .calories("360 Cal"),
        item("italian-chef", "salads", "Italian Chef", 949, "🥗")
            .about("Lettuce, ham, salami, provolone, tomatoes, onions, and croutons with Italian dressing.")
            .calories("340 Cal"),
        item("greek-salad", "salads", "Greek", 899, "🥗")
            .about("Romaine, feta, black olives, tomatoes, red onions, and banana peppers with Greek dressing.")
            .calories("280 Cal"),
        item("antipasto", "salads", "Antipasto", 999, "🥗")
            .about("Lettuce, salami, ham, pepperoni, banana peppers, tomatoes, black olives, mozzarella, and Italian dressing.")
            .calories("380 Cal"),
    ])
}

fn drinks_and_extras() -> Vec<Product> {
    menu(vec![
        item("coca-cola", "drinks", "Coca-Cola®", 249, "🥤")
            .about("Ice-cold 20 oz bottle of classic Coca-Cola.")
            .calories("240 Cal"),
        item("diet-coke", "drinks", "Diet Coke®", 249, "🥤")
            .about("20 oz bottle of Diet Coke.")
            .calories("0 Cal"),
        item("sprite", "drinks", "Sprite®", 249, "🥤")
            .about("20 oz bottle of Sprite.")
            .calories("230 Cal"),
        item("dr-pepper", "drinks", "Dr Pepper®", 249, "🥤")
            .about("20 oz bottle of Dr Pepper.")
            .calories("250 Cal"),
        item("lemonade", "drinks", "Lemonade", 299, "🍋")
            .about("Freshly made lemonade — sweet, tart, and refreshing. 20 oz.")
            .calories("180 Cal"),
        item("bottled-water", "drinks", "Bottled Water", 199, "💧")
            .about("20 oz bottle of purified water.")
            .calories("0 Cal"),
        item("orange-fanta", "drinks", "Orange Fanta®", 249, "🍊")
            .about("20 oz bottle of Orange Fanta.")
            .calories("260 Cal"),
        item("2-liter-coke", "drinks", "2-Liter Coca-Cola®", 399, "🥤")
            .about("Large 2-liter bottle of Coca-Cola. Perfect for sharing.")
            .calories("240 Cal/serving"),
        item("ranch-cup", "extras", "Ranch Dipping Cup", 99, "🥛")
            .about("Creamy ranch dressing dipping cup.")
            .calories("200 Cal"),
        item("blue-cheese-cup", "extras", "Blue Cheese Dipping Cup", 99, "🥛")
            .about("Rich blue cheese dressing dipping cup.")
            .calories("210 Cal"),
        item("garlic-sauce", "extras", "Garlic Dipping Sauce", 99, "🧄")
            .about("Buttery garlic dipping sauce. A Checkers classic.")
            .calories("250 Cal"),
        item("marinara-cup", "extras", "Marinara Dipping Sauce", 99, "🍅")
            .about("Classic marinara sauce for dipping breadsticks and pizza.")
            .calories("25 Cal"),
        item("hot-sauce-cup", "extras", "Hot Buffalo Sauce", 99, "🌶️")
            .about("Fiery buffalo sauce dipping cup.")
            .calories("15 Cal"),
        item("ketchup", "extras", "Ketchup", 0, "🍅")
            .about("Classic tomato ketchup packets. 3 per order.")
            .calories("10 Cal/pkt"),
        item("parmesan-packets", "extras", "Parmesan Cheese Packets", 0, "🧀")
            .about("Grated parmesan cheese packets. 3 per order.")
            .calories("20 Cal/pkt"),
        item("red-pepper-flakes", "extras", "Red Pepper Flakes", 0, "🌶️")
            .about("Crushed red pepper flake packets. 3 per order.")
            .calories("5 Cal/pkt"),
    ])
}

fn sizes() -> Vec<Size> {
    [("small", "Small 10\"", -300), ("medium", "Medium 12\"", 0), ("large", "Large 14\"", 400)]
        .into_iter()
        .map(|(id, name, modifier)| Size {
            id: id.into(),
            name: name.into(),
            price_modifier: cents(modifier),
        })
        .collect()
}

fn crusts() -> Vec<Crust> {
    [
        ("hand-tossed", "Hand Tossed", 0, true),
        ("handmade-pan", "Handmade Pan", 100, false),
        ("thin", "Crunchy Thin", 0, false),
        ("brooklyn", "Brooklyn Style", 0, false),
    ]
    .into_iter()
    .map(|(id, name, modifier, is_default)| Crust {
        id: id.into(),
        name: name.into(),
        price_modifier: cents(modifier),
        is_default,
    })
    .collect()
}

fn toppings() -> Vec<Topping> {
    [
        ("pepperoni", "Pepperoni"),
        ("italian-sausage", "Italian Sausage"),
        ("beef", "Beef"),
        ("ham", "Ham"),
        ("bacon", "Bacon"),
        ("chicken", "Chicken"),
        ("mushrooms", "Mushrooms"),
        ("onions", "Onions"),
        ("green-peppers", "Green Peppers"),
        ("black-olives", "Black Olives"),
        ("jalapenos", "Jalapeños"),
        ("pineapple", "Pineapple"),
        ("tomatoes", "Tomatoes"),
    ]
    .into_iter()
    .map(|(id, name)| Topping {
        id: id.into(),
        name: name.into(),
        price: cents(150),
    })
    .collect()
}

/// Assembles the full menu document.
pub fn checkers_menu() -> CatalogDocument {
    let mut products = pizzas();
    products.extend(sides());
    products.extend(drinks_and_extras());

    CatalogDocument {
        store: store(),
        categories: categories(),
        products,
        sizes: sizes(),
        crusts: crusts(),
        toppings: toppings(),
    }
}
