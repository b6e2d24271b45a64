//! Built-in menu content.
//!
//! This is the catalog the process starts with; there is no persistence, so
//! a restart always comes back to exactly this data.

use super::types::{MenuItem, MenuSection, SubSection};

/// The full Lucy Blu menu, in display order.
pub fn default_menu() -> Vec<MenuSection> {
    vec![
        breakfast(),
        mains(),
        pizza(),
        desserts(),
        drinks(),
        bar(),
        wine(),
    ]
}

fn breakfast() -> MenuSection {
    MenuSection {
        id: "breakfast".to_string(),
        title: "Sunrise Soirée".to_string(),
        subtitle: Some("Served till 12h00".to_string()),
        note: Some(
            "A 12.5% gratuity will be added to tables of eight or more. Please note, we cannot \
             do split bills. All our food is made to order - please be patient with us."
                .to_string(),
        ),
        content: vec![SubSection::untitled(vec![
            MenuItem::new("The Basic", "R95")
                .with_description("Two eggs, bacon, grilled tomato, toast.")
                .with_extra("Replace bacon with vegan bacon", "R115")
                .with_modifiers(&["Egg Style"]),
            MenuItem::new("French Toast", "R85")
                .with_description("Dipped and fried bread, bacon, syrup."),
            MenuItem::new("Lucy", "R135")
                .with_description(
                    "Two eggs, bacon, banger, fried mushrooms, grilled tomato, toast.",
                )
                .with_extra("Replace meat with vegan bacon & sausage", "R155")
                .with_modifiers(&["Egg Style"]),
            MenuItem::new("Three-Egg Omelette", "R135").with_description(
                "Free-range eggs with a choice of three fillings served with toast. Options: \
                 Bacon, Smoked trout, Pulled pork, Ham, Banger slices, Chorizo, Pepperoni, \
                 Cheddar, Mozzarella, Tomato, Mushrooms, Onions, Spicy chicken livers.",
            ),
            MenuItem::new("Eggs Benedict", "R145")
                .with_description(
                    "Two poached eggs nestled on an English muffin with rocket, avo and bacon, \
                     finished with hollandaise sauce.",
                )
                .with_extra("Replace bacon with vegan bacon", "R155"),
            MenuItem::new("Breakfast Parfait", "R115").with_description(
                "Layers of Greek yoghurt, fresh fruit, homemade granola, topped with honey.",
            ),
            MenuItem::new("Eggs Royale", "R155")
                .with_description(
                    "Two poached eggs nestled on an English muffin with rocket, avo and smoked \
                     trout, finished with hollandaise sauce.",
                )
                .with_extra("Replace salmon with vegan bacon", "R165"),
            MenuItem::new("Croissant", "R115")
                .with_description("Mixed berry compote, cream or cream cheese."),
        ])],
    }
}

fn mains() -> MenuSection {
    MenuSection {
        id: "mains".to_string(),
        title: "Mains".to_string(),
        subtitle: None,
        note: None,
        content: vec![
            SubSection::untitled(vec![
                MenuItem::new("Szechuan Pork Belly", "R235")
                    .with_description("Asian flavours, noodles and stir-fry vegetables."),
                MenuItem::new("Nonna's Meatballs", "R165").with_description(
                    "Saucy beef meatballs served on linguini, topped with mozzarella and \
                     parmesan.",
                ),
                MenuItem::new("Spicy Chicken Livers", "R165")
                    .with_description("Sautéed in brandy, served with toast."),
                MenuItem::new("Chef's Salad", "R145")
                    .with_description(
                        "Greek-style salad with a sprinkling of nuts and our homemade \
                         vinaigrette.",
                    )
                    .with_extra("Add pulled chicken", "+R20")
                    .with_extra("Add smoked trout", "+R30")
                    .with_extra("Replace feta with vegan feta", "+R20"),
                MenuItem::new("Steak", "R230")
                    .with_description(
                        "250g steak served with a sauce of your choice, accompanied by chips or \
                         salad. Sauces: Pepper, mushroom, cheese, chimichurri, garlic butter, \
                         peri-peri, garlic sauce.",
                    )
                    .with_modifiers(&["Temperature", "Select Sauce"]),
            ]),
            SubSection {
                title: Some("Gourmet Burgers".to_string()),
                description: Some("Served with Chips or Salad".to_string()),
                items: vec![
                    MenuItem::new("Beef or Chicken Burger", "R135")
                        .with_description(
                            "Homemade beef patty (double) or a grilled chicken fillet served \
                             with chips.",
                        )
                        .with_extra("Vegan patty option", "R155")
                        .with_modifiers(&["Select Patty"]),
                    MenuItem::new("The Drunken Mushroom", "R160")
                        .with_description(
                            "Beef or Chicken topped with a mushroom brandy cream sauce.",
                        )
                        .with_modifiers(&["Select Patty"]),
                    MenuItem::new("The Caprese", "R160")
                        .with_description(
                            "Beef or Chicken, homemade mozzarella, heirloom tomato, basil pesto.",
                        )
                        .with_modifiers(&["Select Patty"]),
                    MenuItem::new("Juicy Lucy", "R160").with_description(
                        "Chicken topped with cheese and pineapple with our secret house sauce.",
                    ),
                    MenuItem::new("The Jefa", "R185")
                        .with_description(
                            "Beef or Chicken, peri-mayo, avo, bacon, cheese, and spicy salsa.",
                        )
                        .with_modifiers(&["Select Patty"]),
                ],
            },
            SubSection::titled(
                "Burger Toppings",
                vec![
                    MenuItem::new("Grilled mushroom", "R15"),
                    MenuItem::new("Vegetables & Sauces", "R20").with_description(
                        "Ham, Pineapple, Feta, Jalapeño, Peppadews, Olives, Mint sauce, Avo, \
                         Griddled pear, Peppers.",
                    ),
                    MenuItem::new("Meats & Cheeses", "R25").with_description(
                        "BBQ pulled pork, Pulled lamb, Pulled chicken, Bacon, Chorizo, \
                         Pepperoni, Brie, Blue cheese, Figs, Parma Ham.",
                    ),
                    MenuItem::new("Vegan Options", "R40")
                        .with_description("Vegan cheese, Vegan sausage, Vegan bacon."),
                ],
            ),
            SubSection::titled(
                "For The Kids",
                vec![
                    MenuItem::new("Loaded fries: ham and cheese sauce", "R65"),
                    MenuItem::new("Chicken strips and chips", "R75"),
                    MenuItem::new("Small margherita pizza", "R75"),
                    MenuItem::new("Small ham and pineapple pizza", "R90"),
                    MenuItem::new("Nonna's meatballs and spaghetti", "R90"),
                    MenuItem::new("Beef, fish or chicken burger and chips", "R90"),
                ],
            ),
        ],
    }
}

fn pizza() -> MenuSection {
    let toppings = ["Pizza Toppings"];
    MenuSection {
        id: "pizza".to_string(),
        title: "Pizza".to_string(),
        subtitle: None,
        note: None,
        content: vec![
            SubSection::untitled(vec![
                MenuItem::new("Pizza Bread", "R95")
                    .with_description("Feta, garlic.")
                    .with_modifiers(&toppings),
                MenuItem::new("Margherita", "R110")
                    .with_description("Fresh basil, oregano.")
                    .with_modifiers(&toppings),
                MenuItem::new("Vegan Margherita", "R130")
                    .with_description("Vegan cheese, fresh basil, oregano.")
                    .with_modifiers(&toppings),
                MenuItem::new("Hawaiian", "R145")
                    .with_description("Ham, pineapple.")
                    .with_modifiers(&toppings),
                MenuItem::new("Regina", "R150")
                    .with_description("Ham, mushroom.")
                    .with_modifiers(&toppings),
                MenuItem::new("Glow", "R165")
                    .with_description("Pulled chicken, peppadews, feta, chilli jam.")
                    .with_modifiers(&toppings),
                MenuItem::new("Icon", "R160")
                    .with_description("Bacon, feta, avo.")
                    .with_modifiers(&toppings),
                MenuItem::new("The Jax", "R170")
                    .with_description(
                        "Sliced tomato, mushrooms, artichokes, fresh basil, oregano.",
                    )
                    .with_modifiers(&toppings),
                MenuItem::new("BBQ Pork", "R175")
                    .with_description("Pulled BBQ pork, brie, jalapeño, peppadews.")
                    .with_modifiers(&toppings),
                MenuItem::new("The Blu", "R175")
                    .with_description("Blue cheese, figs, bacon, mushroom, rocket.")
                    .with_modifiers(&toppings),
                MenuItem::new("Lucy", "R180")
                    .with_description("Bacon, chorizo, pepperoni, ham, rocket.")
                    .with_modifiers(&toppings),
                MenuItem::new("The Dare", "R180")
                    .with_description("Parma ham, griddled pear, blue cheese, rocket.")
                    .with_modifiers(&toppings),
                MenuItem::new("Dolly", "R185")
                    .with_description("Pulled lamb, brie, cherry tomato, olives, mint sauce.")
                    .with_modifiers(&toppings),
            ]),
            SubSection {
                title: Some("Build Your Own".to_string()),
                description: Some(
                    "Build your own from our Margherita base or add on:".to_string(),
                ),
                items: vec![
                    MenuItem::new("Herbs", "R10").with_description("Basil, Rocket, Parsley."),
                    MenuItem::new("Veg 1", "R15")
                        .with_description("Mushroom, Sliced tomato, Cherry tomato."),
                    MenuItem::new("Veg 2 & Basic Meat", "R20").with_description(
                        "Ham, Pineapple, Feta, Jalapeño, Peppadews, Olives, Mint sauce, Avo, \
                         Griddled pear, Peppers.",
                    ),
                    MenuItem::new("Premium Meat & Cheese", "R25").with_description(
                        "BBQ pulled pork, Pulled lamb, Spicy Chicken Livers, Pulled chicken, \
                         Bacon, Chorizo, Pepperoni, Brie, Artichoke, Blue cheese, Figs, Parma \
                         Ham.",
                    ),
                    MenuItem::new("Vegan Meat", "R40")
                        .with_description("Vegan Sausage, Vegan Bacon."),
                ],
            },
        ],
    }
}

fn desserts() -> MenuSection {
    MenuSection {
        id: "desserts".to_string(),
        title: "Desserts".to_string(),
        subtitle: None,
        note: None,
        content: vec![SubSection::untitled(vec![
            MenuItem::new("Crème Brûlée", "R95").with_description("Traditional vanilla."),
            MenuItem::new("Chocolate Volcano", "R115")
                .with_description("Saucey chocolate tart served with cream or ice cream."),
            MenuItem::new("Gelato De Cuba", "R85")
                .with_description("Vanilla ice cream and homemade chocolate sauce."),
            MenuItem::new("Kiddies Ice Cream", "R60")
                .with_description("Served with chocolate sauce."),
        ])],
    }
}

fn drinks() -> MenuSection {
    MenuSection {
        id: "drinks".to_string(),
        title: "Cocktails & Drinks".to_string(),
        subtitle: None,
        note: None,
        content: vec![
            SubSection::titled(
                "Cocktails",
                vec![
                    MenuItem::new("Margarita", "R80")
                        .with_description("White Tequila, Triple Sec, Lime Juice."),
                    MenuItem::new("Martini", "R85").with_description("Gin, Vermouth, Olives."),
                    MenuItem::new("Dirty Martini", "R85")
                        .with_description("Gin, Vermouth, Olive Brine, Olives."),
                    MenuItem::new("Mojito", "R85")
                        .with_description("Mint, Lime, Bacardi, Soda, Simple Syrup."),
                    MenuItem::new("Pina Colada", "R90")
                        .with_description("Bacardi, Coconut Cream, Malibu, Pineapple."),
                    MenuItem::new("Sex On The Beach", "R90")
                        .with_description("Vodka, Peach Schnapps, Orange Juice, Grenadine."),
                    MenuItem::new("Tequila Sunrise", "R90").with_description(
                        "White Tequila, Peach Schnapps, Orange Juice, Grenadine.",
                    ),
                    MenuItem::new("Long Island Iced Tea", "R105")
                        .with_description("Vodka, Bacardi, Gin, Tequila, Triple Sec, Coke."),
                    MenuItem::new("Cosmopolitan", "R80")
                        .with_description("Bacardi, Cranberry Juice, Triple Sec, Lime Juice."),
                    MenuItem::new("Whisky Sour", "R80")
                        .with_description("Whisky, Lemon Juice, Simple Syrup."),
                    MenuItem::new("Aperol Spritzer", "R120")
                        .with_description("Aperol, Bubbles, Soda."),
                ],
            ),
            SubSection::titled(
                "Hot Drinks",
                vec![
                    MenuItem::new("Americano", "R35"),
                    MenuItem::new("Cappuccino", "R40"),
                    MenuItem::new("Cortado", "R40"),
                    MenuItem::new("Flat White", "R40"),
                    MenuItem::new("Caffè Latte", "R45"),
                    MenuItem::new("Caffè mocha", "R45"),
                    MenuItem::new("Affogato", "R70"),
                    MenuItem::new("Espresso", "R30"),
                    MenuItem::new("Double Espresso", "R35"),
                    MenuItem::new("Irish Coffee", "R85")
                        .with_description("Kahlua, Whisky, Frangelico or Amarula"),
                    MenuItem::new("Iced Coffee", "R45")
                        .with_extra("Decaf", "+R10")
                        .with_extra("Almond Milk", "+R15"),
                    MenuItem::new("Tea", "R30").with_description("Ceylon, Rooibos"),
                    MenuItem::new("Chai Latte", "R40"),
                    MenuItem::new("Earl Grey", "R35"),
                    MenuItem::new("Red Cappuccino", "R40"),
                ],
            ),
            SubSection::titled(
                "Cold Drinks",
                vec![
                    MenuItem::new("Soft Drinks", "R30").with_description(
                        "Coke, Coke Zero, Soda, Lemonade, Ginger Ale, Dry Lemon",
                    ),
                    MenuItem::new("Tonic", "R30")
                        .with_description("Tonic Water, Sugar-free Tonic"),
                    MenuItem::new("Juices", "R40")
                        .with_description("Orange, Pineapple, Cranberry"),
                    MenuItem::new("Red Bull", "R40"),
                    MenuItem::new("Rock Shandy", "R65"),
                    MenuItem::new("Cordial", "R15")
                        .with_description("Passion Fruit, Lime, Kola Tonic"),
                    MenuItem::new("Water", "R28").with_description("Still or Sparkling"),
                    MenuItem::new("Milkshakes", "R60").with_description(
                        "Strawberry, Chocolate, Vanilla, Lime, Bubblegum, Coffee",
                    ),
                    MenuItem::new("Dom Pedro", "R80")
                        .with_description("Kahlua, Whisky, Frangelico or Amarula"),
                ],
            ),
        ],
    }
}

fn bar() -> MenuSection {
    MenuSection {
        id: "bar".to_string(),
        title: "Beer & Spirits".to_string(),
        subtitle: None,
        note: None,
        content: vec![
            SubSection::titled(
                "On Tap",
                vec![
                    MenuItem::new("Frosty Whale Lager", "R40 / R50")
                        .with_description("330ml / 500ml"),
                    MenuItem::new("Frosty Whale Blonde", "R40 / R50")
                        .with_description("330ml / 500ml"),
                    MenuItem::new("Windhoek Lager", "R55").with_description("500ml"),
                ],
            ),
            SubSection::titled(
                "Beers & Ciders",
                vec![
                    MenuItem::new("Black Label", "R35"),
                    MenuItem::new("Castle / Castle Lite", "R35"),
                    MenuItem::new("Hunter's Dry", "R40"),
                    MenuItem::new("Flying Fish Lemon", "R40"),
                    MenuItem::new("Heineken / Zero", "R40"),
                    MenuItem::new("Stella Artois", "R45"),
                    MenuItem::new("Savanna Dry / Lite / 0", "R45"),
                    MenuItem::new("Windhoek / Draught", "R45"),
                ],
            ),
            SubSection::titled(
                "Spirits",
                vec![
                    MenuItem::new("Amarula", "R25"),
                    MenuItem::new("Bacardi", "R35"),
                    MenuItem::new("Bain’s Whiskey", "R40"),
                    MenuItem::new("Bells", "R40"),
                    MenuItem::new("Frangelico", "R35"),
                    MenuItem::new("Glenfiddich", "R85"),
                    MenuItem::new("Gordon’s Gin", "R30"),
                    MenuItem::new("Hennessy Cognac", "R95"),
                    MenuItem::new("Jack Daniels / Honey", "R35"),
                    MenuItem::new("Jägermeister", "R35"),
                    MenuItem::new("Jameson", "R40"),
                    MenuItem::new("Tanqueray Gin", "R50"),
                    MenuItem::new("White / Gold Tequila", "R35"),
                ],
            ),
        ],
    }
}

fn wine() -> MenuSection {
    MenuSection {
        id: "wine".to_string(),
        title: "Wine List".to_string(),
        subtitle: None,
        note: Some(
            "Corkage: You are more than welcome to bring your own wine at an additional fee of \
             R70 per 750ml bottle."
                .to_string(),
        ),
        content: vec![
            SubSection::titled(
                "Bubbles",
                vec![
                    MenuItem::new("Villiera Tradition Brut", "375ml: R220 | 750ml: R350")
                        .with_description(
                            "A zesty Cap Classique displaying the full balanced yeasty \
                             complexity synonymous with a blend of white and red grapes.",
                        ),
                    MenuItem::new("Villiera Brut Rosé", "R350").with_description(
                        "This Cap Classique has a uniquely rich, fruity character reminiscent \
                         of strawberries with a touch of brioche.",
                    ),
                    MenuItem::new("Domaine Des Dieux The Rose Of Sharon", "R480")
                        .with_description(
                            "Strawberry, black cherry, raspberry notes jump out of the glass \
                             with a hint of rose water in the background.",
                        ),
                ],
            ),
            SubSection::titled(
                "Sauvignon Blanc",
                vec![
                    MenuItem::new("Raka", "R195").with_description(
                        "Unique Sauvignon Blanc offers a pale straw yellow colour in the glass, \
                         with a fresh and lively bouquet of passion fruit, peach, gooseberries \
                         and guava.",
                    ),
                    MenuItem::new("Nitida", "R230").with_description(
                        "Unique Sauvignon Blanc offers a pale straw yellow colour in the glass, \
                         with a fresh and lively bouquet of passion fruit, peach, gooseberries \
                         and guava.",
                    ),
                    MenuItem::new("Bouchard Finlayson", "R260").with_description(
                        "Explosive nose combines fig and gooseberry aromas alongside a hint of \
                         thyme.",
                    ),
                    MenuItem::new("Springfield Life From Stone", "R275")
                        .with_description("Flinty with a mineral palate, an all-time favourite."),
                ],
            ),
            SubSection::titled(
                "Chenin Blanc",
                vec![
                    MenuItem::new("Leopard's Leap", "R180").with_description(
                        "Zesty summer melon with hints of white peaches follow through on the \
                         palate.",
                    ),
                    MenuItem::new("Protea", "R195").with_description(
                        "A delicate nuance of chamomile adds depth and interest to the nose of \
                         typical stone fruit.",
                    ),
                    MenuItem::new("Salt Rock", "R195").with_description(
                        "This wine comes to life with vibrant stone fruit and great mid-palate \
                         tension.",
                    ),
                ],
            ),
            SubSection::titled(
                "Rosé",
                vec![
                    MenuItem::new("Delphin Lollipots Shiraz Rosé", "R170").with_description(
                        "A medley of fresh-cut flowers on the nose with lingering flavours \
                         strawberry and watermelon on the palate.",
                    ),
                    MenuItem::new("Tranquille", "R180").with_description(
                        "Blended to be fresh and vibrant, enjoy tropical fruit, red berries and \
                         lime on the nose.",
                    ),
                    MenuItem::new("Spookfontein", "R195").with_description(
                        "This crisp, dry Rosé invites delicate fragrances of violets, cherries \
                         and gooseberries on the nose.",
                    ),
                    MenuItem::new("Gabrielskloof Rosebud", "R210").with_description(
                        "Raspberry, watermelon and bright floral notes lift the nose with the \
                         palate similarly red-fruited.",
                    ),
                ],
            ),
            SubSection::titled(
                "Red Varietals & Blends",
                vec![
                    MenuItem::new("Protea Merlot", "R180").with_description(
                        "Ample appeal with tasty red and black fruit notes: plum, mulberry and \
                         soft Agen prune.",
                    ),
                    MenuItem::new("Stanford Hills Jacksons Pinotage", "R285").with_description(
                        "This wine is still showing lively fruit flavours of red cherries, \
                         tomato leaf and plum.",
                    ),
                    MenuItem::new("Leopard's Leap Cabernet Sauvignon", "R180").with_description(
                        "Mix berry aromas with distinct blueberry notes on the nose and palate.",
                    ),
                    MenuItem::new("Guardian Peak Shiraz", "R235").with_description(
                        "Approachable Shiraz with pronounced nose of ripe plum and juicy black \
                         currant.",
                    ),
                    MenuItem::new("Spookfontein Little Ghost", "R195").with_description(
                        "Approachable Bordeaux-style blend opens with inviting aromas of ripe \
                         red berries, plum, and a hint of blackcurrant.",
                    ),
                    MenuItem::new("Gabrielskloof The Blend", "R280").with_description(
                        "A generosity of fruit led by cherries, plums and blackcurrant \
                         alongside cloves, fennel and a hint of cocoa.",
                    ),
                ],
            ),
        ],
    }
}
